use super::*;

#[test]
fn private_endpoint_joins_the_base() {
    assert_eq!(
        private_endpoint("https://api.example.com/api"),
        "https://api.example.com/api/private"
    );
}

#[test]
fn create_expense_endpoint_formats_expected_path() {
    assert_eq!(
        create_expense_endpoint("http://localhost:5000/api"),
        "http://localhost:5000/api/expenses/create"
    );
}

#[test]
fn expense_by_id_endpoint_embeds_the_id() {
    assert_eq!(
        expense_by_id_endpoint("http://localhost:5000/api", 42),
        "http://localhost:5000/api/expenses/get_by_id/42"
    );
}

#[test]
fn all_expenses_endpoint_formats_expected_path() {
    assert_eq!(
        all_expenses_endpoint("http://localhost:5000/api"),
        "http://localhost:5000/api/expenses/get_all"
    );
}

#[test]
fn bearer_header_value_carries_the_token() {
    assert_eq!(bearer("tok-123"), "Bearer tok-123");
}
