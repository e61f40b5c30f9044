use super::*;

const TODAY: &str = "2026-08-06";

fn valid_form() -> Result<ExpenseDraft, &'static str> {
    validate_expense_form("Coffee with client", "4.50", "Meals", "2026-08-01", TODAY)
}

#[test]
fn valid_form_builds_a_draft() {
    let draft = valid_form().expect("valid form");
    assert_eq!(draft.description, "Coffee with client");
    assert_eq!(draft.amount, 4.5);
    assert_eq!(draft.category.as_deref(), Some("Meals"));
    assert_eq!(draft.date, "2026-08-01T00:00:00.000Z");
}

#[test]
fn empty_description_is_rejected_before_any_network_call() {
    assert_eq!(
        validate_expense_form("   ", "4.50", "", "", TODAY),
        Err(REQUIRED_FIELDS)
    );
}

#[test]
fn empty_amount_is_rejected() {
    assert_eq!(
        validate_expense_form("Coffee", "  ", "", "", TODAY),
        Err(REQUIRED_FIELDS)
    );
}

#[test]
fn non_numeric_amount_is_rejected() {
    assert_eq!(
        validate_expense_form("Coffee", "four fifty", "", "", TODAY),
        Err(AMOUNT_NOT_POSITIVE)
    );
}

#[test]
fn zero_and_negative_amounts_are_rejected() {
    assert_eq!(
        validate_expense_form("Coffee", "0", "", "", TODAY),
        Err(AMOUNT_NOT_POSITIVE)
    );
    assert_eq!(
        validate_expense_form("Coffee", "-3.20", "", "", TODAY),
        Err(AMOUNT_NOT_POSITIVE)
    );
}

#[test]
fn non_finite_amounts_are_rejected() {
    assert_eq!(
        validate_expense_form("Coffee", "NaN", "", "", TODAY),
        Err(AMOUNT_NOT_POSITIVE)
    );
    assert_eq!(
        validate_expense_form("Coffee", "inf", "", "", TODAY),
        Err(AMOUNT_NOT_POSITIVE)
    );
}

#[test]
fn empty_category_becomes_none() {
    let draft = validate_expense_form("Coffee", "4.50", "   ", "2026-08-01", TODAY).expect("valid form");
    assert_eq!(draft.category, None);
}

#[test]
fn empty_date_defaults_to_the_fallback_day() {
    let draft = validate_expense_form("Coffee", "4.50", "", "  ", TODAY).expect("valid form");
    assert_eq!(draft.date, "2026-08-06T00:00:00.000Z");
}

#[test]
fn day_widens_to_an_iso_timestamp_once() {
    assert_eq!(day_to_timestamp("2026-08-06"), "2026-08-06T00:00:00.000Z");
    assert_eq!(
        day_to_timestamp("2026-08-06T12:30:00.000Z"),
        "2026-08-06T12:30:00.000Z"
    );
}

#[test]
fn expense_id_parses_with_surrounding_whitespace() {
    assert_eq!(parse_expense_id(" 42 "), Ok(42));
}

#[test]
fn non_numeric_expense_id_is_rejected() {
    assert_eq!(parse_expense_id("abc"), Err(INVALID_EXPENSE_ID));
    assert_eq!(parse_expense_id(""), Err(INVALID_EXPENSE_ID));
    assert_eq!(parse_expense_id("12.5"), Err(INVALID_EXPENSE_ID));
}

#[test]
fn success_message_names_the_created_record() {
    let expense = Expense {
        id: 17,
        description: "Coffee with client".to_owned(),
        amount: 4.5,
        category: None,
        date: Some("2026-08-06T00:00:00".to_owned()),
    };
    assert_eq!(
        success_message(&expense),
        "Expense \"Coffee with client\" added successfully! ID: 17"
    );
}
