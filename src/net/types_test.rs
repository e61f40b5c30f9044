use super::*;

#[test]
fn expense_decodes_numeric_amount() {
    let expense: Expense = serde_json::from_str(
        r#"{"id":3,"description":"Coffee with client","amount":4.5,"category":"Meals","date":"2026-08-06T00:00:00"}"#,
    )
    .expect("expense json");
    assert_eq!(expense.id, 3);
    assert_eq!(expense.amount, 4.5);
    assert_eq!(expense.category.as_deref(), Some("Meals"));
}

#[test]
fn expense_decodes_string_amount() {
    let expense: Expense =
        serde_json::from_str(r#"{"id":9,"description":"Taxi","amount":"12.80"}"#).expect("expense json");
    assert_eq!(expense.amount, 12.8);
    assert_eq!(expense.category, None);
    assert_eq!(expense.date, None);
}

#[test]
fn expense_rejects_non_numeric_amount() {
    let result = serde_json::from_str::<Expense>(r#"{"id":1,"description":"x","amount":"lots"}"#);
    assert!(result.is_err());
}

#[test]
fn expense_rejects_boolean_amount() {
    let result = serde_json::from_str::<Expense>(r#"{"id":1,"description":"x","amount":true}"#);
    assert!(result.is_err());
}

#[test]
fn draft_serializes_missing_category_as_null() {
    let draft = ExpenseDraft {
        description: "Coffee".to_owned(),
        amount: 4.5,
        category: None,
        date: "2026-08-06T00:00:00.000Z".to_owned(),
    };
    let body = serde_json::to_value(&draft).expect("draft json");
    assert_eq!(
        body,
        serde_json::json!({
            "description": "Coffee",
            "amount": 4.5,
            "category": null,
            "date": "2026-08-06T00:00:00.000Z",
        })
    );
}

#[test]
fn pretty_output_contains_the_record_fields() {
    let expense = Expense {
        id: 12,
        description: "Team lunch".to_owned(),
        amount: 58.2,
        category: None,
        date: Some("2026-08-01T00:00:00".to_owned()),
    };
    let rendered = expense.pretty();
    assert!(rendered.contains("\"id\": 12"));
    assert!(rendered.contains("Team lunch"));
}
