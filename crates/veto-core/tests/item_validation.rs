//! End-to-end tests for the item rule set
//!
//! These tests drive the caller-facing flow: snapshot the candidate into a
//! collector, run the validator through the checked entry point, then branch
//! on the accumulated violations.

use serde_json::json;
use veto_core::{
    run_validator, Error, ErrorCollector, Item, ItemValidator, ViolationScope, ITEM_KIND,
};

fn validate(item: &Item) -> ErrorCollector {
    let mut errors = ErrorCollector::for_target(ITEM_KIND, item).unwrap();
    run_validator(&ItemValidator, ITEM_KIND, item, &mut errors).unwrap();
    errors
}

#[test]
fn test_clean_item_passes() {
    let errors = validate(&Item::new(Some("Book"), Some(1_500), Some(10)));
    assert!(!errors.has_errors());
    assert_eq!(errors.error_count(), 0);
}

#[test]
fn test_all_field_rules_run_without_short_circuiting() {
    // Three independently bad fields; every rule must fire in one pass.
    let errors = validate(&Item::new(Some(""), Some(500), Some(10_000)));

    assert!(errors.has_errors());
    assert_eq!(errors.error_count(), 3);
    assert!(errors.has_field_errors("itemName"));
    assert!(errors.has_field_errors("price"));
    assert!(errors.has_field_errors("quantity"));

    // price * quantity = 5_000_000, over the total minimum, so the
    // cross-field rule evaluated but added nothing.
    assert!(errors.global_errors().is_empty());
}

#[test]
fn test_violations_keep_evaluation_order() {
    let errors = validate(&Item::new(Some(""), Some(500), Some(10_000)));
    let fields: Vec<_> = errors
        .violations()
        .iter()
        .map(|v| v.field.as_deref().unwrap())
        .collect();
    assert_eq!(fields, vec!["itemName", "price", "quantity"]);
}

#[test]
fn test_cross_field_rule_fires_on_raw_values() {
    // price fails its range rule, yet still feeds the total computation.
    let errors = validate(&Item::new(Some("Book"), Some(100), Some(1)));

    assert!(errors.has_field_errors("price"));
    let globals = errors.global_errors();
    assert_eq!(globals.len(), 1);
    assert_eq!(globals[0].scope, ViolationScope::Global);
    assert_eq!(globals[0].codes, vec!["totalPriceMin.item", "totalPriceMin"]);
    assert_eq!(globals[0].arguments, vec![json!(10_000), json!(100)]);
}

#[test]
fn test_rejected_values_echo_the_submission() {
    let errors = validate(&Item::new(Some("  "), Some(500), Some(10_000)));

    assert_eq!(
        errors.field_errors("itemName")[0].rejected_value,
        Some(json!("  "))
    );
    assert_eq!(errors.field_errors("price")[0].rejected_value, Some(json!(500)));
    assert_eq!(
        errors.field_errors("quantity")[0].rejected_value,
        Some(json!(10_000))
    );
}

#[test]
fn test_absent_price_is_rejected_as_absent() {
    let errors = validate(&Item::new(Some("Book"), None, Some(10)));

    let price_errors = errors.field_errors("price");
    assert_eq!(price_errors.len(), 1);
    assert_eq!(price_errors[0].rejected_value, None);
    assert_eq!(price_errors[0].arguments, vec![json!(1_000), json!(1_000_000)]);
}

#[test]
fn test_field_codes_carry_the_type_tier_for_present_values() {
    let errors = validate(&Item::new(Some(""), Some(500), Some(10)));

    assert_eq!(
        errors.field_errors("itemName")[0].codes,
        vec![
            "required.item.itemName",
            "required.itemName",
            "required.String",
            "required",
        ]
    );
    assert_eq!(
        errors.field_errors("price")[0].codes,
        vec!["range.item.price", "range.price", "range.Integer", "range"]
    );
}

#[test]
fn test_unsupported_kind_is_a_wiring_error() {
    let item = Item::default();
    let mut errors = ErrorCollector::for_target("order", &item).unwrap();
    let result = run_validator(&ItemValidator, "order", &item, &mut errors);

    assert!(matches!(result, Err(Error::UnsupportedTarget { .. })));
    assert!(!errors.has_errors());
}

#[test]
fn test_target_snapshot_supports_redisplay() {
    let errors = validate(&Item::new(Some(""), Some(500), None));
    assert_eq!(errors.object_name(), "item");
    assert_eq!(errors.target()["price"], json!(500));
    // Absent fields are absent from the snapshot, not defaulted.
    assert!(errors.target().get("quantity").is_none());
}
