//! Item domain object and its reference rule set
//!
//! The four rules below are the canonical validation for a shop item form:
//! a required name, a bounded price, a capped quantity, and a cross-field
//! minimum on the order total. The cross-field rule reads the raw submitted
//! values and runs regardless of whether the single-field rules rejected.
//!
//! Copyright (c) 2025 Veto Team
//! Licensed under the Apache-2.0 license

use crate::collector::ErrorCollector;
use crate::validator::Validator;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Object kind handled by [`ItemValidator`]
pub const ITEM_KIND: &str = "item";

/// Price must fall within this inclusive range
pub const PRICE_MIN: i64 = 1_000;
pub const PRICE_MAX: i64 = 1_000_000;

/// Quantity must stay below this cap
pub const QUANTITY_MAX: i64 = 9_999;

/// An order total below this minimum rejects the object as a whole
pub const TOTAL_PRICE_MIN: i64 = 10_000;

/// A candidate shop item as submitted, before validation.
///
/// Every field is optional: an absent field is distinct from an empty string
/// or zero, and validation must see the difference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
}

impl Item {
    pub fn new(item_name: Option<&str>, price: Option<i64>, quantity: Option<i64>) -> Self {
        Self {
            item_name: item_name.map(str::to_string),
            price,
            quantity,
        }
    }
}

/// Reference rule set for [`Item`] candidates
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemValidator;

impl Validator for ItemValidator {
    type Target = Item;

    fn name(&self) -> &str {
        "itemValidator"
    }

    fn supports(&self, kind: &str) -> bool {
        kind == ITEM_KIND
    }

    fn validate(&self, item: &Item, errors: &mut ErrorCollector) {
        if !has_text(item.item_name.as_deref()) {
            errors.reject_field("itemName", "required", vec![], None);
        }

        if item
            .price
            .map_or(true, |price| !(PRICE_MIN..=PRICE_MAX).contains(&price))
        {
            errors.reject_field(
                "price",
                "range",
                vec![json!(PRICE_MIN), json!(PRICE_MAX)],
                None,
            );
        }

        if item.quantity.map_or(true, |quantity| quantity >= QUANTITY_MAX) {
            errors.reject_field(
                "quantity",
                "max",
                vec![json!(QUANTITY_MAX)],
                Some("기본 오류메시지 생략가능"),
            );
        }

        // Cross-field rule on the raw values, independent of the field rules.
        if let (Some(price), Some(quantity)) = (item.price, item.quantity) {
            let result_price = price.saturating_mul(quantity);
            if result_price < TOTAL_PRICE_MIN {
                errors.reject_global(
                    "totalPriceMin",
                    vec![json!(TOTAL_PRICE_MIN), json!(result_price)],
                    None,
                );
            }
        }
    }
}

/// True when the string is present and contains a non-whitespace character.
fn has_text(value: Option<&str>) -> bool {
    value.is_some_and(|s| !s.trim().is_empty())
}
