//! Property-based tests for message-code resolution
//!
//! These tests verify the structural guarantees of the fallback chain
//! across a wide range of inputs: determinism, ordering, and dedup.

use proptest::prelude::*;
use veto_core::{CodeResolver, DefaultCodeResolver};

fn segment() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9]{0,15}".prop_map(String::from)
}

proptest! {
    #[test]
    fn object_codes_are_exactly_two_tiers(code in segment(), object in segment()) {
        let codes = DefaultCodeResolver.resolve_object_codes(&code, &object);
        prop_assert_eq!(codes, vec![format!("{}.{}", code, object), code]);
    }

    #[test]
    fn field_codes_are_ordered_most_specific_first(
        code in segment(),
        object in segment(),
        field in segment(),
        field_type in proptest::option::of(segment()),
    ) {
        let codes =
            DefaultCodeResolver.resolve_field_codes(&code, &object, &field, field_type.as_deref());

        prop_assert!(!codes.is_empty());
        prop_assert!(codes.len() <= 4);
        prop_assert_eq!(&codes[0], &format!("{}.{}.{}", code, object, field));
        prop_assert_eq!(codes.last().unwrap(), &code);
        // Every tier starts with the error code.
        for candidate in &codes {
            prop_assert!(candidate.starts_with(&code));
        }
    }

    #[test]
    fn field_codes_contain_no_duplicates(
        code in segment(),
        object in segment(),
        field in segment(),
        field_type in proptest::option::of(segment()),
    ) {
        let codes =
            DefaultCodeResolver.resolve_field_codes(&code, &object, &field, field_type.as_deref());
        let mut deduped = codes.clone();
        deduped.dedup();
        prop_assert_eq!(codes.len(), deduped.len());
        let mut sorted = codes.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(codes.len(), sorted.len());
    }

    #[test]
    fn resolution_is_deterministic(
        code in segment(),
        object in segment(),
        field in segment(),
        field_type in proptest::option::of(segment()),
    ) {
        let first =
            DefaultCodeResolver.resolve_field_codes(&code, &object, &field, field_type.as_deref());
        let second =
            DefaultCodeResolver.resolve_field_codes(&code, &object, &field, field_type.as_deref());
        prop_assert_eq!(first, second);

        let object_first = DefaultCodeResolver.resolve_object_codes(&code, &object);
        let object_second = DefaultCodeResolver.resolve_object_codes(&code, &object);
        prop_assert_eq!(object_first, object_second);
    }
}
