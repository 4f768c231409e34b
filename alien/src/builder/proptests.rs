//! Property-based tests for builder construction.

use super::factory::{build, BuilderFactory};
use crate::options::Options;
use proptest::prelude::*;
use serde_json::json;

// Distinct lowercase identifiers, so setter names never collide
fn ident_list_strategy() -> impl Strategy<Value = Vec<String>> {
    let ident = "[a-z]{1,8}".prop_filter("operation keys are reserved", |s: &String| {
        s != "set" && s != "reset" && s != "finalize"
    });
    prop::collection::btree_set(ident, 0..12).prop_map(|set| set.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        .. ProptestConfig::default()
    })]

    // Schema is index-aligned with the declaration list
    #[test]
    fn schema_aligned_with_declarations(idents in ident_list_strategy()) {
        let b = build(idents.iter().map(String::as_str), None);
        let schema = b.schema().unwrap();
        prop_assert_eq!(schema.len(), idents.len());
        prop_assert_eq!(schema.setters().len(), idents.len());
        for (i, ident) in idents.iter().enumerate() {
            prop_assert_eq!(&schema.keys()[i], ident);
            prop_assert_eq!(&schema.setters()[i], &crate::naming::setter_name(ident));
        }
    }

    // Every setter stores exactly the assigned value
    #[test]
    fn setters_store_assigned_values(idents in ident_list_strategy(), seed in any::<i64>()) {
        let mut b = build(idents.iter().map(String::as_str), None);
        for (i, ident) in idents.iter().enumerate() {
            let setter = crate::naming::setter_name(ident);
            b.invoke(&setter, seed.wrapping_add(i as i64)).unwrap();
        }
        for (i, ident) in idents.iter().enumerate() {
            prop_assert_eq!(b.value(ident), Some(&json!(seed.wrapping_add(i as i64))));
        }
    }

    // removeUnused keeps exactly the properties that were set
    #[test]
    fn remove_unused_keeps_set_properties(
        idents in ident_list_strategy(),
        mask in prop::collection::vec(any::<bool>(), 12),
    ) {
        let mut options = Options::new();
        options.finalization.remove_unused = Some(true);
        let mut b = BuilderFactory::default().build_with(idents.iter().map(String::as_str), &options);

        for (ident, set) in idents.iter().zip(&mask) {
            if *set {
                b.invoke(&crate::naming::setter_name(ident), true).unwrap();
            }
        }
        b.finalize().unwrap();

        for (ident, set) in idents.iter().zip(&mask) {
            prop_assert_eq!(b.contains(ident), *set);
        }
    }
}
