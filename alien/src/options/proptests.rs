//! Property-based tests for option resolution.

use super::fast::{expand_fast_options, resolve_key, FastOptions};
use super::resolver::OptionResolver;
use super::schema::Options;
use super::{OptionKey, OptionKind, Section};
use crate::naming;
use proptest::prelude::*;

// Strategy for generating flag-only user configs
fn flag_options_strategy() -> impl Strategy<Value = Options> {
    prop::collection::vec(prop::option::of(any::<bool>()), 7).prop_map(|flags| {
        let keys = OptionKey::ALL
            .iter()
            .copied()
            .filter(|k| k.kind() == OptionKind::Flag);
        let mut options = Options::default();
        for (key, flag) in keys.zip(flags) {
            if let Some(flag) = flag {
                options.insert(key, flag.into()).unwrap();
            }
        }
        options
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Supplied flags win, unsupplied flags fall back to defaults
    #[test]
    fn resolve_user_flag_or_default(user in flag_options_strategy()) {
        let resolver = OptionResolver::default();
        let effective = resolver.resolve(&user);
        for key in OptionKey::ALL.iter().copied().filter(|k| k.kind() == OptionKind::Flag) {
            let expected = user
                .get(key)
                .unwrap_or_else(|| resolver.defaults().value(key))
                .as_flag();
            prop_assert_eq!(effective.value(key).as_flag(), expected);
        }
    }

    // Empty config is identity element for merge
    #[test]
    fn merge_identity(user in flag_options_strategy()) {
        let mut merged = user.clone();
        Options::merge_into(&mut merged, &Options::default());
        for key in OptionKey::ALL {
            prop_assert_eq!(
                merged.get(key).and_then(|v| v.as_flag()),
                user.get(key).and_then(|v| v.as_flag())
            );
        }
    }

    // Canonical keys survive fast expansion unchanged
    #[test]
    fn canonical_config_is_fixed_point(user in flag_options_strategy()) {
        let expanded = expand_fast_options(&FastOptions::from(&user));
        for key in OptionKey::ALL {
            prop_assert_eq!(
                expanded.get(key).and_then(|v| v.as_flag()),
                user.get(key).and_then(|v| v.as_flag())
            );
        }
    }

    // Every non-empty prefix of a canonical option name resolves to an option
    // whose name starts with that prefix
    #[test]
    fn option_prefixes_resolve_to_a_prefixed_name(
        section_idx in 0usize..4,
        option_idx in 0usize..4,
        len in 1usize..24,
    ) {
        let section = Section::ALL[section_idx];
        let options = section.options();
        let ident = options[option_idx % options.len()].ident();
        let prefix: String = ident.chars().take(len).collect();

        let names: Vec<&str> = options.iter().map(|o| o.ident()).collect();
        let hit = resolve_key(&prefix, &names).map(|i| names[i]);
        prop_assert!(hit.is_some());
        prop_assert!(hit.unwrap().starts_with(&prefix));
    }

    // Case never affects resolution
    #[test]
    fn resolution_is_case_insensitive(key in "[a-zA-Z]{1,6}") {
        let names = Section::ALL.map(Section::name);
        prop_assert_eq!(
            resolve_key(&key, &names),
            resolve_key(&key.to_uppercase(), &names)
        );
        let initials: Vec<String> = names.iter().map(|n| naming::initialism(n)).collect();
        prop_assert_eq!(
            resolve_key(&key, &initials),
            resolve_key(&key.to_lowercase(), &initials)
        );
    }
}
