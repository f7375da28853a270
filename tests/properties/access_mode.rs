//! Property tests for access-mode answers.

use proptest::prelude::*;

use statstack::AccessMode;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: any answer yields a mode; only unrecognized ones fall back.
    #[test]
    fn property_choose_is_total(s in "(?s).{0,64}") {
        let choice = AccessMode::choose(&s);
        match AccessMode::parse_choice(&s) {
            Some(mode) => {
                prop_assert_eq!(choice.mode, mode);
                prop_assert!(!choice.fell_back);
            }
            None => {
                prop_assert_eq!(choice.mode, AccessMode::DirectAddress);
                prop_assert!(choice.fell_back);
            }
        }
    }

    /// PROPERTY: numbers outside the menu always fall back to direct-address.
    #[test]
    fn property_out_of_range_numbers_fall_back(n in 4u32..100_000) {
        let choice = AccessMode::choose(&n.to_string());
        prop_assert_eq!(choice.mode, AccessMode::DirectAddress);
        prop_assert!(choice.fell_back);
    }

    /// PROPERTY: the menu index of a mode parses back to that mode.
    #[test]
    fn property_menu_index_parses_back(i in 0usize..3, pad in " {0,3}") {
        let mode = AccessMode::ALL[i];
        let answer = format!("{}{}{}", pad, mode.menu_index(), pad);
        prop_assert_eq!(AccessMode::parse_choice(&answer), Some(mode));
    }
}
