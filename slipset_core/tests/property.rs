use std::time::Duration;

use proptest::prelude::*;

use slipset_core::classify::check_bounds;
use slipset_core::config::BoundsCfg;
use slipset_core::fixed_point::parse_partial_cp;
use slipset_core::grammar::is_partial_decimal;
use slipset_core::mocks::RecordingSink;
use slipset_core::{Validity, build_panel};
use slipset_traits::ManualClock;

proptest! {
    // Any accepted text with at least one digit has an exact centipercent
    // value; text the grammar rejects never parses.
    #[test]
    fn grammar_and_parser_agree(s in ".{0,6}") {
        if is_partial_decimal(&s) {
            let has_digit = s.bytes().any(|b| b.is_ascii_digit());
            prop_assert_eq!(parse_partial_cp(&s).is_some(), has_digit, "{:?}", s);
        } else {
            prop_assert!(parse_partial_cp(&s).is_none(), "{:?}", s);
        }
    }

    // A propagated value is always within the hard bounds and never carries
    // an Invalid verdict.
    #[test]
    fn committed_values_stay_within_bounds(s in "[0-9]{0,2}(\\.[0-9]{0,2})?") {
        let bounds = BoundsCfg::default();
        let c = check_bounds(&s, &bounds);
        if let Some(cp) = c.value_cp {
            prop_assert!((0..=bounds.max_cp).contains(&cp));
            prop_assert!(c.validity != Validity::Invalid);
        } else {
            prop_assert_eq!(c.validity, Validity::Invalid);
        }
    }

    // Feeding arbitrary text through the whole pipeline never panics, and a
    // rejected keystroke leaves the panel exactly as it was.
    #[test]
    fn arbitrary_input_never_breaks_the_panel(
        inputs in prop::collection::vec(".{0,8}", 0..20),
        gaps_ms in prop::collection::vec(0u64..400, 0..20),
    ) {
        let clock = ManualClock::new();
        let mut panel = build_panel(
            RecordingSink::new(),
            None,
            None,
            None,
            Some(Box::new(clock.clone())),
            100,
            600,
        )
        .unwrap();

        for (i, text) in inputs.iter().enumerate() {
            let mode = panel.mode();
            let held = panel.custom_text().to_string();
            let pending = panel.is_evaluation_pending();

            if !panel.slippage_input(text) {
                prop_assert_eq!(panel.mode(), mode);
                prop_assert_eq!(panel.custom_text(), held);
                prop_assert_eq!(panel.is_evaluation_pending(), pending);
            }

            let gap = gaps_ms.get(i).copied().unwrap_or(75);
            clock.advance(Duration::from_millis(gap));
            panel.poll().unwrap();
            prop_assert!((0..=5000).contains(&panel.slippage_cp()));
        }
    }

    // The deadline field only ever moves in whole minutes.
    #[test]
    fn deadline_seconds_are_whole_minutes(s in ".{0,8}") {
        let clock = ManualClock::new();
        let mut panel = build_panel(
            RecordingSink::new(),
            None,
            None,
            None,
            Some(Box::new(clock.clone())),
            100,
            600,
        )
        .unwrap();

        panel.deadline_input(&s).unwrap();
        prop_assert_eq!(panel.deadline_seconds() % 60, 0);
    }
}
