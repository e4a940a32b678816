#![no_main]
use std::time::Duration;

use libfuzzer_sys::fuzz_target;

use slipset_core::build_panel;
use slipset_core::mocks::RecordingSink;
use slipset_traits::ManualClock;

// Drive the whole panel with arbitrary field text and arbitrary time gaps.
// The grammar must drop anything non-completable without state change and
// nothing in the pipeline may panic; sink callbacks always succeed here.
fuzz_target!(|input: (i32, Vec<(String, u16)>)| {
    let (seed_cp, edits) = input;

    let clock = ManualClock::new();
    let Ok(mut panel) = build_panel(
        RecordingSink::new(),
        None,
        None,
        None,
        Some(Box::new(clock.clone())),
        seed_cp,
        600,
    ) else {
        return;
    };

    for (text, gap_ms) in &edits {
        // Split the bytes between the two fields to also exercise the
        // deadline path.
        if gap_ms % 2 == 0 {
            let _ = panel.slippage_input(text);
        } else {
            let _ = panel.deadline_input(text);
        }
        clock.advance(Duration::from_millis(u64::from(*gap_ms)));
        let _ = panel.poll();
        assert!(panel.slippage_cp() <= 10_000);
        assert!(panel.deadline_seconds() % 60 == 0);
    }
});
