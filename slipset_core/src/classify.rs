//! Bounds classification for committed custom slippage text.

use slipset_traits::Validity;

use crate::config::BoundsCfg;
use crate::fixed_point::parse_partial_cp;
use crate::status::Warning;

/// Result of classifying one piece of held text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub warning: Warning,
    pub validity: Validity,
    /// The parsed centipercent value to propagate; `None` when the entry is
    /// hard-blocked (empty or out of range).
    pub value_cp: Option<i32>,
}

/// Classify sanitized text against the configured bounds.
///
/// Ordered checks: empty and out-of-range are terminal and block
/// propagation; low-risk and high-risk are soft advisories (high overrides
/// low where both could apply) and the value still propagates. Input is
/// expected to have passed the partial-decimal grammar; anything else is
/// treated as empty.
pub fn check_bounds(text: &str, bounds: &BoundsCfg) -> Classification {
    let blocked = |warning| Classification {
        warning,
        validity: Validity::Invalid,
        value_cp: None,
    };

    if text.is_empty() || text == "." {
        return blocked(Warning::EmptyInput);
    }
    let Some(cp) = parse_partial_cp(text) else {
        return blocked(Warning::EmptyInput);
    };
    if cp < 0 || cp > bounds.max_cp {
        return blocked(Warning::OutOfRange);
    }

    let mut warning = Warning::None;
    let mut validity = Validity::Valid;
    if cp < bounds.low_risk_cp {
        warning = Warning::LowRisk;
    }
    if cp > bounds.high_risk_cp {
        warning = Warning::HighRisk;
        validity = Validity::Warning;
    }
    Classification {
        warning,
        validity,
        value_cp: Some(cp),
    }
}
