//! Partial-input recognizers for the two text fields.
//!
//! These accept every string that could still be completed into a valid
//! entry and reject everything else, so intermediate states like "50." or
//! ".5" are never blocked while "abc" or "1.2.3" never appear on screen.
//! Explicit character walks, not a pattern library, so the accepted language
//! is exactly what is written here.

/// Partial decimal with at most two integer digits and at most two
/// fractional digits: empty | 1-2 digits | 0-2 digits '.' 0-2 digits.
///
/// Note the asymmetry with classification: "99" is accepted here (it is
/// syntactically plausible) and only later flagged out of range, while "abc"
/// can never become a number and is rejected at the keystroke.
pub fn is_partial_decimal(s: &str) -> bool {
    if s.is_empty() {
        return true;
    }
    let all_digits = |t: &str| t.bytes().all(|b| b.is_ascii_digit());
    match s.split_once('.') {
        None => s.len() <= 2 && all_digits(s),
        Some((int_part, frac_part)) => {
            int_part.len() <= 2
                && frac_part.len() <= 2
                && all_digits(int_part)
                && all_digits(frac_part)
        }
    }
}

/// Deadline minutes field: empty or a run of ASCII digits. No sign, no dot.
pub fn is_digit_run(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}
