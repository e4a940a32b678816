//! Fixed-point centipercent arithmetic helpers.
//!
//! Operating in hundredths of a percent (`i32`, 1 cp = 0.01%) keeps the
//! classification thresholds, preset constants, and propagated values in a
//! single integer unit with no per-keystroke floating point.

/// Quantize a floating-point percentage to integer centipercent, rounding to
/// nearest and clamping to the `i32` range. Non-finite values map to 0.
#[inline]
pub fn pct_to_cp(pct: f32) -> i32 {
    if !pct.is_finite() {
        return 0;
    }
    let scaled = (pct * 100.0).round();
    if scaled >= i32::MAX as f32 {
        i32::MAX
    } else if scaled <= i32::MIN as f32 {
        i32::MIN
    } else {
        scaled as i32
    }
}

/// Parse partial-decimal text (as accepted by `grammar::is_partial_decimal`)
/// into centipercent. Returns `None` for the empty string and for a lone `.`,
/// the two forms with no numeric value, and for any text outside the grammar.
///
/// The grammar caps both sides at two digits, so the result is exact and
/// bounded by 9999 cp (99.99%).
pub fn parse_partial_cp(text: &str) -> Option<i32> {
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, f),
        None => (text, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if int_part.len() > 2 || frac_part.len() > 2 {
        return None;
    }
    let mut cp: i32 = 0;
    for b in int_part.bytes() {
        if !b.is_ascii_digit() {
            return None;
        }
        cp = cp * 10 + i32::from(b - b'0');
    }
    cp *= 100;
    let mut place = 10;
    for b in frac_part.bytes() {
        if !b.is_ascii_digit() {
            return None;
        }
        cp += i32::from(b - b'0') * place;
        place /= 10;
    }
    Some(cp)
}

/// Render centipercent as the shortest decimal percentage string:
/// 37 -> "0.37", 370 -> "3.7", 500 -> "5".
pub fn format_cp(cp: i32) -> String {
    let sign = if cp < 0 { "-" } else { "" };
    let mag = cp.unsigned_abs();
    let int = mag / 100;
    let frac = mag % 100;
    if frac == 0 {
        format!("{sign}{int}")
    } else if frac % 10 == 0 {
        format!("{sign}{int}.{}", frac / 10)
    } else {
        format!("{sign}{int}.{frac:02}")
    }
}
