//! # Numeric Conventions
//!
//! Shared arithmetic guards and number formatting used by every engine.
//!
//! Degenerate denominators (a zero bearing area, a zero factor of safety) are
//! floored to a tiny epsilon instead of raising. The result is a very large
//! stress or a very large resistance that the PASS/CHECK logic then reports
//! on, so a screening run always completes.
//!
//! ```rust
//! use deck_core::numeric::{floored, grouped, pass_check, BEARING_AREA_FLOOR_IN2};
//!
//! let stress = 1500.0 / floored(0.0, BEARING_AREA_FLOOR_IN2);
//! assert!(stress.is_finite());
//! assert_eq!(pass_check(stress <= 625.0), "CHECK");
//! assert_eq!(grouped(21427.3, 0), "21,427");
//! ```

/// Smallest bearing area used when computing post base bearing stress (in²)
pub const BEARING_AREA_FLOOR_IN2: f64 = 1e-6;

/// Smallest radius of gyration used in the slenderness ratio (in)
pub const RADIUS_FLOOR_IN: f64 = 1e-6;

/// Added to the squared slenderness ratio before dividing in Euler's formula
pub const SLENDERNESS_SQ_GUARD: f64 = 1e-6;

/// Floor for footing plan area and factors of safety
pub const FOOTING_FLOOR: f64 = 1e-9;

/// Clamp `value` from below at `eps`.
#[inline]
pub fn floored(value: f64, eps: f64) -> f64 {
    value.max(eps)
}

/// Structural verdict label.
pub fn pass_check(pass: bool) -> &'static str {
    if pass {
        "PASS"
    } else {
        "CHECK"
    }
}

/// Advisory label: `true` means the flag needs attention.
pub fn ok_attention(attention: bool) -> &'static str {
    if attention {
        "ATTENTION"
    } else {
        "OK"
    }
}

/// Fixed-precision rendering, e.g. `fixed(49.9114, 3) == "49.911"`.
pub fn fixed(value: f64, precision: usize) -> String {
    format!("{:.*}", precision, value)
}

/// Fixed-precision rendering with thousands separators in the integer part.
pub fn grouped(value: f64, precision: usize) -> String {
    let text = fixed(value, precision);
    if !value.is_finite() {
        return text;
    }

    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(text.len() + int_part.len() / 3);
    out.push_str(sign);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Raw input value as typed: whole numbers keep one decimal (`10.0`),
/// everything else uses the shortest round-trip form (`12.5`, `0.125`).
pub fn plain(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed() {
        assert_eq!(fixed(49.911458, 3), "49.911");
        assert_eq!(fixed(45000.0, 1), "45000.0");
        assert_eq!(fixed(1000.0, 0), "1000");
    }

    #[test]
    fn test_grouped() {
        assert_eq!(grouped(6428.2, 0), "6,428");
        assert_eq!(grouped(1234567.891, 2), "1,234,567.89");
        assert_eq!(grouped(999.0, 0), "999");
        assert_eq!(grouped(-12500.0, 0), "-12,500");
        assert_eq!(grouped(0.0, 1), "0.0");
    }

    #[test]
    fn test_grouped_non_finite() {
        assert_eq!(grouped(f64::INFINITY, 0), "inf");
    }

    #[test]
    fn test_plain() {
        assert_eq!(plain(10.0), "10.0");
        assert_eq!(plain(0.0), "0.0");
        assert_eq!(plain(12.5), "12.5");
        assert_eq!(plain(0.125), "0.125");
    }

    #[test]
    fn test_labels() {
        assert_eq!(pass_check(true), "PASS");
        assert_eq!(pass_check(false), "CHECK");
        assert_eq!(ok_attention(true), "ATTENTION");
        assert_eq!(ok_attention(false), "OK");
    }

    #[test]
    fn test_floored() {
        assert_eq!(floored(0.0, BEARING_AREA_FLOOR_IN2), 1e-6);
        assert_eq!(floored(24.0, BEARING_AREA_FLOOR_IN2), 24.0);
    }
}
