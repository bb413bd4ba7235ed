//! Feet-and-inches display formatting for elevation deltas.
//!
//! Deltas are computed in decimal feet; the dashboard shows them as feet
//! plus inches, with the leftover fraction of an inch quantized to
//! eighths. Sign is tracked separately from the magnitude so callers can
//! choose their own prefix ("+/-", "up/down", or nothing) per context.

use serde::Serialize;

/// Glyphs for 1..=7 eighths of an inch.
pub const EIGHTH_GLYPHS: [&str; 7] = ["⅛", "¼", "⅜", "½", "⅝", "¾", "⅞"];

/// Magnitude broken into feet, inches, and eighths of an inch.
///
/// Invariants after construction: `inches <= 11` and `eighths <= 7`
/// (rounding carries propagate eighths→inches→feet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeetInches {
    pub feet: u32,
    pub inches: u8,
    pub eighths: u8,
}

impl FeetInches {
    /// The fraction glyph for the eighths component, `None` when the
    /// magnitude lands on a whole inch.
    pub fn fraction_glyph(&self) -> Option<&'static str> {
        match self.eighths {
            0 => None,
            n => Some(EIGHTH_GLYPHS[usize::from(n) - 1]),
        }
    }

    /// True when every component quantized to zero. For a nonzero input
    /// value this means "less than an eighth of an inch".
    pub fn is_zero(&self) -> bool {
        self.feet == 0 && self.inches == 0 && self.eighths == 0
    }
}

/// Sign of the original value, reported alongside the magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Sign {
    Positive,
    Zero,
    Negative,
}

/// A formatted value with its sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SignedFeetInches {
    pub sign: Sign,
    pub parts: FeetInches,
}

/// Break `|value|` feet into feet, inches, and eighths of an inch.
///
/// The fractional inch is rounded to the nearest eighth; a round up to a
/// whole inch carries into `inches`, and a carry past 11 inches carries
/// into `feet`, so `inches` never reads 12.
pub fn format_feet_inches(value: f64) -> FeetInches {
    let magnitude = value.abs();
    let mut feet = magnitude.floor() as u32;
    let raw_inches = (magnitude - magnitude.floor()) * 12.0;
    let mut inches = raw_inches.floor() as u8;
    let mut eighths = ((raw_inches - raw_inches.floor()) * 8.0).round() as u8;

    if eighths == 8 {
        eighths = 0;
        inches += 1;
    }
    if inches == 12 {
        inches = 0;
        feet += 1;
    }

    FeetInches { feet, inches, eighths }
}

/// Like [`format_feet_inches`], with the sign reported separately.
pub fn format_signed_feet_inches(value: f64) -> SignedFeetInches {
    let sign = if value > 0.0 {
        Sign::Positive
    } else if value < 0.0 {
        Sign::Negative
    } else {
        Sign::Zero
    };
    SignedFeetInches {
        sign,
        parts: format_feet_inches(value),
    }
}

/// Compose the trend string the dashboard shows for a delta.
///
/// Rules: feet dominate ("2ft 3in"), bare inches carry the fraction glyph
/// ("5 ¼in"), a nonzero value that quantized to nothing renders as
/// "< ⅛in" so a small change never reads as no change, and exactly zero
/// renders as a literal "0in".
pub fn render_trend(value: f64) -> String {
    let signed = format_signed_feet_inches(value);
    let prefix = match signed.sign {
        Sign::Positive => "+",
        Sign::Negative => "-",
        Sign::Zero => "",
    };
    let parts = signed.parts;

    if parts.feet > 0 {
        format!("{}{}ft {}in", prefix, parts.feet, parts.inches)
    } else if parts.inches > 0 || parts.eighths > 0 {
        match parts.fraction_glyph() {
            Some(glyph) => format!("{}{} {}in", prefix, parts.inches, glyph),
            None => format!("{}{}in", prefix, parts.inches),
        }
    } else if value != 0.0 {
        format!("{}< ⅛in", prefix)
    } else {
        "0in".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_feet_inches_and_eighths() {
        // 1.9375 ft = 1 ft + 11.25 in -> 11 in + 2/8
        let parts = format_feet_inches(1.9375);
        assert_eq!(parts, FeetInches { feet: 1, inches: 11, eighths: 2 });
        assert_eq!(parts.fraction_glyph(), Some("¼"));
    }

    #[test]
    fn eighth_round_up_carries_into_inches() {
        // 0.4948 ft = 5.9376 in -> 5 in + round(0.9376 * 8) = 5 in + 8/8
        // which carries to a clean 6 in.
        let parts = format_feet_inches(0.4948);
        assert_eq!(parts, FeetInches { feet: 0, inches: 6, eighths: 0 });
    }

    #[test]
    fn inch_carry_propagates_into_feet() {
        // 1.9999 ft: 11.9988 in -> 11 in + 8/8 -> 12 in -> 2 ft 0 in.
        let parts = format_feet_inches(1.9999);
        assert_eq!(parts, FeetInches { feet: 2, inches: 0, eighths: 0 });
        assert!(parts.inches <= 11, "carry must never leave 12 inches");
    }

    #[test]
    fn sign_is_tracked_separately_from_magnitude() {
        let up = format_signed_feet_inches(0.5);
        let down = format_signed_feet_inches(-0.5);
        assert_eq!(up.sign, Sign::Positive);
        assert_eq!(down.sign, Sign::Negative);
        assert_eq!(up.parts, down.parts, "magnitude ignores sign");
        assert_eq!(format_signed_feet_inches(0.0).sign, Sign::Zero);
    }

    #[test]
    fn exact_zero_formats_to_all_zero_parts() {
        let parts = format_feet_inches(0.0);
        assert!(parts.is_zero());
        assert_eq!(parts.fraction_glyph(), None);
    }

    #[test]
    fn every_eighth_gets_its_glyph() {
        for n in 1..=7u8 {
            let value = f64::from(n) / 8.0 / 12.0;
            let parts = format_feet_inches(value);
            assert_eq!(parts.eighths, n, "{}/8 in should quantize to itself", n);
            assert_eq!(parts.fraction_glyph(), Some(EIGHTH_GLYPHS[usize::from(n) - 1]));
        }
    }

    #[test]
    fn reconstruction_stays_within_a_sixteenth_inch() {
        // Half the quantization step is 1/16 in = 1/192 ft.
        let tolerance = 1.0 / 192.0 + 1e-9;
        for step in 0..4000 {
            let value = f64::from(step) * 0.0137;
            let parts = format_feet_inches(value);
            let rebuilt = f64::from(parts.feet)
                + f64::from(parts.inches) / 12.0
                + f64::from(parts.eighths) / 96.0;
            assert!(
                (rebuilt - value.abs()).abs() <= tolerance,
                "value {} rebuilt as {} (parts {:?})",
                value,
                rebuilt,
                parts
            );
            assert!(parts.inches <= 11);
            assert!(parts.eighths <= 7);
        }
    }

    #[test]
    fn trend_rendering_rules() {
        assert_eq!(render_trend(2.25), "+2ft 3in");
        assert_eq!(render_trend(-0.4375), "-5 ¼in");
        assert_eq!(render_trend(0.25), "+3in");
        assert_eq!(render_trend(0.005), "+< ⅛in");
        assert_eq!(render_trend(-0.005), "-< ⅛in");
        assert_eq!(render_trend(0.0), "0in");
    }
}
