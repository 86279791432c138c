// ============================================================================
// Number Text
// Number <-> string rules used by NumericValue coercion
// ============================================================================
//
// Formatting follows the script-host convention rather than Rust's `Display`:
// integral values print without a fraction, non-finite values print as
// `NaN` / `Infinity`, and magnitudes outside [1e-6, 1e21) switch to exponent
// form with an explicit exponent sign (`1e+21`, `1.5e-7`).

/// Largest decimal exponent printed without exponent notation.
const MAX_PLAIN_EXPONENT: i32 = 21;

/// Smallest decimal exponent printed without exponent notation.
const MIN_PLAIN_EXPONENT: i32 = -6;

/// Format a number the way `Display for NumericValue` does.
///
/// Uses the shortest digit string that round-trips, as produced by Rust's
/// `{:e}` formatter, and lays it out in plain or exponent form.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // Covers -0 as well
    if value == 0.0 {
        return "0".to_string();
    }
    if value < 0.0 {
        return format!("-{}", format_number(-value));
    }

    let scientific = format!("{:e}", value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };

    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    // Position of the decimal point relative to the first digit
    let n = exponent + 1;

    if k <= n && n <= MAX_PLAIN_EXPONENT {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= MAX_PLAIN_EXPONENT {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{}.{}", int_part, frac_part)
    } else if MIN_PLAIN_EXPONENT < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let e = n - 1;
        let sign = if e >= 0 { '+' } else { '-' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", lead, sign, e.abs())
        } else {
            format!("{}.{}e{}{}", lead, rest, sign, e.abs())
        }
    }
}

/// Parse text using the script-host string-to-number rules.
///
/// Returns `None` where the host would produce NaN. Accepted forms:
/// - surrounding whitespace is ignored; empty text is `0`
/// - `Infinity`, `+Infinity`, `-Infinity`
/// - unsigned `0x`, `0o` and `0b` integer literals
/// - decimal literals with optional sign, fraction and exponent
pub fn parse_number(text: &str) -> Option<f64> {
    let s = text.trim_matches(is_number_whitespace);
    if s.is_empty() {
        return Some(0.0);
    }

    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {},
    }

    if let Some(radix_value) = parse_radix_literal(s) {
        return radix_value;
    }

    if !is_decimal_literal(s) {
        return None;
    }
    s.parse::<f64>().ok()
}

/// Outer `None`: not a radix literal. Inner `None`: malformed radix literal.
fn parse_radix_literal(s: &str) -> Option<Option<f64>> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };

    let body = &s[2..];
    if body.is_empty() {
        return Some(None);
    }
    Some(power_of_two_digits_to_f64(body, radix))
}

/// Convert digits in base 2, 8 or 16 to the nearest `f64`.
///
/// Keeps the leading 64 significant bits exactly and folds every bit below
/// them into a sticky bit, so the final `u64 -> f64` conversion rounds once.
fn power_of_two_digits_to_f64(body: &str, radix: u32) -> Option<f64> {
    let bits_per_digit = radix.trailing_zeros();
    let mut mantissa: u64 = 0;
    let mut width: u32 = 0;
    let mut dropped: i32 = 0;
    let mut sticky = false;

    for c in body.chars() {
        let digit = c.to_digit(radix)? as u64;
        for shift in (0..bits_per_digit).rev() {
            let bit = (digit >> shift) & 1;
            if width < u64::BITS {
                mantissa = (mantissa << 1) | bit;
                if mantissa != 0 {
                    width += 1;
                }
            } else {
                sticky |= bit == 1;
                dropped = dropped.saturating_add(1);
            }
        }
    }

    // Bit 0 sits far below the 53-bit rounding position
    if sticky {
        mantissa |= 1;
    }
    Some(mantissa as f64 * 2f64.powi(dropped))
}

/// Whitespace skipped around number text, including the byte-order mark.
fn is_number_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// `[+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?`
fn is_decimal_literal(s: &str) -> bool {
    let mut chars = s.chars().peekable();

    if matches!(chars.peek(), Some('+') | Some('-')) {
        chars.next();
    }

    let mut mantissa_digits = 0;
    while chars.peek().is_some_and(|c| c.is_ascii_digit()) {
        chars.next();
        mantissa_digits += 1;
    }
    if chars.peek() == Some(&'.') {
        chars.next();
        while chars.peek().is_some_and(|c| c.is_ascii_digit()) {
            chars.next();
            mantissa_digits += 1;
        }
    }
    if mantissa_digits == 0 {
        return false;
    }

    if matches!(chars.peek(), Some('e') | Some('E')) {
        chars.next();
        if matches!(chars.peek(), Some('+') | Some('-')) {
            chars.next();
        }
        let mut exponent_digits = 0;
        while chars.peek().is_some_and(|c| c.is_ascii_digit()) {
            chars.next();
            exponent_digits += 1;
        }
        if exponent_digits == 0 {
            return false;
        }
    }

    chars.next().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    #[test]
    fn test_format_integers() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(-42.0), "-42");
        assert_eq!(format_number(100.0), "100");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_format_fractions() {
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(123.456), "123.456");
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(-0.25), "-0.25");
    }

    #[test]
    fn test_format_exponent_form() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e22), "1.5e+22");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(-2e-10), "-2e-10");
        assert_eq!(format_number(1e20), "100000000000000000000");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_number("42"), Some(42.0));
        assert_eq!(parse_number("  -1.5  "), Some(-1.5));
        assert_eq!(parse_number("+.5"), Some(0.5));
        assert_eq!(parse_number("3."), Some(3.0));
        assert_eq!(parse_number("1e3"), Some(1000.0));
        assert_eq!(parse_number("2.5E-1"), Some(0.25));
    }

    #[test]
    fn test_parse_special_forms() {
        assert_eq!(parse_number(""), Some(0.0));
        assert_eq!(parse_number("   "), Some(0.0));
        assert_eq!(parse_number("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_number("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_number("0x1F"), Some(31.0));
        assert_eq!(parse_number("0o17"), Some(15.0));
        assert_eq!(parse_number("0b101"), Some(5.0));
    }

    #[test]
    fn test_parse_rejects() {
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("."), None);
        assert_eq!(parse_number("1e"), None);
        assert_eq!(parse_number("1.2.3"), None);
        assert_eq!(parse_number("0x"), None);
        assert_eq!(parse_number("0xZZ"), None);
        assert_eq!(parse_number("-0x10"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("12px"), None);
    }

    #[test]
    fn test_parse_strips_byte_order_mark() {
        assert_eq!(parse_number("\u{FEFF}5"), Some(5.0));
        assert_eq!(parse_number(" 5\u{FEFF}\n"), Some(5.0));
        assert_eq!(parse_number("\u{FEFF}"), Some(0.0));
    }

    #[test]
    fn test_parse_wide_radix_literals_round_once() {
        let hex = 0x337e7e599028fdfabb_u128;
        assert_eq!(parse_number("0x337e7e599028fdfabb"), Some(hex as f64));

        let binary = (1_u128 << 70) | 0x2b_9c4f_0e17_a3d5_u128 | (1 << 11) | 1;
        assert_eq!(
            parse_number(&format!("0b{:b}", binary)),
            Some(binary as f64)
        );

        let octal = u128::MAX - 12345;
        assert_eq!(parse_number(&format!("0o{:o}", octal)), Some(octal as f64));
    }

    #[test]
    fn test_parse_radix_beyond_128_bits() {
        // 2^160, then 2^160 + 1 which rounds back down
        let power = format!("0x1{}", "0".repeat(40));
        assert_eq!(parse_number(&power), Some(2f64.powi(160)));
        let plus_one = format!("0x1{}1", "0".repeat(39));
        assert_eq!(parse_number(&plus_one), Some(2f64.powi(160)));

        // Leading zeros do not count towards the kept bits
        let padded = format!("0x{}337e7e599028fdfabb", "0".repeat(50));
        assert_eq!(
            parse_number(&padded),
            Some(0x337e7e599028fdfabb_u128 as f64)
        );

        // 2^1100 is past f64::MAX
        let huge = format!("0x1{}", "0".repeat(275));
        assert_eq!(parse_number(&huge), Some(f64::INFINITY));
    }

    quickcheck! {
        fn prop_hex_literal_matches_integer_conversion(value: u128) -> bool {
            parse_number(&format!("0x{:x}", value)) == Some(value as f64)
        }

        fn prop_binary_literal_matches_integer_conversion(value: u128) -> bool {
            parse_number(&format!("0b{:b}", value)) == Some(value as f64)
        }


        fn prop_formatted_text_reparses(value: f64) -> bool {
            let text = format_number(value);
            match parse_number(&text) {
                Some(parsed) if value.is_nan() => parsed.is_nan(),
                Some(parsed) => parsed == value,
                None => value.is_nan(),
            }
        }
    }
}
