/// Render a float the way a `key=value` line would spell it.
/// Requirements:
/// - no exponent notation
/// - at least one fractional digit, so the text infers back as a float
/// - shortest digits that round-trip (via ryu)
/// - -0 normalized to 0.0
///
/// The parser never produces NaN or infinities, but a hand-built
/// `Value::Float` can hold one; those fall back to `NaN`, `inf` and `-inf`.
pub(crate) fn format_float(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return String::from("0.0");
    }

    let mut buf = ryu::Buffer::new();
    let raw = buf.format_finite(value.abs());
    let mut body = if let Some(exp_index) = raw.find(['e', 'E']) {
        let mantissa = &raw[..exp_index];
        let exp: i32 = raw[exp_index + 1..].parse().unwrap_or(0);
        expand_exponent(mantissa, exp)
    } else {
        String::from(raw)
    };
    if !body.contains('.') {
        body.push_str(".0");
    }
    if value < 0.0 {
        body.insert(0, '-');
    }
    body
}

fn expand_exponent(mantissa: &str, exp: i32) -> String {
    let mut digits = Vec::with_capacity(mantissa.len());
    let mut point_index = None;
    for &b in mantissa.as_bytes() {
        if b == b'.' {
            point_index = Some(digits.len());
        } else {
            digits.push(b);
        }
    }
    let point_index = point_index.unwrap_or(digits.len()) as i32;
    let target = point_index + exp;

    let mut result = String::with_capacity(digits.len() + exp.unsigned_abs() as usize + 2);
    if target <= 0 {
        result.push_str("0.");
        for _ in 0..(-target) {
            result.push('0');
        }
        result.extend(digits.iter().map(|&d| d as char));
    } else if target as usize >= digits.len() {
        result.extend(digits.iter().map(|&d| d as char));
        for _ in digits.len()..target as usize {
            result.push('0');
        }
    } else {
        let split = target as usize;
        for (idx, &d) in digits.iter().enumerate() {
            if idx == split {
                result.push('.');
            }
            result.push(d as char);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::format_float;

    #[test]
    fn keeps_a_fractional_part() {
        assert_eq!(format_float(42.0), "42.0");
        assert_eq!(format_float(3.14), "3.14");
        assert_eq!(format_float(0.0), "0.0");
        assert_eq!(format_float(-0.0), "0.0");
    }

    #[test]
    fn expands_exponents() {
        assert_eq!(format_float(1e21), "1000000000000000000000.0");
        assert_eq!(format_float(1.5e-7), "0.00000015");
        assert_eq!(format_float(-2.5e20), "-250000000000000000000.0");
    }

    #[test]
    fn non_finite_values_render_without_panicking() {
        assert_eq!(format_float(f64::NAN), "NaN");
        assert_eq!(format_float(f64::INFINITY), "inf");
        assert_eq!(format_float(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn output_parses_back_exactly() {
        for v in [0.1, 123.456, 1e300, 5e-324, 9007199254740993.0] {
            let s = format_float(v);
            assert!(!s.contains('e'), "{s}");
            assert_eq!(s.parse::<f64>().unwrap(), v);
        }
    }
}
