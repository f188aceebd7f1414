use crate::value::Number;

/// Format a finite f64 as plain decimal text.
/// Requirements:
/// - no exponent notation (the decoder does not read exponents)
/// - always a decimal point, so the value decodes back as a float
/// - shortest digits that round-trip (via ryu)
/// - the sign of -0.0 is kept
///
/// Returns None for NaN and the infinities.
pub(crate) fn format_float(value: f64) -> Option<String> {
    if !value.is_finite() {
        return None;
    }

    let mut buf = ryu::Buffer::new();
    let raw = buf.format_finite(value.abs());
    let body = match raw.find(['e', 'E']) {
        Some(exp_index) => {
            let mantissa = &raw[..exp_index];
            let exp: i32 = raw[exp_index + 1..].parse().ok()?;
            expand_exponent(mantissa, exp)
        }
        None => String::from(raw),
    };

    let mut out = String::with_capacity(body.len() + 3);
    if value.is_sign_negative() {
        out.push('-');
    }
    out.push_str(&body);
    if !body.contains('.') {
        out.push_str(".0");
    }
    Some(out)
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
        for _ in 0..(target as usize - digits.len()) {
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

/// Convert a scanned integer literal (optional '-', ASCII digits).
/// Non-negative literals that overflow i64 fall back to u64.
pub(crate) fn parse_integer(token: &str) -> Option<Number> {
    if let Ok(i) = token.parse::<i64>() {
        return Some(Number::Int(i));
    }
    if !token.starts_with('-') {
        if let Ok(u) = token.parse::<u64>() {
            return Some(Number::UInt(u));
        }
    }
    None
}

/// Convert a scanned float literal. Accepts a bare trailing point ("3.").
pub(crate) fn parse_float(token: &str) -> Option<Number> {
    token.parse::<f64>().ok().map(Number::Float)
}
