//! Number formatting for costing figures.

/// Groups the integer part with commas and keeps at most `decimals`
/// fractional digits, dropping trailing zeros.
///
/// # Examples
///
/// ```
/// # use frontend::shared::number_format::format_number;
/// let formatted = format_number(1234.5, 2);
/// assert_eq!(formatted, "1,234.5");
/// ```
pub fn format_number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let formatted = format!("{:.*}", decimals, value);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, d.trim_end_matches('0')),
        None => (formatted.as_str(), ""),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    // "-0" after rounding
    let sign = if grouped.chars().all(|c| c == '0' || c == ',') && decimal_part.is_empty() {
        ""
    } else {
        sign
    };

    if decimal_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, decimal_part)
    }
}

/// Currency amount as shown across the dashboard: `Rs. 1,234.5`.
pub fn format_money(value: f64) -> String {
    format!("Rs. {}", format_number(value, 2))
}

/// Percentage with one decimal: `29.9%`.
pub fn format_percent(value: f64) -> String {
    if !value.is_finite() {
        return "0.0%".to_string();
    }
    format!("{:.1}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234.5, 2), "1,234.5");
        assert_eq!(format_number(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_number(350.0, 2), "350");
        assert_eq!(format_number(999.999, 2), "1,000");
        assert_eq!(format_number(-1234.0, 2), "-1,234");
        assert_eq!(format_number(-0.001, 2), "0");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(350.5), "Rs. 350.5");
        assert_eq!(format_money(0.0), "Rs. 0");
        assert_eq!(format_money(f64::NAN), "Rs. 0");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(29.9), "29.9%");
        assert_eq!(format_percent(-12.345), "-12.3%");
        assert_eq!(format_percent(f64::INFINITY), "0.0%");
    }
}
