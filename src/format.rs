//! Number formatting shared by every renderer.

/// Round to the nearest integer and group thousands with commas.
///
/// `1234567.8` → `"1,234,568"`, `-1500.0` → `"-1,500"`.
pub fn format_number(value: f64) -> String {
    if let Some(s) = non_finite(value) {
        return s.to_string();
    }

    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a value already expressed in percentage points: `5.234` → `"5.23%"`.
pub fn format_percent(value: f64) -> String {
    match non_finite(value) {
        Some(s) => format!("{s}%"),
        None => {
            let s = format!("{value:.2}");
            // Avoid "-0.00%" for tiny negative values
            if s == "-0.00" {
                "0.00%".to_string()
            } else {
                format!("{s}%")
            }
        }
    }
}

/// USD amount: `"$"` followed by [`format_number`].
pub fn format_usd(value: f64) -> String {
    format!("${}", format_number(value))
}

fn non_finite(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("NaN")
    } else if value == f64::INFINITY {
        Some("∞")
    } else if value == f64::NEG_INFINITY {
        Some("-∞")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_groups_thousands() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(1000.0), "1,000");
        assert_eq!(format_number(1234567.8), "1,234,568");
        assert_eq!(format_number(100_000_000.0), "100,000,000");
        assert_eq!(format_number(-1500.0), "-1,500");
        assert_eq!(format_number(-0.2), "0");
    }

    #[test]
    fn test_format_number_non_finite() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "∞");
        assert_eq!(format_number(f64::NEG_INFINITY), "-∞");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(5.234), "5.23%");
        assert_eq!(format_percent(0.05), "0.05%");
        assert_eq!(format_percent(120.0), "120.00%");
        assert_eq!(format_percent(-0.001), "0.00%");
        assert_eq!(format_percent(f64::NAN), "NaN%");
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(2_500_000.4), "$2,500,000");
        assert_eq!(format_usd(12.0), "$12");
    }
}
