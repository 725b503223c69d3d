//! Number formatting for amounts (Indian digit grouping) and weights.

/// Group the integer part Indian style: `12,34,567`.
fn group_indian(integer: &str) -> String {
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };
    if digits.len() <= 3 {
        return format!("{}{}", sign, digits);
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{}{},{}", sign, groups.join(","), last_three)
}

/// `1234567.891` -> `12,34,567.89`
pub fn format_amount(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    match formatted.split_once('.') {
        Some((integer, fraction)) => format!("{}.{}", group_indian(integer), fraction),
        None => group_indian(&formatted),
    }
}

/// Rupee amount: `₹12,34,567.89`, sign before the symbol.
pub fn format_inr(value: f64) -> String {
    if value < 0.0 {
        format!("-₹{}", format_amount(-value))
    } else {
        format!("₹{}", format_amount(value))
    }
}

/// Weight in grams with three decimals.
pub fn format_weight(value: f64) -> String {
    format!("{:.3}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(999.5), "999.50");
        assert_eq!(format_amount(1234.5), "1,234.50");
        assert_eq!(format_amount(1234567.891), "12,34,567.89");
        assert_eq!(format_amount(-123456.0), "-1,23,456.00");
    }

    #[test]
    fn test_format_inr() {
        assert_eq!(format_inr(41406.0), "₹41,406.00");
        assert_eq!(format_inr(-50.0), "-₹50.00");
    }

    #[test]
    fn test_format_weight() {
        assert_eq!(format_weight(8.0), "8.000");
        assert_eq!(format_weight(10.5349), "10.535");
    }
}
