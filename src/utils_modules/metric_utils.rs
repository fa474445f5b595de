#[doc = r#"
    Click-through rate as a percentage.

    Zero impressions give 0 instead of NaN or infinity. `clicks > impressions`
    is passed through, so values above 100 are possible for dirty data.
"#]
pub fn calc_ctr_percentage(clicks: i64, impressions: i64) -> f64 {
    if impressions == 0 {
        0.0
    } else {
        100.0 * clicks as f64 / impressions as f64
    }
}

#[doc = "Thousands separators for axis labels: 1234567 -> 1,234,567"]
pub fn format_thousands(value: i64) -> String {
    let digits: String = value.unsigned_abs().to_string();
    let mut result: String = String::new();

    for (count, c) in digits.chars().rev().enumerate() {
        if count > 0 && count % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    if value < 0 {
        result.push('-');
    }

    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_impressions_give_zero() {
        assert_eq!(calc_ctr_percentage(150, 0), 0.0);
        assert_eq!(calc_ctr_percentage(0, 0), 0.0);
    }

    #[test]
    fn ctr_is_a_percentage_and_not_clamped() {
        assert!((calc_ctr_percentage(100, 1000) - 10.0).abs() < 1e-9);
        assert!((calc_ctr_percentage(30, 20) - 150.0).abs() < 1e-9);
    }

    #[test]
    fn thousands_separator() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
        assert_eq!(format_thousands(-4500), "-4,500");
    }
}
