/// Render an expected value: rounded to 0.01, trailing zeros trimmed,
/// non-finite values shown as "0".
pub fn format_expected(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        return "0".to_string();
    }

    let fixed = format!("{:.2}", rounded);
    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
