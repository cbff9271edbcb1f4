// en-US number formatting for prices and areas.

/// Groups the integer part with commas and keeps at most three decimals,
/// trailing zeros dropped: `1234567.5` -> `1,234,567.5`.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "N/A".to_string();
    }

    let text = format!("{:.3}", value.abs());
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut out = group_thousands(whole);
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    if value < 0.0 && out.chars().any(|c| c != '0' && c != '.' && c != ',') {
        out.insert(0, '-');
    }
    out
}

/// Whole dollars: `725000.4` -> `$725,000`.
pub fn format_currency(value: f64) -> String {
    let formatted = format_number(value.abs().round());
    if value < 0.0 && value.round() != 0.0 {
        format!("-${formatted}")
    } else {
        format!("${formatted}")
    }
}

/// `$` plus the grouped number, or `N/A` when the feed left the price out.
pub fn format_price(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("${}", format_number(v)),
        None => "N/A".to_string(),
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
