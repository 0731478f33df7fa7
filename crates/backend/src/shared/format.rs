use contracts::system::settings::Currency;

/// Integer with dot thousand separators
///
/// ```ignore
/// assert_eq!(format_number(1234567), "1.234.567");
/// ```
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Amount with two decimals, e.g. `$1.234,50`
pub fn format_money(amount: f64, currency: Currency) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{}{}{},{:02}",
        sign,
        currency.symbol(),
        format_number((cents / 100) as usize),
        cents % 100
    )
}

/// Percentage with one decimal, "—" when undefined
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}%", v),
        None => "—".to_string(),
    }
}
