/// Format an integer with comma thousands separators
///
/// # Examples
/// ```
/// use backend::shared::format::format_number;
/// assert_eq!(format_number(1234567), "1,234,567");
/// assert_eq!(format_number(42), "42");
/// assert_eq!(format_number(0), "0");
/// ```
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// `$1,234.56`; negative amounts as `-$1,234.56`.
pub fn format_money(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, format_number(cents / 100), cents % 100)
}

/// Signed change for KPI captions: `+5`, `-2`, `+1,204.50`.
pub fn format_delta(delta: f64, money: bool) -> String {
    let sign = if delta < 0.0 { "-" } else { "+" };
    if money {
        let cents = (delta.abs() * 100.0).round() as u64;
        format!("{}{}.{:02}", sign, format_number(cents / 100), cents % 100)
    } else {
        format!("{}{}", sign, format_number(delta.abs().round() as u64))
    }
}
