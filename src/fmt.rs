use num_format::{Locale, ToFormattedString};

/// Render a stored digit string with Indonesian thousands grouping:
/// `15000000` → `15.000.000`. Display only; storage keeps plain digits.
///
/// Stored values have no length limit, so anything past `u128` is grouped
/// on the string itself with the same locale separator.
pub fn group_digits(value: &str) -> String {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return value.to_string();
    }
    let trimmed = value.trim_start_matches('0');
    if trimmed.is_empty() {
        return "0".to_string();
    }
    match trimmed.parse::<u128>() {
        Ok(n) => n.to_formatted_string(&Locale::id),
        Err(_) => group_digit_string(trimmed, Locale::id.separator()),
    }
}

fn group_digit_string(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(c);
    }
    out
}

/// Format a rupiah amount rounded to whole units: `Rp 1.250.000`, `-Rp 500`.
pub fn rupiah(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    if !rounded.is_finite() {
        return format!("{sign}Rp \u{221e}");
    }
    // `{:.0}` prints every integer digit of the float, however large
    let digits = format!("{:.0}", rounded.abs());
    format!("{sign}Rp {}", group_digits(&digits))
}

/// Signed ledger amount: income gets a `+`, expenses show the absolute
/// value (colour conveys the sign).
pub fn signed_rupiah(amount: i64) -> String {
    let grouped = amount.unsigned_abs().to_formatted_string(&Locale::id);
    if amount > 0 {
        format!("+Rp {grouped}")
    } else {
        format!("Rp {grouped}")
    }
}

pub fn percent(value: f64) -> String {
    format!("{:.1}%", normalize_zero(value))
}

/// Percentage with an explicit `+` for non-negative values.
pub fn signed_percent(value: f64) -> String {
    let value = normalize_zero(value);
    if value >= 0.0 {
        format!("+{value:.1}%")
    } else {
        format!("{value:.1}%")
    }
}

/// Human-readable byte size for file banners.
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}
