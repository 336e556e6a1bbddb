//! Display helpers for money, percentages and dates.

use chrono::{Datelike, NaiveDate};

pub const MONTH_NAMES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

pub const MONTH_SHORT: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic",
];

pub const WEEKDAY_SHORT: [&str; 7] = ["Lun", "Mar", "Mié", "Jue", "Vie", "Sáb", "Dom"];

/// Currencies offered in preferences.
pub const CURRENCIES: [(&str, &str); 5] = [
    ("EUR", "€"),
    ("USD", "$"),
    ("MXN", "$"),
    ("COP", "$"),
    ("GBP", "£"),
];

pub fn currency_symbol_for(code: &str) -> &'static str {
    CURRENCIES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, symbol)| *symbol)
        .unwrap_or("€")
}

fn format_with_separators(value: u64) -> String {
    let digits = value.to_string().chars().rev().collect::<Vec<char>>();
    let mut out = Vec::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('.');
        }
        out.push(*ch);
    }
    out.into_iter().rev().collect()
}

/// `1234.5` with `€` becomes `1.234,50 €`.
pub fn format_money(amount: f64, symbol: &str) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{}{},{:02} {}",
        sign,
        format_with_separators(cents / 100),
        cents % 100,
        symbol
    )
}

/// Money prefixed with `+` or `-` depending on the flow.
pub fn format_signed(amount: f64, is_income: bool, symbol: &str) -> String {
    let prefix = if is_income { "+" } else { "-" };
    format!("{} {}", prefix, format_money(amount.abs(), symbol))
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Change with an explicit sign, e.g. `+12.5%`.
pub fn format_change(value: f64) -> String {
    if value > 0.0 {
        format!("+{:.1}%", value)
    } else {
        format!("{:.1}%", value)
    }
}

pub fn month_title(year: i32, month: u32) -> String {
    let name = MONTH_NAMES
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("");
    format!("{name} {year}")
}

/// `15/03/2024`.
pub fn format_date(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{}", date.day(), date.month(), date.year())
}

/// Date column for raw server strings; falls back to the raw text.
pub fn format_raw_date(raw: &str) -> String {
    crate::models::parse_date(raw)
        .map(format_date)
        .unwrap_or_else(|| raw.to_string())
}

/// `2024-03-15T10:20:00Z` becomes `15/03/2024 10:20`.
pub fn format_timestamp(raw: &str) -> String {
    let date = format_raw_date(raw);
    match raw.get(11..16) {
        Some(time) if time.as_bytes().get(2) == Some(&b':') => format!("{date} {time}"),
        _ => date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_uses_spanish_separators() {
        assert_eq!(format_money(1234.5, "€"), "1.234,50 €");
        assert_eq!(format_money(0.0, "€"), "0,00 €");
        assert_eq!(format_money(-1_000_000.0, "$"), "-1.000.000,00 $");
    }

    #[test]
    fn tiny_negative_rounds_to_unsigned_zero() {
        assert_eq!(format_money(-0.001, "€"), "0,00 €");
    }

    #[test]
    fn signed_amounts() {
        assert_eq!(format_signed(40.0, false, "€"), "- 40,00 €");
        assert_eq!(format_signed(100.0, true, "€"), "+ 100,00 €");
    }

    #[test]
    fn change_has_explicit_sign() {
        assert_eq!(format_change(12.345), "+12.3%");
        assert_eq!(format_change(-50.0), "-50.0%");
        assert_eq!(format_change(0.0), "0.0%");
    }

    #[test]
    fn unknown_currency_defaults_to_euro() {
        assert_eq!(currency_symbol_for("GBP"), "£");
        assert_eq!(currency_symbol_for("XYZ"), "€");
    }

    #[test]
    fn dates() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_date(date), "05/03/2024");
        assert_eq!(format_raw_date("2024-03-05T00:00:00Z"), "05/03/2024");
        assert_eq!(format_raw_date("ayer"), "ayer");
        assert_eq!(format_timestamp("2024-03-05T10:20:00Z"), "05/03/2024 10:20");
        assert_eq!(format_timestamp("2024-03-05"), "05/03/2024");
        assert_eq!(month_title(2024, 1), "Enero 2024");
    }
}
