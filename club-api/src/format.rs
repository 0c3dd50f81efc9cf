//! pt-BR display helpers shared by the club screens and the media gallery

use chrono::{Datelike, NaiveDate, NaiveDateTime};

const MONTHS_SHORT: [&str; 12] = [
    "jan.", "fev.", "mar.", "abr.", "mai.", "jun.", "jul.", "ago.", "set.", "out.", "nov.", "dez.",
];

/// Parses `YYYY-MM-DD` or an ISO timestamp; the date part is all that matters
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
        .or_else(|| {
            chrono::DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

/// "15 de mar. de 2025"; unparseable input is returned unchanged
pub fn format_date_short(value: &str) -> String {
    match parse_date(value) {
        Some(date) => format!(
            "{} de {} de {}",
            date.day(),
            MONTHS_SHORT[date.month0() as usize],
            date.year()
        ),
        None => value.to_string(),
    }
}

/// "15/03/2025"; unparseable input is returned unchanged
pub fn format_date_numeric(value: &str) -> String {
    match parse_date(value) {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => value.to_string(),
    }
}

/// Translates the weather labels stored by the backend
pub fn translate_weather(weather: &str) -> String {
    match weather {
        "Sunny" => "Ensolarado",
        "Cloudy" => "Nublado",
        "Rainy" => "Chuvoso",
        "Windy" => "Ventoso",
        other => other,
    }
    .to_string()
}

/// "R$ 120,00", or "Consultar" when there is no fixed price
pub fn format_price_brl(price: f64, rental_duration: Option<&str>) -> String {
    if price == 0.0 || rental_duration == Some("Consultar") {
        return "Consultar".to_string();
    }

    let cents = (price * 100.0).round() as i64;
    let reais = cents / 100;
    let rest = (cents % 100).abs();

    let digits = reais.abs().to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if cents < 0 { "-" } else { "" };
    format!("{}R$ {},{:02}", sign, grouped, rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_short() {
        assert_eq!(format_date_short("2025-03-15"), "15 de mar. de 2025");
        assert_eq!(format_date_short("2024-12-01T10:30:00"), "1 de dez. de 2024");
        assert_eq!(format_date_short("amanhã"), "amanhã");
    }

    #[test]
    fn test_format_date_numeric() {
        assert_eq!(format_date_numeric("2025-01-05"), "05/01/2025");
    }

    #[test]
    fn test_translate_weather() {
        assert_eq!(translate_weather("Rainy"), "Chuvoso");
        assert_eq!(translate_weather("Foggy"), "Foggy");
    }

    #[test]
    fn test_format_price_brl() {
        assert_eq!(format_price_brl(120.0, Some("30 min")), "R$ 120,00");
        assert_eq!(format_price_brl(1234.5, None), "R$ 1.234,50");
        assert_eq!(format_price_brl(0.0, Some("30 min")), "Consultar");
        assert_eq!(format_price_brl(99.9, Some("Consultar")), "Consultar");
    }
}
