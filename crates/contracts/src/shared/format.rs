//! Утилиты форматирования чисел для витрины и логов

use serde_json::Number;

/// Вставляет разделитель каждые 3 цифры с конца целой части.
/// Знак минус и дробная часть сохраняются.
fn group_digits(formatted: &str, separator: char) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (integer_part, decimal_part) = match unsigned.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (unsigned, None),
    };

    let mut result = String::new();
    for (i, ch) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(separator);
        }
        result.push(ch);
    }
    let grouped: String = result.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Форматирует число с разделителями триад (точками)
///
/// # Примеры
/// ```
/// use contracts::shared::format::format_number;
/// assert_eq!(format_number(1234567), "1.234.567");
/// assert_eq!(format_number(42), "42");
/// ```
pub fn format_number(n: usize) -> String {
    group_digits(&n.to_string(), '.')
}

/// Форматирует JSON-число как en-US `toLocaleString`: запятые между триадами,
/// не более 3 знаков после точки, без хвостовых нулей.
///
/// ```
/// use contracts::shared::format::format_grouped;
/// let n = serde_json::Number::from(10000);
/// assert_eq!(format_grouped(&n), "10,000");
/// ```
pub fn format_grouped(value: &Number) -> String {
    if let Some(i) = value.as_i64() {
        return group_digits(&i.to_string(), ',');
    }
    if let Some(u) = value.as_u64() {
        return group_digits(&u.to_string(), ',');
    }

    let f = value.as_f64().unwrap_or_default();
    let mut formatted = format!("{:.3}", f);
    if formatted.contains('.') {
        let trimmed_len = formatted.trim_end_matches('0').trim_end_matches('.').len();
        formatted.truncate(trimmed_len);
    }
    if formatted == "-0" {
        formatted = "0".to_string();
    }
    group_digits(&formatted, ',')
}
