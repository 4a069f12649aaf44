/// Число с разделителями тысяч (точками): `1234567` → `1.234.567`
pub fn format_number(n: usize) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

/// Первые `max_chars` символов строки для логов, с пометкой об обрезке
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}... ({} bytes total)", &text[..cut], text.len()),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1.000");
        assert_eq!(format_number(1234567), "1.234.567");
        assert_eq!(format_number(1234567890), "1.234.567.890");
    }

    #[test]
    fn test_preview_short_text_unchanged() {
        assert_eq!(preview("not found", 500), "not found");
    }

    #[test]
    fn test_preview_cuts_on_char_boundary() {
        let text = "ошибка запроса";
        assert_eq!(preview(text, 6), format!("ошибка... ({} bytes total)", text.len()));
    }
}
