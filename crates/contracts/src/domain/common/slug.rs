use serde::{Deserialize, Serialize};
use std::fmt;

/// Максимальная длина slug (как в схеме CMS: `maxLength: 96`)
pub const SLUG_MAX_LEN: usize = 96;

/// Slug подкатегории или проекта в том виде, в каком он хранится в CMS.
///
/// Редакторы вводят slug вручную, поэтому допускается любая непустая строка
/// без `/` и управляющих символов, кроме `.` и `..`. Каноническая форма
/// ([`is_canonical_slug`]) нужна только при генерации slug из заголовка.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    /// Разобрать сегмент маршрута. Возвращает `None` для невалидного значения.
    pub fn parse(value: &str) -> Option<Self> {
        if is_valid_slug(value) {
            Some(Self(value.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Slug {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if is_valid_slug(&value) {
            Ok(Self(value))
        } else {
            Err(format!("Invalid slug: '{}'", value))
        }
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}

/// Может ли строка быть slug записи или сегментом маршрута
pub fn is_valid_slug(value: &str) -> bool {
    !value.is_empty()
        && value != "."
        && value != ".."
        && !value.chars().any(|c| c == '/' || c == '\\' || c.is_control())
}

/// Строчные латинские буквы, цифры и одиночные дефисы, 1..=96 символов
pub fn is_canonical_slug(value: &str) -> bool {
    if value.is_empty() || value.len() > SLUG_MAX_LEN {
        return false;
    }
    if value.starts_with('-') || value.ends_with('-') || value.contains("--") {
        return false;
    }
    value
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Получить slug из заголовка: "Garden Retreat!" -> "garden-retreat"
pub fn slugify(title: &str) -> Option<Slug> {
    let mut out = String::with_capacity(title.len());
    let mut pending_dash = false;
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    if out.len() > SLUG_MAX_LEN {
        out.truncate(SLUG_MAX_LEN);
        while out.ends_with('-') {
            out.pop();
        }
    }
    if is_canonical_slug(&out) {
        Slug::parse(&out)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_slugs() {
        assert!(Slug::parse("pergolas").is_some());
        assert!(Slug::parse("garden-retreat").is_some());
        assert!(Slug::parse("villa-2024").is_some());
    }

    #[test]
    fn test_hand_typed_cms_slugs_are_kept() {
        for value in ["garden_retreat", "Pergola-2", "garden--retreat", "-pergolas"] {
            assert_eq!(Slug::parse(value).map(|s| s.as_str().to_string()), Some(value.to_string()));
        }
    }

    #[test]
    fn test_malformed_segments_rejected() {
        assert!(Slug::parse("").is_none());
        assert!(Slug::parse(".").is_none());
        assert!(Slug::parse("..").is_none());
        assert!(Slug::parse("../etc").is_none());
        assert!(Slug::parse("a\\b").is_none());
        assert!(Slug::parse("line\nbreak").is_none());
    }

    #[test]
    fn test_canonical_slugs() {
        assert!(is_canonical_slug("garden-retreat"));
        assert!(!is_canonical_slug("Pergolas"));
        assert!(!is_canonical_slug("-pergolas"));
        assert!(!is_canonical_slug("pergolas-"));
        assert!(!is_canonical_slug("garden--retreat"));
        assert!(!is_canonical_slug("garden_retreat"));
        assert!(!is_canonical_slug(&"a".repeat(SLUG_MAX_LEN + 1)));
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Garden Retreat").unwrap().as_str(), "garden-retreat");
        assert_eq!(
            slugify("  Modern Pergola -- Paradise! ").unwrap().as_str(),
            "modern-pergola-paradise"
        );
        assert_eq!(slugify("Pool Areas 2").unwrap().as_str(), "pool-areas-2");
        assert!(slugify("!!!").is_none());
    }

    #[test]
    fn test_serde_rejects_invalid() {
        let ok: Result<Slug, _> = serde_json::from_str("\"pergolas\"");
        assert!(ok.is_ok());
        let bad: Result<Slug, _> = serde_json::from_str("\"a/b\"");
        assert!(bad.is_err());
    }
}
