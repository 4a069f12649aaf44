use serde::{Deserialize, Serialize};

/// Ссылка на изображение в хранилище контента
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRef {
    /// Непрозрачный идентификатор ассета, например `image-3f1a...-2000x1333-jpg`
    pub asset_ref: String,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub hotspot: Option<Hotspot>,
}

impl ImageRef {
    pub fn new(asset_ref: impl Into<String>) -> Self {
        Self {
            asset_ref: asset_ref.into(),
            alt: None,
            hotspot: None,
        }
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    /// Alt-текст или запасной вариант
    pub fn alt_or(&self, fallback: &str) -> String {
        match self.alt.as_deref().map(str::trim) {
            Some(alt) if !alt.is_empty() => alt.to_string(),
            _ => fallback.to_string(),
        }
    }
}

/// Точка фокуса изображения (доли 0..1)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    pub x: f64,
    pub y: f64,
}

impl Hotspot {
    /// Нужны обе координаты; значения вне 0..1 прижимаются к границам
    pub fn from_parts(x: Option<f64>, y: Option<f64>) -> Option<Self> {
        match (x, y) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => Some(Self {
                x: x.clamp(0.0, 1.0),
                y: y.clamp(0.0, 1.0),
            }),
            _ => None,
        }
    }
}

/// Разобранный идентификатор ассета изображения.
///
/// Формат: `image-<hash>-<width>x<height>-<ext>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    pub hash: String,
    pub width: u32,
    pub height: u32,
    pub extension: String,
}

impl ImageAsset {
    pub fn parse(asset_ref: &str) -> Option<Self> {
        let rest = asset_ref.strip_prefix("image-")?;
        let mut parts = rest.rsplitn(3, '-');
        let extension = parts.next()?;
        let dimensions = parts.next()?;
        let hash = parts.next()?;

        if hash.is_empty() || !hash.chars().all(|c| c.is_ascii_alphanumeric()) {
            return None;
        }
        if extension.is_empty() || !extension.chars().all(|c| c.is_ascii_alphanumeric()) {
            return None;
        }

        let (w, h) = dimensions.split_once('x')?;
        let width = w.parse::<u32>().ok()?;
        let height = h.parse::<u32>().ok()?;
        if width == 0 || height == 0 {
            return None;
        }

        Some(Self {
            hash: hash.to_string(),
            width,
            height,
            extension: extension.to_string(),
        })
    }

    /// Имя файла вида `<hash>-<w>x<h>.<ext>`
    pub fn file_name(&self) -> String {
        format!(
            "{}-{}x{}.{}",
            self.hash, self.width, self.height, self.extension
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_asset_ref() {
        let asset = ImageAsset::parse("image-Tb9Ew8CXIwaY6R1kjMvI0uRR-2000x3000-jpg").unwrap();
        assert_eq!(asset.hash, "Tb9Ew8CXIwaY6R1kjMvI0uRR");
        assert_eq!(asset.width, 2000);
        assert_eq!(asset.height, 3000);
        assert_eq!(asset.extension, "jpg");
        assert_eq!(asset.file_name(), "Tb9Ew8CXIwaY6R1kjMvI0uRR-2000x3000.jpg");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(ImageAsset::parse("file-abc-10x10-pdf").is_none());
        assert!(ImageAsset::parse("image-abc-10-jpg").is_none());
        assert!(ImageAsset::parse("image-abc-0x10-jpg").is_none());
        assert!(ImageAsset::parse("image-../etc-10x10-jpg").is_none());
        assert!(ImageAsset::parse("image--10x10-jpg").is_none());
    }

    #[test]
    fn test_hotspot_from_parts() {
        assert_eq!(
            Hotspot::from_parts(Some(0.25), Some(1.5)),
            Some(Hotspot { x: 0.25, y: 1.0 })
        );
        assert_eq!(Hotspot::from_parts(Some(0.25), None), None);
        assert_eq!(Hotspot::from_parts(Some(f64::NAN), Some(0.5)), None);
    }

    #[test]
    fn test_alt_fallback() {
        let image = ImageRef::new("image-a-1x1-png");
        assert_eq!(image.alt_or("Garden Retreat"), "Garden Retreat");
        let image = image.with_alt("  ");
        assert_eq!(image.alt_or("Garden Retreat"), "Garden Retreat");
        let image = ImageRef::new("image-a-1x1-png").with_alt("Pergola at dusk");
        assert_eq!(image.alt_or("x"), "Pergola at dusk");
    }
}
