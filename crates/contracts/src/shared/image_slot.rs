use serde::{Deserialize, Serialize};

use crate::domain::common::{Hotspot, ImageRef};

/// Верхняя граница запрашиваемого размера растра
pub const MAX_IMAGE_DIMENSION: u32 = 4000;

/// Слоты раскладки, для которых запрашиваются изображения конкретного размера
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageSlot {
    /// Карточка проекта в списке
    Thumbnail,
    /// Главное изображение страницы проекта
    Hero,
    /// Плитка галереи
    GalleryTile,
    /// Карточка витрины на главной
    ShowcaseCard,
}

impl ImageSlot {
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            ImageSlot::Thumbnail => (800, 600),
            ImageSlot::Hero => (1200, 600),
            ImageSlot::GalleryTile => (800, 400),
            ImageSlot::ShowcaseCard => (600, 400),
        }
    }
}

pub fn clamp_dimension(value: u32) -> u32 {
    value.clamp(1, MAX_IMAGE_DIMENSION)
}

/// URL изображения через backend (`/api/images/...`), который перенаправит на
/// конечный адрес хранилища. Точка фокуса уходит в `fx`/`fy`.
pub fn image_src(image: &ImageRef, slot: ImageSlot) -> String {
    let (w, h) = slot.dimensions();
    let mut src = format!(
        "/api/images/{}?w={}&h={}",
        urlencoding::encode(&image.asset_ref),
        w,
        h
    );
    if let Some(Hotspot { x, y }) = image.hotspot {
        src.push_str(&format!("&fx={:.3}&fy={:.3}", x, y));
    }
    src
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_dimensions() {
        assert_eq!(ImageSlot::Thumbnail.dimensions(), (800, 600));
        assert_eq!(ImageSlot::Hero.dimensions(), (1200, 600));
        assert_eq!(ImageSlot::GalleryTile.dimensions(), (800, 400));
    }

    #[test]
    fn test_image_src() {
        let mut image = ImageRef::new("image-abc-2000x1000-jpg");
        assert_eq!(
            image_src(&image, ImageSlot::Hero),
            "/api/images/image-abc-2000x1000-jpg?w=1200&h=600"
        );
        image.hotspot = Some(Hotspot { x: 0.3, y: 0.75 });
        assert_eq!(
            image_src(&image, ImageSlot::Thumbnail),
            "/api/images/image-abc-2000x1000-jpg?w=800&h=600&fx=0.300&fy=0.750"
        );
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp_dimension(0), 1);
        assert_eq!(clamp_dimension(800), 800);
        assert_eq!(clamp_dimension(100_000), MAX_IMAGE_DIMENSION);
    }
}
