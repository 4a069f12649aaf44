//! Scroll-driven transforms for the showcase.
//!
//! Progress `p` runs 0 → 1 while the section scrolls from its top edge at the
//! viewport top to its bottom edge there. Horizontal drift is linear over the
//! whole range; tilt, fade and vertical offset settle over the first 20%.

/// Cards per row
pub const ROW_SIZE: usize = 5;
pub const ROWS: usize = 3;
pub const SHOWCASE_LIMIT: usize = ROW_SIZE * ROWS;

/// Below this width the softer mobile profile applies
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

const SETTLE_AT: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxProfile {
    pub drift_px: f64,
    pub rotate_x_deg: f64,
    pub rotate_z_deg: f64,
    pub translate_y_px: (f64, f64),
}

impl ParallaxProfile {
    pub const DESKTOP: Self = Self {
        drift_px: 1000.0,
        rotate_x_deg: 15.0,
        rotate_z_deg: 20.0,
        translate_y_px: (-500.0, 400.0),
    };

    pub const MOBILE: Self = Self {
        drift_px: 600.0,
        rotate_x_deg: 10.0,
        rotate_z_deg: 15.0,
        translate_y_px: (-300.0, 300.0),
    };

    pub fn for_width(viewport_width: f64) -> Self {
        if viewport_width < MOBILE_BREAKPOINT_PX {
            Self::MOBILE
        } else {
            Self::DESKTOP
        }
    }

    pub fn at(&self, progress: f64) -> ParallaxTransform {
        let p = progress.clamp(0.0, 1.0);
        let settle = (p / SETTLE_AT).min(1.0);
        let (y_from, y_to) = self.translate_y_px;
        ParallaxTransform {
            translate_x: self.drift_px * p,
            rotate_x: lerp(self.rotate_x_deg, 0.0, settle),
            rotate_z: lerp(self.rotate_z_deg, 0.0, settle),
            translate_y: lerp(y_from, y_to, settle),
            opacity: lerp(0.2, 1.0, settle),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxTransform {
    pub translate_x: f64,
    pub rotate_x: f64,
    pub rotate_z: f64,
    pub translate_y: f64,
    pub opacity: f64,
}

impl ParallaxTransform {
    /// Style for the tilted container holding all rows
    pub fn container_style(&self) -> String {
        format!(
            "transform: translateY({:.1}px) rotateX({:.2}deg) rotateZ({:.2}deg); opacity: {:.3};",
            self.translate_y, self.rotate_x, self.rotate_z, self.opacity
        )
    }

    /// Style for one row; the middle row drifts the other way
    pub fn row_style(&self, reverse: bool) -> String {
        let x = if reverse { -self.translate_x } else { self.translate_x };
        format!("transform: translateX({:.1}px);", x)
    }
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Section progress from its bounding rect (viewport coordinates)
pub fn scroll_progress(section_top: f64, section_height: f64) -> f64 {
    if section_height <= 0.0 {
        return 0.0;
    }
    (-section_top / section_height).clamp(0.0, 1.0)
}

/// Up to three rows of [`ROW_SIZE`]; extra items are dropped
pub fn split_rows<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    items
        .chunks(ROW_SIZE)
        .take(ROWS)
        .map(|chunk| chunk.to_vec())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_transform_at_start_and_settled() {
        let start = ParallaxProfile::DESKTOP.at(0.0);
        assert!(close(start.translate_x, 0.0));
        assert!(close(start.rotate_x, 15.0));
        assert!(close(start.rotate_z, 20.0));
        assert!(close(start.translate_y, -500.0));
        assert!(close(start.opacity, 0.2));

        let settled = ParallaxProfile::DESKTOP.at(0.5);
        assert!(close(settled.translate_x, 500.0));
        assert!(close(settled.rotate_x, 0.0));
        assert!(close(settled.translate_y, 400.0));
        assert!(close(settled.opacity, 1.0));
    }

    #[test]
    fn test_transform_midway_through_settle() {
        let t = ParallaxProfile::DESKTOP.at(0.1);
        assert!(close(t.rotate_x, 7.5));
        assert!(close(t.opacity, 0.6));
        assert!(close(t.translate_y, -50.0));
    }

    #[test]
    fn test_mobile_profile() {
        assert_eq!(ParallaxProfile::for_width(500.0), ParallaxProfile::MOBILE);
        assert_eq!(ParallaxProfile::for_width(1280.0), ParallaxProfile::DESKTOP);

        let end = ParallaxProfile::MOBILE.at(1.0);
        assert!(close(end.translate_x, 600.0));
        assert!(close(end.rotate_z, 0.0));
        assert!(close(end.translate_y, 300.0));
    }

    #[test]
    fn test_progress_is_clamped() {
        assert_eq!(scroll_progress(100.0, 1000.0), 0.0);
        assert!(close(scroll_progress(-250.0, 1000.0), 0.25));
        assert_eq!(scroll_progress(-5000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(0.0, 0.0), 0.0);
        assert!(close(ParallaxProfile::DESKTOP.at(3.0).translate_x, 1000.0));
    }

    #[test]
    fn test_split_rows() {
        let items: Vec<u32> = (0..17).collect();
        let rows = split_rows(&items);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2], vec![10, 11, 12, 13, 14]);

        assert_eq!(split_rows(&items[..7]), vec![(0..5).collect::<Vec<_>>(), vec![5, 6]]);
        assert!(split_rows::<u32>(&[]).is_empty());
    }

    #[test]
    fn test_row_style_reverses() {
        let t = ParallaxProfile::DESKTOP.at(0.5);
        assert_eq!(t.row_style(false), "transform: translateX(500.0px);");
        assert_eq!(t.row_style(true), "transform: translateX(-500.0px);");
    }
}
