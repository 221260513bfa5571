use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Rect in texture pixel space
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Rect at (0, 0)
    pub const fn from_size(size: Vec2) -> Self {
        Self::new(Vec2::ZERO, size)
    }

    pub fn min(&self) -> Vec2 {
        self.origin
    }

    pub fn max(&self) -> Vec2 {
        self.origin + self.size
    }

    pub fn contains_pos(&self, pos: Vec2) -> bool {
        let (min, max) = (self.min(), self.max());
        pos.x >= min.x && pos.y >= min.y && pos.x <= max.x && pos.y <= max.y
    }

    /// Return true if the rect size fits in `size` on both axes
    pub fn fits_within(&self, size: Vec2) -> bool {
        self.size.x <= size.x && self.size.y <= size.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_bounds() {
        let rect = Rect::new(Vec2::new(8.0, 4.0), Vec2::new(16.0, 32.0));
        assert_eq!(rect.min(), Vec2::new(8.0, 4.0));
        assert_eq!(rect.max(), Vec2::new(24.0, 36.0));
        assert!(rect.contains_pos(Vec2::new(24.0, 36.0)));
        assert!(!rect.contains_pos(Vec2::new(7.0, 4.0)));
    }

    #[test]
    fn test_fits_within() {
        let rect = Rect::from_size(Vec2::new(16.0, 32.0));
        assert!(rect.fits_within(Vec2::new(16.0, 32.0)));
        assert!(rect.fits_within(Vec2::new(20.0, 40.0)));
        assert!(!rect.fits_within(Vec2::new(15.0, 40.0)));
    }
}
