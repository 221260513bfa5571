use glam::Vec2;

use crate::{
    errors::{Error, Result},
    texture::Texture,
    types::Rect,
};

/// A region of a shared texture, usually one cell of a packed atlas.
///
/// `offset` moves trimmed art back to where it sat in the untrimmed frame and
/// `original_size` is the frame size before trimming. Cloning a frame copies
/// the geometry and takes another reference to the same texture.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteFrame {
    rect: Rect,
    offset: Vec2,
    original_size: Vec2,
    texture: Option<Texture>,
}

impl SpriteFrame {
    /// Build an untrimmed frame, the original size is the rect size
    pub fn new(texture: impl Into<Option<Texture>>, rect: Rect, offset: Vec2) -> Self {
        Self {
            rect,
            offset,
            original_size: rect.size,
            texture: texture.into(),
        }
    }

    /// Build a trimmed frame
    ///
    /// Fails if the rect is larger than `original_size` on either axis.
    pub fn trimmed(
        texture: impl Into<Option<Texture>>,
        rect: Rect,
        offset: Vec2,
        original_size: Vec2,
    ) -> Result<Self> {
        let frame = Self {
            original_size,
            ..Self::new(texture, rect, offset)
        };
        frame.validate()?;
        Ok(frame)
    }

    /// Build a frame covering the whole texture
    pub fn from_texture(texture: Texture) -> Self {
        let rect = Rect::from_size(texture.sizef());
        Self::new(texture, rect, Vec2::ZERO)
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    pub fn original_size(&self) -> Vec2 {
        self.original_size
    }

    pub fn set_original_size(&mut self, size: Vec2) {
        self.original_size = size;
    }

    /// A frame without texture draws nothing
    pub fn texture(&self) -> Option<&Texture> {
        self.texture.as_ref()
    }

    /// Replace the texture, the previous one is released after the new one is stored
    pub fn set_texture(&mut self, texture: impl Into<Option<Texture>>) {
        self.texture = texture.into();
    }

    pub fn is_trimmed(&self) -> bool {
        self.rect.size != self.original_size
    }

    /// Check the rect size is non-negative and fits the original size
    pub fn validate(&self) -> Result<()> {
        let size = self.rect.size;
        if !(size.x >= 0.0 && size.y >= 0.0) || !self.rect.fits_within(self.original_size) {
            return Err(Error::InvalidFrameSize {
                rect: size,
                original: self.original_size,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use glam::UVec2;

    use super::*;
    use crate::handle::Handle;

    fn texture() -> Texture {
        Texture::new(Handle::detached(), UVec2::new(128, 64))
    }

    #[test]
    fn test_untrimmed_original_size() {
        let rect = Rect::new(Vec2::new(32.0, 0.0), Vec2::new(32.0, 48.0));
        let frame = SpriteFrame::new(texture(), rect, Vec2::new(1.0, 2.0));
        assert_eq!(frame.original_size(), rect.size);
        assert!(!frame.is_trimmed());
        assert!(frame.validate().is_ok());
    }

    #[test]
    fn test_fields_round_trip() {
        let tex = texture();
        let rect = Rect::new(Vec2::new(2.0, 3.0), Vec2::new(20.0, 30.0));
        let mut frame =
            SpriteFrame::trimmed(tex.clone(), rect, Vec2::new(4.0, 5.0), Vec2::new(24.0, 32.0))
                .unwrap();
        assert_eq!(frame.rect(), rect);
        assert_eq!(frame.offset(), Vec2::new(4.0, 5.0));
        assert_eq!(frame.original_size(), Vec2::new(24.0, 32.0));
        assert_eq!(frame.texture(), Some(&tex));
        assert!(frame.is_trimmed());

        let rect = Rect::new(Vec2::ZERO, Vec2::new(8.0, 8.0));
        frame.set_rect(rect);
        frame.set_offset(Vec2::new(-1.0, 1.0));
        frame.set_original_size(Vec2::new(10.0, 10.0));
        assert_eq!(frame.rect(), rect);
        assert_eq!(frame.offset(), Vec2::new(-1.0, 1.0));
        assert_eq!(frame.original_size(), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_trimmed_rejects_oversized_rect() {
        let rect = Rect::from_size(Vec2::new(40.0, 10.0));
        let err = SpriteFrame::trimmed(texture(), rect, Vec2::ZERO, Vec2::new(32.0, 32.0))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidFrameSize { .. }));

        let rect = Rect::from_size(Vec2::new(-1.0, 10.0));
        assert!(SpriteFrame::trimmed(None, rect, Vec2::ZERO, Vec2::new(32.0, 32.0)).is_err());
    }

    #[test]
    fn test_set_same_texture_twice() {
        let tex = texture();
        let mut frame = SpriteFrame::new(None, Rect::default(), Vec2::ZERO);
        assert!(frame.texture().is_none());

        frame.set_texture(tex.clone());
        frame.set_texture(tex.clone());
        assert_eq!(tex.ref_count(), 2);

        let current = frame.texture().cloned();
        frame.set_texture(current);
        assert_eq!(tex.ref_count(), 2);

        frame.set_texture(None);
        assert_eq!(tex.ref_count(), 1);
    }

    #[test]
    fn test_replace_texture_releases_old() {
        let old = texture();
        let new = texture();
        let mut frame = SpriteFrame::from_texture(old.clone());
        assert_eq!(old.ref_count(), 2);
        frame.set_texture(new.clone());
        assert_eq!(old.ref_count(), 1);
        assert_eq!(new.ref_count(), 2);
    }

    #[test]
    fn test_clone_shares_texture() {
        let tex = texture();
        let rect = Rect::new(Vec2::new(0.0, 16.0), Vec2::new(16.0, 16.0));
        let frame = SpriteFrame::new(tex.clone(), rect, Vec2::new(1.0, 1.0));
        let copy = frame.clone();

        assert_eq!(copy.rect(), frame.rect());
        assert_eq!(copy.offset(), frame.offset());
        assert_eq!(copy.original_size(), frame.original_size());
        assert_eq!(copy.texture().map(Texture::id), Some(tex.id()));
        assert_eq!(tex.ref_count(), 3);

        drop(frame);
        assert_eq!(tex.ref_count(), 2);
    }

    #[test]
    fn test_from_texture_covers_whole_image() {
        let frame = SpriteFrame::from_texture(texture());
        assert_eq!(frame.rect(), Rect::from_size(Vec2::new(128.0, 64.0)));
        assert_eq!(frame.offset(), Vec2::ZERO);
        assert_eq!(frame.original_size(), Vec2::new(128.0, 64.0));
    }
}
