use std::{path::Path, slice, sync::Arc};

use glam::Vec2;

use crate::{
    errors::{Error, Result},
    sprite_frame::SpriteFrame,
    texture::{Texture, TextureLoader},
    types::Rect,
};

/// Delay used when an animation is built without one
pub const DEFAULT_FRAME_DELAY: f32 = 0.0;

pub type SharedFrame = Arc<SpriteFrame>;

/// Ordered, shared list of frames
///
/// Clones share storage, pushing into a shared list copies it first so other
/// holders keep the frames they had.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameList(Arc<Vec<SharedFrame>>);

impl FrameList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, frame: impl Into<SharedFrame>) {
        Arc::make_mut(&mut self.0).push(frame.into());
    }

    pub fn get(&self, index: usize) -> Option<&SharedFrame> {
        self.0.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, SharedFrame> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of owners sharing this list
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.0)
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl From<Vec<SharedFrame>> for FrameList {
    fn from(frames: Vec<SharedFrame>) -> Self {
        Self(Arc::new(frames))
    }
}

impl From<Vec<SpriteFrame>> for FrameList {
    fn from(frames: Vec<SpriteFrame>) -> Self {
        frames.into_iter().collect()
    }
}

impl<F: Into<SharedFrame>> FromIterator<F> for FrameList {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        Self(Arc::new(iter.into_iter().map(Into::into).collect()))
    }
}

impl<'a> IntoIterator for &'a FrameList {
    type Item = &'a SharedFrame;
    type IntoIter = slice::Iter<'a, SharedFrame>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Named sequence of frames played with a fixed delay
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    name: String,
    delay: f32,
    frames: FrameList,
}

impl Animation {
    pub fn builder(name: impl Into<String>) -> AnimationBuilder {
        AnimationBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        self.name = check_name(name.into())?;
        Ok(())
    }

    /// Delay between frames in seconds
    pub fn delay(&self) -> f32 {
        self.delay
    }

    pub fn set_delay(&mut self, delay: f32) -> Result<()> {
        self.delay = check_delay(delay)?;
        Ok(())
    }

    pub fn frames(&self) -> &FrameList {
        &self.frames
    }

    /// Replace the frame list, the previous list is released after assignment
    pub fn set_frames(&mut self, frames: impl Into<FrameList>) {
        self.frames = frames.into();
    }

    pub fn frame(&self, index: usize) -> Option<&SharedFrame> {
        self.frames.get(index)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Total play time of one loop
    pub fn duration(&self) -> f32 {
        self.delay * self.frames.len() as f32
    }

    /// Append a frame, the same frame may be added more than once
    pub fn add_frame(&mut self, frame: impl Into<SharedFrame>) {
        self.frames.push(frame);
    }

    /// Append an untrimmed frame cut from `texture`
    pub fn add_frame_with_texture(&mut self, texture: Texture, rect: Rect) {
        self.add_frame(SpriteFrame::new(texture, rect, Vec2::ZERO));
    }

    /// Load an image and append it as a single frame
    ///
    /// Nothing is appended when the loader fails.
    pub fn add_frame_with_file_name<L, P>(&mut self, loader: &mut L, path: P) -> Result<()>
    where
        L: TextureLoader + ?Sized,
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let texture = loader.load_texture(path).map_err(|err| {
            log::warn!("Animation {} failed to load frame {}", self.name, path.display());
            Error::ResourceLoad {
                path: path.to_owned(),
                source: err.into(),
            }
        })?;
        self.add_frame(SpriteFrame::from_texture(texture));
        Ok(())
    }
}

/// Options for building an [`Animation`]
#[derive(Debug, Clone)]
pub struct AnimationBuilder {
    name: String,
    delay: Option<f32>,
    default_delay: f32,
    frames: Option<FrameList>,
}

impl AnimationBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            delay: None,
            default_delay: DEFAULT_FRAME_DELAY,
            frames: None,
        }
    }

    pub fn delay(mut self, delay: f32) -> Self {
        self.delay = Some(delay);
        self
    }

    pub(crate) fn default_delay(mut self, delay: f32) -> Self {
        self.default_delay = delay;
        self
    }

    pub fn frames(mut self, frames: impl Into<FrameList>) -> Self {
        self.frames = Some(frames.into());
        self
    }

    pub fn build(self) -> Result<Animation> {
        Ok(Animation {
            name: check_name(self.name)?,
            delay: check_delay(self.delay.unwrap_or(self.default_delay))?,
            frames: self.frames.unwrap_or_default(),
        })
    }
}

fn check_name(name: String) -> Result<String> {
    if name.is_empty() {
        return Err(Error::EmptyName);
    }
    Ok(name)
}

fn check_delay(delay: f32) -> Result<f32> {
    if !delay.is_finite() || delay < 0.0 {
        return Err(Error::InvalidDelay(delay));
    }
    Ok(delay)
}
