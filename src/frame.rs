use std::{fmt, path::PathBuf};

/// Pixel size of a frame. Orders by width first, then height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Identifies one frame inside an icon container.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrameId {
    pub path: PathBuf,
    /// Zero-based position in the container's directory.
    pub index: usize,
}

impl FrameId {
    pub fn new(path: impl Into<PathBuf>, index: usize) -> Self {
        Self {
            path: path.into(),
            index,
        }
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}[{}]", self.path.display(), self.index)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameDescriptor {
    pub id: FrameId,
    pub dimensions: Dimensions,
}

/// Picks the widest frame, breaking ties on height. On an exact tie the
/// earlier frame wins.
pub fn select_largest(frames: &[FrameDescriptor]) -> Option<&FrameDescriptor> {
    frames.iter().reduce(|best, frame| {
        if frame.dimensions > best.dimensions {
            frame
        } else {
            best
        }
    })
}
