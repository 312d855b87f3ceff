use std::path::Path;

use crate::{AlphaChannel, Background, FrameDescriptor, FrameId, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConvertOptions {
    pub alpha: AlphaChannel,
    pub background: Background,
}

impl ConvertOptions {
    /// RGBA output with transparent pixels left as they are.
    pub fn transparent() -> Self {
        Self {
            alpha: AlphaChannel::On,
            background: Background::None,
        }
    }
}

/// The image operations the extractor needs.
pub trait ImageTool {
    /// Lists every frame embedded in the icon container at `path`, in
    /// container order.
    fn list_frames(&self, path: &Path) -> Result<Vec<FrameDescriptor>>;

    /// Writes `frame` to `dest` as a PNG.
    fn convert_frame(&self, frame: &FrameId, options: ConvertOptions, dest: &Path) -> Result<()>;
}

impl<T: ImageTool + ?Sized> ImageTool for &T {
    fn list_frames(&self, path: &Path) -> Result<Vec<FrameDescriptor>> {
        (**self).list_frames(path)
    }

    fn convert_frame(&self, frame: &FrameId, options: ConvertOptions, dest: &Path) -> Result<()> {
        (**self).convert_frame(frame, options, dest)
    }
}
