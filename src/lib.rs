mod error;
mod extract;
mod frame;
mod ico_tool;
mod output_path;
mod tool;

pub use error::*;
pub use extract::*;
pub use frame::*;
pub use ico_tool::*;
pub use output_path::*;
pub use tool::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlphaChannel {
    #[default]
    On,
    /// Drop the alpha channel and write RGB.
    Off,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Background {
    #[default]
    /// Transparent pixels stay transparent.
    None,
    /// Composite every pixel over an opaque RGB color.
    Solid([u8; 3]),
}

impl Background {
    /// Blends `rgba` over this background.
    pub(crate) fn blend(self, rgba: [u8; 4]) -> [u8; 4] {
        let Self::Solid(background) = self else {
            return rgba;
        };
        let alpha = u16::from(rgba[3]);
        let mix = |fg: u8, bg: u8| {
            ((u16::from(fg) * alpha + u16::from(bg) * (255 - alpha) + 127) / 255) as u8
        };
        [
            mix(rgba[0], background[0]),
            mix(rgba[1], background[1]),
            mix(rgba[2], background[2]),
            255,
        ]
    }
}
