use std::{
    fs::OpenOptions,
    io::{self, BufReader},
    path::Path,
};

use ico::IconDir;
use image::{DynamicImage, ImageFormat, RgbaImage};
use tracing::debug;

use crate::{
    AlphaChannel, ConvertOptions, Dimensions, Error, FrameDescriptor, FrameId, ImageTool, Result,
};

/// [`ImageTool`] for Windows ICO containers.
#[derive(Debug, Clone, Copy, Default)]
pub struct IcoTool;

fn read_icon_dir(path: &Path) -> Result<IconDir> {
    let file = OpenOptions::new()
        .read(true)
        .write(false)
        .create(false)
        .open(path)
        .map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;
    IconDir::read(BufReader::new(file)).map_err(|source| Error::Inspect {
        path: path.to_path_buf(),
        source,
    })
}

fn decode_frame(frame: &FrameId) -> Result<RgbaImage> {
    let icon_dir = read_icon_dir(&frame.path)?;
    let entry = icon_dir
        .entries()
        .get(frame.index)
        .ok_or_else(|| Error::MissingFrame {
            frame: frame.clone(),
        })?;
    let decode_error = |source| Error::Decode {
        frame: frame.clone(),
        source,
    };
    let icon = entry.decode().map_err(decode_error)?;
    RgbaImage::from_raw(icon.width(), icon.height(), icon.rgba_data().to_vec()).ok_or_else(|| {
        decode_error(io::Error::new(
            io::ErrorKind::InvalidData,
            "pixel data does not match frame size",
        ))
    })
}

impl ImageTool for IcoTool {
    fn list_frames(&self, path: &Path) -> Result<Vec<FrameDescriptor>> {
        let icon_dir = read_icon_dir(path)?;
        let frames: Vec<_> = icon_dir
            .entries()
            .iter()
            .enumerate()
            .map(|(index, entry)| FrameDescriptor {
                id: FrameId::new(path, index),
                dimensions: Dimensions::new(entry.width(), entry.height()),
            })
            .collect();
        debug!(path = %path.display(), count = frames.len(), "read icon directory");
        Ok(frames)
    }

    fn convert_frame(&self, frame: &FrameId, options: ConvertOptions, dest: &Path) -> Result<()> {
        let mut rgba = decode_frame(frame)?;
        for pixel in rgba.pixels_mut() {
            pixel.0 = options.background.blend(pixel.0);
        }
        let image = match options.alpha {
            AlphaChannel::On => DynamicImage::ImageRgba8(rgba),
            AlphaChannel::Off => DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(rgba).to_rgb8()),
        };
        image
            .save_with_format(dest, ImageFormat::Png)
            .map_err(|source| Error::Write {
                path: dest.to_path_buf(),
                source,
            })?;
        debug!(%frame, dest = %dest.display(), ?options, "wrote png");
        Ok(())
    }
}
