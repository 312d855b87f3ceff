use std::{
    io::{Read, Write},
    path::{Path, PathBuf},
};

use tracing::{debug, info, warn};

use crate::{ConvertOptions, Error, ImageTool, Result, output_path, select_largest};

/// Reads the icon path from `input`, dropping one trailing line ending.
/// The bytes are otherwise taken as they are.
pub fn read_icon_path(input: &mut impl Read) -> Result<PathBuf> {
    let mut bytes = Vec::new();
    input
        .read_to_end(&mut bytes)
        .map_err(|source| Error::ReadStdin { source })?;
    if bytes.ends_with(b"\n") {
        bytes.pop();
        if bytes.ends_with(b"\r") {
            bytes.pop();
        }
    }
    path_from_bytes(bytes)
}

#[cfg(unix)]
fn path_from_bytes(bytes: Vec<u8>) -> Result<PathBuf> {
    use std::{ffi::OsString, os::unix::ffi::OsStringExt as _};

    Ok(OsString::from_vec(bytes).into())
}

/// Paths have no raw byte form here, so they must arrive as UTF-8.
#[cfg(not(unix))]
fn path_from_bytes(bytes: Vec<u8>) -> Result<PathBuf> {
    String::from_utf8(bytes)
        .map(PathBuf::from)
        .map_err(|e| Error::ReadStdin {
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        })
}

/// Writes `path` and a newline to `output`.
pub fn write_output_path(output: &mut impl Write, path: &Path) -> Result<()> {
    output
        .write_all(path.as_os_str().as_encoded_bytes())
        .and_then(|()| output.write_all(b"\n"))
        .and_then(|()| output.flush())
        .map_err(|source| Error::WriteStdout { source })
}

/// Turns the largest frame of an icon into a transparent PNG beside it.
#[derive(Debug, Clone, Default)]
pub struct FaviconExtractor<T> {
    tool: T,
}

impl<T: ImageTool> FaviconExtractor<T> {
    pub fn new(tool: T) -> Self {
        Self { tool }
    }

    /// Returns the path of the written PNG.
    pub fn run(&self, icon_path: &Path) -> Result<PathBuf> {
        if icon_path.as_os_str().is_empty() {
            return Err(Error::EmptyPath);
        }
        let frames = self.tool.list_frames(icon_path)?;
        debug!(icon_path = %icon_path.display(), count = frames.len(), "listed frames");
        let frame = select_largest(&frames).ok_or_else(|| Error::NoFrames {
            path: icon_path.to_path_buf(),
        })?;
        info!(frame = %frame.id, dimensions = %frame.dimensions, "selected frame");

        let output = output_path(icon_path);
        if output == icon_path {
            warn!(
                path = %icon_path.display(),
                "no favicon.ico in path, overwriting the icon with the png"
            );
        }
        self.tool
            .convert_frame(&frame.id, ConvertOptions::transparent(), &output)?;
        Ok(output)
    }
}
