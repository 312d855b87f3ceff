use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

pub const ICO_NAME: &str = "favicon.ico";
pub const PNG_NAME: &str = "favicon.png";

/// Where the PNG for `icon_path` goes: every `favicon.ico` becomes
/// `favicon.png`. Paths without that name come back unchanged.
pub fn output_path(icon_path: &Path) -> PathBuf {
    let mut rest = icon_path.as_os_str().as_encoded_bytes();
    let mut output = Vec::with_capacity(rest.len());
    while let Some(&byte) = rest.first() {
        if let Some(tail) = rest.strip_prefix(ICO_NAME.as_bytes()) {
            output.extend_from_slice(PNG_NAME.as_bytes());
            rest = tail;
        } else {
            output.push(byte);
            rest = &rest[1..];
        }
    }
    // Safety: whole ASCII substrings were swapped for ASCII substrings, so
    // every split point lies on a boundary of the original encoding.
    unsafe { OsString::from_encoded_bytes_unchecked(output) }.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(path: &str) -> PathBuf {
        output_path(Path::new(path))
    }

    #[test]
    fn swaps_extension_of_favicon() {
        assert_eq!(output("/icons/favicon.ico"), Path::new("/icons/favicon.png"));
        assert_eq!(output("favicon.ico"), Path::new("favicon.png"));
    }

    #[test]
    fn replaces_every_occurrence() {
        assert_eq!(
            output("/srv/favicon.ico.d/favicon.ico"),
            Path::new("/srv/favicon.png.d/favicon.png")
        );
        assert_eq!(output("favicon.icofavicon.ico"), Path::new("favicon.pngfavicon.png"));
    }

    #[test]
    fn other_names_pass_through() {
        assert_eq!(output("/tmp/x.ico"), Path::new("/tmp/x.ico"));
        assert_eq!(output("/icons/Favicon.ICO"), Path::new("/icons/Favicon.ICO"));
        assert_eq!(output("/icons/favicon.ic"), Path::new("/icons/favicon.ic"));
    }

    #[cfg(unix)]
    #[test]
    fn keeps_non_utf8_bytes() {
        use std::{ffi::OsStr, os::unix::ffi::OsStrExt as _};

        let icon = Path::new(OsStr::from_bytes(b"/icons/\xff\xfe/favicon.ico"));
        let png = output_path(icon);
        assert_eq!(png.as_os_str().as_bytes(), b"/icons/\xff\xfe/favicon.png");
    }
}
