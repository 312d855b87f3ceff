use std::{io, path::PathBuf};

use crate::FrameId;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum Error {
    #[display("cannot read icon path from standard input")]
    ReadStdin { source: io::Error },
    #[display("no icon path given on standard input")]
    EmptyPath,
    #[display("cannot open {}", path.display())]
    Open { path: PathBuf, source: io::Error },
    #[display("{} is not a readable icon container", path.display())]
    Inspect { path: PathBuf, source: io::Error },
    #[display("{} contains no frames", path.display())]
    NoFrames { path: PathBuf },
    #[display("frame {} does not exist", frame)]
    MissingFrame { frame: FrameId },
    #[display("cannot decode frame {}", frame)]
    Decode { frame: FrameId, source: io::Error },
    #[display("cannot write output path to standard output")]
    WriteStdout { source: io::Error },
    #[display("cannot write {}", path.display())]
    Write {
        path: PathBuf,
        source: image::ImageError,
    },
}

impl Error {
    /// Process exit status for this error, following `sysexits.h`.
    pub fn exit_code(&self) -> u8 {
        const EX_DATAERR: u8 = 65;
        const EX_NOINPUT: u8 = 66;
        const EX_CANTCREAT: u8 = 73;
        const EX_IOERR: u8 = 74;
        match self {
            Self::ReadStdin { .. } | Self::EmptyPath | Self::Open { .. } => EX_NOINPUT,
            Self::Inspect { .. }
            | Self::NoFrames { .. }
            | Self::MissingFrame { .. }
            | Self::Decode { .. } => EX_DATAERR,
            Self::Write { .. } => EX_CANTCREAT,
            Self::WriteStdout { .. } => EX_IOERR,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn message_names_the_path() {
        let error = Error::NoFrames {
            path: "/icons/favicon.ico".into(),
        };
        assert_eq!(error.to_string(), "/icons/favicon.ico contains no frames");
        assert_eq!(error.exit_code(), 65);
    }

    #[test]
    fn io_cause_is_exposed_as_source() {
        let error = Error::Open {
            path: "/missing.ico".into(),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(error.source().map(|e| e.to_string()).as_deref(), Some("gone"));
        assert_eq!(error.exit_code(), 66);
    }

    #[test]
    fn stdout_failure_has_its_own_exit_code() {
        let error = Error::WriteStdout {
            source: io::ErrorKind::BrokenPipe.into(),
        };
        assert_eq!(error.exit_code(), 74);
    }
}
