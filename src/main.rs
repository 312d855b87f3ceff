use std::{
    error::Error as _,
    io::{self, IsTerminal as _},
    process::ExitCode,
};

use favicon_extract::{Error, FaviconExtractor, IcoTool, read_icon_path, write_output_path};
use tracing_subscriber::{
    Registry,
    filter::LevelFilter,
    fmt::layer,
    layer::SubscriberExt as _,
    util::{SubscriberInitExt as _, TryInitError},
};

/// Log records go to stderr; stdout only ever carries the output path.
fn setup_logger() -> Result<(), TryInitError> {
    Registry::default()
        .with(LevelFilter::INFO)
        .with(
            layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal())
                .with_target(false)
                .without_time(),
        )
        .try_init()
}

fn run() -> Result<(), Error> {
    let icon_path = read_icon_path(&mut io::stdin().lock())?;
    let output = FaviconExtractor::new(IcoTool).run(&icon_path)?;
    write_output_path(&mut io::stdout().lock(), &output)
}

fn report(error: &Error) {
    eprintln!("error: {error}");
    let mut source = error.source();
    while let Some(cause) = source {
        eprintln!("caused by: {cause}");
        source = cause.source();
    }
}

fn main() -> ExitCode {
    if let Err(error) = setup_logger() {
        eprintln!("warning: logging disabled: {error}");
    }
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            report(&error);
            ExitCode::from(error.exit_code())
        }
    }
}
