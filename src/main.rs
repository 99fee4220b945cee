use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context as _, Result};
use bitmap_to_cpp_array::{emit, load, pack, Error};
use clap::{error::ErrorKind, Parser};
use log::{info, LevelFilter};

const USAGE: &str = "Usage: bitmap-to-cpp-array InputImage.bmp/png OutputVariableName OutputCode.hpp";
const EXAMPLE: &str = "Example: bitmap-to-cpp-array Image0.png img0 image0.hpp";

/// Convert a black & white image into a C++ array, packed 1 bit per pixel.
///
/// Pixels must be pure black (bit 1) or pure white (bit 0), and the image
/// width must be a multiple of 8.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Input image (BMP, PNG, or anything else the decoder recognizes).
    input: PathBuf,

    /// Name of the generated array. Not validated.
    name: String,

    /// Output source file. Overwritten if it exists.
    output: PathBuf,

    /// Print the packed image to stderr as ASCII art.
    #[arg(long)]
    preview: bool,

    /// More log output. Can be passed multiple times.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn main() -> Result<ExitCode> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => {
            eprintln!("{USAGE}");
            eprintln!("{EXAMPLE}");
            return Ok(ExitCode::from(2));
        }
    };

    // RUST_LOG, if set, wins over the command-line flags.
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    convert(&args)?;
    Ok(ExitCode::SUCCESS)
}

fn convert(args: &Args) -> Result<()> {
    let img = load::load(&args.input)?;
    let bytes = pack::pack(&img)
        .with_context(|| format!("can't convert {}", args.input.display()))?;

    if args.preview {
        eprint!("{}", pack::preview(&bytes, img.width()));
    }

    write_output(&args.output, &args.name, &bytes)?;
    info!("wrote {} bytes to {}", bytes.len(), args.output.display());
    Ok(())
}

fn write_output(path: &Path, name: &str, bytes: &[u8]) -> Result<(), Error> {
    let write_err = |source| Error::Write {
        path: path.to_owned(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut out = BufWriter::new(file);
    emit::write_array(&mut out, name, bytes).map_err(write_err)?;
    out.flush().map_err(write_err)
}
