//! Entrospect CLI - colorized per-block entropy view of a binary file.
//!
//! Reads a file, splits it into fixed-size blocks, prints one colorized hex
//! line per block (blue = low entropy, red = high) and optionally saves a
//! heat-grid image of the same color sequence.

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]

use std::fs::File;
use std::io::{self, Write};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use memmap2::Mmap;

use entrospect::analysis::profile_blocks;
use entrospect::util::color::{entropy_to_rgb, Rgb};
use entrospect::util::format_bytes;
use entrospect::viz::layout::MIN_VERTICAL_CELL;
use entrospect::viz::raster::{RasterBackend, RasterError};
use entrospect::viz::text::write_hex_dump;

/// Inputs above this size get a note: the scan holds the whole file in memory.
const LARGE_INPUT_NOTE_SIZE: u64 = 1024 * 1024 * 1024;

#[derive(Parser, Debug)]
#[command(
    name = "entrospect",
    version,
    about = "Colorized per-block entropy view of a binary file"
)]
struct Args {
    /// File to inspect
    input: PathBuf,

    /// Number of bytes per block
    #[arg(short, long, default_value = "16")]
    block_size: NonZeroUsize,

    /// Save a heat-grid image to this path (format follows the extension)
    #[arg(short, long)]
    image: Option<PathBuf>,
}

fn run(args: &Args) -> anyhow::Result<()> {
    let file = File::open(&args.input)
        .with_context(|| format!("failed to open {}", args.input.display()))?;
    let size = file
        .metadata()
        .with_context(|| format!("failed to stat {}", args.input.display()))?
        .len();

    if size > LARGE_INPUT_NOTE_SIZE {
        eprintln!(
            "note: scanning {} of input in memory",
            format_bytes(size)
        );
    }

    // Zero-length maps are platform-dependent; an empty file is zero blocks.
    let mmap = if size > 0 {
        Some(
            // Safety: the map is read-only and lives only for this scan.
            unsafe { Mmap::map(&file) }
                .with_context(|| format!("failed to map {}", args.input.display()))?,
        )
    } else {
        None
    };
    let data: &[u8] = mmap.as_deref().unwrap_or(&[]);

    let block_size = args.block_size.get();
    let colors: Vec<Rgb> = profile_blocks(data, block_size)
        .iter()
        .map(|profile| entropy_to_rgb(profile.normalized))
        .collect();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_hex_dump(&mut out, data, block_size, &colors).context("failed to write hex dump")?;
    out.flush().context("failed to flush stdout")?;
    drop(out);

    // Image trouble must not discard the text output that already printed,
    // so everything past this point is reported rather than propagated.
    if let Some(path) = &args.image {
        match RasterBackend::detect().save_grid(&colors, MIN_VERTICAL_CELL, path) {
            Ok(()) => println!("Image saved to {}", path.display()),
            Err(RasterError::BackendUnavailable) => {
                eprintln!("image output requested but raster support is not compiled in; skipping");
            }
            #[cfg(feature = "raster")]
            Err(err) => eprintln!("error saving image: {err}"),
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("error: {err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
