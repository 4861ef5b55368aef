//! Colorized hex dump rendering for the terminal.
//!
//! Each block prints as one line of lowercase hex bytes on a 24-bit
//! background taken from the block's gradient color, suffixed with the block
//! offset in hex. A header line enumerates the column indices first.

use std::fmt::Write as _;
use std::io::{self, Write};

use crossterm::style::{Color, Stylize};

use crate::util::color::Rgb;

/// Render the colorized hex dump of `data` to `out`.
///
/// `colors` must hold one entry per block, in block order; blocks are cut from
/// `data` with the same `block_size` the caller profiled with. Output is the
/// header line, one styled line per block and a trailing blank line.
///
/// # Errors
/// Propagates any I/O error from `out`.
pub fn write_hex_dump<W: Write>(
    out: &mut W,
    data: &[u8],
    block_size: usize,
    colors: &[Rgb],
) -> io::Result<()> {
    writeln!(out, "{}", header_line(block_size))?;

    for (index, (block, color)) in data.chunks(block_size).zip(colors).enumerate() {
        let mut hex = String::with_capacity(block.len() * 3);
        for (i, byte) in block.iter().enumerate() {
            if i > 0 {
                hex.push(' ');
            }
            let _ = write!(hex, "{byte:02x}");
        }

        let styled = hex.on(Color::Rgb {
            r: color.r,
            g: color.g,
            b: color.b,
        });
        writeln!(out, "{styled}[0x{:X}]", index * block_size)?;
    }

    writeln!(out)
}

/// Column index header: `0..block_size` in uppercase hex, padded so each
/// index lines up with its two-digit byte column below.
fn header_line(block_size: usize) -> String {
    let mut header = String::with_capacity(block_size * 3);
    for index in 0..block_size {
        let spacing = if index < 0x10 {
            "  "
        } else if index < 0x100 {
            " "
        } else {
            ""
        };
        let _ = write!(header, "{index:X}{spacing}");
    }
    header
}
