//! The five-line ASCII header that opens every BINVOX buffer.
//!
//! ```text
//! #binvox 1
//! dim {depth} {width} {height}
//! translate {depth} {width} {height}
//! scale {scale}
//! data
//! ```

use std::str::FromStr;

use crate::error::BinvoxError;
use crate::voxel::{Dimension, Translation, VoxelData};

/// First header line. Only version 1 is understood.
pub const SIGNATURE: &str = "#binvox 1";

/// Last header line; the run-length body starts right after it.
pub const DATA_MARKER: &str = "data";

/// Number of lines in a well-formed header.
const HEADER_LINES: usize = 5;

/// A completed line with this text ends header reading early.
const EARLY_STOP_LINE: &str = "Data";

/// Grid shape and placement stored in the header.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Header {
    pub dimension: Dimension,
    pub translate: Translation,
    pub scale: f64,
}

impl Header {
    /// Takes the header fields of `data`.
    pub fn of(data: &VoxelData) -> Self {
        Self {
            dimension: data.dimension,
            translate: data.translate,
            scale: data.scale,
        }
    }
}

/// Renders the header as ASCII bytes, each line newline-terminated.
pub fn encode_header(header: &Header) -> Vec<u8> {
    let Header {
        dimension: dim,
        translate: tr,
        scale,
    } = header;

    let text = format!(
        "{SIGNATURE}\n\
         dim {} {} {}\n\
         translate {} {} {}\n\
         scale {scale}\n\
         {DATA_MARKER}\n",
        dim.depth, dim.width, dim.height, tr.depth, tr.width, tr.height,
    );
    text.into_bytes()
}

/// Decodes the header at the start of `buffer`.
///
/// Returns the header together with the offset of the first body byte. Lines are
/// validated in order and the first bad line is reported.
pub fn decode_header(buffer: &[u8]) -> Result<(Header, usize), BinvoxError> {
    let (lines, cursor) = read_lines(buffer);
    let line = |index: usize| lines.get(index).map(String::as_str).unwrap_or_default();

    let signature = line(0);
    if signature != SIGNATURE {
        return Err(BinvoxError::InvalidSignature(signature.to_string()));
    }

    let dim_line = line(1);
    let [depth, width, height] = keyword_fields::<u32, 3>(dim_line, "dim")
        .ok_or_else(|| BinvoxError::InvalidDimensionLine(dim_line.to_string()))?;

    let translate_line = line(2);
    let [tx, ty, tz] = keyword_fields::<f64, 3>(translate_line, "translate")
        .ok_or_else(|| BinvoxError::InvalidTranslateLine(translate_line.to_string()))?;

    let scale_line = line(3);
    let [scale] = keyword_fields::<f64, 1>(scale_line, "scale")
        .ok_or_else(|| BinvoxError::InvalidScaleLine(scale_line.to_string()))?;

    let marker = line(4);
    if marker != DATA_MARKER {
        return Err(BinvoxError::InvalidDataMarker(marker.to_string()));
    }

    let header = Header {
        dimension: Dimension::new(depth, width, height),
        translate: Translation::new(tx, ty, tz),
        scale,
    };
    tracing::debug!(
        dimension = ?header.dimension,
        scale = header.scale,
        body_offset = cursor,
        "decoded binvox header"
    );
    Ok((header, cursor))
}

/// Splits the leading header lines off `buffer`, one byte per character.
///
/// Stops after [`HEADER_LINES`] lines, after a completed [`EARLY_STOP_LINE`], or at
/// the end of the buffer. Returns the lines and the offset just past the last byte
/// read.
fn read_lines(buffer: &[u8]) -> (Vec<String>, usize) {
    let mut lines = Vec::with_capacity(HEADER_LINES);
    let mut current = String::new();
    let mut cursor = 0;

    while cursor < buffer.len() && lines.len() < HEADER_LINES {
        let byte = buffer[cursor];
        cursor += 1;

        if byte == b'\n' {
            let stop = current == EARLY_STOP_LINE;
            lines.push(std::mem::take(&mut current));
            if stop {
                break;
            }
        } else {
            current.push(char::from(byte));
        }
    }

    (lines, cursor)
}

/// Parses `keyword f1 .. fN` separated by single spaces. Extra tokens are ignored.
fn keyword_fields<T: FromStr, const N: usize>(line: &str, keyword: &str) -> Option<[T; N]>
where
    T: Copy + Default,
{
    let mut tokens = line.split(' ');
    if tokens.next()? != keyword {
        return None;
    }

    let mut fields = [T::default(); N];
    for field in &mut fields {
        *field = tokens.next()?.parse().ok()?;
    }
    Some(fields)
}
