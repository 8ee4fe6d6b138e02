//! # Program Image Loader
//!
//! Reads the plain-text hex images used for test programs and copies them into
//! memory.
//!
//! ## Format
//!
//! One byte per token, written in hex with an optional `$` or `0x` prefix.
//! Tokens are separated by whitespace, usually one per line. `//` and `#`
//! start a comment that runs to the end of the line. Blank lines are ignored
//! and CRLF line endings are accepted.
//!
//! ```text
//! # store 1, 5, 8 at $0200
//! A9 01     // LDA #$01
//! 8D 00 02  // STA $0200
//! ```

use log::debug;
use thiserror::Error;

use crate::MemoryBus;

/// Errors produced while reading or placing a program image.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// A token is not a hex byte. `line` is 1-based.
    #[error("line {line}: `{text}` is not a hex byte")]
    InvalidByte { line: usize, text: String },

    /// The image would run past 0xFFFF.
    #[error("{len} bytes at ${start:04X} run past the end of the address space")]
    OutOfRange { start: u16, len: usize },
}

/// Parses a hex image into bytes.
///
/// # Examples
///
/// ```
/// use core6502::loader::parse_hex_image;
///
/// let image = "# header\r\nA9 08 // LDA #$08\n\n$8D 0x00 02\n";
/// assert_eq!(parse_hex_image(image).unwrap(), vec![0xA9, 0x08, 0x8D, 0x00, 0x02]);
/// ```
pub fn parse_hex_image(text: &str) -> Result<Vec<u8>, LoadError> {
    let mut bytes = Vec::new();

    for (index, line) in text.lines().enumerate() {
        for token in strip_comment(line).split_whitespace() {
            bytes.push(parse_byte(token).ok_or_else(|| LoadError::InvalidByte {
                line: index + 1,
                text: token.to_string(),
            })?);
        }
    }

    Ok(bytes)
}

/// Copies `bytes` into memory starting at `start`.
pub fn load_image<M: MemoryBus>(memory: &mut M, start: u16, bytes: &[u8]) -> Result<(), LoadError> {
    if start as usize + bytes.len() > 0x1_0000 {
        return Err(LoadError::OutOfRange {
            start,
            len: bytes.len(),
        });
    }

    for (offset, byte) in bytes.iter().enumerate() {
        memory.write(start.wrapping_add(offset as u16), *byte);
    }

    debug!("loaded {} bytes at ${:04X}", bytes.len(), start);
    Ok(())
}

/// Parses `text` and loads it at `start`, returning the image length.
pub fn load_hex_image<M: MemoryBus>(
    memory: &mut M,
    start: u16,
    text: &str,
) -> Result<usize, LoadError> {
    let bytes = parse_hex_image(text)?;
    load_image(memory, start, &bytes)?;
    Ok(bytes.len())
}

fn strip_comment(line: &str) -> &str {
    let end = [line.find("//"), line.find('#')]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(line.len());
    &line[..end]
}

fn parse_byte(token: &str) -> Option<u8> {
    let digits = token
        .strip_prefix('$')
        .or_else(|| token.strip_prefix("0x"))
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);

    if digits.is_empty() || digits.len() > 2 {
        return None;
    }
    u8::from_str_radix(digits, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    #[test]
    fn test_one_byte_per_line() {
        assert_eq!(parse_hex_image("a9\n01\nff\n").unwrap(), vec![0xA9, 0x01, 0xFF]);
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let text = "// leading comment\n\n  EA   # nop\n#only a comment\n00 // brk\n";
        assert_eq!(parse_hex_image(text).unwrap(), vec![0xEA, 0x00]);
    }

    #[test]
    fn test_invalid_token_reports_line() {
        let err = parse_hex_image("EA\nEA\nZZ\n").unwrap_err();
        assert_eq!(
            err,
            LoadError::InvalidByte {
                line: 3,
                text: "ZZ".to_string()
            }
        );
    }

    #[test]
    fn test_token_too_long() {
        assert!(parse_hex_image("1234").is_err());
        assert!(parse_hex_image("$").is_err());
    }

    #[test]
    fn test_load_image_places_bytes() {
        let mut memory = FlatMemory::new();
        load_image(&mut memory, 0x0600, &[0xA9, 0x08]).unwrap();
        assert_eq!(memory.read(0x0600), 0xA9);
        assert_eq!(memory.read(0x0601), 0x08);
    }

    #[test]
    fn test_load_image_up_to_last_address() {
        let mut memory = FlatMemory::new();
        load_image(&mut memory, 0xFFFE, &[0x34, 0x12]).unwrap();
        assert_eq!(memory.read(0xFFFF), 0x12);
    }

    #[test]
    fn test_load_image_past_end_is_rejected() {
        let mut memory = FlatMemory::new();
        assert_eq!(
            load_image(&mut memory, 0xFFFF, &[0x01, 0x02]),
            Err(LoadError::OutOfRange {
                start: 0xFFFF,
                len: 2
            })
        );
        assert_eq!(memory.read(0xFFFF), 0x00);
    }
}
