use crate::config::ParsingMode;
use crate::error::Result;
use crate::macros::err;

use std::io::Read;

use byteorder::ReadBytesExt;

/// The text encoding used by ID3v2 frames
#[derive(Debug, Clone, Eq, PartialEq, Copy, Hash)]
#[repr(u8)]
pub(crate) enum TextEncoding {
	/// ISO-8859-1
	Latin1 = 0,
	/// UTF-16 with a byte order mark
	UTF16 = 1,
	/// UTF-16 big endian
	UTF16BE = 2,
	/// UTF-8
	UTF8 = 3,
}

impl TextEncoding {
	/// Get a `TextEncoding` from a u8, must be 0-3 inclusive
	pub(crate) fn from_u8(byte: u8) -> Option<Self> {
		match byte {
			0 => Some(Self::Latin1),
			1 => Some(Self::UTF16),
			2 => Some(Self::UTF16BE),
			3 => Some(Self::UTF8),
			_ => None,
		}
	}
}

/// Specify how to decode the provided text
///
/// By default, this will:
///
/// * Use [`TextEncoding::UTF8`] as the encoding
/// * Have no fallback byte order mark
#[derive(Copy, Clone, Debug)]
pub(crate) struct TextDecodeOptions {
	pub encoding: TextEncoding,
	/// The byte order to assume for UTF-16 text that is missing its own BOM
	pub bom: [u8; 2],
}

impl TextDecodeOptions {
	pub(crate) fn new() -> Self {
		Self::default()
	}

	pub(crate) fn encoding(mut self, encoding: TextEncoding) -> Self {
		self.encoding = encoding;
		self
	}

	pub(crate) fn bom(mut self, bom: [u8; 2]) -> Self {
		self.bom = bom;
		self
	}
}

impl Default for TextDecodeOptions {
	fn default() -> Self {
		Self {
			encoding: TextEncoding::UTF8,
			bom: [0, 0],
		}
	}
}

/// Decode `raw` according to `options`
///
/// Undecodable text is handled according to `parse_mode`:
///
/// * `Strict`: the error is returned
/// * `BestAttempt`: invalid sequences are replaced with `U+FFFD`
/// * `Relaxed`: `None` is returned, and the caller is expected to discard the item
pub(crate) fn decode_text(
	raw: &[u8],
	options: TextDecodeOptions,
	parse_mode: ParsingMode,
) -> Result<Option<String>> {
	let err = match decode_inner(raw, options, false) {
		Ok(text) => return Ok(Some(text)),
		Err(err) => err,
	};

	match parse_mode {
		ParsingMode::Strict => Err(err),
		ParsingMode::BestAttempt => {
			log::warn!("Unable to decode text ({err}), replacing invalid sequences");
			decode_inner(raw, options, true).map(Some)
		},
		ParsingMode::Relaxed => {
			log::warn!("Unable to decode text ({err}), discarding");
			Ok(None)
		},
	}
}

fn decode_inner(raw: &[u8], options: TextDecodeOptions, lossy: bool) -> Result<String> {
	match options.encoding {
		TextEncoding::Latin1 => Ok(latin1_decode(raw)),
		TextEncoding::UTF8 => {
			if lossy {
				return Ok(String::from_utf8_lossy(raw).into_owned());
			}

			match std::str::from_utf8(raw) {
				Ok(text) => Ok(text.to_owned()),
				Err(_) => err!(TextDecode("Expected a UTF-8 string")),
			}
		},
		TextEncoding::UTF16 => {
			if raw.is_empty() {
				return Ok(String::new());
			}

			let be: fn([u8; 2]) -> u16 = u16::from_be_bytes;
			let le: fn([u8; 2]) -> u16 = u16::from_le_bytes;

			let (content, endianness) = match (raw, options.bom) {
				([0xFE, 0xFF, rest @ ..], _) => (rest, be),
				([0xFF, 0xFE, rest @ ..], _) => (rest, le),
				(_, [0xFE, 0xFF]) => (raw, be),
				(_, [0xFF, 0xFE]) => (raw, le),
				_ if lossy => (raw, le),
				_ => err!(TextDecode("UTF-16 string has an invalid byte order mark")),
			};

			utf16_decode_bytes(content, endianness, lossy)
		},
		TextEncoding::UTF16BE => utf16_decode_bytes(raw, u16::from_be_bytes, lossy),
	}
}

pub(crate) fn read_to_terminator<R>(reader: &mut R, encoding: TextEncoding) -> (Vec<u8>, usize)
where
	R: Read,
{
	let mut text_bytes = Vec::new();
	let mut terminator_len = 0;

	match encoding {
		TextEncoding::Latin1 | TextEncoding::UTF8 => {
			while let Ok(byte) = reader.read_u8() {
				if byte == 0 {
					terminator_len = 1;
					break;
				}

				text_bytes.push(byte)
			}
		},
		TextEncoding::UTF16 | TextEncoding::UTF16BE => {
			while let (Ok(b1), Ok(b2)) = (reader.read_u8(), reader.read_u8()) {
				if b1 == 0 && b2 == 0 {
					terminator_len = 2;
					break;
				}

				text_bytes.push(b1);
				text_bytes.push(b2)
			}
		},
	}

	(text_bytes, terminator_len)
}

pub(crate) fn latin1_decode(bytes: &[u8]) -> String {
	bytes.iter().map(|c| char::from(*c)).collect::<String>()
}

fn utf16_decode_bytes(bytes: &[u8], endianness: fn([u8; 2]) -> u16, lossy: bool) -> Result<String> {
	if bytes.len() % 2 != 0 && !lossy {
		err!(TextDecode("UTF-16 string has an odd length"));
	}

	let words: Vec<u16> = bytes
		.chunks_exact(2)
		// In ID3v2, it is possible to have multiple UTF-16 strings separated by null.
		// This also makes it possible for us to encounter multiple BOMs in a single string.
		// We must filter them out.
		.filter_map(|c| match c {
			[0xFF, 0xFE] | [0xFE, 0xFF] => None,
			_ => Some(endianness([c[0], c[1]])),
		})
		.collect();

	if lossy {
		return Ok(String::from_utf16_lossy(&words));
	}

	match String::from_utf16(&words) {
		Ok(text) => Ok(text),
		Err(_) => err!(TextDecode("Given an invalid UTF-16 string")),
	}
}
