use super::FrameKind;
use crate::config::ParsingMode;
use crate::error::{Id3v2Error, Id3v2ErrorKind, Result};
use crate::id3::v2::header::Id3v2Version;
use crate::util::text::{TextDecodeOptions, TextEncoding, decode_text, read_to_terminator};

fn verify_encoding(encoding: u8, version: Id3v2Version) -> Result<TextEncoding> {
	if version == Id3v2Version::V2 && (encoding != 0 && encoding != 1) {
		return Err(Id3v2Error::new(Id3v2ErrorKind::V2InvalidTextEncoding).into());
	}

	match TextEncoding::from_u8(encoding) {
		None => Err(Id3v2Error::new(Id3v2ErrorKind::BadTextEncoding(encoding)).into()),
		Some(e) => Ok(e),
	}
}

/// Decode the content of a text or comment frame
///
/// `Ok(None)` means the frame carries no usable value.
pub(crate) fn parse_content(
	content: &[u8],
	kind: FrameKind,
	version: Id3v2Version,
	parse_mode: ParsingMode,
) -> Result<Option<String>> {
	let [encoding_byte, rest @ ..] = content else {
		return Ok(None);
	};

	let encoding = verify_encoding(*encoding_byte, version)?;

	match kind {
		FrameKind::Comment => parse_comment(rest, encoding, parse_mode),
		_ => decode_text(
			rest,
			TextDecodeOptions::new().encoding(encoding),
			parse_mode,
		),
	}
}

// Language (3) + terminated description + text
fn parse_comment(
	mut content: &[u8],
	encoding: TextEncoding,
	parse_mode: ParsingMode,
) -> Result<Option<String>> {
	if content.len() < 3 {
		return Err(Id3v2Error::new(Id3v2ErrorKind::BadFrameLength).into());
	}

	content = &content[3..];

	let (description, _) = read_to_terminator(&mut content, encoding);

	// Writers commonly only include a BOM in the description
	let mut options = TextDecodeOptions::new().encoding(encoding);
	if let [b1 @ (0xFE | 0xFF), b2 @ (0xFE | 0xFF), ..] = description[..] {
		options = options.bom([b1, b2]);
	}

	decode_text(content, options, parse_mode)
}
