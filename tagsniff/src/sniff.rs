//! Content type detection
//!
//! The content type of a source is determined solely by its first [`SNIFF_LEN`] bytes, checked against a
//! fixed, ordered table of signatures. The first match wins, and anything unrecognized is
//! [`ContentType::OCTET_STREAM`].
//!
//! Detection is deterministic, the same prefix always produces the same label.

use crate::config::ParseOptions;
use crate::error::Result;

use std::borrow::{Borrow, Cow};
use std::fmt::{Display, Formatter};
use std::io::{Cursor, Read};

/// The maximum number of bytes used for detection
pub const SNIFF_LEN: usize = 512;

/// A MIME-like content type label
///
/// Labels are compared exactly, so `audio/MPA` and `audio/mpa` are distinct.
///
/// # Examples
///
/// ```rust
/// use tagsniff::sniff::ContentType;
///
/// // Any label can be used, not just the ones the sniffer can produce
/// let custom = ContentType::new("audio/custom");
/// assert_eq!(custom.as_str(), "audio/custom");
///
/// assert_eq!(ContentType::MPEG, "audio/mpeg");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentType(Cow<'static, str>);

impl ContentType {
	/// `audio/mpeg`
	pub const MPEG: Self = Self::from_static("audio/mpeg");
	/// `audio/ogg`
	pub const OGG: Self = Self::from_static("audio/ogg");
	/// `audio/flac`
	pub const FLAC: Self = Self::from_static("audio/flac");
	/// `audio/wave`
	pub const WAVE: Self = Self::from_static("audio/wave");
	/// `audio/aiff`
	pub const AIFF: Self = Self::from_static("audio/aiff");
	/// `audio/basic`
	pub const BASIC: Self = Self::from_static("audio/basic");
	/// `audio/midi`
	pub const MIDI: Self = Self::from_static("audio/midi");
	/// `video/avi`
	pub const AVI: Self = Self::from_static("video/avi");
	/// `video/webm`
	pub const WEBM: Self = Self::from_static("video/webm");
	/// `video/mp4`
	pub const MP4: Self = Self::from_static("video/mp4");
	/// `image/png`
	pub const PNG: Self = Self::from_static("image/png");
	/// `image/jpeg`
	pub const JPEG: Self = Self::from_static("image/jpeg");
	/// `image/gif`
	pub const GIF: Self = Self::from_static("image/gif");
	/// `image/webp`
	pub const WEBP: Self = Self::from_static("image/webp");
	/// `application/pdf`
	pub const PDF: Self = Self::from_static("application/pdf");
	/// `application/zip`
	pub const ZIP: Self = Self::from_static("application/zip");
	/// `application/x-gzip`
	pub const GZIP: Self = Self::from_static("application/x-gzip");
	/// `application/octet-stream`, the fallback for unrecognized content
	pub const OCTET_STREAM: Self = Self::from_static("application/octet-stream");

	/// Create a `ContentType` from a static label
	pub const fn from_static(label: &'static str) -> Self {
		Self(Cow::Borrowed(label))
	}

	/// Create a `ContentType` from any label
	pub fn new(label: impl Into<Cow<'static, str>>) -> Self {
		Self(label.into())
	}

	/// The label as a string
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Display for ContentType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&'static str> for ContentType {
	fn from(label: &'static str) -> Self {
		Self::from_static(label)
	}
}

impl From<String> for ContentType {
	fn from(label: String) -> Self {
		Self(Cow::Owned(label))
	}
}

// Allows registry lookups by `&str`, `Hash` is derived from the label alone
impl Borrow<str> for ContentType {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl PartialEq<str> for ContentType {
	fn eq(&self, other: &str) -> bool {
		self.as_str() == other
	}
}

impl PartialEq<&str> for ContentType {
	fn eq(&self, other: &&str) -> bool {
		self.as_str() == *other
	}
}

enum Signature {
	/// The prefix must start with these bytes
	Exact(&'static [u8]),
	/// `prefix[i] & mask[i] == pattern[i]` for every byte of `pattern`
	Masked {
		mask: &'static [u8],
		pattern: &'static [u8],
	},
}

impl Signature {
	fn matches(&self, prefix: &[u8]) -> bool {
		match self {
			Signature::Exact(sig) => prefix.starts_with(sig),
			Signature::Masked { mask, pattern } => {
				prefix.len() >= pattern.len()
					&& prefix
						.iter()
						.zip(mask.iter())
						.zip(pattern.iter())
						.all(|((b, m), p)| b & m == *p)
			},
		}
	}
}

const MASK_FOURCC_AT_8: &[u8] = &[
	0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
];

#[rustfmt::skip]
const SIGNATURES: &[(Signature, ContentType)] = &[
	(Signature::Exact(b"ID3"), ContentType::MPEG),
	(Signature::Exact(b"OggS\0"), ContentType::OGG),
	(Signature::Exact(b"fLaC"), ContentType::FLAC),
	(Signature::Masked { mask: MASK_FOURCC_AT_8, pattern: b"RIFF\0\0\0\0WAVE" }, ContentType::WAVE),
	(Signature::Masked { mask: MASK_FOURCC_AT_8, pattern: b"FORM\0\0\0\0AIFF" }, ContentType::AIFF),
	(Signature::Masked { mask: MASK_FOURCC_AT_8, pattern: b"FORM\0\0\0\0AIFC" }, ContentType::AIFF),
	(Signature::Masked { mask: MASK_FOURCC_AT_8, pattern: b"RIFF\0\0\0\0AVI " }, ContentType::AVI),
	(Signature::Exact(b".snd"), ContentType::BASIC),
	(Signature::Exact(b"MThd\0\0\0\x06"), ContentType::MIDI),
	(Signature::Exact(&[0x1A, 0x45, 0xDF, 0xA3]), ContentType::WEBM),
	(Signature::Masked { mask: &[0, 0, 0, 0, 0xFF, 0xFF, 0xFF, 0xFF], pattern: b"\0\0\0\0ftyp" }, ContentType::MP4),
	(Signature::Exact(b"\x89PNG\r\n\x1A\n"), ContentType::PNG),
	(Signature::Exact(&[0xFF, 0xD8, 0xFF]), ContentType::JPEG),
	(Signature::Exact(b"GIF87a"), ContentType::GIF),
	(Signature::Exact(b"GIF89a"), ContentType::GIF),
	(Signature::Masked { mask: &[0xFF, 0xFF, 0xFF, 0xFF, 0, 0, 0, 0, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF], pattern: b"RIFF\0\0\0\0WEBPVP" }, ContentType::WEBP),
	(Signature::Exact(b"%PDF-"), ContentType::PDF),
	(Signature::Exact(b"PK\x03\x04"), ContentType::ZIP),
	(Signature::Exact(&[0x1F, 0x8B, 0x08]), ContentType::GZIP),
];

/// Detect the content type of `reader` from its next [`SNIFF_LEN`] bytes
///
/// This reads from the current position, and leaves the reader wherever the read ended. Short inputs
/// (including empty ones) are classified on whatever bytes exist.
///
/// # Errors
///
/// Reading from `reader` fails
///
/// # Examples
///
/// ```rust
/// use tagsniff::sniff::{ContentType, detect};
///
/// # fn main() -> tagsniff::error::Result<()> {
/// let mut reader: &[u8] = b"fLaC\0\0\0\x22";
/// assert_eq!(detect(&mut reader)?, ContentType::FLAC);
///
/// let mut empty: &[u8] = &[];
/// assert_eq!(detect(&mut empty)?, ContentType::OCTET_STREAM);
/// # Ok(()) }
/// ```
pub fn detect<R>(reader: &mut R) -> Result<ContentType>
where
	R: Read,
{
	detect_with_options(reader, ParseOptions::new())
}

/// Same as [`detect`], using the junk window of `parse_options`
///
/// See [`ParseOptions::max_junk_bytes`].
///
/// # Errors
///
/// Reading from `reader` fails
pub fn detect_with_options<R>(reader: &mut R, parse_options: ParseOptions) -> Result<ContentType>
where
	R: Read,
{
	let mut buf = [0; SNIFF_LEN];

	// Read (up to) 512 bytes
	let buf_len = std::io::copy(
		&mut reader.by_ref().take(buf.len() as u64),
		&mut Cursor::new(&mut buf[..]),
	)? as usize;

	Ok(classify(&buf[..buf_len], parse_options.max_junk_bytes))
}

fn classify(prefix: &[u8], max_junk_bytes: usize) -> ContentType {
	if let Some((_, content_type)) = SIGNATURES.iter().find(|(sig, _)| sig.matches(prefix)) {
		return content_type.clone();
	}

	let junk_window = &prefix[..prefix.len().min(max_junk_bytes.saturating_add(4))];
	if let Some(offset) = search_for_mpeg_frame(junk_window) {
		log::debug!("Sniffer: Found an MPEG frame header at offset {offset}");
		return ContentType::MPEG;
	}

	ContentType::OCTET_STREAM
}

fn verify_frame_sync(frame_sync: [u8; 2]) -> bool {
	frame_sync[0] == 0xFF && frame_sync[1] >> 5 == 0b111
}

// Searches for a complete, valid MPEG audio frame header
//
// Checks the frame sync, along with the reserved values of the version, layer, bitrate
// and sample rate fields. Free format (bitrate index 0) is not accepted.
fn search_for_mpeg_frame(input: &[u8]) -> Option<usize> {
	input.windows(4).position(|header| {
		if !verify_frame_sync([header[0], header[1]]) {
			return false;
		}

		let version = (header[1] >> 3) & 0b11;
		let layer = (header[1] >> 1) & 0b11;
		let bitrate_index = header[2] >> 4;
		let sample_rate_index = (header[2] >> 2) & 0b11;

		version != 0b01
			&& layer != 0b00
			&& bitrate_index != 0b0000
			&& bitrate_index != 0b1111
			&& sample_rate_index != 0b11
	})
}
