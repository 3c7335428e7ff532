//! Contains the errors that can arise within tagsniff
//!
//! The primary error is [`TagSniffError`]. The type of error is determined by [`ErrorKind`],
//! which can be extended at any time.

use crate::tag::TagFamily;

use std::collections::TryReserveError;
use std::fmt::{Debug, Display, Formatter};

use ogg_pager::PageError;

/// Alias for `Result<T, TagSniffError>`
pub type Result<T> = std::result::Result<T, TagSniffError>;

/// The types of errors that can occur
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
	// Dispatch related errors
	/// No decoder is registered for the detected (or provided) content type
	///
	/// The offending label is included.
	UnknownContentType(String),
	/// The ID3 decoder was selected, but neither an ID3v2 nor an ID3v1 tag was found
	UnknownVersion,

	// Tag data related errors
	/// A comment header (or other tag structure) is invalid
	MalformedHeader(MalformedHeaderError),
	/// Attempting to read an abnormally large amount of data
	TooMuchData,
	/// Expected the data to be a different size than provided
	///
	/// This occurs when the size of an item is written as one value, but that size is either too
	/// big or small to be valid within the bounds of that item.
	SizeMismatch,
	/// Arises when a tag is expected (Ex. found an "ID3 " chunk in a WAV file), but isn't found
	FakeTag,
	/// Errors that arise while decoding text
	TextDecode(&'static str),
	/// Errors that arise while reading ID3v2 tags
	Id3v2(Id3v2Error),

	// Conversions for external errors
	/// Errors that arise while parsing OGG pages
	OggPage(PageError),
	/// Unable to convert bytes to a String
	StringFromUtf8(std::string::FromUtf8Error),
	/// Unable to convert bytes to a str
	StrFromUtf8(std::str::Utf8Error),
	/// Represents all cases of [`std::io::Error`].
	Io(std::io::Error),
	/// Failure to allocate enough memory
	Alloc(TryReserveError),
}

/// The types of errors that can occur while interacting with ID3v2 tags
#[derive(Debug)]
#[non_exhaustive]
pub enum Id3v2ErrorKind {
	// Header
	/// Arises when an invalid ID3v2 version is found
	BadId3v2Version(u8, u8),
	/// Arises when a compressed ID3v2.2 tag is encountered
	///
	/// At the time the ID3v2.2 specification was written, a compression scheme wasn't decided.
	/// As such, it is recommended to ignore the tag entirely.
	V2Compression,
	/// Arises when an extended header has an invalid size (must be >= 6 bytes and less than the total tag size)
	BadExtendedHeaderSize,

	// Frame
	/// Arises when a frame ID contains invalid characters (must be within `'A'..'Z'` or `'0'..'9'`)
	/// or if the ID is too short/long.
	BadFrameId(Vec<u8>),
	/// Arises when a frame doesn't have enough data
	BadFrameLength,
	/// Arises when a frame with no content is parsed with [ParsingMode::Strict](crate::config::ParsingMode::Strict)
	EmptyFrame(String),
	/// Arises when reading a compressed or encrypted frame with no data length indicator
	MissingDataLengthIndicator,
	/// Arises when a text encoding other than Latin-1 or UTF-16 appear in an ID3v2.2 tag
	V2InvalidTextEncoding,
	/// Arises when a text frame has an unknown text encoding byte
	BadTextEncoding(u8),

	// Compression
	#[cfg(feature = "id3v2_compression_support")]
	/// Arises when a compressed frame is unable to be decompressed
	Decompression(std::io::Error),
	#[cfg(not(feature = "id3v2_compression_support"))]
	/// Arises when a compressed frame is encountered, but support is disabled
	CompressedFrameEncountered,
}

impl Display for Id3v2ErrorKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			// Header
			Self::BadId3v2Version(major, minor) => write!(
				f,
				"Found an invalid version (v{major}.{minor}), expected any major revision in: (2, \
				 3, 4)"
			),
			Self::V2Compression => write!(f, "Encountered a compressed ID3v2.2 tag"),
			Self::BadExtendedHeaderSize => {
				write!(f, "Found an extended header with an invalid size")
			},

			// Frame
			Self::BadFrameId(frame_id) => write!(f, "Failed to parse a frame ID: 0x{frame_id:x?}"),
			Self::BadFrameLength => write!(
				f,
				"Frame isn't long enough to extract the necessary information"
			),
			Self::EmptyFrame(id) => write!(f, "Frame `{id}` is empty"),
			Self::MissingDataLengthIndicator => write!(
				f,
				"Encountered an encrypted frame without a data length indicator"
			),
			Self::V2InvalidTextEncoding => {
				write!(f, "ID3v2.2 only supports Latin-1 and UTF-16 encodings")
			},
			Self::BadTextEncoding(byte) => write!(f, "Found an invalid text encoding: {byte}"),

			// Compression
			#[cfg(feature = "id3v2_compression_support")]
			Self::Decompression(err) => write!(f, "Failed to decompress frame: {err}"),
			#[cfg(not(feature = "id3v2_compression_support"))]
			Self::CompressedFrameEncountered => write!(
				f,
				"Encountered a compressed ID3v2 frame, support is disabled"
			),
		}
	}
}

/// An error that arises while interacting with an ID3v2 tag
pub struct Id3v2Error {
	kind: Id3v2ErrorKind,
}

impl Id3v2Error {
	/// Create a new `Id3v2Error` from an [`Id3v2ErrorKind`]
	#[must_use]
	pub const fn new(kind: Id3v2ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`Id3v2ErrorKind`]
	pub fn kind(&self) -> &Id3v2ErrorKind {
		&self.kind
	}
}

impl Debug for Id3v2Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "ID3v2: {:?}", self.kind)
	}
}

impl Display for Id3v2Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "ID3v2: {}", self.kind)
	}
}

/// An error that arises while decoding a comment header (or other tag structure)
pub struct MalformedHeaderError {
	family: Option<TagFamily>,
	description: &'static str,
}

impl MalformedHeaderError {
	/// Create a `MalformedHeaderError` from a [`TagFamily`] and description
	///
	/// # Examples
	///
	/// ```rust
	/// use tagsniff::error::MalformedHeaderError;
	/// use tagsniff::tag::TagFamily;
	///
	/// // This error is bound to `TagFamily::VorbisComments`, which will be displayed when the error is formatted
	/// let error = MalformedHeaderError::new(TagFamily::VorbisComments, "Missing vendor string");
	/// ```
	#[must_use]
	pub const fn new(family: TagFamily, description: &'static str) -> Self {
		Self {
			family: Some(family),
			description,
		}
	}

	/// Create a `MalformedHeaderError` without binding it to a [`TagFamily`]
	pub fn from_description(description: &'static str) -> Self {
		Self {
			family: None,
			description,
		}
	}

	/// Returns the associated [`TagFamily`], if one exists
	///
	/// # Examples
	///
	/// ```rust
	/// use tagsniff::error::MalformedHeaderError;
	/// use tagsniff::tag::TagFamily;
	///
	/// let error = MalformedHeaderError::new(TagFamily::VorbisComments, "Missing vendor string");
	/// assert_eq!(error.family(), Some(TagFamily::VorbisComments));
	/// ```
	pub fn family(&self) -> Option<TagFamily> {
		self.family
	}

	/// Returns the error description
	pub fn description(&self) -> &str {
		self.description
	}
}

impl Debug for MalformedHeaderError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		if let Some(family) = self.family {
			write!(f, "{:?}: {:?}", family, self.description)
		} else {
			write!(f, "{:?}", self.description)
		}
	}
}

impl Display for MalformedHeaderError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		if let Some(family) = self.family {
			write!(f, "{:?}: {}", family, self.description)
		} else {
			write!(f, "{}", self.description)
		}
	}
}

/// Errors that could occur within tagsniff
pub struct TagSniffError {
	pub(crate) kind: ErrorKind,
}

impl TagSniffError {
	/// Create a `TagSniffError` from an [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use tagsniff::error::{ErrorKind, TagSniffError};
	///
	/// let unknown_version = TagSniffError::new(ErrorKind::UnknownVersion);
	/// ```
	#[must_use]
	pub const fn new(kind: ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use tagsniff::error::{ErrorKind, TagSniffError};
	///
	/// let error = TagSniffError::new(ErrorKind::UnknownContentType(String::from("image/png")));
	/// if let ErrorKind::UnknownContentType(label) = error.kind() {
	/// 	println!("Nothing can decode {label}");
	/// }
	/// ```
	pub fn kind(&self) -> &ErrorKind {
		&self.kind
	}
}

impl std::error::Error for TagSniffError {}

impl Debug for TagSniffError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.kind)
	}
}

impl From<Id3v2Error> for TagSniffError {
	fn from(input: Id3v2Error) -> Self {
		Self {
			kind: ErrorKind::Id3v2(input),
		}
	}
}

impl From<MalformedHeaderError> for TagSniffError {
	fn from(input: MalformedHeaderError) -> Self {
		Self {
			kind: ErrorKind::MalformedHeader(input),
		}
	}
}

impl From<PageError> for TagSniffError {
	fn from(input: PageError) -> Self {
		Self {
			kind: ErrorKind::OggPage(input),
		}
	}
}

impl From<std::io::Error> for TagSniffError {
	fn from(input: std::io::Error) -> Self {
		Self {
			kind: ErrorKind::Io(input),
		}
	}
}

impl From<std::string::FromUtf8Error> for TagSniffError {
	fn from(input: std::string::FromUtf8Error) -> Self {
		Self {
			kind: ErrorKind::StringFromUtf8(input),
		}
	}
}

impl From<std::str::Utf8Error> for TagSniffError {
	fn from(input: std::str::Utf8Error) -> Self {
		Self {
			kind: ErrorKind::StrFromUtf8(input),
		}
	}
}

impl From<TryReserveError> for TagSniffError {
	fn from(input: TryReserveError) -> Self {
		Self {
			kind: ErrorKind::Alloc(input),
		}
	}
}

impl Display for TagSniffError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.kind {
			// Conversions
			ErrorKind::OggPage(ref err) => write!(f, "{err}"),
			ErrorKind::StringFromUtf8(ref err) => write!(f, "{err}"),
			ErrorKind::StrFromUtf8(ref err) => write!(f, "{err}"),
			ErrorKind::Io(ref err) => write!(f, "{err}"),
			ErrorKind::Alloc(ref err) => write!(f, "{err}"),

			ErrorKind::UnknownContentType(ref label) => {
				write!(f, "No decoder is registered for content type \"{label}\"")
			},
			ErrorKind::UnknownVersion => {
				write!(f, "Neither an ID3v2 nor an ID3v1 tag could be found")
			},
			ErrorKind::MalformedHeader(ref header_err) => write!(f, "{header_err}"),
			ErrorKind::FakeTag => write!(f, "Reading: Expected a tag, found invalid data"),
			ErrorKind::TextDecode(message) => write!(f, "Text decoding: {message}"),
			ErrorKind::Id3v2(ref id3v2_err) => write!(f, "{id3v2_err}"),

			ErrorKind::TooMuchData => {
				write!(f, "Attempted to read an abnormally large amount of data")
			},
			ErrorKind::SizeMismatch => write!(
				f,
				"Encountered an invalid item size, either too big or too small to be valid"
			),
		}
	}
}
