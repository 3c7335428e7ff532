//! Content-based tag reading
//!
//! A [`Probe`] is the full pipeline: the content type of a source is detected (or provided), its
//! decoder is looked up in a [`FormatRegistry`], and the decoded tag is returned as [`Metadata`].
//!
//! [`parse`], [`parse_stream`], and [`parse_path`] are shorthands for the common cases.

use crate::config::ParseOptions;
use crate::error::Result;
use crate::macros::err;
use crate::metadata::Metadata;
use crate::registry::FormatRegistry;
use crate::sniff::{ContentType, detect_with_options};
use crate::source::{SeekableSource, ensure_seekable, ensure_seekable_stream};

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

/// A content-based tag reader
///
/// ## Usage
///
/// By default, the content type is detected from the first bytes of the reader, and the decoder
/// comes from the default registry (see [`crate::registry`]).
///
/// ```rust
/// # fn main() -> tagsniff::error::Result<()> {
/// use std::io::Cursor;
/// use tagsniff::probe::Probe;
/// use tagsniff::sniff::ContentType;
///
/// let mut tag = vec![0; 128];
/// tag[..3].copy_from_slice(b"TAG");
/// tag[3..6].copy_from_slice(b"Foo");
///
/// // An ID3v1 tag preceded by a single MPEG frame header
/// let mut content = vec![0xFF, 0xFB, 0x90, 0x64];
/// content.extend(tag);
///
/// let probe = Probe::new(Cursor::new(content)).sniff()?;
/// assert_eq!(probe.content_type(), Some(&ContentType::MPEG));
///
/// let metadata = probe.parse()?;
/// assert_eq!(metadata.title(), "Foo");
/// # Ok(()) }
/// ```
///
/// When the content type is already known, detection can be skipped. Any label can be used, as
/// long as it's registered.
///
/// ```rust
/// # fn main() -> tagsniff::error::Result<()> {
/// use std::io::Cursor;
/// use tagsniff::error::ErrorKind;
/// use tagsniff::probe::Probe;
/// use tagsniff::registry::{Decoder, FormatRegistry};
///
/// let mut registry = FormatRegistry::new();
/// registry.register("audio/x-mine", Decoder::VorbisComments);
///
/// let err = Probe::new(Cursor::new(b"not a FLAC stream"))
/// 	.set_content_type("audio/x-mine")
/// 	.registry(&registry)
/// 	.parse()
/// 	.unwrap_err();
///
/// // The Vorbis comments decoder was used, but there are no comments to be found
/// assert!(matches!(err.kind(), ErrorKind::MalformedHeader(_)));
/// # Ok(()) }
/// ```
pub struct Probe<'r, R: Read> {
	inner: R,
	options: Option<ParseOptions>,
	content_type: Option<ContentType>,
	registry: Option<&'r FormatRegistry>,
}

impl<'r, R: Read> Probe<'r, R> {
	/// Create a new `Probe`
	///
	/// Before creating a `Probe`, consider wrapping it in a [`BufReader`] for better
	/// performance.
	///
	/// # Examples
	///
	/// ```rust,no_run
	/// use std::fs::File;
	/// use std::io::BufReader;
	/// use tagsniff::probe::Probe;
	///
	/// # fn main() -> tagsniff::error::Result<()> {
	/// let file = File::open("song.flac")?;
	/// let reader = BufReader::new(file);
	///
	/// let probe = Probe::new(reader);
	/// # Ok(()) }
	/// ```
	#[must_use]
	pub const fn new(reader: R) -> Self {
		Self {
			inner: reader,
			options: None,
			content_type: None,
			registry: None,
		}
	}

	/// Returns the current [`ContentType`]
	///
	/// This is `None` until it is either detected with [`Probe::sniff`], or provided with
	/// [`Probe::set_content_type`].
	pub fn content_type(&self) -> Option<&ContentType> {
		self.content_type.as_ref()
	}

	/// Set the content type, skipping detection
	///
	/// # Examples
	///
	/// ```rust
	/// use tagsniff::probe::Probe;
	/// use tagsniff::sniff::ContentType;
	///
	/// # let reader = std::io::Cursor::new(&[]);
	/// let probe = Probe::new(reader).set_content_type(ContentType::OGG);
	/// assert_eq!(probe.content_type(), Some(&ContentType::OGG));
	/// ```
	#[must_use]
	pub fn set_content_type(mut self, content_type: impl Into<ContentType>) -> Self {
		self.content_type = Some(content_type.into());
		self
	}

	/// Set the [`ParseOptions`] for the Probe
	///
	/// # Examples
	///
	/// ```rust
	/// use tagsniff::config::{ParseOptions, ParsingMode};
	/// use tagsniff::probe::Probe;
	///
	/// # let reader = std::io::Cursor::new(&[]);
	/// let options = ParseOptions::new().parsing_mode(ParsingMode::Strict);
	///
	/// let probe = Probe::new(reader).options(options);
	/// ```
	#[must_use]
	pub fn options(mut self, options: ParseOptions) -> Self {
		self.options = Some(options);
		self
	}

	/// Use `registry` to look up decoders, rather than the default registry
	#[must_use]
	pub fn registry(mut self, registry: &'r FormatRegistry) -> Self {
		self.registry = Some(registry);
		self
	}

	/// Extract the reader
	pub fn into_inner(self) -> R {
		self.inner
	}

	/// Parse a reader that can't be repositioned
	///
	/// The reader is read into memory in its entirety first.
	///
	/// # Errors
	///
	/// * Reading from the reader fails
	/// * See [`Probe::parse`]
	pub fn parse_stream(self) -> Result<Metadata> {
		let options = self.options.unwrap_or_default();
		let mut source = ensure_seekable_stream(self.inner)?;

		decode(&mut source, self.content_type, options, self.registry)
	}
}

impl Probe<'static, BufReader<File>> {
	/// Opens a file for reading
	///
	/// # Errors
	///
	/// * `path` does not exist
	pub fn open<P>(path: P) -> Result<Self>
	where
		P: AsRef<Path>,
	{
		let path = path.as_ref();
		log::debug!("Probe: Opening `{}` for reading", path.display());

		Ok(Self::new(BufReader::new(File::open(path)?)))
	}
}

impl<R: Read + Seek> Probe<'_, R> {
	/// Detect the [`ContentType`] from the start of the reader
	///
	/// On success, the content type will be replaced, and the reader rewound.
	///
	/// NOTE: The detection of MPEG streams preceded by junk is influenced by
	/// [`ParseOptions::max_junk_bytes`]. Be sure to set it with [`Probe::options()`] prior to
	/// calling this method.
	///
	/// # Errors
	///
	/// The reader can't be read or repositioned
	pub fn sniff(mut self) -> Result<Self> {
		let options = self.options.unwrap_or_default();

		self.inner.rewind()?;
		let content_type = detect_with_options(&mut self.inner, options)?;
		self.inner.rewind()?;

		log::debug!("Probe: Detected content type `{content_type}`");

		self.content_type = Some(content_type);
		Ok(self)
	}

	/// Parse the tag of the reader
	///
	/// If no content type was set, it will be detected first.
	///
	/// # Errors
	///
	/// * The reader can't be read or repositioned
	/// * [`ErrorKind::UnknownContentType`](crate::error::ErrorKind::UnknownContentType), no decoder is
	///   registered for the content type
	/// * Any error from the decoder, see [`Decoder::decode`](crate::registry::Decoder::decode)
	pub fn parse(mut self) -> Result<Metadata> {
		let options = self.options.unwrap_or_default();
		let mut source = ensure_seekable(&mut self.inner)?;

		decode(&mut source, self.content_type, options, self.registry)
	}
}

fn decode(
	source: &mut SeekableSource<'_>,
	content_type: Option<ContentType>,
	options: ParseOptions,
	registry: Option<&FormatRegistry>,
) -> Result<Metadata> {
	let content_type = match content_type {
		Some(content_type) => {
			log::debug!("Probe: Using provided content type `{content_type}`");
			content_type
		},
		None => {
			source.rewind()?;
			let content_type = detect_with_options(&mut *source, options)?;
			log::debug!("Probe: Detected content type `{content_type}`");
			content_type
		},
	};

	source.rewind()?;

	let decoder = match registry {
		Some(registry) => registry.lookup(content_type.as_str()),
		None => crate::registry::lookup(content_type.as_str()),
	};

	let Some(decoder) = decoder else {
		err!(UnknownContentType(content_type.as_str().to_owned()));
	};

	log::debug!("Probe: Decoding with the {} decoder", decoder.name());
	decoder.decode(source, options)
}

/// Parse the tag of a seekable reader
///
/// The reader may be at any position, it is always read from the start.
///
/// # Errors
///
/// See [`Probe::parse`]
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
/// use tagsniff::error::ErrorKind;
///
/// let mut reader = Cursor::new(Vec::new());
///
/// // Nothing to detect, so the content type is `application/octet-stream`
/// let err = tagsniff::parse(&mut reader).unwrap_err();
/// assert!(matches!(err.kind(), ErrorKind::UnknownContentType(label) if label == "application/octet-stream"));
/// ```
pub fn parse<R>(reader: &mut R) -> Result<Metadata>
where
	R: Read + Seek,
{
	Probe::new(reader).parse()
}

/// Parse the tag of a reader that can't be repositioned
///
/// # Errors
///
/// See [`Probe::parse_stream`]
pub fn parse_stream<R>(reader: R) -> Result<Metadata>
where
	R: Read,
{
	Probe::new(reader).parse_stream()
}

/// Parse the tag of the file at `path`
///
/// # Errors
///
/// * See [`Probe::open`]
/// * See [`Probe::parse`]
///
/// # Examples
///
/// ```rust,no_run
/// # fn main() -> tagsniff::error::Result<()> {
/// let metadata = tagsniff::parse_path("song.ogg")?;
/// println!("{metadata}");
/// # Ok(()) }
/// ```
pub fn parse_path<P>(path: P) -> Result<Metadata>
where
	P: AsRef<Path>,
{
	Probe::open(path)?.parse()
}
