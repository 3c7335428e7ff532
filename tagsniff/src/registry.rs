//! Mapping content types to tag decoders
//!
//! Every parse looks its detected [`ContentType`] up in a [`FormatRegistry`]. Unless a
//! [`Probe`](crate::probe::Probe) is given its own registry, the process-wide default is used, which
//! starts out with the following table:
//!
//! | Label                                                  | Decoder                      |
//! |--------------------------------------------------------|------------------------------|
//! | `audio/mpeg`, `audio/MPA`, `audio/mpa-robust`          | [`Decoder::Id3`]             |
//! | `audio/vnd.wave`, `audio/wav`, `audio/wave`, `audio/x-wav` | [`Decoder::Id3`]         |
//! | `audio/x-aiff`, `audio/aiff`                           | [`Decoder::Id3`]             |
//! | `audio/ogg`, `audio/opus`, `audio/flac`, `audio/vorbis`| [`Decoder::VorbisComments`]  |
//!
//! The default registry can be extended at any time with [`register`]. Lookups are concurrent,
//! registrations are serialized.

use crate::config::ParseOptions;
use crate::error::Result;
use crate::metadata::Metadata;
use crate::sniff::ContentType;
use crate::source::SeekableSource;
use crate::tag::TagFamily;

use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::sync::{OnceLock, PoisonError, RwLock};

/// A custom tag decoder
///
/// This allows for tag families that tagsniff doesn't support itself. Registering one with
/// [`register_custom_decoder`] makes it available to every parse of its content type.
///
/// # Examples
///
/// ```rust
/// use tagsniff::config::ParseOptions;
/// use tagsniff::metadata::Metadata;
/// use tagsniff::registry::TagDecoder;
/// use tagsniff::source::SeekableSource;
///
/// #[derive(Default)]
/// struct NothingDecoder;
///
/// impl TagDecoder for NothingDecoder {
/// 	fn name(&self) -> &'static str {
/// 		"Nothing"
/// 	}
///
/// 	fn decode(
/// 		&self,
/// 		_source: &mut SeekableSource<'_>,
/// 		_parse_options: ParseOptions,
/// 	) -> tagsniff::error::Result<Metadata> {
/// 		Ok(Metadata::default())
/// 	}
/// }
///
/// tagsniff::registry::register_custom_decoder::<NothingDecoder>("audio/x-nothing");
/// ```
pub trait TagDecoder: Send + Sync {
	/// A name for the decoder, used in logs
	fn name(&self) -> &'static str;

	/// Decode the tag of `source`
	///
	/// `source` is positioned at offset 0, and may be repositioned freely.
	///
	/// # Errors
	///
	/// The decoder is free to return any error
	fn decode(
		&self,
		source: &mut SeekableSource<'_>,
		parse_options: ParseOptions,
	) -> Result<Metadata>;
}

/// A tag decoder
#[derive(Copy, Clone)]
#[non_exhaustive]
pub enum Decoder {
	/// ID3v2, falling back to ID3v1
	Id3,
	/// Vorbis comments in Ogg or FLAC streams
	VorbisComments,
	/// A caller provided decoder
	Custom(&'static dyn TagDecoder),
}

impl Decoder {
	/// A name for the decoder, used in logs
	pub fn name(&self) -> &'static str {
		match self {
			Decoder::Id3 => "ID3",
			Decoder::VorbisComments => "Vorbis Comments",
			Decoder::Custom(decoder) => decoder.name(),
		}
	}

	/// The [`TagFamily`] the decoder reads, if it's one of tagsniff's own
	pub fn family(&self) -> Option<TagFamily> {
		match self {
			Decoder::Id3 => Some(TagFamily::Id3),
			Decoder::VorbisComments => Some(TagFamily::VorbisComments),
			Decoder::Custom(_) => None,
		}
	}

	/// Decode the tag of `source` into [`Metadata`]
	///
	/// # Errors
	///
	/// See [`ErrorKind`](crate::error::ErrorKind), depending on the family:
	///
	/// * `Id3`: [`UnknownVersion`](crate::error::ErrorKind::UnknownVersion) if no tag is found
	/// * `VorbisComments`: [`MalformedHeader`](crate::error::ErrorKind::MalformedHeader) if no
	///   valid comment header is found
	pub fn decode(
		&self,
		source: &mut SeekableSource<'_>,
		parse_options: ParseOptions,
	) -> Result<Metadata> {
		match self {
			Decoder::Id3 => crate::id3::decode(source, parse_options),
			Decoder::VorbisComments => crate::ogg::decode(source, parse_options),
			Decoder::Custom(decoder) => decoder.decode(source, parse_options),
		}
	}
}

impl Debug for Decoder {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Decoder::Id3 => f.write_str("Id3"),
			Decoder::VorbisComments => f.write_str("VorbisComments"),
			Decoder::Custom(decoder) => f.debug_tuple("Custom").field(&decoder.name()).finish(),
		}
	}
}

impl PartialEq for Decoder {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Decoder::Id3, Decoder::Id3) | (Decoder::VorbisComments, Decoder::VorbisComments) => {
				true
			},
			(Decoder::Custom(a), Decoder::Custom(b)) => std::ptr::addr_eq(*a, *b),
			_ => false,
		}
	}
}

impl Eq for Decoder {}

/// A mapping of content types to decoders
///
/// See the [module docs](self) for the default table.
#[derive(Clone, Debug)]
pub struct FormatRegistry {
	decoders: HashMap<ContentType, Decoder>,
}

impl FormatRegistry {
	/// Create an empty registry
	///
	/// Use [`FormatRegistry::default`] for one with the default table.
	pub fn new() -> Self {
		Self {
			decoders: HashMap::new(),
		}
	}

	/// Get the decoder for `label`
	///
	/// Labels are compared exactly.
	///
	/// # Examples
	///
	/// ```rust
	/// use tagsniff::registry::{Decoder, FormatRegistry};
	///
	/// let registry = FormatRegistry::default();
	/// assert_eq!(registry.lookup("audio/ogg"), Some(Decoder::VorbisComments));
	/// assert_eq!(registry.lookup("audio/OGG"), None);
	/// ```
	pub fn lookup(&self, label: &str) -> Option<Decoder> {
		self.decoders.get(label).copied()
	}

	/// Map `label` to `decoder`, returning the decoder it replaced
	///
	/// # Examples
	///
	/// ```rust
	/// use tagsniff::registry::{Decoder, FormatRegistry};
	///
	/// let mut registry = FormatRegistry::new();
	/// assert_eq!(registry.register("audio/custom", Decoder::Id3), None);
	/// assert_eq!(
	/// 	registry.register("audio/custom", Decoder::VorbisComments),
	/// 	Some(Decoder::Id3)
	/// );
	/// ```
	pub fn register(&mut self, label: impl Into<ContentType>, decoder: Decoder) -> Option<Decoder> {
		self.decoders.insert(label.into(), decoder)
	}

	/// The number of registered labels
	pub fn len(&self) -> usize {
		self.decoders.len()
	}

	/// Whether the registry is empty
	pub fn is_empty(&self) -> bool {
		self.decoders.is_empty()
	}
}

impl Default for FormatRegistry {
	fn default() -> Self {
		const ID3: &[&str] = &[
			"audio/mpeg",
			"audio/MPA",
			"audio/mpa-robust",
			"audio/vnd.wave",
			"audio/wav",
			"audio/wave",
			"audio/x-wav",
			"audio/x-aiff",
			"audio/aiff",
		];
		const VORBIS_COMMENTS: &[&str] = &["audio/ogg", "audio/opus", "audio/flac", "audio/vorbis"];

		let mut registry = Self::new();
		for label in ID3 {
			registry.register(*label, Decoder::Id3);
		}

		for label in VORBIS_COMMENTS {
			registry.register(*label, Decoder::VorbisComments);
		}

		registry
	}
}

fn global_registry() -> &'static RwLock<FormatRegistry> {
	static INSTANCE: OnceLock<RwLock<FormatRegistry>> = OnceLock::new();
	INSTANCE.get_or_init(|| RwLock::new(FormatRegistry::default()))
}

/// Get the decoder for `label` from the default registry
pub fn lookup(label: &str) -> Option<Decoder> {
	// A panicking writer can't leave the map in an invalid state, so poisoning is ignored
	let registry = global_registry()
		.read()
		.unwrap_or_else(PoisonError::into_inner);

	registry.lookup(label)
}

/// Map `label` to `decoder` in the default registry, returning the decoder it replaced
///
/// This affects every parse that happens afterwards, on every thread.
///
/// # Examples
///
/// ```rust
/// use tagsniff::registry::{self, Decoder};
///
/// // Some encoders use this label for FLAC
/// registry::register("audio/x-flac", Decoder::VorbisComments);
/// assert_eq!(registry::lookup("audio/x-flac"), Some(Decoder::VorbisComments));
/// ```
pub fn register(label: impl Into<ContentType>, decoder: Decoder) -> Option<Decoder> {
	let mut registry = global_registry()
		.write()
		.unwrap_or_else(PoisonError::into_inner);

	registry.register(label, decoder)
}

/// Register a custom [`TagDecoder`] in the default registry
///
/// The decoder lives for the rest of the program, registering the same type multiple times
/// creates multiple instances.
pub fn register_custom_decoder<T: TagDecoder + Default + 'static>(
	label: impl Into<ContentType>,
) -> Option<Decoder> {
	let decoder: Box<dyn TagDecoder> = Box::new(T::default());
	register(label, Decoder::Custom(Box::leak(decoder)))
}
