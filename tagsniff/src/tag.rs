//! The raw tag view shared by the ID3 decoders
//!
//! Every ID3 version stores the same handful of fields in a different place. [`TagView`] is the
//! contract the ID3v1 and ID3v2 readers fulfill, so that [`normalize`](crate::normalize) can map
//! any of them into a [`Metadata`](crate::metadata::Metadata) the same way.

use std::borrow::Cow;

/// The families of tags that tagsniff can decode
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum TagFamily {
	/// ID3v2 (preferred) or ID3v1
	Id3,
	/// Vorbis comments, as found in OGG and FLAC streams
	VorbisComments,
}

/// A read-only view into a decoded ID3 tag
///
/// Text fields are reported as stored, apart from text decoding. Fields that aren't present in the
/// tag are `None`.
pub trait TagView {
	/// The title
	fn title(&self) -> Option<&str>;
	/// The artist
	fn artist(&self) -> Option<&str>;
	/// The album title
	fn album(&self) -> Option<&str>;
	/// The recording year, as stored
	fn year(&self) -> Option<&str>;
	/// The genre name
	fn genre(&self) -> Option<&str>;
	/// Every comment in the tag, in the order they were read
	fn comments(&self) -> &[String];
	/// The track number, as stored (ex. `"5"`, `"5/12"`)
	fn track_raw(&self) -> Option<Cow<'_, str>>;
	/// The version of the tag (ex. `"2.4.0"`, `"1.1"`)
	fn version(&self) -> Cow<'static, str>;
	/// The size of the tag in bytes
	///
	/// For ID3v2, this excludes the header and footer.
	fn size(&self) -> u32;
}
