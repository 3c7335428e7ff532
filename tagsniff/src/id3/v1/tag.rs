use super::constants::{GENRES, ID3V1_TAG_SIZE};
use crate::tag::TagView;

use std::borrow::Cow;

/// A decoded ID3v1 tag
///
/// Text is truncated at its first NUL byte. Empty fields are `None`.
#[derive(Default, Debug, PartialEq, Eq, Clone)]
pub(crate) struct Id3v1Tag {
	pub(crate) title: Option<String>,
	pub(crate) artist: Option<String>,
	pub(crate) album: Option<String>,
	/// The raw (up to) 4 character year
	pub(crate) year: Option<String>,
	pub(crate) comment: Option<String>,
	/// Only available in ID3v1.1
	pub(crate) track_number: Option<u8>,
	/// An index into the genre list
	pub(crate) genre: Option<u8>,
}

impl TagView for Id3v1Tag {
	fn title(&self) -> Option<&str> {
		self.title.as_deref()
	}

	fn artist(&self) -> Option<&str> {
		self.artist.as_deref()
	}

	fn album(&self) -> Option<&str> {
		self.album.as_deref()
	}

	fn year(&self) -> Option<&str> {
		self.year.as_deref()
	}

	fn genre(&self) -> Option<&str> {
		self.genre
			.and_then(|genre| GENRES.get(usize::from(genre)))
			.copied()
	}

	fn comments(&self) -> &[String] {
		self.comment.as_slice()
	}

	fn track_raw(&self) -> Option<Cow<'_, str>> {
		self.track_number
			.map(|track_number| Cow::Owned(track_number.to_string()))
	}

	fn version(&self) -> Cow<'static, str> {
		if self.track_number.is_some() {
			Cow::Borrowed("1.1")
		} else {
			Cow::Borrowed("1.0")
		}
	}

	fn size(&self) -> u32 {
		ID3V1_TAG_SIZE
	}
}
