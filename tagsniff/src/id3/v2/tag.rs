use super::frame::{Frame, FrameKind};
use super::header::{Id3v2Header, Id3v2Version};
use crate::tag::TagView;

use std::borrow::Cow;

/// The frames of an ID3v2 tag that make up a [`TagView`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Id3v2Tag {
	pub(crate) version: Id3v2Version,
	pub(crate) revision: u8,
	/// The size of the tag, excluding the header and footer
	pub(crate) size: u32,
	title: Option<String>,
	artist: Option<String>,
	album: Option<String>,
	year: Option<String>,
	recording_time: Option<String>,
	genre: Option<String>,
	track: Option<String>,
	comments: Vec<String>,
}

impl Id3v2Tag {
	pub(crate) fn new(header: &Id3v2Header) -> Self {
		Self {
			version: header.version,
			revision: header.revision,
			size: header.size,
			title: None,
			artist: None,
			album: None,
			year: None,
			recording_time: None,
			genre: None,
			track: None,
			comments: Vec::new(),
		}
	}

	/// Insert a frame, replacing any previous frame of the same kind
	///
	/// Comments are never replaced, and are kept in the order they were inserted.
	pub(crate) fn insert(&mut self, frame: Frame) {
		let slot = match frame.kind {
			FrameKind::Title => &mut self.title,
			FrameKind::Artist => &mut self.artist,
			FrameKind::Album => &mut self.album,
			FrameKind::Year => &mut self.year,
			FrameKind::RecordingTime => &mut self.recording_time,
			FrameKind::Genre => &mut self.genre,
			FrameKind::Track => &mut self.track,
			FrameKind::Comment => {
				self.comments.push(frame.value);
				return;
			},
		};

		if slot.replace(frame.value).is_some() {
			log::warn!(
				"Replaced a {:?} frame by a frame with the same ID",
				frame.kind
			);
		}
	}

	// ID3v2.4 text frames can hold multiple NUL separated values, only the first is used
	fn first_value<'a>(&self, value: &'a Option<String>) -> Option<&'a str> {
		let value = value.as_deref()?;
		match self.version {
			Id3v2Version::V4 => value.split('\0').next(),
			_ => Some(value),
		}
	}

	fn recording_year(&self) -> Option<&str> {
		self.first_value(&self.recording_time)
			.and_then(|timestamp| timestamp.split(['-', 'T']).next())
	}
}

impl TagView for Id3v2Tag {
	fn title(&self) -> Option<&str> {
		self.first_value(&self.title)
	}

	fn artist(&self) -> Option<&str> {
		self.first_value(&self.artist)
	}

	fn album(&self) -> Option<&str> {
		self.first_value(&self.album)
	}

	fn year(&self) -> Option<&str> {
		match self.version {
			Id3v2Version::V4 => self
				.recording_year()
				.or_else(|| self.first_value(&self.year)),
			_ => self
				.first_value(&self.year)
				.or_else(|| self.recording_year()),
		}
	}

	fn genre(&self) -> Option<&str> {
		self.first_value(&self.genre)
	}

	fn comments(&self) -> &[String] {
		&self.comments
	}

	fn track_raw(&self) -> Option<Cow<'_, str>> {
		self.first_value(&self.track).map(Cow::Borrowed)
	}

	fn version(&self) -> Cow<'static, str> {
		Cow::Owned(format!("2.{}.{}", self.version.major(), self.revision))
	}

	fn size(&self) -> u32 {
		self.size
	}
}
