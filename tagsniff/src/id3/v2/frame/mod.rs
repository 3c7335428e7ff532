pub(super) mod content;
pub(super) mod header;
pub(super) mod read;

/// The frames that make up a [`TagView`](crate::tag::TagView)
///
/// Everything else in a tag is skipped while reading.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum FrameKind {
	Title,
	Artist,
	Album,
	/// `TYER`, the year only
	Year,
	/// `TDRC`, an ISO 8601 timestamp
	RecordingTime,
	Genre,
	Track,
	Comment,
}

impl FrameKind {
	/// Map an ID3v2.3/4 frame ID
	///
	/// ID3v2.2 IDs are upgraded before they get here.
	pub(crate) fn from_id(id: &str) -> Option<Self> {
		match id {
			"TIT2" => Some(Self::Title),
			"TPE1" => Some(Self::Artist),
			"TALB" => Some(Self::Album),
			"TYER" => Some(Self::Year),
			"TDRC" => Some(Self::RecordingTime),
			"TCON" => Some(Self::Genre),
			"TRCK" => Some(Self::Track),
			"COMM" => Some(Self::Comment),
			_ => None,
		}
	}
}

/// A frame that was read and decoded
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Frame {
	pub(crate) kind: FrameKind,
	pub(crate) value: String,
}

/// Flags that apply to a single frame
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub(crate) struct FrameFlags {
	/// A group identifier byte precedes the content
	pub(crate) grouping_identity: bool,
	/// The content is zlib compressed
	pub(crate) compression: bool,
	/// An encryption method byte precedes the content
	pub(crate) encryption: bool,
	/// The content is unsynchronised (ID3v2.4 only)
	pub(crate) unsynchronisation: bool,
	/// A synchsafe data length precedes the content (ID3v2.4 only)
	pub(crate) data_length_indicator: bool,
}

impl FrameFlags {
	/// Parse the flags from an ID3v2.4 frame
	pub(crate) fn parse_id3v24(flags: u16) -> Self {
		FrameFlags {
			grouping_identity: flags & 0x0040 == 0x0040,
			compression: flags & 0x0008 == 0x0008,
			encryption: flags & 0x0004 == 0x0004,
			unsynchronisation: flags & 0x0002 == 0x0002,
			data_length_indicator: flags & 0x0001 == 0x0001,
		}
	}

	/// Parse the flags from an ID3v2.3 frame
	pub(crate) fn parse_id3v23(flags: u16) -> Self {
		FrameFlags {
			grouping_identity: flags & 0x0020 == 0x0020,
			compression: flags & 0x0080 == 0x0080,
			encryption: flags & 0x0040 == 0x0040,
			unsynchronisation: false,
			data_length_indicator: false,
		}
	}
}
