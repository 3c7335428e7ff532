use super::constants::{GENRES, ID3V1_TAG_MARKER};
use super::tag::Id3v1Tag;
use crate::error::Result;
use crate::macros::err;
use crate::util::text::latin1_decode;

impl Id3v1Tag {
	/// Parse a complete 128 byte ID3v1 tag, including the `TAG` marker
	pub(crate) fn parse(reader: [u8; 128]) -> Result<Self> {
		if reader[..3] != ID3V1_TAG_MARKER {
			err!(FakeTag);
		}

		let mut tag = Self::default();
		let reader = &reader[3..];

		tag.title = decode_text(&reader[..30]);
		tag.artist = decode_text(&reader[30..60]);
		tag.album = decode_text(&reader[60..90]);
		tag.year = decode_text(&reader[90..94]);

		// The comment is 30 bytes in ID3v1 and 28 in ID3v1.1, where it is followed by a NUL and a
		// non-zero track number.
		let range = if reader[122] == 0 && reader[123] != 0 {
			tag.track_number = Some(reader[123]);

			94_usize..122
		} else {
			94..124
		};

		tag.comment = decode_text(&reader[range]);

		if usize::from(reader[124]) < GENRES.len() {
			tag.genre = Some(reader[124]);
		}

		Ok(tag)
	}
}

fn decode_text(data: &[u8]) -> Option<String> {
	let mut first_null_pos = data.len();
	if let Some(null_pos) = data.iter().position(|&b| b == 0) {
		if null_pos == 0 {
			return None;
		}

		if data[null_pos..].iter().any(|b| *b != b'\0') {
			log::warn!("ID3v1 text field contains trailing junk, skipping");
		}

		first_null_pos = null_pos;
	}

	Some(latin1_decode(&data[..first_null_pos]))
}
