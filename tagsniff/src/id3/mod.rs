//! ID3 decoding
//!
//! An ID3v2 tag is always preferred. Only when there is none (or it's unreadable) is an ID3v1 tag
//! looked for at the end of the stream.

pub(crate) mod v1;
pub(crate) mod v2;

use crate::config::ParseOptions;
use crate::error::Result;
use crate::iff::Chunks;
use crate::macros::err;
use crate::metadata::Metadata;
use crate::normalize;
use crate::source::SeekableSource;
use v1::Id3v1Tag;
use v1::constants::{ID3V1_TAG_MARKER, ID3V1_TAG_SIZE};
use v2::read::parse_id3v2;
use v2::{Id3v2Header, Id3v2Tag};

use std::io::{Read, Seek, SeekFrom};

use byteorder::{BigEndian, ByteOrder, LittleEndian};

/// Decode the ID3 tag of `data`
///
/// This is the pipeline behind [`Decoder::Id3`](crate::registry::Decoder::Id3).
pub(crate) fn decode(data: &mut SeekableSource<'_>, parse_options: ParseOptions) -> Result<Metadata> {
	data.rewind()?;
	if let Some(id3v2) = find_id3v2(data, parse_options)? {
		return Ok(normalize::from_tag_view(&id3v2));
	}

	if parse_options.read_id3v1 {
		data.rewind()?;
		if let Some(id3v1) = find_id3v1(data)? {
			return Ok(normalize::from_tag_view(&id3v1));
		}
	}

	err!(UnknownVersion)
}

/// Search for an ID3v2 tag, either at the start of `data` or within a RIFF/FORM container
///
/// An invalid tag header is treated as there being no tag.
pub(crate) fn find_id3v2<R>(data: &mut R, parse_options: ParseOptions) -> Result<Option<Id3v2Tag>>
where
	R: Read + Seek,
{
	log::debug!("Searching for an ID3v2 tag");

	let start = data.stream_position()?;

	let mut marker = [0; 12];
	let marker_len = std::io::copy(
		&mut data.by_ref().take(marker.len() as u64),
		&mut std::io::Cursor::new(&mut marker[..]),
	)? as usize;
	let marker = &marker[..marker_len];

	data.seek(SeekFrom::Start(start))?;

	match marker {
		[b'I', b'D', b'3', ..] => read_id3v2(data, parse_options),
		[b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'A', b'V', b'E'] => {
			find_in_chunks::<_, LittleEndian>(data, parse_options)
		},
		[b'F', b'O', b'R', b'M', _, _, _, _, b'A', b'I', b'F', b'F' | b'C'] => {
			find_in_chunks::<_, BigEndian>(data, parse_options)
		},
		_ => Ok(None),
	}
}

fn read_id3v2<R>(data: &mut R, parse_options: ParseOptions) -> Result<Option<Id3v2Tag>>
where
	R: Read,
{
	let header = match Id3v2Header::parse(data) {
		Ok(header) => header,
		Err(err) => {
			log::warn!("Found an invalid ID3v2 header, ignoring the tag: {}", err);
			return Ok(None);
		},
	};

	parse_id3v2(data, header, parse_options).map(Some)
}

fn find_in_chunks<R, B>(data: &mut R, parse_options: ParseOptions) -> Result<Option<Id3v2Tag>>
where
	R: Read + Seek,
	B: ByteOrder,
{
	let start = data.stream_position()?;
	let stream_len = data.seek(SeekFrom::End(0))?.saturating_sub(start);
	data.seek(SeekFrom::Start(start))?;

	// The container header is 12 bytes, with the size of everything after the first 8
	let mut container_size = {
		let mut header = [0; 12];
		data.read_exact(&mut header)?;
		u64::from(B::read_u32(&header[4..8])).saturating_sub(4)
	};

	// Streaming writers leave the size unset (0xFFFFFFFF), and truncated files lie about it
	let available = stream_len.saturating_sub(12);
	if container_size > available {
		log::warn!(
			"Container size ({container_size}) exceeds the stream, only walking {available} bytes"
		);
		container_size = available;
	}

	let mut chunks = Chunks::<B>::new(container_size);
	while chunks.next(data)? {
		match &chunks.fourcc {
			b"ID3 " | b"id3 " => {
				log::debug!("Found an ID3v2 chunk, size: {}", chunks.size);

				let content = chunks.content(data)?;
				return read_id3v2(&mut &content[..], parse_options);
			},
			_ => chunks.skip(data)?,
		}
	}

	Ok(None)
}

/// Read the ID3v1 tag in the last 128 bytes of `data`, if there is one
pub(crate) fn find_id3v1<R>(data: &mut R) -> Result<Option<Id3v1Tag>>
where
	R: Read + Seek,
{
	log::debug!("Searching for an ID3v1 tag");

	// Reader is too small to contain an ID3v1 tag
	if data.seek(SeekFrom::End(-i64::from(ID3V1_TAG_SIZE))).is_err() {
		return Ok(None);
	}

	let mut id3v1_tag = [0; ID3V1_TAG_SIZE as usize];
	data.read_exact(&mut id3v1_tag)?;

	if id3v1_tag[..3] != ID3V1_TAG_MARKER {
		return Ok(None);
	}

	log::debug!("Found an ID3v1 tag, parsing");

	Id3v1Tag::parse(id3v1_tag).map(Some)
}
