use super::block::{BLOCK_ID_STREAMINFO, BLOCK_ID_VORBIS_COMMENTS, Block};
use crate::config::{ParseOptions, ParsingMode};
use crate::error::{ErrorKind, Result, TagSniffError};
use crate::id3::v2::Id3v2Header;
use crate::macros::{malformed_err, parse_mode_choice};
use crate::ogg::read::read_comments;
use crate::ogg::tag::VorbisComments;

use std::io::{Cursor, Read, Seek, SeekFrom};

const STREAMINFO_SIZE: u32 = 34;

// Skip a leading ID3v2 tag, leaving the reader at the first byte after it
fn skip_id3v2<R>(data: &mut R) -> Result<()>
where
	R: Read + Seek,
{
	let start = data.stream_position()?;

	match Id3v2Header::parse(data) {
		Ok(header) => {
			log::warn!("Encountered an ID3v2 tag preceding the FLAC stream, skipping");
			data.seek(SeekFrom::Start(start + header.full_tag_size()))?;
		},
		Err(err) => {
			log::warn!("Found an invalid ID3v2 header, ignoring: {}", err);
			data.seek(SeekFrom::Start(start))?;
		},
	}

	Ok(())
}

// Search for the stream marker within the junk window, leaving the reader after it
fn find_stream_marker<R>(data: &mut R, parse_options: ParseOptions) -> Result<()>
where
	R: Read + Seek,
{
	let start = data.stream_position()?;

	let mut window = Vec::new();
	data.by_ref()
		.take(parse_options.max_junk_bytes as u64 + 4)
		.read_to_end(&mut window)?;

	let Some(offset) = window.windows(4).position(|marker| marker == b"fLaC") else {
		malformed_err!(@BAIL VorbisComments, "FLAC: File missing \"fLaC\" stream marker");
	};

	if offset > 0 {
		log::warn!("FLAC: Found the stream marker preceded by {offset} bytes of junk");
	}

	data.seek(SeekFrom::Start(start + offset as u64 + 4))?;
	Ok(())
}

fn is_eof(err: &TagSniffError) -> bool {
	matches!(err.kind(), ErrorKind::Io(e) if e.kind() == std::io::ErrorKind::UnexpectedEof)
}

/// Read the `VORBIS_COMMENT` block of a native FLAC stream
pub(crate) fn read_from<R>(data: &mut R, parse_options: ParseOptions) -> Result<VorbisComments>
where
	R: Read + Seek,
{
	let parse_mode = parse_options.parsing_mode;

	let mut marker = [0; 3];
	let marker_len = std::io::copy(
		&mut data.by_ref().take(3),
		&mut Cursor::new(&mut marker[..]),
	)?;
	data.seek(SeekFrom::Current(-(marker_len as i64)))?;

	// It is possible for a FLAC file to contain an ID3v2 tag
	if &marker == b"ID3" {
		skip_id3v2(data)?;
	}

	find_stream_marker(data, parse_options)?;

	let mut vorbis_comments = None;
	let mut first_block = true;
	let mut last_block = false;

	while !last_block {
		let block = match Block::read(data, |block_type| block_type == BLOCK_ID_VORBIS_COMMENTS) {
			Ok(block) => block,
			Err(err) if is_eof(&err) => {
				parse_mode_choice!(
					parse_mode,
					STRICT: malformed_err!(@BAIL VorbisComments, "FLAC: Stream ended before the last metadata block"),
					DEFAULT: {
						log::warn!("FLAC: Stream ended before the last metadata block");
						break;
					}
				);
			},
			Err(err) => return Err(err),
		};
		last_block = block.last;

		if std::mem::take(&mut first_block)
			&& (block.ty != BLOCK_ID_STREAMINFO || block.size != STREAMINFO_SIZE)
			&& parse_mode == ParsingMode::Strict
		{
			malformed_err!(@BAIL VorbisComments, "FLAC: File missing mandatory STREAMINFO block");
		}

		if block.ty != BLOCK_ID_VORBIS_COMMENTS {
			continue;
		}

		log::debug!("Encountered a Vorbis Comments block, parsing");

		// Streams are only allowed a single VORBIS_COMMENT block, otherwise the
		// last one wins
		if vorbis_comments.is_some() && parse_mode == ParsingMode::Strict {
			malformed_err!(@BAIL VorbisComments, "FLAC: Streams are only allowed one Vorbis Comments block");
		}

		vorbis_comments = Some(read_comments(
			&mut &*block.content,
			block.content.len() as u64,
			parse_options,
		)?);
	}

	vorbis_comments
		.ok_or_else(|| malformed_err!(VorbisComments, "FLAC: Stream has no Vorbis Comments block"))
}
