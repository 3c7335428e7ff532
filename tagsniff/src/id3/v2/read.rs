use super::frame::read::ParsedFrame;
use super::header::Id3v2Header;
use super::synchsafe::UnsynchronizedStream;
use super::tag::Id3v2Tag;
use crate::config::{ParseOptions, ParsingMode};
use crate::error::Result;

use std::io::Read;

/// Read the frames of a tag whose header was just parsed from `bytes`
///
/// The entire tag is consumed, including any padding.
pub(crate) fn parse_id3v2<R>(
	bytes: &mut R,
	header: Id3v2Header,
	parse_options: ParseOptions,
) -> Result<Id3v2Tag>
where
	R: Read,
{
	log::debug!(
		"ID3v2: Reading frames, version: {:?}, size: {}",
		header.version,
		header.size
	);

	let frames_size = header.size.saturating_sub(header.extended_size);
	let mut tag_reader = bytes.take(u64::from(frames_size));

	let tag = if header.flags.unsynchronisation {
		read_frames(&mut UnsynchronizedStream::new(&mut tag_reader), header, parse_options)?
	} else {
		read_frames(&mut tag_reader, header, parse_options)?
	};

	let unread = std::io::copy(&mut tag_reader, &mut std::io::sink())?;
	if unread > 0 {
		log::trace!("ID3v2: Skipped {unread} bytes of padding or unreadable frames");
	}

	Ok(tag)
}

fn read_frames<R>(reader: &mut R, header: Id3v2Header, parse_options: ParseOptions) -> Result<Id3v2Tag>
where
	R: Read,
{
	let mut tag = Id3v2Tag::new(&header);

	loop {
		match ParsedFrame::read(reader, header.version, parse_options) {
			Ok(ParsedFrame::Next(frame)) => tag.insert(frame),
			// Empty or unreadable frame, the next one can still be found
			Ok(ParsedFrame::Skip) => {},
			// Padding, or the end of the tag
			Ok(ParsedFrame::Eof) => break,
			Err(err) if parse_options.parsing_mode == ParsingMode::Strict => return Err(err),
			Err(err) => {
				// The position within the tag is unknown at this point
				log::warn!("ID3v2: Failed to read frame, discarding the rest of the tag: {err}");
				break;
			},
		}
	}

	Ok(tag)
}
