use super::constants::{
	FLAC_IDENT_HEAD, OPUSHEAD, OPUSTAGS, SPEEXHEADER, VORBIS_COMMENT_HEAD, VORBIS_IDENT_HEAD,
};
use super::tag::VorbisComments;
use super::verify_signature;
use crate::config::{ParseOptions, ParsingMode};
use crate::error::Result;
use crate::macros::{malformed_err, parse_mode_choice, try_vec};
use crate::util::alloc::VecFallibleCapacity;

use std::io::{Read, Seek};

use byteorder::{LittleEndian, ReadBytesExt};
use ogg_pager::{Packets, PageError};

// Every length in the header is a little endian u32
fn read_length<R>(data: &mut R, len: &mut u64) -> Result<u32>
where
	R: Read,
{
	if *len < 4 {
		malformed_err!(@BAIL VorbisComments, "Comment header ended unexpectedly");
	}

	*len -= 4;
	Ok(data.read_u32::<LittleEndian>()?)
}

fn read_field<R>(data: &mut R, field_len: u32, len: &mut u64) -> Result<Vec<u8>>
where
	R: Read,
{
	if u64::from(field_len) > *len {
		malformed_err!(@BAIL VorbisComments, "Field length exceeds the comment header");
	}

	let mut field = try_vec![0; field_len as usize];
	data.read_exact(&mut field)?;

	*len -= u64::from(field_len);
	Ok(field)
}

/// Read a comment header of `len` bytes, with any signature already removed
pub(crate) fn read_comments<R>(
	data: &mut R,
	mut len: u64,
	parse_options: ParseOptions,
) -> Result<VorbisComments>
where
	R: Read,
{
	let parse_mode = parse_options.parsing_mode;

	let vendor_len = read_length(data, &mut len)?;
	let vendor_bytes = read_field(data, vendor_len, &mut len)?;

	let vendor = match String::from_utf8(vendor_bytes) {
		Ok(vendor) => vendor,
		Err(e) => {
			if parse_mode == ParsingMode::Strict {
				return Err(e.into());
			}

			log::warn!("Possibly corrupt vendor string, replacing invalid sequences");
			String::from_utf8_lossy(e.as_bytes()).into_owned()
		},
	};

	let number_of_items = read_length(data, &mut len)?;

	// Every item needs at least its length
	if u64::from(number_of_items) > len >> 2 {
		malformed_err!(@BAIL VorbisComments, "Item count exceeds the comment header");
	}

	let mut tag = VorbisComments {
		vendor,
		items: Vec::try_with_capacity_stable(number_of_items as usize)?,
	};

	for _ in 0..number_of_items {
		let comment_len = read_length(data, &mut len)?;
		let comment_bytes = read_field(data, comment_len, &mut len)?;

		// KEY=VALUE, only the first separator counts
		let mut comment_split = comment_bytes.splitn(2, |b| *b == b'=');

		let Some(key) = comment_split.next() else {
			continue;
		};

		// Make sure there was a separator present, otherwise just move on
		let Some(value) = comment_split.next() else {
			log::warn!("No separator found in field, discarding");
			continue;
		};

		if !valid_vorbis_comments_key(key) {
			parse_mode_choice!(
				parse_mode,
				STRICT: malformed_err!(@BAIL VorbisComments, "Vorbis comments contain an invalid key"),
				DEFAULT: {
					log::warn!("Invalid key found, discarding field");
					continue;
				}
			);
		}

		let key = String::from_utf8_lossy(key).into_owned();

		match std::str::from_utf8(value) {
			Ok(value) => tag.items.push((key, value.to_owned())),
			Err(e) => {
				if parse_mode == ParsingMode::Strict {
					return Err(e.into());
				}

				log::warn!("Non UTF-8 value found, discarding field {key:?}");
			},
		}
	}

	Ok(tag)
}

pub(crate) fn valid_vorbis_comments_key(key: &[u8]) -> bool {
	// The valid range is 0x20..=0x7D not including 0x3D
	!key.is_empty() && key.iter().all(|c| (b' '..=b'}').contains(c) && *c != b'=')
}

/// Read the comment header of an Ogg Vorbis, Opus, FLAC, or Speex stream
///
/// The codec is decided by the identification packet, and the comment header is always the
/// second packet.
pub(crate) fn read_from<R>(data: &mut R, parse_options: ParseOptions) -> Result<VorbisComments>
where
	R: Read + Seek,
{
	// Read the header packets
	let packets = match Packets::read_count(data, 2) {
		Ok(packets) => packets,
		// The stream ended before both header packets were complete
		Err(PageError::NotEnoughData) => {
			malformed_err!(@BAIL VorbisComments, "OGG: Expected comment packet")
		},
		Err(PageError::Io(e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
			malformed_err!(@BAIL VorbisComments, "OGG: Expected comment packet")
		},
		Err(e) => return Err(e.into()),
	};

	let identification_packet = packets
		.get(0)
		.ok_or_else(|| malformed_err!(VorbisComments, "OGG: Expected identification packet"))?;
	let metadata_packet = packets
		.get(1)
		.ok_or_else(|| malformed_err!(VorbisComments, "OGG: Expected comment packet"))?;

	let comments = if identification_packet.starts_with(VORBIS_IDENT_HEAD) {
		log::debug!("OGG: Found a Vorbis stream");

		verify_signature(metadata_packet, VORBIS_COMMENT_HEAD)?;
		&metadata_packet[VORBIS_COMMENT_HEAD.len()..]
	} else if identification_packet.starts_with(OPUSHEAD) {
		log::debug!("OGG: Found an Opus stream");

		verify_signature(metadata_packet, OPUSTAGS)?;
		&metadata_packet[OPUSTAGS.len()..]
	} else if identification_packet.starts_with(FLAC_IDENT_HEAD) {
		log::debug!("OGG: Found a FLAC stream");

		// The comment packet is a plain FLAC metadata block
		match metadata_packet {
			[block_type, _, _, _, rest @ ..] if block_type & 0x7F == 4 => rest,
			_ => malformed_err!(@BAIL VorbisComments, "OGG: Expected a FLAC VORBIS_COMMENT block"),
		}
	} else if identification_packet.starts_with(SPEEXHEADER) {
		log::debug!("OGG: Found a Speex stream");

		metadata_packet
	} else {
		malformed_err!(@BAIL VorbisComments, "OGG: Unsupported codec");
	};

	let reader = &mut &comments[..];
	read_comments(reader, comments.len() as u64, parse_options)
}
