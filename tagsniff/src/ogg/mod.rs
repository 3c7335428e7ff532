//! Vorbis comment decoding
//!
//! Vorbis comments are found in Ogg streams (Vorbis, Opus, FLAC, and Speex) as well as native FLAC
//! streams. The container is decided by the first bytes of the source, not the content type it was
//! dispatched with.

mod constants;
pub(crate) mod read;
pub(crate) mod tag;

use crate::config::ParseOptions;
use crate::error::Result;
use crate::macros::malformed_err;
use crate::metadata::Metadata;
use crate::normalize;
use crate::source::SeekableSource;

use std::io::{Cursor, Read};

pub(crate) fn verify_signature(content: &[u8], sig: &[u8]) -> Result<()> {
	if !content.starts_with(sig) {
		malformed_err!(@BAIL VorbisComments, "File missing magic signature");
	}

	Ok(())
}

/// Decode the Vorbis comments of `data`
///
/// This is the pipeline behind [`Decoder::VorbisComments`](crate::registry::Decoder::VorbisComments).
pub(crate) fn decode(data: &mut SeekableSource<'_>, parse_options: ParseOptions) -> Result<Metadata> {
	data.rewind()?;

	let mut marker = [0; 4];
	let marker_len = std::io::copy(
		&mut data.by_ref().take(marker.len() as u64),
		&mut Cursor::new(&mut marker[..]),
	)? as usize;

	data.rewind()?;

	let tag = match &marker[..marker_len] {
		b"OggS" => read::read_from(data, parse_options)?,
		// Anything else can only be a FLAC stream, possibly preceded by an ID3v2 tag or junk
		_ => crate::flac::read::read_from(data, parse_options)?,
	};

	log::debug!(
		"Read {} Vorbis comments, vendor: {:?}",
		tag.items.len(),
		tag.vendor
	);

	Ok(normalize::from_vorbis_comments(&tag.vendor, tag.items()))
}
