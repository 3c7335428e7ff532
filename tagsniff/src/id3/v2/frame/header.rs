use super::FrameFlags;
use crate::error::{Id3v2Error, Id3v2ErrorKind, Result};
use crate::id3::v2::synchsafe::SynchsafeInteger;

use std::borrow::Cow;
use std::io::Read;

/// A frame header, with its ID upgraded to ID3v2.4
#[derive(Debug)]
pub(crate) struct FrameHeader {
	pub(crate) id: Cow<'static, str>,
	pub(crate) flags: FrameFlags,
}

fn upgrade_v2(id: &str) -> Option<&'static str> {
	match id {
		"TT2" => Some("TIT2"),
		"TP1" => Some("TPE1"),
		"TAL" => Some("TALB"),
		"TYE" => Some("TYER"),
		"TCO" => Some("TCON"),
		"TRK" => Some("TRCK"),
		"COM" => Some("COMM"),
		_ => None,
	}
}

fn verify_id(id_bytes: &[u8]) -> Result<&str> {
	let valid = id_bytes
		.iter()
		.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit());

	match std::str::from_utf8(id_bytes) {
		Ok(id_str) if valid => Ok(id_str),
		_ => Err(Id3v2Error::new(Id3v2ErrorKind::BadFrameId(id_bytes.to_vec())).into()),
	}
}

fn upgraded_id(id_bytes: &[u8]) -> Result<Cow<'static, str>> {
	let id_str = verify_id(id_bytes)?;
	Ok(upgrade_v2(id_str).map_or_else(|| Cow::Owned(id_str.to_owned()), Cow::Borrowed))
}

/// Parse an ID3v2.2 frame header
///
/// `Ok(None)` means there are no more frames, either because the reader is exhausted or
/// padding has been reached.
pub(crate) fn parse_v2_header<R>(reader: &mut R, size: &mut u32) -> Result<Option<FrameHeader>>
where
	R: Read,
{
	let mut header = [0; 6];
	if reader.read_exact(&mut header).is_err() {
		return Ok(None);
	}

	// Assume we just started reading padding
	if header[0] == 0 {
		return Ok(None);
	}

	*size = u32::from_be_bytes([0, header[3], header[4], header[5]]);

	let id = upgraded_id(&header[..3])?;

	// V2 doesn't store flags
	Ok(Some(FrameHeader {
		id,
		flags: FrameFlags::default(),
	}))
}

/// Parse an ID3v2.3 or ID3v2.4 (`synchsafe`) frame header
pub(crate) fn parse_header<R>(
	reader: &mut R,
	size: &mut u32,
	synchsafe: bool,
) -> Result<Option<FrameHeader>>
where
	R: Read,
{
	let mut header = [0; 10];
	if reader.read_exact(&mut header).is_err() {
		return Ok(None);
	}

	// Assume we just started reading padding
	if header[0] == 0 {
		return Ok(None);
	}

	*size = u32::from_be_bytes([header[4], header[5], header[6], header[7]]);
	if synchsafe {
		*size = size.unsynch();
	}

	// Some writers put ID3v2.2 frame IDs in ID3v2.3 frame headers
	let id = if header[3] == 0 && !synchsafe {
		log::warn!("Found a v2 frame ID in a v3 tag, attempting to upgrade");
		upgraded_id(&header[..3])?
	} else {
		Cow::Owned(verify_id(&header[..4])?.to_owned())
	};

	let flags = u16::from_be_bytes([header[8], header[9]]);
	let flags = if synchsafe {
		FrameFlags::parse_id3v24(flags)
	} else {
		FrameFlags::parse_id3v23(flags)
	};

	Ok(Some(FrameHeader { id, flags }))
}
