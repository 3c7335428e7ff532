use super::content::parse_content;
use super::header::{parse_header, parse_v2_header};
use super::{Frame, FrameKind};
use crate::config::{ParseOptions, ParsingMode};
use crate::error::{Id3v2Error, Id3v2ErrorKind, Result};
use crate::id3::v2::header::Id3v2Version;
use crate::id3::v2::synchsafe::{SynchsafeInteger, UnsynchronizedStream};
use crate::macros::try_vec;

use std::io::Read;

use byteorder::{BigEndian, ReadBytesExt};

pub(crate) enum ParsedFrame {
	Next(Frame),
	Skip,
	Eof,
}

impl ParsedFrame {
	pub(crate) fn read<R>(
		reader: &mut R,
		version: Id3v2Version,
		parse_options: ParseOptions,
	) -> Result<Self>
	where
		R: Read,
	{
		let mut size = 0u32;

		// The header will be upgraded to ID3v2.4 past this point, so they can all be treated the same
		let parse_header_result = match version {
			Id3v2Version::V2 => parse_v2_header(reader, &mut size),
			Id3v2Version::V3 => parse_header(reader, &mut size, false),
			Id3v2Version::V4 => parse_header(reader, &mut size, true),
		};
		let header = match parse_header_result {
			Ok(None) => return Ok(Self::Eof),
			Ok(Some(header)) => header,
			Err(err) => {
				if parse_options.parsing_mode == ParsingMode::Strict {
					return Err(err);
				}

				log::warn!("Failed to read frame header, skipping: {}", err);

				skip_frame(reader, size)?;
				return Ok(Self::Skip);
			},
		};

		let Some(kind) = FrameKind::from_id(&header.id) else {
			log::trace!("Skipping unused frame `{}`", header.id);

			skip_frame(reader, size)?;
			return Ok(Self::Skip);
		};

		if size == 0 {
			if parse_options.parsing_mode == ParsingMode::Strict {
				return Err(
					Id3v2Error::new(Id3v2ErrorKind::EmptyFrame(header.id.into_owned())).into(),
				);
			}

			log::debug!("Encountered a zero length frame, skipping");
			return Ok(Self::Skip);
		}

		let mut flags = header.flags;

		// The encryption method symbol and group identifier are of no use to us
		for present in [flags.encryption, flags.grouping_identity] {
			if !present {
				continue;
			}

			if size < 1 {
				return Err(Id3v2Error::new(Id3v2ErrorKind::BadFrameLength).into());
			}

			reader.read_u8()?;
			size -= 1;
		}

		// Compressed frames are expected to have a data length indicator, even when the flag isn't set
		if flags.data_length_indicator || flags.compression {
			log::trace!("Reading data length indicator");

			if size < 4 {
				return Err(Id3v2Error::new(Id3v2ErrorKind::BadFrameLength).into());
			}

			let _len = reader.read_u32::<BigEndian>()?.unsynch();
			flags.data_length_indicator = true;
			size -= 4;
		}

		// Frames must have at least 1 byte, *after* all of the additional data flags can provide
		if size == 0 {
			return Err(Id3v2Error::new(Id3v2ErrorKind::BadFrameLength).into());
		}

		let mut raw = try_vec![0; size as usize];
		reader.read_exact(&mut raw)?;

		if flags.encryption {
			if !flags.data_length_indicator {
				return Err(Id3v2Error::new(Id3v2ErrorKind::MissingDataLengthIndicator).into());
			}

			log::warn!("Skipping encrypted frame `{}`", header.id);
			return Ok(Self::Skip);
		}

		// Unsynchronisation is undone before decompression
		let content = match (flags.unsynchronisation, flags.compression) {
			(false, false) => raw,
			(true, false) => read_all(UnsynchronizedStream::new(&raw[..]))?,
			(false, true) => decompress(&raw[..])?,
			(true, true) => decompress(UnsynchronizedStream::new(&raw[..]))?,
		};

		let value = match parse_content(&content, kind, version, parse_options.parsing_mode) {
			Ok(value) => value,
			Err(err) if parse_options.parsing_mode == ParsingMode::Strict => return Err(err),
			Err(err) => {
				log::warn!("Failed to read frame `{}`, skipping: {}", header.id, err);
				None
			},
		};

		match value {
			Some(value) => Ok(Self::Next(Frame { kind, value })),
			None => Ok(Self::Skip),
		}
	}
}

fn read_all<R: Read>(mut reader: R) -> Result<Vec<u8>> {
	let mut content = Vec::new();
	reader.read_to_end(&mut content)?;
	Ok(content)
}

#[cfg(feature = "id3v2_compression_support")]
fn decompress<R: Read>(reader: R) -> Result<Vec<u8>> {
	let mut content = Vec::new();
	flate2::read::ZlibDecoder::new(reader)
		.read_to_end(&mut content)
		.map_err(|err| Id3v2Error::new(Id3v2ErrorKind::Decompression(err)))?;

	Ok(content)
}

#[cfg(not(feature = "id3v2_compression_support"))]
fn decompress<R: Read>(_: R) -> Result<Vec<u8>> {
	Err(Id3v2Error::new(Id3v2ErrorKind::CompressedFrameEncountered).into())
}

// Only valid when nothing of the frame content has been read yet
fn skip_frame(reader: &mut impl Read, size: u32) -> Result<()> {
	log::trace!("Skipping frame of size {}", size);

	let size = u64::from(size);
	let mut reader = reader.take(size);
	let skipped = std::io::copy(&mut reader, &mut std::io::sink())?;
	debug_assert!(skipped <= size);

	Ok(())
}
