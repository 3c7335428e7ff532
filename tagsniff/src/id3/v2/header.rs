use super::synchsafe::SynchsafeInteger;
use crate::error::{Id3v2Error, Id3v2ErrorKind, Result};
use crate::macros::err;

use std::io::Read;

use byteorder::{BigEndian, ByteOrder, ReadBytesExt};

/// The ID3v2 version
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub(crate) enum Id3v2Version {
	/// ID3v2.2
	V2,
	/// ID3v2.3
	V3,
	/// ID3v2.4
	V4,
}

impl Id3v2Version {
	pub(crate) fn major(self) -> u8 {
		match self {
			Self::V2 => 2,
			Self::V3 => 3,
			Self::V4 => 4,
		}
	}
}

/// Flags that apply to the entire tag
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Id3v2TagFlags {
	/// Whether or not all frames are unsynchronised
	pub(crate) unsynchronisation: bool,
	/// Indicates that the tag is followed by a 10 byte footer
	pub(crate) footer: bool,
}

#[derive(Copy, Clone, Debug)]
pub(crate) struct Id3v2Header {
	pub(crate) version: Id3v2Version,
	pub(crate) revision: u8,
	pub(crate) flags: Id3v2TagFlags,
	/// The size of the tag contents (**DOES NOT INCLUDE THE HEADER/FOOTER**)
	pub(crate) size: u32,
	/// The number of bytes taken up by the extended header, which is already consumed
	pub(crate) extended_size: u32,
}

impl Id3v2Header {
	pub(crate) fn parse<R>(bytes: &mut R) -> Result<Self>
	where
		R: Read,
	{
		log::debug!("Parsing ID3v2 header");

		let mut header = [0; 10];
		bytes.read_exact(&mut header)?;

		if &header[..3] != b"ID3" {
			err!(FakeTag);
		}

		let version = match header[3] {
			2 => Id3v2Version::V2,
			3 => Id3v2Version::V3,
			4 => Id3v2Version::V4,
			major => {
				return Err(
					Id3v2Error::new(Id3v2ErrorKind::BadId3v2Version(major, header[4])).into(),
				);
			},
		};

		let revision = header[4];
		let flags = header[5];

		// ID3v2.2 reserved a compression flag, without ever deciding on a compression scheme.
		// These tags can't be read.
		if version == Id3v2Version::V2 && flags & 0x40 == 0x40 {
			return Err(Id3v2Error::new(Id3v2ErrorKind::V2Compression).into());
		}

		let flags_parsed = Id3v2TagFlags {
			unsynchronisation: flags & 0x80 == 0x80,
			footer: version == Id3v2Version::V4 && flags & 0x10 == 0x10,
		};

		let size = BigEndian::read_u32(&header[6..]).unsynch();
		let mut extended_size = 0;

		let extended_header = version != Id3v2Version::V2 && flags & 0x40 == 0x40;
		if extended_header {
			let raw_size = bytes.read_u32::<BigEndian>()?;

			// ID3v2.4 stores a synchsafe size including the size field itself, while
			// ID3v2.3 stores a plain size that excludes it.
			let (declared_size, remaining) = match version {
				Id3v2Version::V4 => {
					let declared_size = raw_size.unsynch();
					(declared_size, declared_size.saturating_sub(4))
				},
				_ => (raw_size, raw_size),
			};

			if declared_size < 6 {
				return Err(Id3v2Error::new(Id3v2ErrorKind::BadExtendedHeaderSize).into());
			}

			extended_size = remaining.saturating_add(4);
			if extended_size >= size {
				return Err(Id3v2Error::new(Id3v2ErrorKind::BadExtendedHeaderSize).into());
			}

			// Nothing in the extended header (CRC, restrictions) is of any use to us
			let skipped = std::io::copy(
				&mut bytes.by_ref().take(u64::from(remaining)),
				&mut std::io::sink(),
			)?;
			if skipped != u64::from(remaining) {
				return Err(Id3v2Error::new(Id3v2ErrorKind::BadExtendedHeaderSize).into());
			}
		}

		Ok(Id3v2Header {
			version,
			revision,
			flags: flags_parsed,
			size,
			extended_size,
		})
	}

	/// The total size of the tag, including the header and footer
	pub(crate) fn full_tag_size(&self) -> u64 {
		u64::from(self.size) + 10 + if self.flags.footer { 10 } else { 0 }
	}
}
