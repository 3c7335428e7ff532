//! Walking the chunks of RIFF (little endian) and FORM (big endian) containers
//!
//! WAV and AIFF files store their ID3v2 tags in an `ID3 ` (or `id3 `) chunk rather than at the
//! start of the file.

use crate::error::Result;
use crate::macros::{err, try_vec};

use std::io::{Read, Seek, SeekFrom};
use std::marker::PhantomData;

use byteorder::{ByteOrder, ReadBytesExt};

const CHUNK_HEADER_SIZE: u64 = 8;

pub(crate) struct Chunks<B>
where
	B: ByteOrder,
{
	pub(crate) fourcc: [u8; 4],
	pub(crate) size: u32,
	remaining_size: u64,
	_phantom: PhantomData<B>,
}

impl<B: ByteOrder> Chunks<B> {
	#[must_use]
	pub(crate) const fn new(stream_size: u64) -> Self {
		Self {
			fourcc: [0; 4],
			size: 0,
			remaining_size: stream_size,
			_phantom: PhantomData,
		}
	}

	pub(crate) fn next<R>(&mut self, data: &mut R) -> Result<bool>
	where
		R: Read,
	{
		if self.remaining_size < CHUNK_HEADER_SIZE {
			return Ok(false);
		}

		data.read_exact(&mut self.fourcc)?;
		self.size = data.read_u32::<B>()?;

		self.remaining_size = self.remaining_size.saturating_sub(CHUNK_HEADER_SIZE);

		Ok(true)
	}

	pub(crate) fn content<R>(&mut self, data: &mut R) -> Result<Vec<u8>>
	where
		R: Read + Seek,
	{
		let size = u64::from(self.size);
		if size > self.remaining_size {
			err!(SizeMismatch);
		}

		let mut content = try_vec![0; size as usize];
		data.read_exact(&mut content)?;

		self.remaining_size = self.remaining_size.saturating_sub(size);
		self.correct_position(data)?;

		Ok(content)
	}

	pub(crate) fn skip<R>(&mut self, data: &mut R) -> Result<()>
	where
		R: Read + Seek,
	{
		data.seek(SeekFrom::Current(i64::from(self.size)))?;
		self.remaining_size = self.remaining_size.saturating_sub(u64::from(self.size));

		self.correct_position(data)
	}

	fn correct_position<R>(&mut self, data: &mut R) -> Result<()>
	where
		R: Seek,
	{
		// Chunks are expected to start on even boundaries, and are padded
		// with a 0 if necessary. This is NOT the null terminator of the value,
		// and it is NOT included in the chunk's size
		if self.size % 2 != 0 {
			data.seek(SeekFrom::Current(1))?;
			self.remaining_size = self.remaining_size.saturating_sub(1);
		}

		Ok(())
	}
}
