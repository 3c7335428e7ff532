//! Undoing ID3v2 unsynchronisation
//!
//! To keep MPEG decoders from mistaking tag content for a frame sync, ID3v2 writers may insert a
//! `0x00` after every `0xFF` byte. Sizes in ID3v2.4 are additionally stored as "synchsafe"
//! integers, with the most significant bit of every byte unset.

use std::io::Read;

/// A reader that drops every `0x00` following an `0xFF`
pub(crate) struct UnsynchronizedStream<R> {
	reader: R,
	buf: [u8; 8 * 1024],
	bytes_available: usize,
	pos: usize,
	encountered_ff: bool,
}

impl<R> UnsynchronizedStream<R> {
	pub(crate) fn new(reader: R) -> Self {
		Self {
			reader,
			buf: [0; 8 * 1024],
			bytes_available: 0,
			pos: 0,
			encountered_ff: false,
		}
	}
}

impl<R: Read> Read for UnsynchronizedStream<R> {
	fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
		let mut dest_pos = 0;
		while dest_pos < buf.len() {
			if self.pos >= self.bytes_available {
				self.bytes_available = self.reader.read(&mut self.buf)?;
				self.pos = 0;

				if self.bytes_available == 0 {
					break;
				}
			}

			let current_byte = self.buf[self.pos];
			self.pos += 1;

			if std::mem::take(&mut self.encountered_ff) && current_byte == 0 {
				continue;
			}

			buf[dest_pos] = current_byte;
			dest_pos += 1;

			self.encountered_ff = current_byte == 0xFF;
		}

		Ok(dest_pos)
	}
}

/// An integer that can be read back from its synchsafe form
pub(crate) trait SynchsafeInteger: Sized {
	/// Strip the unused most significant bit of every byte
	fn unsynch(self) -> Self;
}

impl SynchsafeInteger for u32 {
	fn unsynch(self) -> Self {
		((self & 0x7F00_0000) >> 3)
			| ((self & 0x007F_0000) >> 2)
			| ((self & 0x0000_7F00) >> 1)
			| (self & 0x0000_007F)
	}
}

#[cfg(test)]
mod tests {
	use super::{SynchsafeInteger, UnsynchronizedStream};

	use std::io::Read;

	#[test_log::test]
	fn unsynchronized_stream() {
		let content = [0xFF, 0x00, 0x1A, 0xFF, 0x00, 0x15, 0xFF, 0x01, 0x00];

		let mut unsynchronized_reader = UnsynchronizedStream::new(&content[..]);

		let mut unsynchronized_content = Vec::new();
		unsynchronized_reader
			.read_to_end(&mut unsynchronized_content)
			.unwrap();

		// Only the NULs directly after 0xFF are removed
		assert_eq!(unsynchronized_content, [0xFF, 0x1A, 0xFF, 0x15, 0xFF, 0x01, 0x00]);
	}

	#[test_log::test]
	fn unsynchronized_stream_across_reads() {
		let content = [0xFF, 0x00, 0xFF, 0x00, 0x61];
		let mut reader = UnsynchronizedStream::new(&content[..]);

		let mut first = [0; 1];
		reader.read_exact(&mut first).unwrap();
		assert_eq!(first, [0xFF]);

		let mut rest = Vec::new();
		reader.read_to_end(&mut rest).unwrap();
		assert_eq!(rest, [0xFF, 0x61]);
	}

	#[test_log::test]
	fn unsynch_u32() {
		assert_eq!(0x7F7F_7F7F_u32.unsynch(), 0x0FFF_FFFF);
		assert_eq!(0x0000_0201_u32.unsynch(), 257);
		assert_eq!(0x0000_0076_u32.unsynch(), 118);
	}
}
