//! Adapting arbitrary byte sources for decoding
//!
//! Every decoder needs to reposition its input at least once (ex. ID3v1 lives at the end of a file,
//! and is only checked after ID3v2 at the start). A [`SeekableSource`] guarantees this is possible
//! for any input:
//!
//! * Seekable inputs are borrowed and rewound, see [`ensure_seekable`]
//! * Plain readers are buffered into memory, see [`ensure_seekable_stream`]

use crate::error::Result;

use std::io::{Cursor, Read, Seek, SeekFrom};

trait SeekRead: Read + Seek {}
impl<T: Read + Seek> SeekRead for T {}

enum SourceInner<'a> {
	Borrowed(&'a mut dyn SeekRead),
	Buffered(Cursor<Vec<u8>>),
}

/// A positionable view over a byte source
///
/// This is created by [`ensure_seekable`] or [`ensure_seekable_stream`], and is what every
/// [`TagDecoder`](crate::registry::TagDecoder) reads from.
///
/// A `SeekableSource` never closes the reader it borrows.
pub struct SeekableSource<'a> {
	inner: SourceInner<'a>,
}

/// Wrap a seekable reader, rewinding it to offset 0
///
/// The reader is borrowed for the lifetime of the returned source. Its position afterwards is
/// unspecified.
///
/// # Errors
///
/// The reader cannot be repositioned
///
/// # Examples
///
/// ```rust
/// use std::io::{Cursor, Read, Seek, SeekFrom};
/// use tagsniff::source::ensure_seekable;
///
/// # fn main() -> tagsniff::error::Result<()> {
/// let mut reader = Cursor::new(b"ID3".to_vec());
/// reader.seek(SeekFrom::End(0))?;
///
/// let mut source = ensure_seekable(&mut reader)?;
///
/// // The source starts from the beginning, no matter where the reader was left
/// let mut marker = [0; 3];
/// source.read_exact(&mut marker)?;
/// assert_eq!(&marker, b"ID3");
/// # Ok(()) }
/// ```
pub fn ensure_seekable<R>(reader: &mut R) -> Result<SeekableSource<'_>>
where
	R: Read + Seek,
{
	reader.rewind()?;

	Ok(SeekableSource {
		inner: SourceInner::Borrowed(reader),
	})
}

/// Buffer a plain reader into memory
///
/// The reader is read until it is exhausted. The returned source owns the buffer, positioned at offset 0.
///
/// # Errors
///
/// Reading from `reader` fails. No partial buffer is exposed.
///
/// # Examples
///
/// ```rust
/// use std::io::Read;
/// use tagsniff::source::ensure_seekable_stream;
///
/// # fn main() -> tagsniff::error::Result<()> {
/// // `&[u8]` can be read, but not seeked
/// let stream: &[u8] = b"OggS\0";
///
/// let mut source = ensure_seekable_stream(stream)?;
/// assert_eq!(source.len()?, 5);
/// # Ok(()) }
/// ```
pub fn ensure_seekable_stream<R>(mut reader: R) -> Result<SeekableSource<'static>>
where
	R: Read,
{
	let mut buffer = Vec::new();
	reader.read_to_end(&mut buffer)?;

	log::trace!("Buffered {} bytes from a non-seekable source", buffer.len());

	Ok(SeekableSource {
		inner: SourceInner::Buffered(Cursor::new(buffer)),
	})
}

impl SeekableSource<'_> {
	/// Reposition the source at offset 0
	///
	/// # Errors
	///
	/// The underlying reader cannot be repositioned
	pub fn rewind(&mut self) -> Result<()> {
		Seek::rewind(self)?;
		Ok(())
	}

	/// The total length of the source in bytes
	///
	/// The current position is preserved.
	///
	/// # Errors
	///
	/// The underlying reader cannot be repositioned
	pub fn len(&mut self) -> Result<u64> {
		let current = self.stream_position()?;
		let len = self.seek(SeekFrom::End(0))?;
		self.seek(SeekFrom::Start(current))?;

		Ok(len)
	}

	/// Whether the source is buffered in memory
	pub fn is_buffered(&self) -> bool {
		matches!(self.inner, SourceInner::Buffered(_))
	}
}

impl Read for SeekableSource<'_> {
	fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
		match &mut self.inner {
			SourceInner::Borrowed(reader) => reader.read(buf),
			SourceInner::Buffered(cursor) => cursor.read(buf),
		}
	}
}

impl Seek for SeekableSource<'_> {
	fn seek(&mut self, pos: SeekFrom) -> std::io::Result<u64> {
		match &mut self.inner {
			SourceInner::Borrowed(reader) => reader.seek(pos),
			SourceInner::Buffered(cursor) => cursor.seek(pos),
		}
	}
}
