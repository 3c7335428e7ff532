//! ID3v1 items
//!
//! # ID3v1 notes
//!
//! A tag is always the last 128 bytes of a stream. All text is Latin-1, and padded with NUL bytes.
//!
//! ## Track numbers
//!
//! ID3v1.1 steals the last two bytes of the comment field for the track number. A tag is considered
//! ID3v1.1 when byte 28 of the comment is 0 and byte 29 is not, in which case the comment is limited to
//! the first 28 bytes.

pub(crate) mod constants;
pub(crate) mod read;
pub(crate) mod tag;

pub(crate) use tag::Id3v1Tag;
