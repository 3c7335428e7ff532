//! ID3v2 items
//!
//! Only the frames that make up a [`TagView`](crate::tag::TagView) are decoded, the rest of the
//! tag is skipped.
//!
//! # ID3v2 notes
//!
//! ## Unsynchronisation
//!
//! ID3v2.3 can only unsynchronise an entire tag, while ID3v2.4 does so per frame. Both are
//! supported, see [`UnsynchronizedStream`](synchsafe::UnsynchronizedStream).
//!
//! ## Frame IDs
//!
//! ID3v2.2 frames use three character IDs (ex. `TT2`), these are upgraded to their ID3v2.4
//! counterparts (ex. `TIT2`) while reading.
//!
//! ## Compression
//!
//! Compressed frames are only readable with the `id3v2_compression_support` feature enabled.

mod frame;
pub(crate) mod header;
pub(crate) mod read;
mod synchsafe;
pub(crate) mod tag;

pub(crate) use header::Id3v2Header;
pub(crate) use tag::Id3v2Tag;
