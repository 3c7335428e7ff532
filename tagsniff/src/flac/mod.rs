//! Native FLAC streams
//!
//! Only the metadata blocks are walked, audio frames are never touched.

mod block;
pub(crate) mod read;
