//! Extract normalized metadata from audio content.
//!
//! tagsniff reads the tags embedded in an audio source and maps them into a single [`Metadata`]
//! record, no matter what tag (or container) they came from. The format is never guessed from a
//! file name: the first bytes of the content decide which decoder is used.
//!
//! # Supported tags
//!
//! | Content type                                          | Tag                                |
//! |-------------------------------------------------------|------------------------------------|
//! | `audio/mpeg`, `audio/MPA`, `audio/mpa-robust`         | ID3v2.2/3/4, ID3v1/1.1             |
//! | `audio/wave`, `audio/wav`, `audio/x-wav`, `audio/vnd.wave` | ID3v2 (`ID3 ` chunk), ID3v1   |
//! | `audio/aiff`, `audio/x-aiff`                          | ID3v2 (`ID3 ` chunk), ID3v1        |
//! | `audio/ogg`, `audio/opus`, `audio/vorbis`             | Vorbis comments                    |
//! | `audio/flac`                                          | Vorbis comments (native or Ogg)    |
//!
//! More content types can be mapped at runtime, see [`registry`].
//!
//! # Examples
//!
//! ## Reading a file
//!
//! ```rust,no_run
//! # fn main() -> tagsniff::error::Result<()> {
//! let metadata = tagsniff::parse_path("test.mp3")?;
//!
//! println!("Title: {}", metadata.title());
//! println!("Track: {}", metadata.track());
//! # Ok(())
//! # }
//! ```
//!
//! ## Using an existing reader
//!
//! ```rust,no_run
//! # fn main() -> tagsniff::error::Result<()> {
//! use std::fs::File;
//!
//! // The reader can be at any position, it is always read from the start
//! let mut file = File::open("test.ogg")?;
//! let metadata = tagsniff::parse(&mut file)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Controlling the pipeline
//!
//! ```rust,no_run
//! # fn main() -> tagsniff::error::Result<()> {
//! use tagsniff::config::{ParseOptions, ParsingMode};
//! use tagsniff::probe::Probe;
//!
//! let probe = Probe::open("test.flac")?
//! 	.options(ParseOptions::new().parsing_mode(ParsingMode::Strict))
//! 	.sniff()?;
//!
//! println!("Detected {:?}", probe.content_type());
//! let metadata = probe.parse()?;
//! # Ok(())
//! # }
//! ```
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod config;
pub mod error;
pub(crate) mod macros;
pub mod metadata;
pub mod normalize;
pub mod probe;
pub mod registry;
pub mod sniff;
pub mod source;
pub mod tag;
mod util;

mod flac;
mod id3;
mod iff;
mod ogg;

pub use crate::metadata::Metadata;
pub use crate::probe::{parse, parse_path, parse_stream};
