#![allow(missing_docs)]

mod dispatch;
mod flac;
mod iff;
mod mpeg;
mod ogg;
pub(crate) mod util;
