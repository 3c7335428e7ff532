//! The canonical metadata record

use std::collections::HashMap;
use std::fmt::{Display, Formatter};

/// Normalized metadata, as produced by every successful parse
///
/// No matter what tag it was decoded from, every field is always available. Text fields that
/// weren't present in the tag are empty, and numeric fields that were missing (or failed to parse)
/// are `0`.
///
/// Anything format-specific that doesn't fit the common fields ends up in [`Metadata::other`].
///
/// # Examples
///
/// ```rust,no_run
/// # fn main() -> tagsniff::error::Result<()> {
/// let metadata = tagsniff::parse_path("song.mp3")?;
///
/// println!("{} - {}", metadata.artist(), metadata.title());
/// if metadata.year() != 0 {
/// 	println!("Released in {}", metadata.year());
/// }
///
/// if let Some(version) = metadata.other("version") {
/// 	println!("Read from an ID3v{version} tag");
/// }
/// # Ok(()) }
/// ```
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Metadata {
	pub(crate) title: String,
	pub(crate) artist: String,
	pub(crate) album: String,
	pub(crate) year: u32,
	pub(crate) comment: String,
	pub(crate) track: u32,
	pub(crate) genre: String,
	pub(crate) other: HashMap<String, String>,
}

impl Metadata {
	/// The title
	pub fn title(&self) -> &str {
		&self.title
	}

	/// The artist
	pub fn artist(&self) -> &str {
		&self.artist
	}

	/// The album title
	pub fn album(&self) -> &str {
		&self.album
	}

	/// The recording year, or `0` if unknown
	pub fn year(&self) -> u32 {
		self.year
	}

	/// The comment
	///
	/// Tags holding multiple comments have them joined with `'\n'`.
	pub fn comment(&self) -> &str {
		&self.comment
	}

	/// The track number, or `0` if unknown
	pub fn track(&self) -> u32 {
		self.track
	}

	/// The genre
	pub fn genre(&self) -> &str {
		&self.genre
	}

	/// Get a format-specific item by key
	///
	/// Keys are case-sensitive.
	pub fn other(&self, key: &str) -> Option<&str> {
		self.other.get(key).map(String::as_str)
	}

	/// All format-specific items
	///
	/// ID3 tags always provide `"version"` and `"size"` (when known), while Vorbis comments provide
	/// `"vendor"` along with every non-standard field in the tag.
	pub fn other_items(&self) -> &HashMap<String, String> {
		&self.other
	}

	/// Consumes the `Metadata`, returning the format-specific items
	pub fn into_other_items(self) -> HashMap<String, String> {
		self.other
	}
}

impl Display for Metadata {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		writeln!(f, "Title: {}", self.title)?;
		writeln!(f, "Artist: {}", self.artist)?;
		writeln!(f, "Album: {}", self.album)?;
		writeln!(f, "Year: {}", self.year)?;
		writeln!(f, "Track: {}", self.track)?;
		writeln!(f, "Genre: {}", self.genre)?;
		write!(f, "Comment: {}", self.comment)?;

		let mut other = self.other.iter().collect::<Vec<_>>();
		other.sort_unstable();

		for (key, value) in other {
			write!(f, "\n{key}: {value}")?;
		}

		Ok(())
	}
}
