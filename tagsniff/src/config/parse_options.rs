/// Options to control how tagsniff parses a byte source
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct ParseOptions {
	pub(crate) parsing_mode: ParsingMode,
	pub(crate) read_id3v1: bool,
	pub(crate) max_junk_bytes: usize,
}

impl Default for ParseOptions {
	/// The default implementation for `ParseOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// ParseOptions {
	/// 	parsing_mode: ParsingMode::BestAttempt,
	/// 	read_id3v1: true,
	/// 	max_junk_bytes: 1024,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}

impl ParseOptions {
	/// Default parsing mode
	pub const DEFAULT_PARSING_MODE: ParsingMode = ParsingMode::BestAttempt;

	/// Default number of junk bytes to search
	pub const DEFAULT_MAX_JUNK_BYTES: usize = 1024;

	/// Creates a new `ParseOptions`, alias for `Default` implementation
	///
	/// See also: [`ParseOptions::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use tagsniff::config::ParseOptions;
	///
	/// let parsing_options = ParseOptions::new();
	/// ```
	#[must_use]
	pub const fn new() -> Self {
		Self {
			parsing_mode: Self::DEFAULT_PARSING_MODE,
			read_id3v1: true,
			max_junk_bytes: Self::DEFAULT_MAX_JUNK_BYTES,
		}
	}

	/// The parsing mode to use, see [`ParsingMode`] for details
	///
	/// # Examples
	///
	/// ```rust
	/// use tagsniff::config::{ParseOptions, ParsingMode};
	///
	/// // By default, `parsing_mode` is ParsingMode::BestAttempt. Here, we need absolute correctness.
	/// let parsing_options = ParseOptions::new().parsing_mode(ParsingMode::Strict);
	/// ```
	pub fn parsing_mode(&mut self, parsing_mode: ParsingMode) -> Self {
		self.parsing_mode = parsing_mode;
		*self
	}

	/// Whether or not to fall back to an ID3v1 tag when no ID3v2 tag is present
	///
	/// # Examples
	///
	/// ```rust
	/// use tagsniff::config::ParseOptions;
	///
	/// // Trailing ID3v1 tags in my library are garbage, only trust ID3v2
	/// let parsing_options = ParseOptions::new().read_id3v1(false);
	/// ```
	pub fn read_id3v1(&mut self, read_id3v1: bool) -> Self {
		self.read_id3v1 = read_id3v1;
		*self
	}

	/// The maximum number of allowed junk bytes to search
	///
	/// Some information may be surrounded by junk bytes, such as tag padding remnants. This sets the maximum
	/// number of junk/unrecognized bytes tagsniff will search for an MPEG frame sync (while sniffing) or a
	/// `fLaC` marker (while decoding FLAC) before giving up.
	///
	/// # Examples
	///
	/// ```rust
	/// use tagsniff::config::ParseOptions;
	///
	/// // I have files full of junk, I'll double the search window!
	/// let parsing_options = ParseOptions::new().max_junk_bytes(2048);
	/// ```
	pub fn max_junk_bytes(&mut self, max_junk_bytes: usize) -> Self {
		self.max_junk_bytes = max_junk_bytes;
		*self
	}
}

/// The parsing strictness mode
///
/// This can be set with [`Probe::options`](crate::probe::Probe::options).
///
/// Numeric fields are never subject to the parsing mode. A year or track number that fails to
/// parse is always reported as `0`.
///
/// # Examples
///
/// ```rust,no_run
/// use tagsniff::config::{ParseOptions, ParsingMode};
/// use tagsniff::probe::Probe;
///
/// # fn main() -> tagsniff::error::Result<()> {
/// // We only want to read spec-compliant inputs
/// let parsing_options = ParseOptions::new().parsing_mode(ParsingMode::Strict);
/// let metadata = Probe::open("foo.mp3")?.options(parsing_options).parse()?;
/// # Ok(()) }
/// ```
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Default)]
#[non_exhaustive]
pub enum ParsingMode {
	/// Will eagerly error on invalid input
	///
	/// ## Examples of behavior
	///
	/// * Unable to decode text - The parser will error and the entire input is discarded
	/// * Invalid ID3v2 frame header - The parser will error and the entire input is discarded
	Strict,
	/// Default mode, less eager to error on recoverably malformed input
	///
	/// ## Examples of behavior
	///
	/// * Unable to decode text - Invalid sequences are replaced with `U+FFFD` and the parser moves on
	/// * Invalid ID3v2 frame header - The frame is skipped
	#[default]
	BestAttempt,
	/// Least eager to error, may produce partial output
	///
	/// ## Examples of behavior
	///
	/// * Unable to decode text - The entire item is discarded and the parser moves on
	/// * Invalid ID3v2 frame header - The frame is skipped
	Relaxed,
}
