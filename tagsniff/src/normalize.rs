//! Mapping decoded tags into [`Metadata`]
//!
//! Both tag families end up here. The rules are the same no matter which version of a tag was read:
//!
//! * Text fields that are missing are empty
//! * Numbers that are missing or can't be parsed are `0`, this is never an error
//! * A single trailing NUL is stripped from ID3 text, as many writers include a terminator

use crate::metadata::Metadata;
use crate::tag::TagView;

/// Parse a base-10 unsigned integer, falling back to `0`
///
/// Surrounding whitespace or any other characters make the whole input invalid.
///
/// # Examples
///
/// ```rust
/// use tagsniff::normalize::parse_number;
///
/// assert_eq!(parse_number("1999"), 1999);
/// assert_eq!(parse_number("3/12"), 0);
/// assert_eq!(parse_number(""), 0);
/// ```
pub fn parse_number(input: &str) -> u32 {
	input.parse().unwrap_or(0)
}

/// Remove a single trailing NUL from `input`
///
/// # Examples
///
/// ```rust
/// use tagsniff::normalize::trim_null;
///
/// assert_eq!(trim_null("Foo\0"), "Foo");
/// assert_eq!(trim_null("Foo\0\0"), "Foo\0");
/// ```
pub fn trim_null(input: &str) -> &str {
	input.strip_suffix('\0').unwrap_or(input)
}

fn text(value: Option<&str>) -> String {
	value.map(trim_null).unwrap_or_default().to_owned()
}

/// Create a [`Metadata`] from an ID3 tag
///
/// `Metadata::other` will contain the tag's `"version"` (if non-empty) and `"size"` (if non-zero).
pub fn from_tag_view(tag: &dyn TagView) -> Metadata {
	let comment = tag.comments().join("\n");

	let track = tag.track_raw().map_or(0, |track| {
		trim_null(&track)
			.split('/')
			.next()
			.map_or(0, parse_number)
	});

	let mut metadata = Metadata {
		title: text(tag.title()),
		artist: text(tag.artist()),
		album: text(tag.album()),
		year: tag.year().map_or(0, |year| parse_number(trim_null(year))),
		comment: trim_null(&comment).to_owned(),
		track,
		genre: text(tag.genre()),
		..Metadata::default()
	};

	let version = tag.version();
	if !version.is_empty() {
		metadata
			.other
			.insert(String::from("version"), version.into_owned());
	}

	let size = tag.size();
	if size > 0 {
		metadata
			.other
			.insert(String::from("size"), size.to_string());
	}

	metadata
}

/// Create a [`Metadata`] from a set of Vorbis comments
///
/// Keys are matched case-insensitively, and the last occurrence of a key wins. Anything that isn't
/// a common field ends up in `Metadata::other` as long as it has a value, along with `"vendor"`.
pub fn from_vorbis_comments<'a, I>(vendor: &str, items: I) -> Metadata
where
	I: IntoIterator<Item = (&'a str, &'a str)>,
{
	let mut metadata = Metadata::default();

	for (key, value) in items {
		let field = match key {
			k if k.eq_ignore_ascii_case("TITLE") => &mut metadata.title,
			k if k.eq_ignore_ascii_case("ARTIST") => &mut metadata.artist,
			k if k.eq_ignore_ascii_case("ALBUM") => &mut metadata.album,
			k if k.eq_ignore_ascii_case("GENRE") => &mut metadata.genre,
			k if k.eq_ignore_ascii_case("TRACKNUMBER") => {
				metadata.track = parse_number(value);
				continue;
			},
			_ => {
				if !value.is_empty() {
					metadata.other.insert(key.to_owned(), value.to_owned());
				}

				continue;
			},
		};

		value.clone_into(field);
	}

	if !vendor.is_empty() {
		metadata
			.other
			.entry(String::from("vendor"))
			.or_insert_with(|| vendor.to_owned());
	}

	metadata
}
