/// A decoded Vorbis comment header
///
/// Items keep the key as written, and are in the order they were read.
#[derive(Default, PartialEq, Eq, Debug, Clone)]
pub(crate) struct VorbisComments {
	/// An identifier for the encoding software
	pub(crate) vendor: String,
	/// A collection of key-value pairs
	pub(crate) items: Vec<(String, String)>,
}

impl VorbisComments {
	/// Iterate over the items as `(key, value)`
	pub(crate) fn items(&self) -> impl Iterator<Item = (&str, &str)> {
		self.items.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}
}
