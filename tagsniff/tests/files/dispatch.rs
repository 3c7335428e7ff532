use crate::util::{flac_block, flac_stream, id3v2_tag, mpeg_frame, temp_file, text_frame, vorbis_comments};

use std::io::{Cursor, Seek, SeekFrom, Write as _};

use rusty_fork::rusty_fork_test;
use tagsniff::config::ParseOptions;
use tagsniff::error::ErrorKind;
use tagsniff::metadata::Metadata;
use tagsniff::probe::Probe;
use tagsniff::registry::{self, Decoder, FormatRegistry, TagDecoder};
use tagsniff::sniff::{ContentType, detect};
use tagsniff::source::SeekableSource;

// A FLAC stream preceded by junk, which can't be detected
fn junk_prefixed_flac() -> Vec<u8> {
	let mut content = vec![0; 16];
	content.extend(flac_stream(&[flac_block(
		4,
		true,
		&vorbis_comments("", &["TITLE=Foo", "ARTIST=Bar"]),
	)]));
	content
}

#[test_log::test]
fn empty_input() {
	let mut reader = Cursor::new(Vec::new());
	assert_eq!(detect(&mut reader).unwrap(), ContentType::OCTET_STREAM);

	let err = tagsniff::parse(&mut reader).unwrap_err();
	assert!(
		matches!(err.kind(), ErrorKind::UnknownContentType(label) if label == "application/octet-stream")
	);

	let err = tagsniff::parse_stream(std::io::empty()).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::UnknownContentType(_)));
}

#[test_log::test]
fn unmapped_content_type() {
	let mut png = b"\x89PNG\r\n\x1A\n".to_vec();
	png.extend([0; 32]);

	let err = tagsniff::parse(&mut Cursor::new(png)).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::UnknownContentType(label) if label == "image/png"));
}

#[test_log::test]
fn undetectable_content() {
	let err = tagsniff::parse(&mut Cursor::new(junk_prefixed_flac())).unwrap_err();
	assert!(
		matches!(err.kind(), ErrorKind::UnknownContentType(label) if label == "application/octet-stream")
	);
}

#[test_log::test]
fn caller_registry_override() {
	let mut registry = FormatRegistry::new();
	registry.register("audio/custom", Decoder::VorbisComments);

	let metadata = Probe::new(Cursor::new(junk_prefixed_flac()))
		.set_content_type("audio/custom")
		.registry(&registry)
		.parse()
		.unwrap();
	assert_eq!(metadata.title(), "Foo");
	assert_eq!(metadata.artist(), "Bar");

	// The junk window is respected
	let err = Probe::new(Cursor::new(junk_prefixed_flac()))
		.set_content_type("audio/custom")
		.registry(&registry)
		.options(ParseOptions::new().max_junk_bytes(8))
		.parse()
		.unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::MalformedHeader(_)));
}

#[test_log::test]
fn parse_path() {
	let mut content = id3v2_tag(4, &[("TIT2", text_frame(4, "From a path"))], 0);
	content.extend(mpeg_frame());

	let mut file = tempfile::NamedTempFile::new().unwrap();
	file.write_all(&content).unwrap();
	file.flush().unwrap();

	let metadata = tagsniff::parse_path(file.path()).unwrap();
	assert_eq!(metadata.title(), "From a path");

	let err = tagsniff::parse_path(file.path().with_extension("missing")).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::Io(_)));
}

#[test_log::test]
fn concurrent_parses() {
	let mut content = id3v2_tag(3, &[("TALB", text_frame(3, "Shared"))], 0);
	content.extend(mpeg_frame());

	std::thread::scope(|s| {
		let handles = (0..4)
			.map(|_| {
				s.spawn(|| {
					let mut file = temp_file(&content);
					file.seek(SeekFrom::End(0)).unwrap();
					tagsniff::parse(&mut file).unwrap()
				})
			})
			.collect::<Vec<_>>();

		for handle in handles {
			assert_eq!(handle.join().unwrap().album(), "Shared");
		}
	});
}

#[derive(Default)]
struct TitleOnly;

impl TagDecoder for TitleOnly {
	fn name(&self) -> &'static str {
		"TitleOnly"
	}

	fn decode(
		&self,
		source: &mut SeekableSource<'_>,
		_: ParseOptions,
	) -> tagsniff::error::Result<Metadata> {
		let len = source.len()?;
		let title = format!("{len} bytes");

		Ok(tagsniff::normalize::from_vorbis_comments(
			"",
			[("TITLE", title.as_str())],
		))
	}
}

// The default registry is shared by the entire process
rusty_fork_test! {
	#[test_log::test]
	fn global_registration() {
		assert_eq!(registry::lookup("audio/custom"), None);

		let err = Probe::new(Cursor::new(junk_prefixed_flac()))
			.set_content_type("audio/custom")
			.parse()
			.unwrap_err();
		assert!(matches!(err.kind(), ErrorKind::UnknownContentType(label) if label == "audio/custom"));

		assert_eq!(registry::register("audio/custom", Decoder::VorbisComments), None);

		let metadata = Probe::new(Cursor::new(junk_prefixed_flac()))
			.set_content_type("audio/custom")
			.parse()
			.unwrap();
		assert_eq!(metadata.title(), "Foo");

		// Existing labels can be remapped
		let previous = registry::register_custom_decoder::<TitleOnly>(ContentType::MPEG);
		assert_eq!(previous, Some(Decoder::Id3));

		let content = mpeg_frame();
		let metadata = tagsniff::parse(&mut Cursor::new(content.clone())).unwrap();
		assert_eq!(metadata.title(), format!("{} bytes", content.len()));
	}
}
