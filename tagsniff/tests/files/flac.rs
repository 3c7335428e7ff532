use crate::util::{flac_block, flac_stream, id3v2_tag, text_frame, vorbis_comments};

use std::io::Cursor;

use tagsniff::config::{ParseOptions, ParsingMode};
use tagsniff::error::ErrorKind;
use tagsniff::probe::Probe;
use tagsniff::sniff::{ContentType, detect};

#[test_log::test]
fn native_flac() {
	let content = flac_stream(&[
		// Padding
		flac_block(1, false, &[0; 16]),
		flac_block(
			4,
			true,
			&vorbis_comments("reference libFLAC 1.4.3", &["TITLE=Foo", "TRACKNUMBER=2"]),
		),
	]);

	assert_eq!(detect(&mut &content[..]).unwrap(), ContentType::FLAC);

	let metadata = tagsniff::parse(&mut Cursor::new(content)).unwrap();
	assert_eq!(metadata.title(), "Foo");
	assert_eq!(metadata.track(), 2);
	assert_eq!(metadata.other("vendor"), Some("reference libFLAC 1.4.3"));
}

#[test_log::test]
fn multiple_vorbis_comments() {
	let content = flac_stream(&[
		flac_block(4, false, &vorbis_comments("", &["ARTIST=Artist 1"])),
		flac_block(4, true, &vorbis_comments("", &["ARTIST=Artist 2"])),
	]);

	// Only a single VORBIS_COMMENT block is allowed
	let err = Probe::new(Cursor::new(content.clone()))
		.options(ParseOptions::new().parsing_mode(ParsingMode::Strict))
		.parse()
		.unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::MalformedHeader(_)));

	// But by default, we should just take the last tag in the stream
	let metadata = tagsniff::parse(&mut Cursor::new(content)).unwrap();
	assert_eq!(metadata.artist(), "Artist 2");
	assert_eq!(metadata.other("vendor"), None);
}

#[test_log::test]
fn no_vorbis_comments() {
	let content = flac_stream(&[]);

	let err = tagsniff::parse(&mut Cursor::new(content)).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::MalformedHeader(_)));
}

#[test_log::test]
fn missing_streaminfo() {
	let mut content = b"fLaC".to_vec();
	content.extend(flac_block(4, true, &vorbis_comments("", &["TITLE=Foo"])));

	let err = Probe::new(Cursor::new(content.clone()))
		.options(ParseOptions::new().parsing_mode(ParsingMode::Strict))
		.parse()
		.unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::MalformedHeader(_)));

	let metadata = tagsniff::parse(&mut Cursor::new(content)).unwrap();
	assert_eq!(metadata.title(), "Foo");
}

#[test_log::test]
fn id3v2_before_stream_marker() {
	let mut content = id3v2_tag(3, &[("TIT2", text_frame(3, "From ID3v2"))], 16);
	content.extend(flac_stream(&[flac_block(
		4,
		true,
		&vorbis_comments("", &["TITLE=From Vorbis comments"]),
	)]));

	// An ID3v2 tag makes the content look like MPEG
	let metadata = tagsniff::parse(&mut Cursor::new(content.clone())).unwrap();
	assert_eq!(metadata.title(), "From ID3v2");

	// Until the caller says otherwise
	let metadata = Probe::new(Cursor::new(content))
		.set_content_type(ContentType::FLAC)
		.parse()
		.unwrap();
	assert_eq!(metadata.title(), "From Vorbis comments");
}

#[test_log::test]
fn truncated_block_list() {
	// STREAMINFO claims more blocks follow, but the stream ends
	let mut content = b"fLaC".to_vec();
	content.extend(flac_block(0, false, &[0; 34]));

	let err = tagsniff::parse(&mut Cursor::new(content.clone())).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::MalformedHeader(_)));

	// A comment block read before the stream ends is still used
	content.extend(flac_block(4, false, &vorbis_comments("", &["TITLE=Foo"])));

	let metadata = tagsniff::parse(&mut Cursor::new(content.clone())).unwrap();
	assert_eq!(metadata.title(), "Foo");

	let err = Probe::new(Cursor::new(content))
		.options(ParseOptions::new().parsing_mode(ParsingMode::Strict))
		.parse()
		.unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::MalformedHeader(_)));
}
