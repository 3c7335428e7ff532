use crate::util::{comment_frame, id3v1_tag, id3v2_tag, mpeg_frame, temp_file, text_frame};

use std::io::{Cursor, Seek, SeekFrom};

use tagsniff::config::{ParseOptions, ParsingMode};
use tagsniff::error::ErrorKind;
use tagsniff::probe::Probe;
use tagsniff::sniff::{ContentType, detect};

fn with_audio(tag: Vec<u8>) -> Vec<u8> {
	let mut content = tag;
	content.extend(mpeg_frame());
	content
}

#[test_log::test]
fn id3v2_track_with_total() {
	let tag = id3v2_tag(
		3,
		&[
			("TIT2", text_frame(3, "Foo")),
			("TRCK", text_frame(3, "5/12")),
		],
		0,
	);
	let tag_size = tag.len() - 10;

	let metadata = tagsniff::parse(&mut Cursor::new(with_audio(tag))).unwrap();
	assert_eq!(metadata.title(), "Foo");
	assert_eq!(metadata.track(), 5);
	assert_eq!(metadata.other("version"), Some("2.3.0"));
	assert_eq!(metadata.other("size"), Some(tag_size.to_string().as_str()));
}

#[test_log::test]
fn id3v2_4() {
	let tag = id3v2_tag(
		4,
		&[
			("TIT2", text_frame(4, "\u{d1}and\u{fa}")),
			("TPE1", text_frame(4, "Artist 1\0Artist 2")),
			("TALB", text_frame(4, "Album")),
			("TDRC", text_frame(4, "2004-05-06T12:00")),
			("TCON", text_frame(4, "Rock")),
			("COMM", comment_frame("First")),
			("COMM", comment_frame("Second")),
		],
		256,
	);

	let metadata = tagsniff::parse(&mut Cursor::new(with_audio(tag))).unwrap();
	assert_eq!(metadata.title(), "\u{d1}and\u{fa}");
	// Only the first of multiple values is used
	assert_eq!(metadata.artist(), "Artist 1");
	assert_eq!(metadata.album(), "Album");
	assert_eq!(metadata.year(), 2004);
	assert_eq!(metadata.genre(), "Rock");
	assert_eq!(metadata.comment(), "First\nSecond");
	assert_eq!(metadata.track(), 0);
	assert_eq!(metadata.other("version"), Some("2.4.0"));
}

#[test_log::test]
fn id3v2_2() {
	let tag = id3v2_tag(
		2,
		&[
			("TT2", text_frame(2, "Old")),
			("TYE", text_frame(2, "1998")),
			("TRK", text_frame(2, "3")),
		],
		0,
	);

	let metadata = tagsniff::parse(&mut Cursor::new(with_audio(tag))).unwrap();
	assert_eq!(metadata.title(), "Old");
	assert_eq!(metadata.year(), 1998);
	assert_eq!(metadata.track(), 3);
	assert_eq!(metadata.other("version"), Some("2.2.0"));
}

#[test_log::test]
fn id3v2_preferred_over_id3v1() {
	let mut content = with_audio(id3v2_tag(3, &[("TIT2", text_frame(3, "From ID3v2"))], 0));
	content.extend(id3v1_tag("From ID3v1", "", "", None, 255));

	let metadata = tagsniff::parse(&mut Cursor::new(content)).unwrap();
	assert_eq!(metadata.title(), "From ID3v2");
}

#[test_log::test]
fn id3v1_fallback() {
	let mut content = mpeg_frame();
	content.extend(id3v1_tag("Title", "Artist", "1999", Some(7), 0));

	let mut reader = Cursor::new(content);
	assert_eq!(detect(&mut reader).unwrap(), ContentType::MPEG);

	// Where the reader was left doesn't matter
	reader.seek(SeekFrom::End(-3)).unwrap();

	let metadata = tagsniff::parse(&mut reader).unwrap();
	assert_eq!(metadata.title(), "Title");
	assert_eq!(metadata.artist(), "Artist");
	assert_eq!(metadata.year(), 1999);
	assert_eq!(metadata.track(), 7);
	assert_eq!(metadata.genre(), "Blues");
	assert_eq!(metadata.other("version"), Some("1.1"));
	assert_eq!(metadata.other("size"), Some("128"));
}

#[test_log::test]
fn id3v1_comment_without_track() {
	let mut tag = id3v1_tag("Title", "", "", None, 0);
	tag[97..127].copy_from_slice(b"A comment filling all 30 bytes");

	let mut content = mpeg_frame();
	content.extend(tag);

	let metadata = tagsniff::parse(&mut Cursor::new(content)).unwrap();
	assert_eq!(metadata.comment(), "A comment filling all 30 bytes");
	assert_eq!(metadata.track(), 0);
	assert_eq!(metadata.other("version"), Some("1.0"));
}

#[test_log::test]
fn id3v1_disabled() {
	let mut content = mpeg_frame();
	content.extend(id3v1_tag("Title", "", "", None, 255));

	let err = Probe::new(Cursor::new(content))
		.options(ParseOptions::new().read_id3v1(false))
		.parse()
		.unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::UnknownVersion));
}

#[test_log::test]
fn no_tag() {
	let err = tagsniff::parse(&mut Cursor::new(mpeg_frame())).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::UnknownVersion));
}

#[test_log::test]
fn bad_frame_per_parsing_mode() {
	let tag = id3v2_tag(
		3,
		&[
			("TIT2", text_frame(3, "Foo")),
			("T!T2", text_frame(3, "Bar")),
		],
		0,
	);
	let content = with_audio(tag);

	let err = Probe::new(Cursor::new(content.clone()))
		.options(ParseOptions::new().parsing_mode(ParsingMode::Strict))
		.parse()
		.unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::Id3v2(_)));

	// Otherwise, the bad frame is skipped
	let metadata = tagsniff::parse(&mut Cursor::new(content)).unwrap();
	assert_eq!(metadata.title(), "Foo");
}

#[test_log::test]
fn parse_is_repeatable() {
	let mut content = with_audio(id3v2_tag(
		3,
		&[
			("TIT2", text_frame(3, "Foo")),
			("TPE1", text_frame(3, "Bar")),
			("COMM", comment_frame("Hello")),
		],
		64,
	));
	content.extend(id3v1_tag("Ignored", "", "", None, 255));

	let mut file = temp_file(&content);
	let first = tagsniff::parse(&mut file).unwrap();
	let second = tagsniff::parse(&mut file).unwrap();
	assert_eq!(first, second);

	let streamed = tagsniff::parse_stream(&content[..]).unwrap();
	assert_eq!(first, streamed);
}
