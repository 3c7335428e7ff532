use crate::util::{ogg_page, ogg_stream, vorbis_comments, vorbis_ident};

use std::io::Cursor;

use tagsniff::config::{ParseOptions, ParsingMode};
use tagsniff::error::ErrorKind;
use tagsniff::probe::Probe;
use tagsniff::sniff::ContentType;

fn vorbis(items: &[&str]) -> Vec<u8> {
	let mut comment_packet = b"\x03vorbis".to_vec();
	comment_packet.extend(vorbis_comments("Xiph.Org libVorbis I 20200704", items));
	// Framing bit
	comment_packet.push(1);

	ogg_stream(&vorbis_ident(), &comment_packet)
}

#[test_log::test]
fn vorbis_fields() {
	let content = vorbis(&["TITLE=Foo", "ARTIST=Bar", "TRACKNUMBER=not-a-number"]);

	let probe = Probe::new(Cursor::new(content)).sniff().unwrap();
	assert_eq!(probe.content_type(), Some(&ContentType::OGG));

	let metadata = probe.parse().unwrap();
	assert_eq!(metadata.title(), "Foo");
	assert_eq!(metadata.artist(), "Bar");
	assert_eq!(metadata.track(), 0);
	assert_eq!(metadata.year(), 0);
	assert_eq!(
		metadata.other("vendor"),
		Some("Xiph.Org libVorbis I 20200704")
	);
}

#[test_log::test]
fn other_items() {
	let content = vorbis(&[
		"title=lowercase",
		"TRACKNUMBER=4",
		"LICENSE=CC-BY=4.0",
		"EMPTY=",
		"NO SEPARATOR",
	]);

	let metadata = tagsniff::parse(&mut Cursor::new(content)).unwrap();
	assert_eq!(metadata.title(), "lowercase");
	assert_eq!(metadata.track(), 4);

	// Only the first `=` separates the key
	assert_eq!(metadata.other("LICENSE"), Some("CC-BY=4.0"));
	assert_eq!(metadata.other("EMPTY"), None);
	assert_eq!(metadata.other("NO SEPARATOR"), None);
	assert_eq!(metadata.other_items().len(), 2);
}

#[test_log::test]
fn repeated_key() {
	let content = vorbis(&["ARTIST=First", "ARTIST=Second"]);

	let metadata = tagsniff::parse(&mut Cursor::new(content)).unwrap();
	assert_eq!(metadata.artist(), "Second");
}

#[test_log::test]
fn invalid_key_per_parsing_mode() {
	let content = vorbis(&["TITLE=Foo", "BAD~KEY=Bar"]);

	let err = Probe::new(Cursor::new(content.clone()))
		.options(ParseOptions::new().parsing_mode(ParsingMode::Strict))
		.parse()
		.unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::MalformedHeader(_)));

	let metadata = tagsniff::parse(&mut Cursor::new(content)).unwrap();
	assert_eq!(metadata.title(), "Foo");
	assert_eq!(metadata.other("BAD~KEY"), None);
}

#[test_log::test]
fn opus() {
	let mut ident = b"OpusHead".to_vec();
	ident.extend([1, 2, 0x38, 0x01, 0x80, 0xBB, 0, 0, 0, 0, 0]);

	let mut comment_packet = b"OpusTags".to_vec();
	comment_packet.extend(vorbis_comments("libopus 1.3", &["ALBUM=Baz", "GENRE=Jazz"]));

	let metadata =
		tagsniff::parse(&mut Cursor::new(ogg_stream(&ident, &comment_packet))).unwrap();
	assert_eq!(metadata.album(), "Baz");
	assert_eq!(metadata.genre(), "Jazz");
	assert_eq!(metadata.other("vendor"), Some("libopus 1.3"));
}

#[test_log::test]
fn ogg_flac() {
	let mut ident = b"\x7FFLAC".to_vec();
	ident.extend([1, 0, 0, 1]);
	ident.extend(b"fLaC");
	ident.extend(crate::util::flac_block(0, false, &[0; 34]));

	let comment_packet =
		crate::util::flac_block(4, true, &vorbis_comments("reference libFLAC", &["TITLE=Ogg FLAC"]));

	let metadata =
		tagsniff::parse(&mut Cursor::new(ogg_stream(&ident, &comment_packet))).unwrap();
	assert_eq!(metadata.title(), "Ogg FLAC");
}

#[test_log::test]
fn unsupported_codec() {
	let content = ogg_stream(b"\x80theora", b"\x81theora");

	let err = tagsniff::parse(&mut Cursor::new(content)).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::MalformedHeader(_)));
}

#[test_log::test]
fn missing_comment_packet() {
	let content = ogg_page(0, 0x02, &vorbis_ident());

	let err = tagsniff::parse(&mut Cursor::new(content)).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::MalformedHeader(_)));

	// Nothing past the capture pattern
	let err = tagsniff::parse(&mut Cursor::new(b"OggS\0")).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::MalformedHeader(_)));

	// The comment page is cut short
	let mut content = vorbis(&["TITLE=Foo"]);
	content.truncate(content.len() - 4);

	let err = tagsniff::parse(&mut Cursor::new(content)).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::MalformedHeader(_)));
}

#[test_log::test]
fn truncated_comment_header() {
	let mut comment_packet = b"\x03vorbis".to_vec();
	let header = vorbis_comments("vendor", &["TITLE=Foo"]);
	comment_packet.extend(&header[..header.len() - 2]);

	let content = ogg_stream(&vorbis_ident(), &comment_packet);

	let err = tagsniff::parse(&mut Cursor::new(content)).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::MalformedHeader(_)));
}
