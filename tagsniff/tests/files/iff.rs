use crate::util::{id3v1_tag, id3v2_tag, iff_container, text_frame};

use std::io::Cursor;

use tagsniff::error::ErrorKind;
use tagsniff::sniff::{ContentType, detect};

fn fmt_chunk() -> Vec<u8> {
	let mut fmt = Vec::new();
	fmt.extend(1_u16.to_le_bytes());
	fmt.extend(2_u16.to_le_bytes());
	fmt.extend(44100_u32.to_le_bytes());
	fmt.extend((44100_u32 * 4).to_le_bytes());
	fmt.extend(4_u16.to_le_bytes());
	fmt.extend(16_u16.to_le_bytes());
	fmt
}

#[test_log::test]
fn wav_id3_chunk() {
	// Odd sized, so the chunk is followed by a pad byte
	let tag = id3v2_tag(3, &[("TIT2", text_frame(3, "Foo"))], 1);
	assert_eq!(tag.len() % 2, 1);

	let content = iff_container(
		false,
		&[
			(b"fmt ", fmt_chunk()),
			(b"data", vec![0; 64]),
			(b"id3 ", tag),
		],
	);

	assert_eq!(detect(&mut &content[..]).unwrap(), ContentType::WAVE);

	let metadata = tagsniff::parse(&mut Cursor::new(content)).unwrap();
	assert_eq!(metadata.title(), "Foo");
	assert_eq!(metadata.other("version"), Some("2.3.0"));
}

#[test_log::test]
fn aiff_id3_chunk() {
	let content = iff_container(
		true,
		&[
			(b"COMM", vec![0; 18]),
			(b"ID3 ", id3v2_tag(4, &[("TPE1", text_frame(4, "Bar"))], 0)),
			(b"SSND", vec![0; 32]),
		],
	);

	assert_eq!(detect(&mut &content[..]).unwrap(), ContentType::AIFF);

	let metadata = tagsniff::parse(&mut Cursor::new(content)).unwrap();
	assert_eq!(metadata.artist(), "Bar");
}

#[test_log::test]
fn wav_trailing_id3v1() {
	let mut content = iff_container(false, &[(b"fmt ", fmt_chunk())]);
	content.extend(id3v1_tag("Trailing", "", "2001", None, 255));

	let metadata = tagsniff::parse(&mut Cursor::new(content)).unwrap();
	assert_eq!(metadata.title(), "Trailing");
	assert_eq!(metadata.year(), 2001);
	assert_eq!(metadata.genre(), "");
}

#[test_log::test]
fn wav_without_tags() {
	let content = iff_container(false, &[(b"fmt ", fmt_chunk()), (b"data", vec![0; 8])]);

	let err = tagsniff::parse(&mut Cursor::new(content)).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::UnknownVersion));
}

#[test_log::test]
fn wav_unset_container_size() {
	let mut content = iff_container(false, &[(b"fmt ", fmt_chunk()), (b"data", vec![0; 16])]);
	// Left unset by a streaming writer
	content[4..8].copy_from_slice(&u32::MAX.to_le_bytes());
	content.extend(id3v1_tag("Trailing", "", "", None, 0));

	let metadata = tagsniff::parse(&mut Cursor::new(content)).unwrap();
	assert_eq!(metadata.title(), "Trailing");
}

#[test_log::test]
fn truncated_wav() {
	let mut content = iff_container(false, &[(b"fmt ", fmt_chunk()), (b"data", vec![0; 256])]);
	content.truncate(100);
	content.extend(id3v1_tag("Cut short", "", "", None, 0));

	let metadata = tagsniff::parse(&mut Cursor::new(content)).unwrap();
	assert_eq!(metadata.title(), "Cut short");
}
