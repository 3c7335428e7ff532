//! Builders for minimal tagged content
//!
//! Nothing here produces playable audio, only enough structure for the decoders to find a tag.

use std::io::{Seek as _, Write as _};

use std::fs::File;

/// Create a new temporary file holding `content`
pub fn temp_file(content: &[u8]) -> File {
	let mut file = tempfile::tempfile().unwrap();
	file.write_all(content).unwrap();
	file.rewind().unwrap();

	file
}

/// A single MPEG-1 Layer III frame header (128 kbps, 44.1 kHz), padded with silence
pub fn mpeg_frame() -> Vec<u8> {
	let mut frame = vec![0xFF, 0xFB, 0x90, 0x64];
	frame.resize(417, 0);
	frame
}

fn synchsafe(n: u32) -> [u8; 4] {
	[
		((n >> 21) & 0x7F) as u8,
		((n >> 14) & 0x7F) as u8,
		((n >> 7) & 0x7F) as u8,
		(n & 0x7F) as u8,
	]
}

/// A text frame body, Latin-1 for ID3v2.2/3 and UTF-8 for ID3v2.4
pub fn text_frame(major: u8, text: &str) -> Vec<u8> {
	let mut content = Vec::new();
	if major == 4 {
		content.push(3);
		content.extend(text.as_bytes());
	} else {
		content.push(0);
		content.extend(text.chars().map(|c| c as u8));
	}

	content
}

/// A `COMM` frame body with an empty description
pub fn comment_frame(text: &str) -> Vec<u8> {
	let mut content = vec![0];
	content.extend(b"eng");
	content.push(0);
	content.extend(text.as_bytes());
	content
}

/// An ID3v2 tag of version `2.{major}.0` holding `frames`, followed by `padding` bytes of padding
pub fn id3v2_tag(major: u8, frames: &[(&str, Vec<u8>)], padding: usize) -> Vec<u8> {
	let mut body = Vec::new();
	for (id, content) in frames {
		body.extend(id.as_bytes());

		let size = content.len() as u32;
		match major {
			2 => body.extend(&size.to_be_bytes()[1..]),
			3 => body.extend(size.to_be_bytes()),
			_ => body.extend(synchsafe(size)),
		}

		if major > 2 {
			// Flags
			body.extend([0, 0]);
		}

		body.extend(content);
	}

	body.resize(body.len() + padding, 0);

	let mut tag = Vec::new();
	tag.extend(b"ID3");
	tag.extend([major, 0, 0]);
	tag.extend(synchsafe(body.len() as u32));
	tag.extend(body);
	tag
}

/// A 128 byte ID3v1 tag, with a track number making it ID3v1.1
pub fn id3v1_tag(title: &str, artist: &str, year: &str, track: Option<u8>, genre: u8) -> Vec<u8> {
	let mut tag = vec![0; 128];
	tag[..3].copy_from_slice(b"TAG");
	tag[3..3 + title.len()].copy_from_slice(title.as_bytes());
	tag[33..33 + artist.len()].copy_from_slice(artist.as_bytes());
	tag[93..93 + year.len()].copy_from_slice(year.as_bytes());

	if let Some(track) = track {
		tag[126] = track;
	}

	tag[127] = genre;
	tag
}

/// A Vorbis comment header, without any signature
pub fn vorbis_comments(vendor: &str, items: &[&str]) -> Vec<u8> {
	let mut header = Vec::new();
	header.extend((vendor.len() as u32).to_le_bytes());
	header.extend(vendor.as_bytes());
	header.extend((items.len() as u32).to_le_bytes());

	for item in items {
		header.extend((item.len() as u32).to_le_bytes());
		header.extend(item.as_bytes());
	}

	header
}

/// An Ogg page holding a single complete packet
///
/// The checksum is left as 0, it is never verified while reading.
pub fn ogg_page(sequence_number: u32, header_type: u8, packet: &[u8]) -> Vec<u8> {
	let mut segment_table = vec![255; packet.len() / 255];
	segment_table.push((packet.len() % 255) as u8);

	let mut page = Vec::new();
	page.extend(b"OggS");
	page.push(0);
	page.push(header_type);
	page.extend(0_u64.to_le_bytes());
	page.extend(1234_u32.to_le_bytes());
	page.extend(sequence_number.to_le_bytes());
	page.extend(0_u32.to_le_bytes());
	page.push(segment_table.len() as u8);
	page.extend(segment_table);
	page.extend(packet);
	page
}

/// An Ogg stream with an identification packet and a comment packet, each on their own page
pub fn ogg_stream(identification: &[u8], comments: &[u8]) -> Vec<u8> {
	let mut stream = ogg_page(0, 0x02, identification);
	stream.extend(ogg_page(1, 0, comments));
	stream
}

/// A Vorbis identification packet
pub fn vorbis_ident() -> Vec<u8> {
	let mut packet = b"\x01vorbis".to_vec();
	// Version, channels, sample rate, bitrates, block sizes, framing
	packet.extend(0_u32.to_le_bytes());
	packet.push(2);
	packet.extend(44100_u32.to_le_bytes());
	packet.extend([0; 12]);
	packet.extend([0xB8, 0x01]);
	packet
}

/// A FLAC metadata block
pub fn flac_block(ty: u8, last: bool, content: &[u8]) -> Vec<u8> {
	let mut block = vec![if last { ty | 0x80 } else { ty }];
	block.extend(&(content.len() as u32).to_be_bytes()[1..]);
	block.extend(content);
	block
}

/// A native FLAC stream, with a STREAMINFO block followed by `blocks`
pub fn flac_stream(blocks: &[Vec<u8>]) -> Vec<u8> {
	let mut stream = b"fLaC".to_vec();
	stream.extend(flac_block(0, blocks.is_empty(), &[0; 34]));
	for block in blocks {
		stream.extend(block);
	}

	stream
}

/// A RIFF/WAVE (little endian) or FORM/AIFF (big endian) container holding `chunks`
pub fn iff_container(aiff: bool, chunks: &[(&[u8; 4], Vec<u8>)]) -> Vec<u8> {
	let size_bytes = |size: u32| -> [u8; 4] {
		if aiff {
			size.to_be_bytes()
		} else {
			size.to_le_bytes()
		}
	};

	let mut body = Vec::new();
	body.extend(if aiff { b"AIFF" } else { b"WAVE" });
	for (fourcc, content) in chunks {
		body.extend(*fourcc);
		body.extend(size_bytes(content.len() as u32));
		body.extend(content);

		// Chunks are 2 byte aligned
		if content.len() % 2 != 0 {
			body.push(0);
		}
	}

	let mut container = Vec::new();
	container.extend(if aiff { b"FORM" } else { b"RIFF" });
	container.extend(size_bytes(body.len() as u32));
	container.extend(body);
	container
}
