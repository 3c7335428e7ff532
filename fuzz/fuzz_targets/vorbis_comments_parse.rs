#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use tagsniff::probe::Probe;
use tagsniff::sniff::ContentType;

fuzz_target!(|data: Vec<u8>| {
	let _ = Probe::new(Cursor::new(data))
		.set_content_type(ContentType::OGG)
		.parse();
});
