#![allow(missing_docs)]

use tagsniff::config::{ParseOptions, ParsingMode};
use tagsniff::probe::Probe;

use structopt::StructOpt;

use std::path::PathBuf;

#[derive(Debug, StructOpt)]
#[structopt(name = "tag_reader", about = "Print the metadata of an audio file")]
struct Opt {
	/// Skip detection, and decode as this content type (ex. "audio/ogg")
	#[structopt(short, long)]
	content_type: Option<String>,

	/// Fail on any malformed data, rather than attempting to recover
	#[structopt(short, long)]
	strict: bool,

	#[structopt(parse(from_os_str))]
	path: PathBuf,
}

fn main() {
	let opt = Opt::from_args();

	let parsing_mode = if opt.strict {
		ParsingMode::Strict
	} else {
		ParseOptions::DEFAULT_PARSING_MODE
	};
	let options = ParseOptions::new().parsing_mode(parsing_mode);

	let mut probe = Probe::open(&opt.path)
		.expect("ERROR: Bad path provided!")
		.options(options);

	if let Some(content_type) = opt.content_type {
		probe = probe.set_content_type(content_type);
	}

	if probe.content_type().is_none() {
		probe = probe.sniff().expect("ERROR: Failed to read file!");
	}

	if let Some(content_type) = probe.content_type() {
		println!("--- {content_type} ---");
	}

	match probe.parse() {
		Ok(metadata) => println!("{metadata}"),
		Err(e) => eprintln!("ERROR: {e}"),
	}
}
