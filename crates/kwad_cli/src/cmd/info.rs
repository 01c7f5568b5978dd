use std::path::PathBuf;

use kwad::kwad::Package;
use kwad::kwad::resource::tag_label;
use serde::Serialize;

use crate::cmd::util::emit_json;
use crate::error::Result;

#[derive(clap::Args)]
pub struct Args {
	pub input: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// Print header, resource table, aliases and decode failures.
pub fn run(args: Args) -> Result<()> {
	let Args { input, json } = args;

	let package = Package::open(&input)?;
	let payload = InfoJson::from_package(&input, &package);

	if json {
		return emit_json(&payload);
	}

	println!("path: {}", payload.path);
	println!("signature: {}", payload.signature);
	println!("version: {}", payload.version);
	println!("file_size: {}", payload.file_size);
	println!("slab_count: {}", payload.slab_count);
	println!("resources: {}", payload.resources.len());
	println!("aliases: {}", payload.aliases.len());
	println!("failures: {}", payload.failures.len());
	println!();
	println!("index\ttag\tslab\tsize\toffset\tdecoded");
	for item in &payload.resources {
		println!(
			"{}\t{}\t{}\t{}\t{}\t{}",
			item.index, item.tag, item.slab, item.size, item.offset, item.decoded
		);
	}
	println!();
	println!("alias\tresource");
	for item in &payload.aliases {
		println!("{}\t{}", item.path, item.resource);
	}
	if !payload.failures.is_empty() {
		println!();
		println!("index\ttag\toffset\terror");
		for item in &payload.failures {
			println!("{}\t{}\t{}\t{}", item.index, item.tag, item.offset, item.error);
		}
	}

	Ok(())
}

#[derive(Serialize)]
struct InfoJson {
	path: String,
	signature: String,
	version: u8,
	file_size: u32,
	slab_count: u32,
	resources: Vec<ResourceJson>,
	aliases: Vec<AliasJson>,
	failures: Vec<FailureJson>,
}

#[derive(Serialize)]
struct ResourceJson {
	index: u32,
	tag: String,
	slab: u32,
	size: u32,
	offset: u32,
	kind: Option<&'static str>,
	decoded: bool,
}

#[derive(Serialize)]
struct AliasJson {
	path: String,
	resource: u32,
}

#[derive(Serialize)]
struct FailureJson {
	index: u32,
	tag: String,
	offset: u32,
	error: String,
}

impl InfoJson {
	fn from_package(input: &std::path::Path, package: &Package) -> Self {
		let resources = package
			.resource_infos()
			.iter()
			.zip(package.resources())
			.zip(0_u32..)
			.map(|((info, slot), index)| ResourceJson {
				index,
				tag: tag_label(info.tag),
				slab: info.slab_index,
				size: info.size,
				offset: info.offset,
				kind: slot.as_ref().map(|resource| resource.kind().as_str()),
				decoded: slot.is_some(),
			})
			.collect();

		Self {
			path: input.display().to_string(),
			signature: String::from_utf8_lossy(&package.header.signature).into_owned(),
			version: package.version().as_u8(),
			file_size: package.header.file_size,
			slab_count: package.header.slab_count,
			resources,
			aliases: package
				.aliases()
				.iter()
				.map(|alias| AliasJson {
					path: alias.path_str().into_owned(),
					resource: alias.resource_index,
				})
				.collect(),
			failures: package
				.failures()
				.iter()
				.map(|failure| FailureJson {
					index: failure.index,
					tag: tag_label(failure.tag),
					offset: failure.offset,
					error: failure.error.to_string(),
				})
				.collect(),
		}
	}
}
