use std::path::PathBuf;

use clap::ValueEnum;
use kwad::kwad::{Package, ResourceIndex};

use crate::error::Result;
use crate::export::anims::extract_anims;
use crate::export::blobs::extract_blobs;
use crate::export::dxt::Texpresso;
use crate::export::textures::{TextureImages, extract_textures};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportKind {
	Textures,
	Blobs,
	Anims,
	All,
}

#[derive(clap::Args)]
pub struct Args {
	pub input: PathBuf,
	#[arg(short = 'e', long = "extract", value_enum, default_value_t = ExportKind::All)]
	pub kind: ExportKind,
	#[arg(short, long)]
	pub output: Option<PathBuf>,
}

/// Decode a package and export the selected asset kinds.
pub fn run(args: Args) -> Result<()> {
	let Args { input, kind, output } = args;
	let output = output.unwrap_or_else(|| default_output(&input));

	let package = Package::open(&input)?;
	if !package.failures().is_empty() {
		tracing::warn!(count = package.failures().len(), "some resources failed to decode");
	}
	let index = ResourceIndex::build(&package);
	let blocks = Texpresso;
	let mut images = TextureImages::new(&index, &blocks);

	if matches!(kind, ExportKind::Textures | ExportKind::All) {
		let written = extract_textures(&index, &output, &mut images)?;
		tracing::info!(written, "textures done");
	}
	if matches!(kind, ExportKind::Blobs | ExportKind::All) {
		let written = extract_blobs(&index, &output)?;
		tracing::info!(written, "blobs done");
	}
	if matches!(kind, ExportKind::Anims | ExportKind::All) {
		let stats = extract_anims(&index, &output, &mut images)?;
		tracing::info!(written = stats.written, failed = stats.failed, "animation bundles done");
	}

	tracing::info!(output = %output.display(), "work complete");
	Ok(())
}

/// `<input file name>.d`, relative to the working directory.
fn default_output(input: &std::path::Path) -> PathBuf {
	let mut name = input.file_name().map(|name| name.to_os_string()).unwrap_or_default();
	name.push(".d");
	PathBuf::from(name)
}
