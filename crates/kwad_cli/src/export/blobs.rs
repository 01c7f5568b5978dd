use std::path::Path;

use kwad::kwad::ResourceIndex;
use kwad::kwad::resource::ResourceKind;

use crate::cmd::util::{output_path, write_file};
use crate::error::Result;

/// Write every aliased blob verbatim under `out`. Returns the number written.
pub fn extract_blobs(index: &ResourceIndex<'_>, out: &Path) -> Result<usize> {
	let named = index.aliases_of_kind(ResourceKind::Blob);
	tracing::info!(count = named.len(), "extracting blobs");

	let mut written = 0;
	for item in named {
		let Some(blob) = item.resource.as_blob() else {
			continue;
		};
		write_file(&output_path(out, item.path), &blob.data)?;
		tracing::debug!(blob = item.path, bytes = blob.data.len(), "written");
		written += 1;
	}
	Ok(written)
}
