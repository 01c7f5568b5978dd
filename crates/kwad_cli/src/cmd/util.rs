use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{CliError, Result};

/// Print a JSON payload to stdout.
pub(crate) fn emit_json<T: Serialize>(payload: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(payload)?);
	Ok(())
}

/// Map an alias path under `base`.
///
/// Leading separators are dropped and both `/` and `\` split components. `.` and `..`
/// components are ignored so aliases cannot climb out of `base`.
pub(crate) fn output_path(base: &Path, alias: &str) -> PathBuf {
	let mut out = base.to_path_buf();
	for part in alias.split(['/', '\\']) {
		if part.is_empty() || part == "." || part == ".." {
			continue;
		}
		out.push(part);
	}
	out
}

/// Create the parent directory of `path` if it has one.
pub(crate) fn ensure_parent(path: &Path) -> Result<()> {
	match path.parent() {
		Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent).map_err(CliError::io(parent)),
		_ => Ok(()),
	}
}

/// Write `bytes` to `path`, creating parent directories.
pub(crate) fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
	ensure_parent(path)?;
	fs::write(path, bytes).map_err(CliError::io(path))
}

#[cfg(test)]
mod tests;
