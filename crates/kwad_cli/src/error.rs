use std::io;
use std::path::PathBuf;

use kwad::kwad::KwadError;
use thiserror::Error;

/// Result alias for command execution.
pub type Result<T> = std::result::Result<T, CliError>;

/// Failures surfaced by `kwadtool` commands.
#[derive(Debug, Error)]
pub enum CliError {
	#[error(transparent)]
	Kwad(#[from] KwadError),
	#[error("i/o error at {}: {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("cannot write image {}: {source}", path.display())]
	Image {
		path: PathBuf,
		#[source]
		source: image::ImageError,
	},
	#[error("xml serialization failed: {message}")]
	Xml { message: String },
	#[error("json serialization failed: {0}")]
	Json(#[from] serde_json::Error),
}

impl CliError {
	pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
		let path = path.into();
		move |source| Self::Io { path, source }
	}
}
