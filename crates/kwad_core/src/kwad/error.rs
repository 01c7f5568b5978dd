use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, KwadError>;

/// Errors produced while reading, decoding, and resolving KWAD data.
#[derive(Debug, Error)]
pub enum KwadError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Container or resource signature did not match any recognized value.
	#[error("unexpected {context} signature: expected {expected:?}, got {got:?}")]
	UnexpectedSignature {
		/// What was being decoded when the signature was read.
		context: &'static str,
		/// Expected signature bytes (first candidate when several are accepted).
		expected: Vec<u8>,
		/// Actual bytes read from the stream.
		got: Vec<u8>,
	},
	/// Not enough bytes remained for a requested read.
	#[error("unexpected end of data at offset {at}, need {need} bytes, remaining {rem}")]
	UnexpectedEndOfData {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Absolute seek target lies past the end of the buffer.
	#[error("seek to offset {to} is out of range (len={len})")]
	SeekOutOfRange {
		/// Requested absolute offset.
		to: usize,
		/// Buffer length.
		len: usize,
	},
	/// An index or alias lookup found nothing where a target was mandatory.
	#[error("unresolved reference: {reference}")]
	UnresolvedReference {
		/// Human-readable description of the reference.
		reference: String,
	},
	/// Resource slot holds a different kind than the caller required.
	#[error("resource {index} is {got}, expected {expected}")]
	ResourceKindMismatch {
		/// Resource table index.
		index: u32,
		/// Required kind label.
		expected: &'static str,
		/// Actual kind label.
		got: &'static str,
	},
	/// A `[start, start + count)` slice does not fit in its table.
	#[error("{table} range out of bounds: start={start}, count={count}, len={len}")]
	TableRangeOutOfBounds {
		/// Table being sliced.
		table: &'static str,
		/// First index of the range.
		start: u32,
		/// Number of entries requested.
		count: u32,
		/// Number of entries in the table.
		len: usize,
	},
	/// Surface carries no mipmap records.
	#[error("surface has no mipmaps")]
	MissingMipmap,
	/// Deflate stream could not be decoded.
	#[error("inflate failed: {0}")]
	Inflate(#[source] std::io::Error),
	/// Block-compressed pixel payload could not be decoded.
	#[error("block decompression failed: {message}")]
	BlockDecompress {
		/// Collaborator-provided detail.
		message: String,
	},
	/// Pixel payload length does not match the declared dimensions.
	#[error("pixel buffer size mismatch for {width}x{height}: expected {expected} bytes, got {got}")]
	PixelBufferSize {
		/// Image width in pixels.
		width: u32,
		/// Image height in pixels.
		height: u32,
		/// Required byte count.
		expected: usize,
		/// Actual byte count.
		got: usize,
	},
}
