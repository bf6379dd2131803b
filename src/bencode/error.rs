use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BencodeError {
	/// Grammar violation. `offset` is the byte position in the full input.
	#[error("Malformed input at byte {offset}: {reason}")]
	MalformedInput { offset: usize, reason: String },

	#[error("Unsupported tag {:?} at byte {offset}", char::from(*tag))]
	UnsupportedTag { offset: usize, tag: u8 },

	#[error("Limit exceeded ({limit}): {detail}")]
	LimitExceeded { limit: usize, detail: String },
}

impl BencodeError {
	pub(crate) fn malformed(offset: usize, reason: impl Into<String>) -> Self {
		BencodeError::MalformedInput {
			offset,
			reason: reason.into(),
		}
	}
}
