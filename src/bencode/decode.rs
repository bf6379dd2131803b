use std::collections::HashMap;

use super::error::BencodeError;
use crate::bencode::bvalue::BValue;
use crate::config::{DecoderConfig, DuplicateKeys};

/// Result of a top-level decode: every sibling value found, plus how many
/// input bytes were consumed (a stray top-level `e` is counted and ends it).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
	pub values: Vec<BValue>,
	pub consumed: usize,
}

/// Decodes `input` with the default configuration.
pub fn decode_bencode(input: &[u8]) -> Result<Decoded, BencodeError> {
	decode_with(input, &DecoderConfig::default())
}

pub fn decode_with(input: &[u8], config: &DecoderConfig) -> Result<Decoded, BencodeError> {
	if input.len() > config.max_input_len {
		return Err(BencodeError::LimitExceeded {
			limit: config.max_input_len,
			detail: format!("input is {} bytes", input.len()),
		});
	}

	let decoder = Decoder { input, config };
	let seq = decoder.decode_sequence(0, 0)?;
	Ok(Decoded {
		values: seq.values,
		consumed: seq.consumed,
	})
}

/// Pairs the flat `key, value, key, value, ...` body of a dictionary.
///
/// Every even position must hold a byte string. `offset` is where the
/// dictionary starts and only feeds error messages.
pub fn pair_entries(
	flat: Vec<BValue>,
	policy: DuplicateKeys,
	offset: usize,
) -> Result<Vec<(Vec<u8>, BValue)>, BencodeError> {
	if flat.len() % 2 != 0 {
		return Err(BencodeError::malformed(
			offset,
			format!("dictionary body has an odd number of items ({})", flat.len()),
		));
	}

	let mut entries: Vec<(Vec<u8>, BValue)> = Vec::with_capacity(flat.len() / 2);
	let mut seen: HashMap<Vec<u8>, usize> = HashMap::new();

	let mut items = flat.into_iter();
	while let (Some(key), Some(value)) = (items.next(), items.next()) {
		let key = match key {
			BValue::ByteString(bytes) => bytes,
			other => {
				return Err(BencodeError::malformed(
					offset,
					format!("dictionary key must be a byte string, found {}", other.kind()),
				));
			}
		};

		match (seen.get(&key), policy) {
			(None, _) => {
				seen.insert(key.clone(), entries.len());
				entries.push((key, value));
			}
			(Some(_), DuplicateKeys::Reject) => {
				return Err(BencodeError::malformed(
					offset,
					format!("duplicate dictionary key {:?}", String::from_utf8_lossy(&key)),
				));
			}
			(Some(_), DuplicateKeys::KeepFirst) => {}
			(Some(&at), DuplicateKeys::KeepLast) => entries[at].1 = value,
		}
	}

	Ok(entries)
}

struct Decoder<'a> {
	input: &'a [u8],
	config: &'a DecoderConfig,
}

/// Output of one flat pass over a run of sibling values.
struct Sequence {
	values: Vec<BValue>,
	// includes the terminator when `terminated`
	consumed: usize,
	terminated: bool,
}

impl<'a> Decoder<'a> {
	/// Decodes sibling values starting at `start` until an `e` at this level
	/// (consumed) or the end of input.
	fn decode_sequence(&self, start: usize, depth: usize) -> Result<Sequence, BencodeError> {
		let mut pos = start;
		let mut values = Vec::new();

		while pos < self.input.len() {
			let tag = self.input[pos];
			let (consumed, value) = match tag {
				b'e' => {
					return Ok(Sequence {
						values,
						consumed: pos + 1 - start,
						terminated: true,
					});
				}
				b'i' => self.decode_integer(pos)?,
				b'0'..=b'9' => self.decode_string(pos)?,
				b'l' => {
					let (consumed, items) = self.decode_container(pos, depth, "list")?;
					(consumed, BValue::List(items))
				}
				b'd' => {
					let (consumed, flat) = self.decode_container(pos, depth, "dictionary")?;
					let entries = pair_entries(flat, self.config.duplicate_keys, pos)?;
					(consumed, BValue::Dict(entries))
				}
				_ if depth == 0 => return Err(BencodeError::UnsupportedTag { offset: pos, tag }),
				_ => {
					return Err(BencodeError::malformed(
						pos,
						format!("unexpected byte {:?} inside a list or dictionary", char::from(tag)),
					));
				}
			};
			values.push(value);
			pos += consumed;
		}

		Ok(Sequence {
			values,
			consumed: pos - start,
			terminated: false,
		})
	}

	/// Decodes the body of a list or dictionary opened at `pos`. The consumed
	/// count covers the opening tag and the closing `e`.
	fn decode_container(
		&self,
		pos: usize,
		depth: usize,
		what: &str,
	) -> Result<(usize, Vec<BValue>), BencodeError> {
		if depth >= self.config.max_depth {
			return Err(BencodeError::LimitExceeded {
				limit: self.config.max_depth,
				detail: format!("{} at byte {} nests too deep", what, pos),
			});
		}

		let inner = self.decode_sequence(pos + 1, depth + 1)?;
		if !inner.terminated {
			return Err(BencodeError::malformed(pos, format!("unclosed {} (missing 'e')", what)));
		}

		// add 1 to account for the opening tag
		Ok((inner.consumed + 1, inner.values))
	}

	fn decode_integer(&self, pos: usize) -> Result<(usize, BValue), BencodeError> {
		let body = &self.input[pos + 1..];
		let end = body
			.iter()
			.position(|&b| b == b'e')
			.ok_or_else(|| BencodeError::malformed(pos, "missing 'e' for integer"))?;

		let parsed = parse_integer(&body[..end], self.config.strict_integers)
			.map_err(|reason| BencodeError::malformed(pos, reason))?;

		// 'i' + digits + 'e'
		Ok((end + 2, BValue::Integer(parsed)))
	}

	/// Decodes a byte string of the form `<length>:<bytes>`.
	fn decode_string(&self, pos: usize) -> Result<(usize, BValue), BencodeError> {
		let encoded = &self.input[pos..];
		let colon_index = encoded
			.iter()
			.position(|&b| b == b':')
			.ok_or_else(|| BencodeError::malformed(pos, "missing ':' in string"))?;

		let digits = &encoded[..colon_index];
		if !digits.iter().all(u8::is_ascii_digit) {
			return Err(BencodeError::malformed(
				pos,
				format!("invalid string length {:?}", String::from_utf8_lossy(digits)),
			));
		}

		let length: usize = ascii(digits)
			.parse()
			.map_err(|e| BencodeError::malformed(pos, format!("invalid string length: {}", e)))?;

		let start_data = colon_index + 1;
		let remaining = encoded.len() - start_data;
		if length > remaining {
			return Err(BencodeError::malformed(
				pos,
				format!("declared length {} exceeds the {} remaining bytes", length, remaining),
			));
		}

		let end_data = start_data + length;
		Ok((end_data, BValue::ByteString(encoded[start_data..end_data].to_vec())))
	}
}

/// Parses the digits between `i` and `e`: an optional `-` followed by ASCII
/// digits.
fn parse_integer(span: &[u8], strict: bool) -> Result<i64, String> {
	let magnitude = span.strip_prefix(b"-").unwrap_or(span);
	if magnitude.is_empty() || !magnitude.iter().all(u8::is_ascii_digit) {
		return Err(format!("invalid integer {:?}", String::from_utf8_lossy(span)));
	}

	let text = ascii(span);
	if strict {
		// Leading zeros are not allowed, and neither is -0
		if magnitude.len() > 1 && magnitude[0] == b'0' {
			return Err(format!("leading zeros are not allowed: {}", text));
		}
		if text == "-0" {
			return Err("negative zero is not allowed".to_string());
		}
	}

	text.parse::<i64>()
		.map_err(|e| format!("failed to parse integer '{}': {}", text, e))
}

// Callers only pass spans already checked to be ASCII digits or '-'.
fn ascii(span: &[u8]) -> &str {
	std::str::from_utf8(span).unwrap_or_default()
}
