use std::fmt;
use std::io;

use super::BValue;

/// Renders decoded values as JSON text.
///
/// - `Integer(i)` => JSON number
/// - `ByteString(bytes)` => JSON string; bytes that are not valid UTF-8 are
///   escaped one by one as `\u00XX`
/// - `List(...)` => JSON array
/// - `Dict(...)` => JSON object, in stored (source) order
///
/// Several values are written back to back with no separator.
pub struct Json<'a>(pub &'a [BValue]);

impl fmt::Display for Json<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for value in self.0 {
			write_value(value, f)?;
		}
		Ok(())
	}
}

pub fn format_values(values: &[BValue]) -> String {
	Json(values).to_string()
}

/// Writes the JSON rendering of `values` to `out`.
pub fn write_values<W: io::Write>(values: &[BValue], out: &mut W) -> io::Result<()> {
	write!(out, "{}", Json(values))
}

fn write_value(value: &BValue, f: &mut fmt::Formatter<'_>) -> fmt::Result {
	match value {
		BValue::Integer(i) => write!(f, "{}", i),
		BValue::ByteString(bytes) => write_json_string(bytes, f),
		BValue::List(items) => {
			f.write_str("[")?;
			for (n, item) in items.iter().enumerate() {
				if n > 0 {
					f.write_str(",")?;
				}
				write_value(item, f)?;
			}
			f.write_str("]")
		}
		BValue::Dict(entries) => {
			f.write_str("{")?;
			for (n, (key, val)) in entries.iter().enumerate() {
				if n > 0 {
					f.write_str(",")?;
				}
				write_json_string(key, f)?;
				f.write_str(":")?;
				write_value(val, f)?;
			}
			f.write_str("}")
		}
	}
}

fn write_json_string(bytes: &[u8], f: &mut fmt::Formatter<'_>) -> fmt::Result {
	f.write_str("\"")?;
	for chunk in bytes.utf8_chunks() {
		let valid = chunk.valid();
		if !valid.is_empty() {
			// serde_json quotes the fragment; keep only the escaped body
			let quoted = serde_json::to_string(valid).map_err(|_| fmt::Error)?;
			f.write_str(&quoted[1..quoted.len() - 1])?;
		}
		for byte in chunk.invalid() {
			write!(f, "\\u{:04x}", byte)?;
		}
	}
	f.write_str("\"")
}
