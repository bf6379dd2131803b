/// A decoded bencode value.
///
/// Byte strings are owned copies of the input, so a tree outlives the buffer
/// it was decoded from. Dictionaries keep their entries in parse order; only
/// the encoder sorts them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BValue {
	ByteString(Vec<u8>), // raw bytes for any string
	Integer(i64),
	List(Vec<BValue>),
	Dict(Vec<(Vec<u8>, BValue)>), // keys in source order
}

impl BValue {
	/// Short name of the variant, used in error messages.
	pub fn kind(&self) -> &'static str {
		match self {
			BValue::ByteString(_) => "byte string",
			BValue::Integer(_) => "integer",
			BValue::List(_) => "list",
			BValue::Dict(_) => "dictionary",
		}
	}

	/// Looks up `key` in a dictionary, returning the first matching entry.
	/// Returns `None` for non-dictionaries.
	pub fn get(&self, key: &[u8]) -> Option<&BValue> {
		self.as_dict()?
			.iter()
			.find(|(k, _)| k.as_slice() == key)
			.map(|(_, v)| v)
	}

	pub fn as_bytes(&self) -> Option<&[u8]> {
		match self {
			BValue::ByteString(b) => Some(b),
			_ => None,
		}
	}

	/// The byte string as UTF-8 text, if it is one.
	pub fn as_str(&self) -> Option<&str> {
		std::str::from_utf8(self.as_bytes()?).ok()
	}

	pub fn as_integer(&self) -> Option<i64> {
		match self {
			BValue::Integer(i) => Some(*i),
			_ => None,
		}
	}

	pub fn as_list(&self) -> Option<&[BValue]> {
		match self {
			BValue::List(items) => Some(items),
			_ => None,
		}
	}

	pub fn as_dict(&self) -> Option<&[(Vec<u8>, BValue)]> {
		match self {
			BValue::Dict(entries) => Some(entries),
			_ => None,
		}
	}
}

impl From<&str> for BValue {
	fn from(s: &str) -> Self {
		BValue::ByteString(s.as_bytes().to_vec())
	}
}

impl From<&[u8]> for BValue {
	fn from(b: &[u8]) -> Self {
		BValue::ByteString(b.to_vec())
	}
}

impl From<i64> for BValue {
	fn from(i: i64) -> Self {
		BValue::Integer(i)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample() -> BValue {
		BValue::Dict(vec![
			(b"name".to_vec(), "sample.txt".into()),
			(b"length".to_vec(), BValue::Integer(12)),
			(b"name".to_vec(), "shadowed".into()),
		])
	}

	#[test]
	fn test_get_returns_first_match() {
		let dict = sample();
		assert_eq!(dict.get(b"name").and_then(BValue::as_str), Some("sample.txt"));
		assert_eq!(dict.get(b"length").and_then(BValue::as_integer), Some(12));
		assert!(dict.get(b"missing").is_none());
	}

	#[test]
	fn test_get_on_non_dict() {
		assert!(BValue::Integer(1).get(b"name").is_none());
		assert!(BValue::List(vec![]).get(b"name").is_none());
	}

	#[test]
	fn test_as_str_rejects_invalid_utf8() {
		let value = BValue::ByteString(vec![0xff, 0xfe]);
		assert_eq!(value.as_bytes(), Some(&[0xff, 0xfe][..]));
		assert!(value.as_str().is_none());
	}

	#[test]
	fn test_container_accessors() {
		let list = BValue::List(vec![BValue::Integer(1), "a".into()]);
		assert_eq!(list.as_list().map(<[BValue]>::len), Some(2));
		assert!(list.as_dict().is_none());
		assert_eq!(sample().as_dict().map(<[_]>::len), Some(3));
		assert!(sample().as_list().is_none());
	}

	#[test]
	fn test_kind() {
		assert_eq!(sample().kind(), "dictionary");
		assert_eq!(BValue::from("x").kind(), "byte string");
		assert_eq!(BValue::List(vec![]).kind(), "list");
		assert_eq!(BValue::Integer(-1).kind(), "integer");
	}
}
