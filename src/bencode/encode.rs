use super::BValue;

/// Encode a `BValue` back into a canonical bencoded `Vec<u8>`.
///
/// Dictionary entries are written sorted by raw key bytes whatever their
/// stored order, so equal trees always produce equal bytes.
pub fn encode_bvalue(value: &BValue) -> Vec<u8> {
	let mut out: Vec<u8> = Vec::new();
	encode_into(value, &mut out);
	out
}

/// Appends the canonical encoding of `value` to `out`.
pub fn encode_into(value: &BValue, out: &mut Vec<u8>) {
	match value {
		BValue::Integer(i) => {
			out.push(b'i');
			out.extend_from_slice(i.to_string().as_bytes());
			out.push(b'e');
		}
		BValue::ByteString(bytes) => encode_bytes(bytes, out),
		BValue::List(items) => {
			out.push(b'l');
			for item in items {
				encode_into(item, out);
			}
			out.push(b'e');
		}
		BValue::Dict(entries) => {
			out.push(b'd');
			// stable, so duplicate keys keep their stored order
			let mut sorted: Vec<&(Vec<u8>, BValue)> = entries.iter().collect();
			sorted.sort_by(|a, b| a.0.cmp(&b.0));
			for (key, val) in sorted {
				encode_bytes(key, out);
				encode_into(val, out);
			}
			out.push(b'e');
		}
	}
}

fn encode_bytes(bytes: &[u8], out: &mut Vec<u8>) {
	out.extend_from_slice(bytes.len().to_string().as_bytes());
	out.push(b':');
	out.extend_from_slice(bytes);
}
