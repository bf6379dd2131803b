use crate::bencode::BValue;
use crate::torrent::{InfoHash, MetainfoError};

/// What `inspect` reports about a .torrent file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetainfoReport {
    pub tracker_url: String, // The tracker URL
    pub length: i64,         // Total size of the payload
    pub info_hash: InfoHash,
    // Optional extras, only filled in when present and well-typed
    pub name: Option<String>,
    pub piece_length: Option<i64>,
    pub piece_hashes: Vec<[u8; 20]>, // SHA-1 hashes are 20 bytes each
}

/// Inspects the top-level values of a decoded .torrent file.
///
/// Uses the first dictionary among `values`; it must carry an `announce`
/// byte string and an `info` dictionary holding an integer `length`.
pub fn inspect(values: &[BValue]) -> Result<MetainfoReport, MetainfoError> {
    let root = values
        .iter()
        .find(|v| matches!(v, BValue::Dict(_)))
        .ok_or(MetainfoError::MissingField {
            field: "<root>",
            expected: "dictionary",
        })?;

    let tracker_url = get_string(root, "announce")?;

    let info = root.get(b"info").ok_or(MetainfoError::MissingField {
        field: "info",
        expected: "dictionary",
    })?;
    if !matches!(info, BValue::Dict(_)) {
        return Err(MetainfoError::MissingField {
            field: "info",
            expected: "dictionary",
        });
    }

    let length = get_integer(info, "length")?;
    let info_hash = InfoHash::of(info);

    let name = info.get(b"name").and_then(BValue::as_str).map(str::to_owned);
    let piece_length = info.get(b"piece length").and_then(BValue::as_integer);
    let piece_hashes = info
        .get(b"pieces")
        .and_then(BValue::as_bytes)
        .map(split_pieces)
        .unwrap_or_default();

    Ok(MetainfoReport {
        tracker_url,
        length,
        info_hash,
        name,
        piece_length,
        piece_hashes,
    })
}

/// Looks up a key in the dictionary and returns a byte slice if the value is a ByteString.
pub fn lookup_bytestring<'a>(dict: &'a BValue, key: &'static str) -> Result<&'a [u8], MetainfoError> {
    dict.get(key.as_bytes())
        .and_then(BValue::as_bytes)
        .ok_or(MetainfoError::MissingField {
            field: key,
            expected: "byte string",
        })
}

/// Gets a ByteString from the dictionary as text. Invalid UTF-8 is replaced
/// with U+FFFD.
pub fn get_string(dict: &BValue, key: &'static str) -> Result<String, MetainfoError> {
    let bytes = lookup_bytestring(dict, key)?;
    Ok(String::from_utf8_lossy(bytes).into_owned())
}

/// Retrieves an integer value from the dictionary.
pub fn get_integer(dict: &BValue, key: &'static str) -> Result<i64, MetainfoError> {
    dict.get(key.as_bytes())
        .and_then(BValue::as_integer)
        .ok_or(MetainfoError::MissingField {
            field: key,
            expected: "integer",
        })
}

// A trailing partial chunk is ignored.
fn split_pieces(pieces: &[u8]) -> Vec<[u8; 20]> {
    pieces
        .chunks_exact(20)
        .map(|chunk| {
            let mut hash = [0u8; 20];
            hash.copy_from_slice(chunk);
            hash
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bencode::decode_bencode;

    fn inspect_bytes(input: &[u8]) -> Result<MetainfoReport, MetainfoError> {
        inspect(&decode_bencode(input).unwrap().values)
    }

    const SAMPLE: &[u8] = b"d8:announce31:http://tracker.example/announce4:infod6:lengthi999e4:name8:file.txt12:piece lengthi16384e6:pieces20:aaaaaaaaaaaaaaaaaaaaee";

    #[test]
    fn test_inspect_sample() {
        let report = inspect_bytes(SAMPLE).unwrap();
        assert_eq!(report.tracker_url, "http://tracker.example/announce");
        assert_eq!(report.length, 999);
        assert_eq!(report.info_hash.to_hex(), "2434e1aaf02ce7377128b277da746d59a6e2cddd");
        assert_eq!(report.name.as_deref(), Some("file.txt"));
        assert_eq!(report.piece_length, Some(16384));
        assert_eq!(report.piece_hashes, vec![[b'a'; 20]]);
    }

    #[test]
    fn test_info_hash_ignores_source_key_order() {
        // same info dictionary, keys shuffled
        let shuffled: &[u8] = b"d4:infod6:pieces20:aaaaaaaaaaaaaaaaaaaa4:name8:file.txt6:lengthi999e12:piece lengthi16384ee8:announce31:http://tracker.example/announcee";
        let report = inspect_bytes(shuffled).unwrap();
        assert_eq!(report.length, 999);
        assert_eq!(report.info_hash, inspect_bytes(SAMPLE).unwrap().info_hash);
    }

    #[test]
    fn test_info_hash_matches_reference_encoder() {
        use sha1::{Digest, Sha1};

        let decoded: serde_bencode::value::Value = serde_bencode::from_bytes(SAMPLE).unwrap();
        let info = match decoded {
            serde_bencode::value::Value::Dict(mut root) => root.remove(&b"info".to_vec()).unwrap(),
            _ => panic!("expected dict"),
        };
        let expected = Sha1::digest(serde_bencode::to_bytes(&info).unwrap());

        let report = inspect_bytes(SAMPLE).unwrap();
        assert_eq!(&report.info_hash.as_bytes()[..], &expected[..]);
    }

    #[test]
    fn test_uses_first_dictionary() {
        let report = inspect_bytes(b"i1e3:abcd8:announce1:u4:infod6:lengthi5eee").unwrap();
        assert_eq!(report.tracker_url, "u");
        assert_eq!(report.length, 5);
        assert_eq!(report.name, None);
        assert!(report.piece_hashes.is_empty());
    }

    #[test]
    fn test_missing_root_dictionary() {
        assert_eq!(
            inspect_bytes(b"li1ee").unwrap_err(),
            MetainfoError::MissingField { field: "<root>", expected: "dictionary" }
        );
    }

    #[test]
    fn test_missing_announce() {
        assert_eq!(
            inspect_bytes(b"d4:infod6:lengthi5eee").unwrap_err(),
            MetainfoError::MissingField { field: "announce", expected: "byte string" }
        );
        assert_eq!(
            inspect_bytes(b"d8:announcei1e4:infod6:lengthi5eee").unwrap_err(),
            MetainfoError::MissingField { field: "announce", expected: "byte string" }
        );
    }

    #[test]
    fn test_missing_info() {
        assert_eq!(
            inspect_bytes(b"d8:announce1:ue").unwrap_err(),
            MetainfoError::MissingField { field: "info", expected: "dictionary" }
        );
        assert_eq!(
            inspect_bytes(b"d8:announce1:u4:infoli1eee").unwrap_err(),
            MetainfoError::MissingField { field: "info", expected: "dictionary" }
        );
    }

    #[test]
    fn test_missing_length() {
        assert_eq!(
            inspect_bytes(b"d8:announce1:u4:infod4:name1:xee").unwrap_err(),
            MetainfoError::MissingField { field: "length", expected: "integer" }
        );
        assert_eq!(
            inspect_bytes(b"d8:announce1:u4:infod6:length3:999ee").unwrap_err(),
            MetainfoError::MissingField { field: "length", expected: "integer" }
        );
    }

    #[test]
    fn test_announce_not_utf8() {
        let report = inspect_bytes(b"d8:announce4:ab\xffc4:infod6:lengthi999eee").unwrap();
        assert_eq!(report.tracker_url, "ab\u{fffd}c");
        assert_eq!(report.length, 999);
        assert_eq!(report.info_hash.to_hex(), "a6adad323d6c72e9291b347504918b4664611138");
    }
}
