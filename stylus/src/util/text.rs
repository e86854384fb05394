/// The UTF-16 little-endian byte order mark
///
/// Prefixed to every UTF-16 payload segment by the frame writers. [`utf16le_encode`]
/// itself never emits it.
pub(crate) const BOM: [u8; 2] = [0xFF, 0xFE];

/// Encode `text` as Windows-1252 by truncating each UTF-16 code unit to its low 8 bits
///
/// This is lossy for anything above U+00FF: no transliteration table is applied, the
/// high bits are simply dropped. ID3v2.3 Latin-1 segments (frame identifiers, MIME
/// types, URLs, decimal digits) are expected to be ASCII anyway; a warning is logged
/// when data is actually lost.
pub(crate) fn latin1_encode(text: &str) -> impl Iterator<Item = u8> + '_ {
	if text.encode_utf16().any(|unit| unit > 0xFF) {
		log::warn!("Latin-1 encoding is truncating characters above U+00FF");
	}

	text.encode_utf16().map(|unit| unit as u8)
}

/// Encode `text` as UTF-16, little-endian, without a byte order mark
pub(crate) fn utf16le_encode(text: &str) -> impl Iterator<Item = u8> + '_ {
	text.encode_utf16().flat_map(u16::to_le_bytes)
}

/// The number of UTF-16 code units in `text`
///
/// This is the "character count" every size calculator works with; characters outside
/// the BMP count as two units.
pub(crate) fn utf16_len(text: &str) -> usize {
	text.encode_utf16().count()
}

#[cfg(test)]
mod tests {
	use super::{latin1_encode, utf16_len, utf16le_encode};

	fn utf16le_decode(bytes: &[u8]) -> String {
		assert_eq!(bytes.len() % 2, 0);

		char::decode_utf16(
			bytes
				.chunks_exact(2)
				.map(|pair| u16::from_le_bytes([pair[0], pair[1]])),
		)
		.collect::<Result<String, _>>()
		.unwrap()
	}

	#[test_log::test]
	fn latin1_is_identity_for_latin1_text() {
		let encoded = latin1_encode("Mot\u{00f6}rhead").collect::<Vec<u8>>();
		assert_eq!(
			encoded,
			&[b'M', b'o', b't', 0xF6, b'r', b'h', b'e', b'a', b'd']
		);
	}

	#[test_log::test]
	fn latin1_truncates_high_code_units() {
		// U+3042 -> 0x42 ('B'), U+0141 -> 0x41 ('A')
		let encoded = latin1_encode("\u{3042}\u{0141}").collect::<Vec<u8>>();
		assert_eq!(encoded, &[0x42, 0x41]);
	}

	#[test_log::test]
	fn utf16le_round_trip() {
		let encoded = utf16le_encode("fran\u{00e7}ais").collect::<Vec<u8>>();
		assert_eq!(encoded.len(), utf16_len("fran\u{00e7}ais") * 2);
		assert_eq!(utf16le_decode(&encoded), "fran\u{00e7}ais");
	}

	#[test_log::test]
	fn utf16_len_counts_surrogate_pairs() {
		// U+1D11E (musical G clef) takes a surrogate pair
		assert_eq!(utf16_len("\u{1D11E}"), 2);
		assert_eq!(utf16_len("clef"), 4);
	}
}
