//! Exact encoded-size calculators, one per value category
//!
//! Every function returns the total frame length, including the 10-byte frame header,
//! computed from logical lengths alone. Text lengths are UTF-16 code-unit counts.
//!
//! These formulas are the writers' contract: `write.rs` must advance by exactly the
//! returned count, since the value also lands in the frame header's size field. The
//! assembler asserts the agreement after every frame.

pub(crate) const FRAME_HEADER_SIZE: usize = 10;

const ENCODING_SIZE: usize = 1;
const BOM_SIZE: usize = 2;
const LANGUAGE_SIZE: usize = 3;
const SEPARATOR_SIZE: usize = 2;
const TIMESTAMP_SIZE: usize = 4;

pub(crate) fn numeric_frame(digit_count: usize) -> usize {
	FRAME_HEADER_SIZE + ENCODING_SIZE + digit_count
}

pub(crate) fn string_frame(char_count: usize) -> usize {
	FRAME_HEADER_SIZE + ENCODING_SIZE + BOM_SIZE + char_count * 2
}

pub(crate) fn url_link_frame(url_len: usize) -> usize {
	FRAME_HEADER_SIZE + url_len
}

pub(crate) fn user_text_frame(description_len: usize, value_len: usize) -> usize {
	FRAME_HEADER_SIZE
		+ ENCODING_SIZE
		+ BOM_SIZE
		+ description_len * 2
		+ SEPARATOR_SIZE
		+ BOM_SIZE
		+ value_len * 2
}

pub(crate) fn user_url_frame(description_len: usize, url_len: usize) -> usize {
	FRAME_HEADER_SIZE + ENCODING_SIZE + BOM_SIZE + description_len * 2 + SEPARATOR_SIZE + url_len
}

// COMM and USLT share one layout
pub(crate) fn language_text_frame(description_len: usize, text_len: usize) -> usize {
	FRAME_HEADER_SIZE
		+ ENCODING_SIZE
		+ LANGUAGE_SIZE
		+ BOM_SIZE
		+ description_len * 2
		+ SEPARATOR_SIZE
		+ BOM_SIZE
		+ text_len * 2
}

pub(crate) fn picture_frame(
	picture_len: usize,
	mime_type_len: usize,
	description_len: usize,
	use_unicode: bool,
) -> usize {
	let encoded_description_len = if use_unicode {
		BOM_SIZE + (description_len + 1) * 2
	} else {
		description_len + 1
	};

	FRAME_HEADER_SIZE
		+ ENCODING_SIZE
		+ mime_type_len
		+ 1 // null after the MIME type
		+ 1 // picture type
		+ encoded_description_len
		+ picture_len
}

pub(crate) fn private_frame(owner_len: usize, data_len: usize) -> usize {
	FRAME_HEADER_SIZE + owner_len + 1 + data_len
}

pub(crate) fn paired_text_frame(pair_lens: impl IntoIterator<Item = (usize, usize)>) -> usize {
	let pairs: usize = pair_lens
		.into_iter()
		.map(|(role_len, name_len)| {
			BOM_SIZE + role_len * 2 + SEPARATOR_SIZE + BOM_SIZE + name_len * 2 + SEPARATOR_SIZE
		})
		.sum();

	FRAME_HEADER_SIZE + ENCODING_SIZE + pairs
}

pub(crate) fn synchronized_lyrics_frame(
	line_lens: impl IntoIterator<Item = usize>,
	description_len: usize,
) -> usize {
	let lines: usize = line_lens
		.into_iter()
		.map(|text_len| BOM_SIZE + text_len * 2 + SEPARATOR_SIZE + TIMESTAMP_SIZE)
		.sum();

	FRAME_HEADER_SIZE
		+ ENCODING_SIZE
		+ LANGUAGE_SIZE
		+ 1 // timestamp format
		+ 1 // content type
		+ BOM_SIZE
		+ description_len * 2
		+ SEPARATOR_SIZE
		+ lines
}
