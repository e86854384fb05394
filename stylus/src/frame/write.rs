//! Buffer writers, one per value category
//!
//! Frames are written directly into the assembler's preallocated buffer; nothing here
//! allocates. Every writer takes an absolute offset and returns the new absolute
//! offset. The advance always equals the frame's calculated size.

use super::size::FRAME_HEADER_SIZE;
use super::{EncodedFrame, FrameContent};
use crate::util::text::{BOM, latin1_encode, utf16le_encode};

use byteorder::{BigEndian, ByteOrder};

/// Write `frame` into `buffer` at `offset`, returning the new absolute offset
pub(crate) fn write_frame(frame: &EncodedFrame, buffer: &mut [u8], offset: usize) -> usize {
	let pos = write_frame_header(buffer, offset, frame.id().as_str(), frame.size());

	match &frame.content {
		FrameContent::Text(text) => write_text(buffer, pos, text),
		FrameContent::Numeric(digits) => write_numeric(buffer, pos, digits),
		FrameContent::Url(url) => put_latin1(buffer, pos, url),
		FrameContent::UserText { description, value } => {
			write_user_text(buffer, pos, description, value)
		},
		FrameContent::UserUrl { description, url } => {
			write_user_url(buffer, pos, description, url)
		},
		FrameContent::Comment {
			language,
			description,
			text,
		}
		| FrameContent::UnsynchronizedLyrics {
			language,
			description,
			lyrics: text,
		} => write_language_text(buffer, pos, *language, description, text),
		FrameContent::SynchronizedLyrics {
			language,
			timestamp_format,
			content_type,
			description,
			lines,
		} => write_synchronized_lyrics(
			buffer,
			pos,
			*language,
			*timestamp_format,
			*content_type,
			description,
			lines,
		),
		FrameContent::Picture {
			mime_type,
			pic_type,
			description,
			use_unicode,
			data,
		} => write_picture(
			buffer,
			pos,
			mime_type.as_str(),
			*pic_type,
			description,
			*use_unicode,
			data,
		),
		FrameContent::Private { owner, data } => write_private(buffer, pos, owner, data),
		FrameContent::PairedText(pairs) => write_paired_text(buffer, pos, pairs),
	}
}

// [4: identifier][4: content size, big-endian, header excluded][2: flags, always zero]
fn write_frame_header(buffer: &mut [u8], offset: usize, id: &str, total_size: usize) -> usize {
	let pos = put_latin1(buffer, offset, id);
	BigEndian::write_u32(
		&mut buffer[pos..pos + 4],
		(total_size - FRAME_HEADER_SIZE) as u32,
	);
	buffer[pos + 4] = 0;
	buffer[pos + 5] = 0;
	pos + 6
}

fn put_latin1(buffer: &mut [u8], offset: usize, text: &str) -> usize {
	let mut pos = offset;
	for byte in latin1_encode(text) {
		buffer[pos] = byte;
		pos += 1;
	}

	pos
}

// BOM, then UTF-16LE text
fn put_unicode(buffer: &mut [u8], offset: usize, text: &str) -> usize {
	buffer[offset..offset + 2].copy_from_slice(&BOM);

	let mut pos = offset + 2;
	for byte in utf16le_encode(text) {
		buffer[pos] = byte;
		pos += 1;
	}

	pos
}

fn put_terminator(buffer: &mut [u8], offset: usize) -> usize {
	buffer[offset] = 0;
	buffer[offset + 1] = 0;
	offset + 2
}

fn put_bytes(buffer: &mut [u8], offset: usize, bytes: &[u8]) -> usize {
	buffer[offset..offset + bytes.len()].copy_from_slice(bytes);
	offset + bytes.len()
}

// [1: encoding=1][BOM][UTF-16LE value]
fn write_text(buffer: &mut [u8], offset: usize, text: &str) -> usize {
	buffer[offset] = 1;
	put_unicode(buffer, offset + 1, text)
}

// [1: encoding=0][Latin-1 decimal digits]
fn write_numeric(buffer: &mut [u8], offset: usize, digits: &str) -> usize {
	buffer[offset] = 0;
	put_latin1(buffer, offset + 1, digits)
}

// [1: enc=1][BOM][UTF-16LE description][00 00][BOM][UTF-16LE value]
fn write_user_text(buffer: &mut [u8], offset: usize, description: &str, value: &str) -> usize {
	buffer[offset] = 1;
	let pos = put_unicode(buffer, offset + 1, description);
	let pos = put_terminator(buffer, pos);
	put_unicode(buffer, pos, value)
}

// [1: enc=1][BOM][UTF-16LE description][00 00][Latin-1 url]
fn write_user_url(buffer: &mut [u8], offset: usize, description: &str, url: &str) -> usize {
	buffer[offset] = 1;
	let pos = put_unicode(buffer, offset + 1, description);
	let pos = put_terminator(buffer, pos);
	put_latin1(buffer, pos, url)
}

// [1: enc=1][3: language][BOM][UTF-16LE description][00 00][BOM][UTF-16LE text]
fn write_language_text(
	buffer: &mut [u8],
	offset: usize,
	language: [u8; 3],
	description: &str,
	text: &str,
) -> usize {
	buffer[offset] = 1;
	let pos = put_bytes(buffer, offset + 1, &language);
	let pos = put_unicode(buffer, pos, description);
	let pos = put_terminator(buffer, pos);
	put_unicode(buffer, pos, text)
}

// [1: enc=1][3: language][1: timestamp format][1: content type][BOM][description][00 00]
// then per line: [BOM][UTF-16LE text][00 00][4: timestamp, big-endian]
fn write_synchronized_lyrics(
	buffer: &mut [u8],
	offset: usize,
	language: [u8; 3],
	timestamp_format: u8,
	content_type: u8,
	description: &str,
	lines: &[(String, u32)],
) -> usize {
	buffer[offset] = 1;
	let mut pos = put_bytes(buffer, offset + 1, &language);
	buffer[pos] = timestamp_format;
	buffer[pos + 1] = content_type;
	pos += 2;

	pos = put_unicode(buffer, pos, description);
	pos = put_terminator(buffer, pos);

	for (text, timestamp) in lines {
		pos = put_unicode(buffer, pos, text);
		pos = put_terminator(buffer, pos);
		BigEndian::write_u32(&mut buffer[pos..pos + 4], *timestamp);
		pos += 4;
	}

	pos
}

// [1: encoding][Latin-1 MIME type][00][1: picture type][description][00 (00)][raw data]
fn write_picture(
	buffer: &mut [u8],
	offset: usize,
	mime_type: &str,
	pic_type: u8,
	description: &str,
	use_unicode: bool,
	data: &[u8],
) -> usize {
	buffer[offset] = u8::from(use_unicode);
	let mut pos = put_latin1(buffer, offset + 1, mime_type);
	buffer[pos] = 0;
	buffer[pos + 1] = pic_type;
	pos += 2;

	if use_unicode {
		pos = put_unicode(buffer, pos, description);
		pos = put_terminator(buffer, pos);
	} else {
		pos = put_latin1(buffer, pos, description);
		buffer[pos] = 0;
		pos += 1;
	}

	put_bytes(buffer, pos, data)
}

// [Latin-1 owner][00][raw data]
fn write_private(buffer: &mut [u8], offset: usize, owner: &str, data: &[u8]) -> usize {
	let pos = put_latin1(buffer, offset, owner);
	buffer[pos] = 0;
	put_bytes(buffer, pos + 1, data)
}

// [1: enc=1] then per pair: [BOM][UTF-16LE role][00 00][BOM][UTF-16LE name][00 00]
fn write_paired_text(buffer: &mut [u8], offset: usize, pairs: &[(String, String)]) -> usize {
	buffer[offset] = 1;
	let mut pos = offset + 1;

	for (role, name) in pairs {
		pos = put_unicode(buffer, pos, role);
		pos = put_terminator(buffer, pos);
		pos = put_unicode(buffer, pos, name);
		pos = put_terminator(buffer, pos);
	}

	pos
}

#[cfg(test)]
mod tests {
	use crate::frame::items::{
		AttachedPictureFrame, CommentFrame, Language, PairedTextFrame, PrivateFrame,
		StringListFrame, SyncLyricsContentType, SynchronizedLyricsFrame, TimestampFormat,
		UnsynchronizedLyricsFrame, UserDefinedTextFrame, UserDefinedUrlFrame,
	};
	use crate::frame::{EncodedFrame, FrameId, FrameValue};

	fn write(frame: &EncodedFrame) -> Vec<u8> {
		let mut buffer = vec![0_u8; frame.size()];
		let advanced = super::write_frame(frame, &mut buffer, 0);

		// The writer must agree with the size calculator, byte for byte
		assert_eq!(advanced, frame.size());
		buffer
	}

	fn sample_frames() -> Vec<(FrameId, FrameValue)> {
		vec![
			(FrameId::TIT2, FrameValue::Text(String::from("Voyager"))),
			(FrameId::TDAT, FrameValue::Text(String::from("2802"))),
			(
				FrameId::TPE1,
				FrameValue::List(
					StringListFrame::new(vec![String::from("a"), String::from("b")]).unwrap(),
				),
			),
			(FrameId::TYER, FrameValue::Integer(2001)),
			(
				FrameId::WOAF,
				FrameValue::Url(String::from("https://example.com/song")),
			),
			(
				FrameId::TXXX,
				FrameValue::UserText(
					UserDefinedTextFrame::new(String::from("catalog"), String::from("088561-1")).unwrap(),
				),
			),
			(
				FrameId::WXXX,
				FrameValue::UserUrl(UserDefinedUrlFrame::new(
					String::from("store"),
					String::from("https://example.com/buy"),
				)),
			),
			(
				FrameId::COMM,
				FrameValue::Comment(CommentFrame::new(
					Language::default(),
					String::from("note"),
					String::from("first pressing"),
				)),
			),
			(
				FrameId::USLT,
				FrameValue::UnsynchronizedLyrics(UnsynchronizedLyricsFrame::new(
					Language::new("fra").unwrap(),
					String::new(),
					String::from("Autour du monde"),
				)),
			),
			(
				FrameId::SYLT,
				FrameValue::SynchronizedLyrics(SynchronizedLyricsFrame::new(
					SyncLyricsContentType::Lyrics,
					TimestampFormat::Milliseconds,
					Language::default(),
					String::from("karaoke"),
					vec![
						(String::from("One more time"), 0),
						(String::from("We're gonna celebrate"), 4000),
					],
				)),
			),
			(
				FrameId::APIC,
				FrameValue::Picture(AttachedPictureFrame {
					pic_type: crate::picture::PictureType::CoverFront,
					data: vec![0xFF, 0xD8, 0xFF, 0xE0, 0x01, 0x02],
					description: String::from("front"),
					use_unicode: true,
				}),
			),
			(
				FrameId::PRIV,
				FrameValue::Private(PrivateFrame::new(
					String::from("example.com"),
					vec![0xDE, 0xAD, 0xBE, 0xEF],
				)),
			),
			(
				FrameId::IPLS,
				FrameValue::PairedText(
					PairedTextFrame::new(vec![(String::from("mixer"), String::from("DJ Falcon"))])
						.unwrap(),
				),
			),
		]
	}

	#[test_log::test]
	fn writers_agree_with_size_calculators() {
		for (id, value) in sample_frames() {
			let frame = EncodedFrame::new(id, value).unwrap();
			write(&frame);
		}
	}

	#[test_log::test]
	fn frame_headers_declare_content_size() {
		for (id, value) in sample_frames() {
			let frame = EncodedFrame::new(id, value).unwrap();
			let bytes = write(&frame);

			assert_eq!(&bytes[..4], frame.id().as_str().as_bytes());
			let content_size = u32::from_be_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
			assert_eq!(content_size as usize, frame.size() - 10);
			assert_eq!(&bytes[8..10], &[0, 0]);
		}
	}

	#[test_log::test]
	fn numeric_payload_is_latin1() {
		let frame = EncodedFrame::new(FrameId::TBPM, FrameValue::Integer(120)).unwrap();
		let bytes = write(&frame);

		assert_eq!(&bytes[10..], &[0, b'1', b'2', b'0']);
	}

	#[test_log::test]
	fn url_payload_has_no_encoding_byte() {
		let frame = EncodedFrame::new(
			FrameId::WCOP,
			FrameValue::Url(String::from("https://example.com")),
		)
		.unwrap();
		let bytes = write(&frame);

		assert_eq!(&bytes[10..], b"https://example.com");
	}

	#[test_log::test]
	fn text_payload_is_bom_prefixed_utf16() {
		let frame = EncodedFrame::new(FrameId::TIT2, FrameValue::Text(String::from("da"))).unwrap();
		let bytes = write(&frame);

		assert_eq!(&bytes[10..], &[1, 0xFF, 0xFE, b'd', 0, b'a', 0]);
	}

	#[test_log::test]
	fn synchronized_lyrics_layout() {
		let frame = EncodedFrame::new(
			FrameId::SYLT,
			FrameValue::SynchronizedLyrics(SynchronizedLyricsFrame::new(
				SyncLyricsContentType::Lyrics,
				TimestampFormat::Milliseconds,
				Language::default(),
				String::new(),
				vec![(String::from("hi"), 0x0102_0304)],
			)),
		)
		.unwrap();
		let bytes = write(&frame);

		#[rustfmt::skip]
		let expected_content: &[u8] = &[
			1,
			b'e', b'n', b'g',
			2, // milliseconds
			1, // lyrics
			0xFF, 0xFE, 0x00, 0x00, // empty description
			0xFF, 0xFE, b'h', 0, b'i', 0, 0x00, 0x00,
			0x01, 0x02, 0x03, 0x04,
		];
		assert_eq!(&bytes[10..], expected_content);
	}

	#[test_log::test]
	fn private_payload_layout() {
		let frame = EncodedFrame::new(
			FrameId::PRIV,
			FrameValue::Private(PrivateFrame::new(String::from("a@b.c"), vec![7, 8])),
		)
		.unwrap();
		let bytes = write(&frame);

		assert_eq!(&bytes[10..], &[b'a', b'@', b'b', b'.', b'c', 0, 7, 8]);
	}
}
