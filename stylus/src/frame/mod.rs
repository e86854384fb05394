//! Frame-level building blocks: the identifier catalog, the value model, and the
//! encoded frames accumulated by [`TagBuilder`](crate::tag::TagBuilder)

pub mod id;
pub mod items;
pub(crate) mod size;
pub(crate) mod write;

pub use id::{FrameCategory, FrameId};

use crate::error::Result;
use crate::macros::err;
use crate::picture::MimeType;
use crate::util::text::utf16_len;
use items::{
	AttachedPictureFrame, CommentFrame, PairedTextFrame, PrivateFrame, StringListFrame,
	SynchronizedLyricsFrame, UnsynchronizedLyricsFrame, UserDefinedTextFrame, UserDefinedUrlFrame,
};

/// A validated frame payload, one variant per value category
///
/// Variants wrap the types from [`items`]; every construction invariant is enforced
/// there, so a `FrameValue` is always encodable once it exists. The one exception is
/// picture MIME sniffing, which can only happen against the actual image data and is
/// performed when the frame is set.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum FrameValue {
	/// A single text string
	Text(String),
	/// An ordered list of strings
	List(StringListFrame),
	/// A number rendered as decimal digits
	Integer(u32),
	/// A URL
	Url(String),
	/// An attached picture
	Picture(AttachedPictureFrame),
	/// Unsynchronized lyrics
	UnsynchronizedLyrics(UnsynchronizedLyricsFrame),
	/// Synchronized lyrics
	SynchronizedLyrics(SynchronizedLyricsFrame),
	/// A user-defined description/value pair
	UserText(UserDefinedTextFrame),
	/// A user-defined description/URL pair
	UserUrl(UserDefinedUrlFrame),
	/// A comment
	Comment(CommentFrame),
	/// Owner-tagged binary data
	Private(PrivateFrame),
	/// Role/name pairs
	PairedText(PairedTextFrame),
}

impl FrameValue {
	// Used in category mismatch errors
	pub(crate) fn name(&self) -> &'static str {
		match self {
			Self::Text(_) => "Text",
			Self::List(_) => "List",
			Self::Integer(_) => "Integer",
			Self::Url(_) => "Url",
			Self::Picture(_) => "Picture",
			Self::UnsynchronizedLyrics(_) => "UnsynchronizedLyrics",
			Self::SynchronizedLyrics(_) => "SynchronizedLyrics",
			Self::UserText(_) => "UserText",
			Self::UserUrl(_) => "UserUrl",
			Self::Comment(_) => "Comment",
			Self::Private(_) => "Private",
			Self::PairedText(_) => "PairedText",
		}
	}
}

// Payloads normalized for writing: lists joined, integers rendered to digits, picture
// MIME resolved, Unicode forced off for empty picture descriptions. The writers never
// re-validate.
#[derive(Clone, Debug)]
pub(crate) enum FrameContent {
	Text(String),
	Numeric(String),
	Url(String),
	UserText {
		description: String,
		value: String,
	},
	UserUrl {
		description: String,
		url: String,
	},
	Comment {
		language: [u8; 3],
		description: String,
		text: String,
	},
	UnsynchronizedLyrics {
		language: [u8; 3],
		description: String,
		lyrics: String,
	},
	SynchronizedLyrics {
		language: [u8; 3],
		timestamp_format: u8,
		content_type: u8,
		description: String,
		lines: Vec<(String, u32)>,
	},
	Picture {
		mime_type: MimeType,
		pic_type: u8,
		description: String,
		use_unicode: bool,
		data: Vec<u8>,
	},
	Private {
		owner: String,
		data: Vec<u8>,
	},
	PairedText(Vec<(String, String)>),
}

/// A frame matched against its identifier and measured, ready to be written
///
/// Created once per `set` call and held by the builder until the tag is assembled;
/// never mutated afterwards. [`EncodedFrame::size`] is exact: the writer advances by
/// precisely this many bytes.
#[derive(Clone, Debug)]
pub struct EncodedFrame {
	id: FrameId,
	size: usize,
	pub(crate) content: FrameContent,
}

impl EncodedFrame {
	/// Match `value` against `id`'s category and measure the encoded frame
	///
	/// # Errors
	///
	/// * `id` is [`FrameId::Unknown`]
	/// * `value`'s variant does not fit `id`'s category
	/// * Picture data has no recognizable image signature
	pub(crate) fn new(id: FrameId, value: FrameValue) -> Result<Self> {
		let Some(category) = id.category() else {
			err!(UnknownFrameId(String::from(id.as_str())));
		};

		let (size, content) = match (category, value) {
			(FrameCategory::TextList, FrameValue::List(list)) => {
				let separator = if id == FrameId::TCON { ";" } else { "/" };
				let joined = list.values().join(separator);
				(
					size::string_frame(utf16_len(&joined)),
					FrameContent::Text(joined),
				)
			},
			(FrameCategory::Text, FrameValue::Text(text)) => {
				// TDAT carries its DDMM digits in the numeric layout: Latin-1, no BOM
				if id == FrameId::TDAT {
					(
						size::numeric_frame(utf16_len(&text)),
						FrameContent::Numeric(text),
					)
				} else {
					(
						size::string_frame(utf16_len(&text)),
						FrameContent::Text(text),
					)
				}
			},
			(FrameCategory::Numeric, FrameValue::Integer(value)) => {
				let digits = value.to_string();
				(
					size::numeric_frame(digits.len()),
					FrameContent::Numeric(digits),
				)
			},
			// Plain text is accepted for URL frames as well
			(FrameCategory::Url, FrameValue::Url(url) | FrameValue::Text(url)) => (
				size::url_link_frame(utf16_len(&url)),
				FrameContent::Url(url),
			),
			(FrameCategory::UserText, FrameValue::UserText(frame)) => (
				size::user_text_frame(utf16_len(&frame.description), utf16_len(&frame.value)),
				FrameContent::UserText {
					description: frame.description,
					value: frame.value,
				},
			),
			(FrameCategory::UserUrl, FrameValue::UserUrl(frame)) => (
				size::user_url_frame(utf16_len(&frame.description), utf16_len(&frame.url)),
				FrameContent::UserUrl {
					description: frame.description,
					url: frame.url,
				},
			),
			(FrameCategory::Comment, FrameValue::Comment(frame)) => (
				size::language_text_frame(
					utf16_len(&frame.description),
					utf16_len(&frame.content),
				),
				FrameContent::Comment {
					language: frame.language.as_bytes(),
					description: frame.description,
					text: frame.content,
				},
			),
			(FrameCategory::UnsynchronizedLyrics, FrameValue::UnsynchronizedLyrics(frame)) => (
				size::language_text_frame(utf16_len(&frame.description), utf16_len(&frame.lyrics)),
				FrameContent::UnsynchronizedLyrics {
					language: frame.language.as_bytes(),
					description: frame.description,
					lyrics: frame.lyrics,
				},
			),
			(FrameCategory::SynchronizedLyrics, FrameValue::SynchronizedLyrics(frame)) => (
				size::synchronized_lyrics_frame(
					frame.lines.iter().map(|(text, _)| utf16_len(text)),
					utf16_len(&frame.description),
				),
				FrameContent::SynchronizedLyrics {
					language: frame.language.as_bytes(),
					timestamp_format: frame.timestamp_format as u8,
					content_type: frame.content_type as u8,
					description: frame.description,
					lines: frame.lines,
				},
			),
			(FrameCategory::Picture, FrameValue::Picture(frame)) => {
				let Some(mime_type) = MimeType::from_data(&frame.data) else {
					err!(NotAPicture);
				};

				// An empty description is always written as Latin-1
				let use_unicode = !frame.description.is_empty() && frame.use_unicode;
				let size = size::picture_frame(
					frame.data.len(),
					mime_type.as_str().len(),
					utf16_len(&frame.description),
					use_unicode,
				);

				(
					size,
					FrameContent::Picture {
						mime_type,
						pic_type: frame.pic_type.as_u8(),
						description: frame.description,
						use_unicode,
						data: frame.data,
					},
				)
			},
			(FrameCategory::Private, FrameValue::Private(frame)) => (
				size::private_frame(utf16_len(&frame.owner), frame.data.len()),
				FrameContent::Private {
					owner: frame.owner,
					data: frame.data,
				},
			),
			(FrameCategory::PairedText, FrameValue::PairedText(frame)) => (
				size::paired_text_frame(
					frame
						.pairs()
						.iter()
						.map(|(role, name)| (utf16_len(role), utf16_len(name))),
				),
				FrameContent::PairedText(frame.pairs),
			),
			(_, value) => err!(BadFrame(String::from(id.as_str()), value.name())),
		};

		Ok(Self { id, size, content })
	}

	/// The frame's identifier
	pub fn id(&self) -> FrameId {
		self.id
	}

	/// Total encoded size in bytes, including the 10-byte frame header
	pub fn size(&self) -> usize {
		self.size
	}

	pub(crate) fn write_to(&self, buffer: &mut [u8], offset: usize) -> usize {
		write::write_frame(self, buffer, offset)
	}
}

#[cfg(test)]
mod tests {
	use super::items::{Language, StringListFrame, UnsynchronizedLyricsFrame};
	use super::{EncodedFrame, FrameId, FrameValue};
	use crate::error::ErrorKind;

	#[test]
	fn genre_lists_join_with_semicolons() {
		let frame = EncodedFrame::new(
			FrameId::TCON,
			FrameValue::List(
				StringListFrame::new(vec![String::from("House"), String::from("Disco")]).unwrap(),
			),
		)
		.unwrap();

		// "House;Disco" is 11 characters
		assert_eq!(frame.size(), 10 + 1 + 2 + 22);
	}

	#[test]
	fn artist_lists_join_with_slashes() {
		let frame = EncodedFrame::new(
			FrameId::TPE1,
			FrameValue::List(
				StringListFrame::new(vec![String::from("a"), String::from("b")]).unwrap(),
			),
		)
		.unwrap();

		// "a/b"
		assert_eq!(frame.size(), 10 + 1 + 2 + 6);
	}

	#[test]
	fn unknown_id_is_rejected() {
		let result = EncodedFrame::new(FrameId::Unknown, FrameValue::Integer(1));
		assert!(matches!(
			result.unwrap_err().kind(),
			ErrorKind::UnknownFrameId(_)
		));
	}

	#[test]
	fn category_mismatch_is_rejected() {
		let result = EncodedFrame::new(FrameId::TYER, FrameValue::Text(String::from("2023")));
		assert!(matches!(result.unwrap_err().kind(), ErrorKind::BadFrame(..)));

		let result = EncodedFrame::new(
			FrameId::COMM,
			FrameValue::UnsynchronizedLyrics(UnsynchronizedLyricsFrame::new(
				Language::default(),
				String::new(),
				String::from("la la la"),
			)),
		);
		assert!(matches!(result.unwrap_err().kind(), ErrorKind::BadFrame(..)));
	}

	#[test]
	fn url_frames_accept_plain_text() {
		let frame = EncodedFrame::new(
			FrameId::WPUB,
			FrameValue::Text(String::from("https://example.com")),
		)
		.unwrap();
		assert_eq!(frame.size(), 10 + 19);
	}

	#[test]
	fn non_picture_data_is_rejected() {
		let frame = super::items::AttachedPictureFrame::new(
			crate::picture::PictureType::CoverFront,
			vec![0x00, 0x01, 0x02],
		);
		let result = EncodedFrame::new(FrameId::APIC, FrameValue::Picture(frame));
		assert!(matches!(result.unwrap_err().kind(), ErrorKind::NotAPicture));
	}
}
