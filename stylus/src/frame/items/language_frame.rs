use crate::error::Result;
use crate::macros::err;

/// An ISO-639-2 style language code: exactly 3 ASCII alphabetic characters
///
/// The default is `"eng"`.
///
/// # Examples
///
/// ```rust
/// use stylus::frame::items::Language;
///
/// assert!(Language::new("spa").is_ok());
/// assert!(Language::new("en").is_err());
/// assert!(Language::new("e1g").is_err());
/// assert_eq!(Language::default().as_bytes(), *b"eng");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Language([u8; 3]);

impl Language {
	/// Create a [`Language`] from a 3-letter code
	///
	/// # Errors
	///
	/// `code` is not exactly 3 ASCII alphabetic characters
	pub fn new(code: &str) -> Result<Self> {
		let bytes = code.as_bytes();
		if bytes.len() != 3 || !bytes.iter().all(u8::is_ascii_alphabetic) {
			err!(InvalidLanguage(code.to_owned()));
		}

		Ok(Self([bytes[0], bytes[1], bytes[2]]))
	}

	/// The code as raw bytes, ready for the wire
	pub fn as_bytes(&self) -> [u8; 3] {
		self.0
	}
}

impl Default for Language {
	fn default() -> Self {
		Self(*b"eng")
	}
}

/// An ID3v2.3 comment frame (COMM)
///
/// Similar to TXXX frames, comments are told apart by their descriptions.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct CommentFrame {
	/// ISO-639-2 language code
	pub language: Language,
	/// Unique content description
	pub description: String,
	/// The comment text
	pub content: String,
}

impl CommentFrame {
	/// Create a new [`CommentFrame`]
	pub fn new(language: Language, description: String, content: String) -> Self {
		Self {
			language,
			description,
			content,
		}
	}
}

/// An ID3v2.3 unsynchronized lyrics frame (USLT)
///
/// Laid out identically to a comment frame on the wire.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct UnsynchronizedLyricsFrame {
	/// ISO-639-2 language code
	pub language: Language,
	/// Content descriptor
	pub description: String,
	/// The lyrics themselves
	pub lyrics: String,
}

impl UnsynchronizedLyricsFrame {
	/// Create a new [`UnsynchronizedLyricsFrame`]
	pub fn new(language: Language, description: String, lyrics: String) -> Self {
		Self {
			language,
			description,
			lyrics,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::Language;

	#[test]
	fn language_validation() {
		assert_eq!(Language::new("eng").unwrap().as_bytes(), *b"eng");
		assert_eq!(Language::new("SPA").unwrap().as_bytes(), *b"SPA");

		for bad in ["", "en", "engl", "e1g", "e g", "\u{00e9}ng"] {
			assert!(Language::new(bad).is_err(), "accepted {bad:?}");
		}
	}
}
