//! The closed catalog of supported frame identifiers

/// The value category a frame identifier's payload belongs to
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum FrameCategory {
	/// A single UTF-16 string
	Text,
	/// Multiple strings, joined with a separator on the wire (`;` for TCON, `/` otherwise)
	TextList,
	/// A decimal number stored as Latin-1 digits
	Numeric,
	/// A Latin-1 URL with no encoding byte
	Url,
	/// A user-defined description/value string pair (TXXX)
	UserText,
	/// A user-defined description/URL pair (WXXX)
	UserUrl,
	/// A language-tagged comment (COMM)
	Comment,
	/// Language-tagged lyrics (USLT)
	UnsynchronizedLyrics,
	/// Timestamped lyrics (SYLT)
	SynchronizedLyrics,
	/// An attached picture (APIC)
	Picture,
	/// Owner-tagged binary data (PRIV)
	Private,
	/// A list of role/name pairs (IPLS)
	PairedText,
}

/// A four-character ID3v2.3 frame identifier
///
/// The catalog is closed: [`FrameId::from_code`] resolves anything outside it to
/// [`FrameId::Unknown`], which can never be encoded.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum FrameId {
	// Lists
	/// Lead performers/soloists
	TPE1,
	/// Composers
	TCOM,
	/// Content type (genres)
	TCON,

	// Strings
	/// Language
	TLAN,
	/// Content group description
	TIT1,
	/// Title
	TIT2,
	/// Subtitle
	TIT3,
	/// Album title
	TALB,
	/// Album artist
	TPE2,
	/// Conductor/performer refinement
	TPE3,
	/// Interpreted, remixed, or otherwise modified by
	TPE4,
	/// Track number, `5` or `5/10`
	TRCK,
	/// Disc number, `1` or `1/3`
	TPOS,
	/// Media type
	TMED,
	/// Label name
	TPUB,
	/// Copyright message
	TCOP,
	/// Initial musical key
	TKEY,
	/// Lyricists/text writers
	TEXT,
	/// Release date expressed as DDMM; a string on the caller's side, but laid out
	/// like a numeric frame
	TDAT,
	/// Compilation flag, `"1"` stored as a string
	TCMP,
	/// ISRC
	TSRC,

	// Integers
	/// Beats per minute
	TBPM,
	/// Length in milliseconds
	TLEN,
	/// Release year
	TYER,

	// Objects
	/// Unsynchronized lyrics
	USLT,
	/// Synchronized lyrics
	SYLT,
	/// Attached picture
	APIC,
	/// User-defined text information
	TXXX,
	/// Comments
	COMM,
	/// Private data
	PRIV,
	/// User-defined URL link
	WXXX,

	// Urls
	/// Commercial information
	WCOM,
	/// Copyright/legal information
	WCOP,
	/// Official audio file webpage
	WOAF,
	/// Official artist/performer webpage
	WOAR,
	/// Official audio source webpage
	WOAS,
	/// Official internet radio station homepage
	WORS,
	/// Payment
	WPAY,
	/// Publisher's official webpage
	WPUB,

	// Pairs
	/// Involved people list
	IPLS,

	/// Any identifier outside the catalog
	Unknown,
}

impl FrameId {
	/// Resolve a four-character code to a catalog entry
	///
	/// The code is trimmed and uppercased before matching; anything left unmatched
	/// resolves to [`FrameId::Unknown`].
	///
	/// # Examples
	///
	/// ```rust
	/// use stylus::frame::FrameId;
	///
	/// assert_eq!(FrameId::from_code("TIT2"), FrameId::TIT2);
	/// assert_eq!(FrameId::from_code(" tit2 "), FrameId::TIT2);
	/// assert_eq!(FrameId::from_code("ZZZZ"), FrameId::Unknown);
	/// ```
	pub fn from_code(code: &str) -> Self {
		match code.trim().to_uppercase().as_str() {
			"TPE1" => Self::TPE1,
			"TCOM" => Self::TCOM,
			"TCON" => Self::TCON,
			"TLAN" => Self::TLAN,
			"TIT1" => Self::TIT1,
			"TIT2" => Self::TIT2,
			"TIT3" => Self::TIT3,
			"TALB" => Self::TALB,
			"TPE2" => Self::TPE2,
			"TPE3" => Self::TPE3,
			"TPE4" => Self::TPE4,
			"TRCK" => Self::TRCK,
			"TPOS" => Self::TPOS,
			"TMED" => Self::TMED,
			"TPUB" => Self::TPUB,
			"TCOP" => Self::TCOP,
			"TKEY" => Self::TKEY,
			"TEXT" => Self::TEXT,
			"TDAT" => Self::TDAT,
			"TCMP" => Self::TCMP,
			"TSRC" => Self::TSRC,
			"TBPM" => Self::TBPM,
			"TLEN" => Self::TLEN,
			"TYER" => Self::TYER,
			"USLT" => Self::USLT,
			"SYLT" => Self::SYLT,
			"APIC" => Self::APIC,
			"TXXX" => Self::TXXX,
			"COMM" => Self::COMM,
			"PRIV" => Self::PRIV,
			"WXXX" => Self::WXXX,
			"WCOM" => Self::WCOM,
			"WCOP" => Self::WCOP,
			"WOAF" => Self::WOAF,
			"WOAR" => Self::WOAR,
			"WOAS" => Self::WOAS,
			"WORS" => Self::WORS,
			"WPAY" => Self::WPAY,
			"WPUB" => Self::WPUB,
			"IPLS" => Self::IPLS,
			_ => Self::Unknown,
		}
	}

	/// The identifier as it appears on the wire
	///
	/// [`FrameId::Unknown`] has no identifier and returns an empty string.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::TPE1 => "TPE1",
			Self::TCOM => "TCOM",
			Self::TCON => "TCON",
			Self::TLAN => "TLAN",
			Self::TIT1 => "TIT1",
			Self::TIT2 => "TIT2",
			Self::TIT3 => "TIT3",
			Self::TALB => "TALB",
			Self::TPE2 => "TPE2",
			Self::TPE3 => "TPE3",
			Self::TPE4 => "TPE4",
			Self::TRCK => "TRCK",
			Self::TPOS => "TPOS",
			Self::TMED => "TMED",
			Self::TPUB => "TPUB",
			Self::TCOP => "TCOP",
			Self::TKEY => "TKEY",
			Self::TEXT => "TEXT",
			Self::TDAT => "TDAT",
			Self::TCMP => "TCMP",
			Self::TSRC => "TSRC",
			Self::TBPM => "TBPM",
			Self::TLEN => "TLEN",
			Self::TYER => "TYER",
			Self::USLT => "USLT",
			Self::SYLT => "SYLT",
			Self::APIC => "APIC",
			Self::TXXX => "TXXX",
			Self::COMM => "COMM",
			Self::PRIV => "PRIV",
			Self::WXXX => "WXXX",
			Self::WCOM => "WCOM",
			Self::WCOP => "WCOP",
			Self::WOAF => "WOAF",
			Self::WOAR => "WOAR",
			Self::WOAS => "WOAS",
			Self::WORS => "WORS",
			Self::WPAY => "WPAY",
			Self::WPUB => "WPUB",
			Self::IPLS => "IPLS",
			Self::Unknown => "",
		}
	}

	/// The category of value this identifier carries
	///
	/// `None` for [`FrameId::Unknown`].
	pub fn category(&self) -> Option<FrameCategory> {
		let category = match self {
			Self::TPE1 | Self::TCOM | Self::TCON => FrameCategory::TextList,
			Self::TLAN
			| Self::TIT1
			| Self::TIT2
			| Self::TIT3
			| Self::TALB
			| Self::TPE2
			| Self::TPE3
			| Self::TPE4
			| Self::TRCK
			| Self::TPOS
			| Self::TMED
			| Self::TPUB
			| Self::TCOP
			| Self::TKEY
			| Self::TEXT
			| Self::TDAT
			| Self::TCMP
			| Self::TSRC => FrameCategory::Text,
			Self::TBPM | Self::TLEN | Self::TYER => FrameCategory::Numeric,
			Self::USLT => FrameCategory::UnsynchronizedLyrics,
			Self::SYLT => FrameCategory::SynchronizedLyrics,
			Self::APIC => FrameCategory::Picture,
			Self::TXXX => FrameCategory::UserText,
			Self::COMM => FrameCategory::Comment,
			Self::PRIV => FrameCategory::Private,
			Self::WXXX => FrameCategory::UserUrl,
			Self::WCOM
			| Self::WCOP
			| Self::WOAF
			| Self::WOAR
			| Self::WOAS
			| Self::WORS
			| Self::WPAY
			| Self::WPUB => FrameCategory::Url,
			Self::IPLS => FrameCategory::PairedText,
			Self::Unknown => return None,
		};

		Some(category)
	}
}

#[cfg(test)]
mod tests {
	use super::{FrameCategory, FrameId};

	#[test]
	fn lookup_normalizes_case_and_whitespace() {
		assert_eq!(FrameId::from_code("tyer"), FrameId::TYER);
		assert_eq!(FrameId::from_code("  Apic\n"), FrameId::APIC);
	}

	#[test]
	fn lookup_defaults_to_unknown() {
		assert_eq!(FrameId::from_code("ZZZZ"), FrameId::Unknown);
		assert_eq!(FrameId::from_code(""), FrameId::Unknown);
		// Outdated v2.2 identifiers are not in the catalog
		assert_eq!(FrameId::from_code("TT2"), FrameId::Unknown);
	}

	#[test]
	fn categories() {
		assert_eq!(FrameId::TCON.category(), Some(FrameCategory::TextList));
		assert_eq!(FrameId::TDAT.category(), Some(FrameCategory::Text));
		assert_eq!(FrameId::TLEN.category(), Some(FrameCategory::Numeric));
		assert_eq!(FrameId::WPAY.category(), Some(FrameCategory::Url));
		assert_eq!(FrameId::WXXX.category(), Some(FrameCategory::UserUrl));
		assert_eq!(FrameId::Unknown.category(), None);
	}

	#[test]
	fn wire_identifiers_are_four_ascii_characters() {
		for id in [
			FrameId::TPE1,
			FrameId::TDAT,
			FrameId::TYER,
			FrameId::APIC,
			FrameId::WXXX,
			FrameId::IPLS,
		] {
			let code = id.as_str();
			assert_eq!(code.len(), 4);
			assert!(code.bytes().all(|b| b.is_ascii_uppercase() || b.is_ascii_digit()));
			assert_eq!(FrameId::from_code(code), id);
		}
	}
}
