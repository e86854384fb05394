use super::Language;

/// The unit used for [`SynchronizedLyricsFrame`] timestamps
#[derive(Copy, Clone, PartialEq, Debug, Eq, Hash)]
#[repr(u8)]
pub enum TimestampFormat {
	/// Absolute time, using MPEG frames as the unit
	Mpeg = 1,
	/// Absolute time, using milliseconds as the unit
	Milliseconds = 2,
}

impl TimestampFormat {
	/// Get a `TimestampFormat` from a u8, must be 1-2 inclusive
	pub fn from_u8(byte: u8) -> Option<Self> {
		match byte {
			1 => Some(Self::Mpeg),
			2 => Some(Self::Milliseconds),
			_ => None,
		}
	}
}

/// The type of text stored in a [`SynchronizedLyricsFrame`]
#[derive(Copy, Clone, PartialEq, Debug, Eq, Hash)]
#[repr(u8)]
pub enum SyncLyricsContentType {
	/// Other
	Other = 0,
	/// Lyrics
	Lyrics = 1,
	/// Text transcription
	TextTranscription = 2,
	/// Movement/part name (e.g. "Adagio")
	MovementPartName = 3,
	/// Events (e.g. "Don Quijote enters the stage")
	Events = 4,
	/// Chord (e.g. "Bb F Fsus")
	Chord = 5,
	/// Trivia/'pop up' information
	Trivia = 6,
}

impl SyncLyricsContentType {
	/// Get a `SyncLyricsContentType` from a u8, must be 0-6 inclusive
	pub fn from_u8(byte: u8) -> Option<Self> {
		match byte {
			0 => Some(Self::Other),
			1 => Some(Self::Lyrics),
			2 => Some(Self::TextTranscription),
			3 => Some(Self::MovementPartName),
			4 => Some(Self::Events),
			5 => Some(Self::Chord),
			6 => Some(Self::Trivia),
			_ => None,
		}
	}
}

/// An ID3v2.3 synchronized lyrics frame (SYLT)
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct SynchronizedLyricsFrame {
	/// The type of content stored
	pub content_type: SyncLyricsContentType,
	/// The format of the line timestamps
	pub timestamp_format: TimestampFormat,
	/// ISO-639-2 language code
	pub language: Language,
	/// Unique content description
	pub description: String,
	/// The lines as (text, timestamp) pairs, in playback order
	pub lines: Vec<(String, u32)>,
}

impl SynchronizedLyricsFrame {
	/// Create a new [`SynchronizedLyricsFrame`]
	pub fn new(
		content_type: SyncLyricsContentType,
		timestamp_format: TimestampFormat,
		language: Language,
		description: String,
		lines: Vec<(String, u32)>,
	) -> Self {
		Self {
			content_type,
			timestamp_format,
			language,
			description,
			lines,
		}
	}
}
