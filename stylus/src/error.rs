//! Contains the errors that can arise while building a tag
//!
//! The primary error is [`StylusError`]. The type of error is determined by [`ErrorKind`],
//! which can be extended at any time.

use std::fmt::{Debug, Display, Formatter};

/// Alias for `Result<T, StylusError>`
pub type Result<T> = std::result::Result<T, StylusError>;

/// The types of errors that can occur
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
	/// Attempting to write an abnormally large amount of data
	///
	/// The combined size of the frames and padding must fit in a 28-bit synchsafe integer.
	TooMuchData,
	/// Provided picture data with no recognizable image signature
	NotAPicture,
	/// Arises when a code does not resolve to a supported [`FrameId`](crate::frame::FrameId)
	UnknownFrameId(String),
	/// Arises when attempting to encode an invalid frame (bad `FrameId`/`FrameValue` pairing)
	BadFrame(String, &'static str),
	/// Arises when a language code is not exactly 3 ASCII alphabetic characters
	InvalidLanguage(String),
	/// Arises when a required frame component is empty or blank
	EmptyFrameValue(&'static str),
}

/// Errors that could occur within the crate
pub struct StylusError {
	pub(crate) kind: ErrorKind,
}

impl StylusError {
	/// Create a `StylusError` from an [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use stylus::error::{ErrorKind, StylusError};
	///
	/// let too_much_data = StylusError::new(ErrorKind::TooMuchData);
	/// ```
	#[must_use]
	pub const fn new(kind: ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use stylus::error::{ErrorKind, StylusError};
	///
	/// let too_much_data = StylusError::new(ErrorKind::TooMuchData);
	/// if let ErrorKind::TooMuchData = too_much_data.kind() {
	/// 	println!("Try a smaller tag");
	/// }
	/// ```
	pub fn kind(&self) -> &ErrorKind {
		&self.kind
	}
}

impl std::error::Error for StylusError {}

impl Debug for StylusError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.kind)
	}
}

impl Display for StylusError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.kind {
			ErrorKind::TooMuchData => write!(
				f,
				"Attempted to write an abnormally large amount of data"
			),
			ErrorKind::NotAPicture => write!(f, "Picture: Encountered invalid data"),
			ErrorKind::UnknownFrameId(ref code) => {
				write!(f, "Unknown or unsupported frame ID {code:?}")
			},
			ErrorKind::BadFrame(ref frame_id, frame_value) => write!(
				f,
				"Attempted to encode an invalid frame. ID: {frame_id:?}, Value: \"{frame_value}\"",
			),
			ErrorKind::InvalidLanguage(ref code) => write!(
				f,
				"Invalid frame language {code:?} (expected 3 ASCII alphabetic characters)"
			),
			ErrorKind::EmptyFrameValue(component) => {
				write!(f, "Frame component cannot be empty: {component}")
			},
		}
	}
}
