use crate::error::Result;
use crate::macros::err;

/// A user-defined text frame (TXXX)
///
/// TXXX frames are told apart by their descriptions, so both the description and the
/// value must be non-blank.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct UserDefinedTextFrame {
	pub(crate) description: String,
	pub(crate) value: String,
}

impl UserDefinedTextFrame {
	/// Create a new [`UserDefinedTextFrame`]
	///
	/// # Errors
	///
	/// `description` or `value` is empty or whitespace-only
	///
	/// # Examples
	///
	/// ```rust
	/// use stylus::frame::items::UserDefinedTextFrame;
	///
	/// let replaygain = UserDefinedTextFrame::new(
	/// 	String::from("replaygain_track_gain"),
	/// 	String::from("-7.03 dB"),
	/// );
	/// assert!(replaygain.is_ok());
	///
	/// assert!(UserDefinedTextFrame::new(String::new(), String::from("value")).is_err());
	/// assert!(UserDefinedTextFrame::new(String::from("desc"), String::from("  ")).is_err());
	/// ```
	pub fn new(description: String, value: String) -> Result<Self> {
		if description.trim().is_empty() {
			err!(EmptyFrameValue("TXXX description"));
		}

		if value.trim().is_empty() {
			err!(EmptyFrameValue("TXXX value"));
		}

		Ok(Self { description, value })
	}

	/// Unique content description
	pub fn description(&self) -> &str {
		&self.description
	}

	/// The value stored under the description
	pub fn value(&self) -> &str {
		&self.value
	}
}
