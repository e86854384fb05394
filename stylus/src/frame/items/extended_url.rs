/// A user-defined URL frame (WXXX)
///
/// The description is written as UTF-16; the URL itself is always Latin-1.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct UserDefinedUrlFrame {
	/// Unique content description
	pub description: String,
	/// The URL
	pub url: String,
}

impl UserDefinedUrlFrame {
	/// Create a new [`UserDefinedUrlFrame`]
	pub fn new(description: String, url: String) -> Self {
		Self { description, url }
	}
}
