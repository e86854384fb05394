use crate::error::Result;
use crate::macros::err;

/// An ordered list of strings for a multi-valued text frame (TPE1/TCOM/TCON)
///
/// The list is joined into a single string when encoded: genres (TCON) with `;`,
/// everything else with `/`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct StringListFrame {
	pub(crate) values: Vec<String>,
}

impl StringListFrame {
	/// Create a new [`StringListFrame`]
	///
	/// # Errors
	///
	/// `values` is empty
	///
	/// # Examples
	///
	/// ```rust
	/// use stylus::frame::items::StringListFrame;
	///
	/// let artists = StringListFrame::new(vec![
	/// 	String::from("Daft Punk"),
	/// 	String::from("Todd Edwards"),
	/// ]);
	/// assert!(artists.is_ok());
	///
	/// assert!(StringListFrame::new(Vec::new()).is_err());
	/// ```
	pub fn new(values: Vec<String>) -> Result<Self> {
		if values.is_empty() {
			err!(EmptyFrameValue("string list"));
		}

		Ok(Self { values })
	}

	/// The strings, in insertion order
	pub fn values(&self) -> &[String] {
		&self.values
	}
}

#[cfg(test)]
mod tests {
	use super::StringListFrame;

	#[test]
	fn rejects_empty_list() {
		assert!(StringListFrame::new(Vec::new()).is_err());
	}

	#[test]
	fn preserves_order() {
		let list =
			StringListFrame::new(vec![String::from("b"), String::from("a")]).unwrap();
		assert_eq!(list.values(), &["b", "a"]);
	}
}
