use crate::error::Result;
use crate::macros::err;

/// Role/name pairs for an involved people frame (IPLS)
///
/// Every pair is a role (e.g. `"producer"`) followed by the person filling it. Roles
/// may repeat.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct PairedTextFrame {
	pub(crate) pairs: Vec<(String, String)>,
}

impl PairedTextFrame {
	/// Create a new [`PairedTextFrame`]
	///
	/// # Errors
	///
	/// `pairs` is empty
	pub fn new(pairs: Vec<(String, String)>) -> Result<Self> {
		if pairs.is_empty() {
			err!(EmptyFrameValue("paired text list"));
		}

		Ok(Self { pairs })
	}

	/// The pairs, in insertion order
	pub fn pairs(&self) -> &[(String, String)] {
		&self.pairs
	}
}

#[cfg(test)]
mod tests {
	use super::PairedTextFrame;

	#[test]
	fn rejects_empty_list() {
		assert!(PairedTextFrame::new(Vec::new()).is_err());
	}

	#[test]
	fn roles_may_repeat() {
		let pairs = PairedTextFrame::new(vec![
			(String::from("author"), String::from("Thomas Bangalter")),
			(String::from("author"), String::from("Guy-Manuel de Homem-Christo")),
		])
		.unwrap();
		assert_eq!(pairs.pairs().len(), 2);
	}
}
