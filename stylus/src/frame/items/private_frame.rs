/// An ID3v2.3 private frame (PRIV)
///
/// Carries software-specific information that does not fit into any other frame.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct PrivateFrame {
	/// An identifier for the organisation responsible for the frame, usually an email
	/// address or a URL
	pub owner: String,
	/// Binary data
	pub data: Vec<u8>,
}

impl PrivateFrame {
	/// Create a new [`PrivateFrame`]
	pub fn new(owner: String, data: Vec<u8>) -> Self {
		Self { owner, data }
	}
}
