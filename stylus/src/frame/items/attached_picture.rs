use crate::picture::PictureType;

/// An ID3v2.3 attached picture frame (APIC)
///
/// No MIME type is stored here: it is sniffed from `data`'s magic bytes when the frame
/// is set, and data with no recognized signature is rejected at that point.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct AttachedPictureFrame {
	/// The picture type
	pub pic_type: PictureType,
	/// The raw image bytes
	pub data: Vec<u8>,
	/// Content description
	pub description: String,
	/// Encode the description as UTF-16 rather than Latin-1
	///
	/// Forced off whenever `description` is empty, regardless of this flag.
	pub use_unicode: bool,
}

impl AttachedPictureFrame {
	/// Create a new [`AttachedPictureFrame`] with an empty, Unicode-enabled description
	pub fn new(pic_type: PictureType, data: Vec<u8>) -> Self {
		Self {
			pic_type,
			data,
			description: String::new(),
			use_unicode: true,
		}
	}
}
