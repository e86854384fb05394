//! Picture-related types for attached picture (APIC) frames

use std::fmt::{Display, Formatter};

/// The MIME type of an attached picture
///
/// The writer never takes a MIME string from the caller: the type is determined from
/// the picture data's magic bytes, and unrecognizable data is rejected before a frame
/// is created.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum MimeType {
	/// JPEG image
	Jpeg,
	/// PNG image
	Png,
	/// GIF image
	Gif,
	/// WebP image
	Webp,
	/// TIFF image, either byte order
	Tiff,
	/// BMP image
	Bmp,
	/// Windows icon
	Ico,
}

impl MimeType {
	/// Get a `&str` from a `MimeType`
	///
	/// # Examples
	///
	/// ```rust
	/// use stylus::picture::MimeType;
	///
	/// assert_eq!(MimeType::Jpeg.as_str(), "image/jpeg");
	/// ```
	pub fn as_str(&self) -> &'static str {
		match self {
			MimeType::Jpeg => "image/jpeg",
			MimeType::Png => "image/png",
			MimeType::Gif => "image/gif",
			MimeType::Webp => "image/webp",
			MimeType::Tiff => "image/tiff",
			MimeType::Bmp => "image/bmp",
			MimeType::Ico => "image/x-icon",
		}
	}

	/// Attempt to determine a `MimeType` from the leading bytes of an image
	///
	/// Returns `None` when no known signature matches.
	///
	/// # Examples
	///
	/// ```rust
	/// use stylus::picture::MimeType;
	///
	/// let jpeg_header = [0xFF, 0xD8, 0xFF, 0xE0];
	/// assert_eq!(MimeType::from_data(&jpeg_header), Some(MimeType::Jpeg));
	/// assert_eq!(MimeType::from_data(b"not an image"), None);
	/// ```
	pub fn from_data(data: &[u8]) -> Option<Self> {
		match data {
			[0xFF, 0xD8, 0xFF, ..] => Some(Self::Jpeg),
			[0x89, b'P', b'N', b'G', ..] => Some(Self::Png),
			[b'G', b'I', b'F', ..] => Some(Self::Gif),
			[b'I', b'I', b'*', 0x00, ..] | [b'M', b'M', 0x00, b'*', ..] => Some(Self::Tiff),
			[b'B', b'M', ..] => Some(Self::Bmp),
			[0x00, 0x00, 0x01, 0x00, ..] => Some(Self::Ico),
			// RIFF container, fourcc at offset 8
			_ if data.get(8..12) == Some(b"WEBP".as_slice()) => Some(Self::Webp),
			_ => None,
		}
	}
}

impl Display for MimeType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

/// The picture type, according to ID3v2 APIC
///
/// The catalog is closed at the 21 types the specification declares; arbitrary bytes
/// are rejected by [`PictureType::from_u8`].
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum PictureType {
	Other = 0,
	Icon,
	OtherIcon,
	CoverFront,
	CoverBack,
	Leaflet,
	Media,
	LeadArtist,
	Artist,
	Conductor,
	Band,
	Composer,
	Lyricist,
	RecordingLocation,
	DuringRecording,
	DuringPerformance,
	ScreenCapture,
	BrightFish,
	Illustration,
	BandLogo,
	PublisherLogo,
}

impl PictureType {
	/// Get a `u8` from a `PictureType` according to ID3v2 APIC
	pub fn as_u8(&self) -> u8 {
		*self as u8
	}

	/// Get a `PictureType` from a `u8`, must be 0-20 inclusive
	///
	/// # Examples
	///
	/// ```rust
	/// use stylus::picture::PictureType;
	///
	/// assert_eq!(PictureType::from_u8(3), Some(PictureType::CoverFront));
	/// assert_eq!(PictureType::from_u8(21), None);
	/// ```
	pub fn from_u8(byte: u8) -> Option<Self> {
		match byte {
			0 => Some(Self::Other),
			1 => Some(Self::Icon),
			2 => Some(Self::OtherIcon),
			3 => Some(Self::CoverFront),
			4 => Some(Self::CoverBack),
			5 => Some(Self::Leaflet),
			6 => Some(Self::Media),
			7 => Some(Self::LeadArtist),
			8 => Some(Self::Artist),
			9 => Some(Self::Conductor),
			10 => Some(Self::Band),
			11 => Some(Self::Composer),
			12 => Some(Self::Lyricist),
			13 => Some(Self::RecordingLocation),
			14 => Some(Self::DuringRecording),
			15 => Some(Self::DuringPerformance),
			16 => Some(Self::ScreenCapture),
			17 => Some(Self::BrightFish),
			18 => Some(Self::Illustration),
			19 => Some(Self::BandLogo),
			20 => Some(Self::PublisherLogo),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::{MimeType, PictureType};

	#[test]
	fn mime_sniffing() {
		let cases: [(&[u8], MimeType); 8] = [
			(&[0xFF, 0xD8, 0xFF, 0xE0, 0x00], MimeType::Jpeg),
			(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A], MimeType::Png),
			(b"GIF89a", MimeType::Gif),
			(b"RIFF\x24\x00\x00\x00WEBPVP8 ", MimeType::Webp),
			(b"II*\x00rest", MimeType::Tiff),
			(b"MM\x00*rest", MimeType::Tiff),
			(b"BMrest", MimeType::Bmp),
			(&[0x00, 0x00, 0x01, 0x00, 0x01], MimeType::Ico),
		];

		for (data, expected) in cases {
			assert_eq!(MimeType::from_data(data), Some(expected));
		}
	}

	#[test]
	fn mime_sniffing_rejects_unknown_data() {
		assert_eq!(MimeType::from_data(&[]), None);
		assert_eq!(MimeType::from_data(b"plain text, no signature"), None);
		// A RIFF container that is not WebP
		assert_eq!(MimeType::from_data(b"RIFF\x24\x00\x00\x00WAVEfmt "), None);
	}

	#[test]
	fn picture_type_bounds() {
		assert_eq!(PictureType::from_u8(0), Some(PictureType::Other));
		assert_eq!(PictureType::from_u8(20), Some(PictureType::PublisherLogo));
		assert_eq!(PictureType::from_u8(21), None);
		assert_eq!(PictureType::CoverFront.as_u8(), 3);
	}
}
