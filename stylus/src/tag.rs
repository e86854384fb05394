//! The frame accumulator and tag assembler

use crate::error::Result;
use crate::frame::{EncodedFrame, FrameId, FrameValue};
use crate::macros::err;
use crate::util::synchsafe::SynchsafeInteger;

use byteorder::{BigEndian, ByteOrder};

const TAG_HEADER_SIZE: usize = 10;

/// Accumulates frames and assembles the final ID3v2.3 tag
///
/// Frames are encoded and measured as they are set; assembling the tag is a single
/// pass over the accumulated list into one exactly-sized buffer. Frames are written in
/// insertion order and are never rewritten in place: to change a tag's contents,
/// adjust the list with [`TagBuilder::remove`]/[`TagBuilder::clear`] and set the
/// frames again.
///
/// # Examples
///
/// ```rust
/// use stylus::frame::FrameValue;
/// use stylus::tag::TagBuilder;
///
/// # fn main() -> stylus::error::Result<()> {
/// let mut builder = TagBuilder::new();
/// builder.set_frame("TIT2", FrameValue::Text(String::from("Around the World")))?;
/// builder.set_frame("TYER", FrameValue::Integer(1997))?;
///
/// let tagged = builder.to_bytes(b"\xFF\xFBaudio data")?;
/// assert_eq!(&tagged[..3], b"ID3");
/// assert!(tagged.ends_with(b"audio data"));
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct TagBuilder {
	frames: Vec<EncodedFrame>,
	/// Zero bytes reserved after the frames, for future in-place tag growth
	pub padding: u32,
}

impl TagBuilder {
	/// The amount of padding written after the frames by default
	pub const DEFAULT_PADDING: u32 = 4096;

	/// Create an empty builder with [`DEFAULT_PADDING`](Self::DEFAULT_PADDING)
	pub fn new() -> Self {
		Self {
			frames: Vec::new(),
			padding: Self::DEFAULT_PADDING,
		}
	}

	/// Encode `value` under the identifier resolved from `code`
	///
	/// `code` is trimmed and uppercased before lookup, so `"tit2"` works.
	///
	/// # Errors
	///
	/// * `code` does not resolve to a supported [`FrameId`]
	/// * `value`'s variant does not fit the identifier's category
	/// * Picture data has no recognizable image signature
	///
	/// The frame list is untouched whenever an error is returned.
	pub fn set_frame(&mut self, code: &str, value: FrameValue) -> Result<()> {
		let id = FrameId::from_code(code);
		if id == FrameId::Unknown {
			err!(UnknownFrameId(code.trim().to_uppercase()));
		}

		self.set(id, value)
	}

	/// Encode `value` under `id`, appending the result to the frame list
	///
	/// # Errors
	///
	/// Same conditions as [`TagBuilder::set_frame`].
	pub fn set(&mut self, id: FrameId, value: FrameValue) -> Result<()> {
		let frame = EncodedFrame::new(id, value)?;
		self.frames.push(frame);
		Ok(())
	}

	/// The accumulated frames, in insertion order
	pub fn frames(&self) -> &[EncodedFrame] {
		&self.frames
	}

	/// Drop every accumulated frame with the given identifier
	pub fn remove(&mut self, id: FrameId) {
		self.frames.retain(|frame| frame.id() != id);
	}

	/// Drop every accumulated frame
	pub fn clear(&mut self) {
		self.frames.clear();
	}

	/// Assemble the tag and prepend it to `audio`
	///
	/// Any ID3v2 tag already present on `audio` is stripped first. The output is laid
	/// out in a single exactly-sized allocation: tag header, frames in insertion
	/// order, [`padding`](Self::padding) zero bytes, then the audio content untouched.
	///
	/// # Errors
	///
	/// The combined frame and padding size does not fit in a 28-bit synchsafe integer
	pub fn to_bytes(&self, audio: &[u8]) -> Result<Vec<u8>> {
		let audio = strip_existing_tag(audio);

		let tag_size: usize =
			self.frames.iter().map(EncodedFrame::size).sum::<usize>() + self.padding as usize;

		// The synchsafe conversion is the only fallible step; it runs before the
		// buffer exists so an oversized tag leaves no artifacts
		let Ok(tag_size_u32) = u32::try_from(tag_size) else {
			err!(TooMuchData);
		};
		let synched_size = tag_size_u32.synch()?;

		let mut buffer = vec![0_u8; TAG_HEADER_SIZE + tag_size + audio.len()];

		buffer[..3].copy_from_slice(b"ID3");
		buffer[3] = 3;
		// Revision (4) and flags (5) stay zero
		BigEndian::write_u32(&mut buffer[6..10], synched_size);

		let mut offset = TAG_HEADER_SIZE;
		for frame in &self.frames {
			let next = frame.write_to(&mut buffer, offset);
			debug_assert_eq!(next - offset, frame.size());
			offset = next;
		}

		// The padding region is already zeroed by the allocation
		offset += self.padding as usize;
		buffer[offset..].copy_from_slice(audio);

		Ok(buffer)
	}
}

impl Default for TagBuilder {
	fn default() -> Self {
		Self::new()
	}
}

/// Compute the audio content of `bytes`, skipping any leading ID3v2 tag
///
/// Buffers shorter than a tag header, without the `ID3` marker, or with a major
/// version outside 2-4 are returned unchanged, so stripping an already-stripped
/// buffer is a no-op.
///
/// # Examples
///
/// ```rust
/// use stylus::tag::strip_existing_tag;
///
/// let plain = b"not a tag";
/// assert_eq!(strip_existing_tag(plain), plain);
/// ```
pub fn strip_existing_tag(bytes: &[u8]) -> &[u8] {
	if bytes.len() < TAG_HEADER_SIZE {
		return bytes;
	}

	if &bytes[..3] != b"ID3" || !(2..=4).contains(&bytes[3]) {
		return bytes;
	}

	let declared = BigEndian::read_u32(&bytes[6..10]).unsynch() as usize;
	let tag_end = TAG_HEADER_SIZE + declared;
	if tag_end > bytes.len() {
		log::warn!("Existing tag declares {declared} content bytes, more than the buffer holds");
		return &[];
	}

	log::debug!("Stripping existing ID3v2.{} tag of {tag_end} bytes", bytes[3]);
	&bytes[tag_end..]
}
