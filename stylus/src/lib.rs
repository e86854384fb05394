//! An ID3v2.3 tag writer.
//!
//! `stylus` encodes metadata frames into the ID3v2.3 binary format and prepends the
//! result to audio content. Reading is out of scope: existing tags are only detected
//! and stripped before the new tag is written, never parsed.
//!
//! Frame values are validated when they are constructed, sized exactly when they are
//! set, and written in one pass into a single allocation when the tag is assembled.
//!
//! # Examples
//!
//! ```rust
//! use stylus::frame::FrameValue;
//! use stylus::frame::items::StringListFrame;
//! use stylus::tag::TagBuilder;
//!
//! # fn main() -> stylus::error::Result<()> {
//! let mut builder = TagBuilder::new();
//! builder.set_frame(
//! 	"TIT2",
//! 	FrameValue::Text(String::from("Harder, Better, Faster, Stronger")),
//! )?;
//! builder.set_frame(
//! 	"TPE1",
//! 	FrameValue::List(StringListFrame::new(vec![String::from("Daft Punk")])?),
//! )?;
//! builder.set_frame("TYER", FrameValue::Integer(2001))?;
//!
//! // The audio content survives unchanged after the new tag
//! let tagged = builder.to_bytes(b"\xFF\xFBaudio content")?;
//! assert_eq!(&tagged[..3], b"ID3");
//! assert!(tagged.ends_with(b"\xFF\xFBaudio content"));
//! # Ok(()) }
//! ```

pub mod error;
pub mod frame;
pub(crate) mod macros;
pub mod picture;
pub mod tag;
pub mod util;
