//! The per-category frame value types
//!
//! Each type enforces its own construction invariants; an invalid instance can never
//! exist. Types with nothing to enforce expose their fields directly.

mod attached_picture;
mod extended_text;
mod extended_url;
mod language_frame;
mod paired_text;
mod private_frame;
mod string_list;
mod sync_text;

pub use attached_picture::AttachedPictureFrame;
pub use extended_text::UserDefinedTextFrame;
pub use extended_url::UserDefinedUrlFrame;
pub use language_frame::{CommentFrame, Language, UnsynchronizedLyricsFrame};
pub use paired_text::PairedTextFrame;
pub use private_frame::PrivateFrame;
pub use string_list::StringListFrame;
pub use sync_text::{SyncLyricsContentType, SynchronizedLyricsFrame, TimestampFormat};
