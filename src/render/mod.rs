//! Rendering components for the transcript viewport.
//!
//! The pure half of the render sink: autoscroll arithmetic and the
//! snapshot-to-styled-lines conversion. Drawing to a real terminal
//! happens in [`crate::tui`].

mod autoscroll;
mod transcript;

pub use autoscroll::scroll_offset;
pub use transcript::{build_transcript, truncate_to_width, CURSOR_GLYPH};
