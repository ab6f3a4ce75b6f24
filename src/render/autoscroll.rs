//! Autoscroll calculation for the transcript viewport.
//!
//! The viewport stays pinned to the bottom of the growing transcript:
//! as soon as the transcript outgrows the visible area, older lines
//! scroll off the top.

/// Vertical scroll offset that keeps the newest transcript row visible.
///
/// # Arguments
/// * `transcript_rows` - Total transcript height in rows
/// * `view_rows` - Visible viewport height in rows
///
/// # Returns
/// The number of rows to scroll past; 0 while the transcript fits.
pub fn scroll_offset(transcript_rows: usize, view_rows: usize) -> usize {
    transcript_rows.saturating_sub(view_rows)
}
