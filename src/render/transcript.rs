//! Transcript rendering: snapshot in, styled lines out.
//!
//! Builds the visible transcript from a playback snapshot - committed
//! lines in order, then the in-progress prefix of the current line, with
//! the cursor glyph appended where the snapshot says it belongs. Pure
//! with respect to the terminal: the result is handed to ratatui by the
//! front-end.

use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::player::Snapshot;
use crate::script::LineKind;
use crate::tui::theme::Theme;

/// The cursor glyph drawn at the end of the active line.
pub const CURSOR_GLYPH: &str = "\u{258C}";

/// Clip `text` to at most `max_cols` display columns, on a char boundary.
pub fn truncate_to_width(text: &str, max_cols: usize) -> &str {
    if text.width() <= max_cols {
        return text;
    }
    let mut cols = 0;
    let mut end = 0;
    for (idx, ch) in text.char_indices() {
        let w = ch.width().unwrap_or(0);
        if cols + w > max_cols {
            break;
        }
        cols += w;
        end = idx + ch.len_utf8();
    }
    &text[..end]
}

/// One styled transcript row, cursor included when requested.
fn transcript_line(
    kind: LineKind,
    text: &str,
    theme: &Theme,
    view_cols: usize,
    with_cursor: bool,
) -> Line<'static> {
    // Keep a column free for the glyph so it never clips off the edge
    let budget = if with_cursor {
        view_cols.saturating_sub(1)
    } else {
        view_cols
    };
    let shown = truncate_to_width(text, budget);
    let mut spans = vec![Span::styled(shown.to_string(), theme.kind_style(kind))];
    if with_cursor {
        spans.push(Span::styled(CURSOR_GLYPH, theme.cursor_style()));
    }
    Line::from(spans)
}

/// Build the full styled transcript for a snapshot.
///
/// # Arguments
/// * `snapshot` - The playback snapshot to render
/// * `theme` - Colors for each line kind and the cursor
/// * `view_cols` - Viewport width in display columns
pub fn build_transcript(
    snapshot: &Snapshot<'_>,
    theme: &Theme,
    view_cols: usize,
) -> Vec<Line<'static>> {
    let cursor = snapshot.cursor_glyph_visible();
    let mut lines = Vec::with_capacity(snapshot.rows());

    let last = snapshot.completed.len().checked_sub(1);
    for (idx, line) in snapshot.completed.iter().enumerate() {
        // On a finished pass the cursor sits on the last committed line
        let cursor_here = cursor && snapshot.current.is_none() && Some(idx) == last;
        lines.push(transcript_line(
            line.kind,
            &line.content,
            theme,
            view_cols,
            cursor_here,
        ));
    }

    if let Some(current) = snapshot.current {
        lines.push(transcript_line(
            current.kind,
            current.prefix,
            theme,
            view_cols,
            cursor,
        ));
    }

    lines
}
