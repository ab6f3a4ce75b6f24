//! Script store: the immutable sequence of lines the player types out.
//!
//! A [`Script`] is fixed at construction and never mutated. It is the only
//! input to the playback engine: an ordered list of [`ScriptLine`] records,
//! each carrying its kind (prompt, command, or output), its exact content,
//! and an optional lead delay before typing starts.
//!
//! Scripts come from two places:
//! - [`builtin`]: the compiled-in demo session
//! - [`Script::load`] / [`Script::from_toml_str`]: TOML script files with
//!   one `[[lines]]` table per line

mod builtin;

pub use builtin::builtin;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// What a script line represents, which determines its typing cadence
/// and color: commands are "typed by a user" (slow), prompts and output
/// are "printed by the program" (fast).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// A shell prompt, e.g. `"$ "`.
    Prompt,
    /// A command the simulated user types.
    Command,
    /// Program output printed in response.
    Output,
}

/// A single line of the script.
///
/// Immutable once the script is built. `content` may be empty: such a line
/// reveals nothing but still contributes its lead delay and settle pause,
/// which is how scripts express a timed blank-line beat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    /// Unique ordinal, stable for the lifetime of the script.
    pub id: usize,
    pub kind: LineKind,
    /// The exact character sequence to reveal, in order.
    pub content: String,
    /// Wait before the first character, in milliseconds. `None` means
    /// the engine's default lead delay applies.
    pub lead_delay_ms: Option<u64>,
}

impl ScriptLine {
    /// Content length in characters (not bytes). Reveal counts are
    /// measured in characters so multi-byte content types correctly.
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    /// The first `chars` characters of the content, sliced on a char
    /// boundary. `chars` past the end yields the whole content.
    pub fn prefix(&self, chars: usize) -> &str {
        match self.content.char_indices().nth(chars) {
            Some((idx, _)) => &self.content[..idx],
            None => &self.content,
        }
    }
}

/// Errors from loading a script file.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("failed to read script file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse script: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("script contains no lines")]
    Empty,
}

/// On-disk line record; ids are assigned by the loader.
#[derive(Debug, Deserialize)]
struct RawLine {
    kind: LineKind,
    #[serde(default)]
    content: String,
    #[serde(default)]
    lead_delay_ms: Option<u64>,
}

/// On-disk script file layout.
#[derive(Debug, Deserialize)]
struct ScriptFile {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    lines: Vec<RawLine>,
}

/// An immutable, ordered sequence of script lines.
///
/// Exposes length and indexed lookup; out-of-range lookup returns `None`,
/// which is the player's "pass complete" signal rather than an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    title: Option<String>,
    lines: Vec<ScriptLine>,
}

impl Script {
    /// Build a script from `(kind, content, lead_delay_ms)` tuples,
    /// assigning ordinal ids.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = (LineKind, S, Option<u64>)>,
        S: Into<String>,
    {
        let lines = lines
            .into_iter()
            .enumerate()
            .map(|(id, (kind, content, lead_delay_ms))| ScriptLine {
                id,
                kind,
                content: content.into(),
                lead_delay_ms,
            })
            .collect();
        Self { title: None, lines }
    }

    /// Parse a TOML script document.
    ///
    /// Rejects scripts with no lines: an empty script is well-defined for
    /// the engine but never what a script file author meant.
    pub fn from_toml_str(input: &str) -> Result<Self, ScriptError> {
        let file: ScriptFile = toml::from_str(input)?;
        if file.lines.is_empty() {
            return Err(ScriptError::Empty);
        }
        let lines = file
            .lines
            .into_iter()
            .enumerate()
            .map(|(id, raw)| ScriptLine {
                id,
                kind: raw.kind,
                content: raw.content,
                lead_delay_ms: raw.lead_delay_ms,
            })
            .collect();
        Ok(Self {
            title: file.title,
            lines,
        })
    }

    /// Load a TOML script file from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ScriptError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ScriptError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Optional display title from the script file.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Indexed lookup. `None` past the end is the terminal condition the
    /// player uses to detect a finished pass.
    pub fn get(&self, index: usize) -> Option<&ScriptLine> {
        self.lines.get(index)
    }

    pub fn lines(&self) -> &[ScriptLine] {
        &self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_toml() -> &'static str {
        r#"
title = "sample"

[[lines]]
kind = "prompt"
content = "$ "
lead_delay_ms = 500

[[lines]]
kind = "command"
content = "true"

[[lines]]
kind = "output"
"#
    }

    #[test]
    fn parse_assigns_ordinal_ids() {
        let script = Script::from_toml_str(sample_toml()).unwrap();
        assert_eq!(script.len(), 3);
        let ids: Vec<usize> = script.lines().iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn parse_reads_title_and_fields() {
        let script = Script::from_toml_str(sample_toml()).unwrap();
        assert_eq!(script.title(), Some("sample"));

        let prompt = script.get(0).unwrap();
        assert_eq!(prompt.kind, LineKind::Prompt);
        assert_eq!(prompt.content, "$ ");
        assert_eq!(prompt.lead_delay_ms, Some(500));

        // lead_delay_ms omitted -> engine default applies
        assert_eq!(script.get(1).unwrap().lead_delay_ms, None);
    }

    #[test]
    fn parse_defaults_missing_content_to_empty() {
        let script = Script::from_toml_str(sample_toml()).unwrap();
        let blank = script.get(2).unwrap();
        assert_eq!(blank.content, "");
        assert_eq!(blank.char_len(), 0);
    }

    #[test]
    fn parse_rejects_unknown_kind() {
        let bad = r#"
[[lines]]
kind = "banner"
content = "hi"
"#;
        assert!(matches!(
            Script::from_toml_str(bad),
            Err(ScriptError::Parse(_))
        ));
    }

    #[test]
    fn parse_rejects_empty_script() {
        assert!(matches!(
            Script::from_toml_str("title = \"nothing\"\n"),
            Err(ScriptError::Empty)
        ));
    }

    #[test]
    fn load_missing_file_reports_path() {
        let err = Script::load("/nonexistent/demo.toml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/demo.toml"));
    }

    #[test]
    fn out_of_range_lookup_is_none() {
        let script = Script::from_toml_str(sample_toml()).unwrap();
        assert!(script.get(3).is_none());
        assert!(script.get(usize::MAX).is_none());
    }

    #[test]
    fn prefix_respects_char_boundaries() {
        let line = ScriptLine {
            id: 0,
            kind: LineKind::Output,
            content: "ok \u{1F40D} done".to_string(),
            lead_delay_ms: None,
        };
        assert_eq!(line.char_len(), 9);
        assert_eq!(line.prefix(0), "");
        assert_eq!(line.prefix(3), "ok ");
        assert_eq!(line.prefix(4), "ok \u{1F40D}");
        assert_eq!(line.prefix(9), "ok \u{1F40D} done");
        // Past the end clamps to the full content
        assert_eq!(line.prefix(100), "ok \u{1F40D} done");
    }

    #[test]
    fn from_lines_assigns_ids() {
        let script = Script::from_lines([
            (LineKind::Prompt, "$ ", Some(500)),
            (LineKind::Command, "ls", None),
        ]);
        assert_eq!(script.len(), 2);
        assert_eq!(script.get(0).unwrap().id, 0);
        assert_eq!(script.get(1).unwrap().id, 1);
        assert_eq!(script.get(1).unwrap().kind, LineKind::Command);
    }

    #[test]
    fn builtin_script_is_usable() {
        let script = builtin();
        assert!(!script.is_empty());
        // The demo opens at a prompt and idles at one
        assert_eq!(script.get(0).unwrap().kind, LineKind::Prompt);
        let last = script.get(script.len() - 1).unwrap();
        assert!(last.content.is_empty() || last.kind == LineKind::Prompt);
    }
}
