//! The compiled-in demo script.
//!
//! A short, self-describing shell session: version check, listing the
//! bundled demos, playing one. Lead delays are tuned for rhythm - longer
//! before prompts (the "user" pausing to think), shorter before output.

use super::{LineKind, Script};

use LineKind::{Command, Output, Prompt};

/// The default script played when no script file is given.
pub fn builtin() -> Script {
    Script::from_lines([
        (Prompt, "$ ", Some(500)),
        (Command, "demotape --version", Some(1500)),
        (Output, "demotape 0.1.0", Some(800)),
        (Output, "", Some(300)),
        (Prompt, "$ ", Some(500)),
        (Command, "ls demos/", Some(1200)),
        (Output, "pipeline.toml  welcome.toml", Some(600)),
        (Output, "", Some(300)),
        (Prompt, "$ ", Some(500)),
        (Command, "demotape demos/welcome.toml", Some(1100)),
        (Output, "playing welcome.toml (looping, press q to quit)", Some(600)),
        (Output, "", Some(300)),
        // Trailing bare prompt: the finished pass idles here, cursor blinking
        (Prompt, "$ ", Some(500)),
    ])
}
