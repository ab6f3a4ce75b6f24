//! Build script for demotape - embeds git commit hash and build date
//!
//! When the `release` feature is NOT set (default dev builds):
//! - Emits `VERGEN_GIT_SHA` environment variable with the commit hash
//! - Emits `DEMOTAPE_BUILD_DATE` environment variable with the build date
//!
//! When the `release` feature IS set (CI/official builds):
//! - Emits build date only (clean version string without git hash)

use std::env;
use std::process::Command;

/// Get the current date in YYYY-MM-DD format
fn build_date() -> String {
    // Use the date command for cross-platform compatibility
    if let Ok(output) = Command::new("date").args(["+%Y-%m-%d"]).output() {
        if output.status.success() {
            return String::from_utf8_lossy(&output.stdout).trim().to_string();
        }
    }
    // Fallback for systems where the date command differs
    "unknown".to_string()
}

fn main() {
    println!("cargo:rustc-env=DEMOTAPE_BUILD_DATE={}", build_date());

    // Official builds get a clean version string without a git SHA.
    // Cargo exposes enabled features to build scripts as CARGO_FEATURE_* vars.
    if env::var("CARGO_FEATURE_RELEASE").is_ok() {
        return;
    }

    use vergen_gitcl::{Emitter, GitclBuilder};

    let git_result = GitclBuilder::default().sha(true).build();

    let emit_result = match git_result {
        Ok(git) => Emitter::default()
            .add_instructions(&git)
            .and_then(|emitter| emitter.emit()),
        Err(e) => {
            eprintln!("cargo:warning=Failed to configure git info: {}", e);
            println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
            return;
        }
    };

    if let Err(e) = emit_result {
        // Not in a git repo (e.g. building from a source tarball)
        eprintln!("cargo:warning=Failed to get git info: {}", e);
        println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
    }
}
