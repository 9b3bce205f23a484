//! Shared output helpers for CLI commands.
//!
//! Global flags are mirrored into `RICKDEX_*` environment variables by
//! `main` so every module can check them without threading them through.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

fn env_flag(name: &str) -> bool {
    std::env::var(name).map_or(false, |v| v == "1")
}

/// Machine-readable JSON output requested.
pub fn is_json() -> bool {
    env_flag("RICKDEX_JSON")
}

/// Non-essential output suppressed.
pub fn is_quiet() -> bool {
    env_flag("RICKDEX_QUIET")
}

/// Print a JSON value to stdout.
pub fn print_json(value: &serde_json::Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    );
}

/// ANSI symbol helper honoring `--no-color` and `NO_COLOR`.
pub struct Styled {
    color: bool,
}

impl Styled {
    pub fn new() -> Self {
        Self {
            color: !env_flag("RICKDEX_NO_COLOR") && std::env::var("NO_COLOR").is_err(),
        }
    }

    pub fn ok_sym(&self) -> &'static str {
        if self.color {
            "\x1b[32m✓\x1b[0m"
        } else {
            "✓"
        }
    }

    pub fn warn_sym(&self) -> &'static str {
        if self.color {
            "\x1b[33m!\x1b[0m"
        } else {
            "!"
        }
    }

    pub fn err_sym(&self) -> &'static str {
        if self.color {
            "\x1b[31m✗\x1b[0m"
        } else {
            "✗"
        }
    }
}

impl Default for Styled {
    fn default() -> Self {
        Self::new()
    }
}

/// Start a spinner for a long-running fetch, unless output is quiet or
/// machine-readable. Callers must `finish_and_clear` it themselves.
pub fn spinner(message: &str) -> Option<ProgressBar> {
    if is_quiet() || is_json() {
        return None;
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("  {spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    Some(pb)
}
