//! `rickdex login` — demo credential check against the fixed pair.

use crate::auth;
use crate::cli::output::{self, Styled};
use anyhow::Result;

/// Run the login command. A mismatch is a validation message with exit
/// code 1, not an error through the usual reporting path.
pub fn run(email: &str, password: &str) -> Result<()> {
    let s = Styled::new();

    if email.is_empty() || password.is_empty() {
        if output::is_json() {
            output::print_json(&serde_json::json!({
                "authenticated": false,
                "message": "all fields are required",
            }));
        } else if !output::is_quiet() {
            eprintln!("  {} All fields are required.", s.warn_sym());
        }
        std::process::exit(1);
    }

    if auth::validate_credentials(email, password) {
        if output::is_json() {
            output::print_json(&serde_json::json!({ "authenticated": true }));
        } else if !output::is_quiet() {
            eprintln!("  {} Access granted. Welcome to the portal, {email}.", s.ok_sym());
        }
        return Ok(());
    }

    if output::is_json() {
        output::print_json(&serde_json::json!({
            "authenticated": false,
            "message": "invalid credentials",
        }));
    } else if !output::is_quiet() {
        // The demo pair is public knowledge, same as the original's hint.
        eprintln!("  {} Invalid credentials.", s.err_sym());
        eprintln!("  Try rick@sanchez.com / wubba123");
    }
    std::process::exit(1)
}
