//! `rickdex register` — simulated registration, validation only.

use crate::auth::{self, RegistrationForm};
use crate::cli::output::{self, Styled};
use anyhow::Result;
use tracing::warn;

/// Run the register command. A passing form is logged and discarded.
pub fn run(name: &str, email: &str, password: &str, confirm_password: &str) -> Result<()> {
    let s = Styled::new();
    let form = RegistrationForm {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        confirm_password: confirm_password.to_string(),
    };

    if let Err(issue) = auth::validate_registration(&form) {
        if output::is_json() {
            output::print_json(&serde_json::json!({
                "registered": false,
                "message": issue.to_string(),
            }));
        } else if !output::is_quiet() {
            eprintln!("  {} {issue}.", s.warn_sym());
        }
        std::process::exit(1);
    }

    warn!(name = %form.name, email = %form.email, "simulated registration, nothing stored");

    if output::is_json() {
        output::print_json(&serde_json::json!({ "registered": true }));
    } else if !output::is_quiet() {
        eprintln!("  {} Registration accepted for {email}.", s.ok_sym());
        eprintln!("  This is a demo: nothing was stored.");
    }

    Ok(())
}
