//! `rickdex list` — fetch the full catalog and print a filtered view.

use crate::api::{ApiClient, CharacterStatus};
use crate::catalog::{apply_filters, FilterCriteria, StatusFilter};
use crate::cli::output;
use crate::config::Config;
use anyhow::{bail, Result};

/// Run the list command.
pub async fn run(search: Option<&str>, status: Option<&str>, limit: usize) -> Result<()> {
    let criteria = FilterCriteria {
        query: search.unwrap_or("").to_string(),
        status: parse_status_filter(status)?,
    };

    let config = Config::from_env()?;
    let client = ApiClient::new(&config);

    let spinner = output::spinner("fetching characters across the multiverse...");
    let result = client.fetch_all().await;
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    let characters = result?;

    let matched = apply_filters(&characters, &criteria);

    if output::is_json() {
        let shown: Vec<_> = matched.iter().take(limit).collect();
        output::print_json(&serde_json::json!({
            "total": characters.len(),
            "matched": matched.len(),
            "results": shown,
        }));
        return Ok(());
    }

    if matched.is_empty() {
        if !output::is_quiet() {
            eprintln!("  No characters found in this universe. Try broader filters.");
        }
        return Ok(());
    }

    if !output::is_quiet() {
        if matched.len() > limit {
            eprintln!(
                "  {} of {} characters match. Showing first {} (use --limit to change).",
                matched.len(),
                characters.len(),
                limit
            );
        } else {
            eprintln!(
                "  {} of {} characters match:",
                matched.len(),
                characters.len()
            );
        }
        eprintln!();

        for c in matched.iter().take(limit) {
            eprintln!(
                "    [{:>4}] {:<28} {:<8} {:<12} {}",
                c.id,
                truncate_name(&c.name),
                c.status,
                c.species,
                c.location.name
            );
        }
    }

    Ok(())
}

/// Shorten long names to keep the table aligned. Counted in characters,
/// not bytes, so multi-byte names never split mid-character.
fn truncate_name(name: &str) -> String {
    if name.chars().count() > 28 {
        let head: String = name.chars().take(25).collect();
        format!("{head}...")
    } else {
        name.to_string()
    }
}

/// Parse the `--status` flag. CLI input is lowercase; it maps onto the
/// API's exact casing (`Alive`, `Dead`, `unknown`).
fn parse_status_filter(s: Option<&str>) -> Result<StatusFilter> {
    let Some(s) = s else {
        return Ok(StatusFilter::All);
    };

    match s.to_lowercase().as_str() {
        "all" => Ok(StatusFilter::All),
        "alive" => Ok(StatusFilter::Only(CharacterStatus::Alive)),
        "dead" => Ok(StatusFilter::Only(CharacterStatus::Dead)),
        "unknown" => Ok(StatusFilter::Only(CharacterStatus::Unknown)),
        other => bail!("unknown status '{other}'. Use one of: all, alive, dead, unknown"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_names_print_unchanged() {
        assert_eq!(truncate_name("Rick Sanchez"), "Rick Sanchez");
    }

    #[test]
    fn multibyte_names_wider_in_bytes_than_the_column_are_kept_whole() {
        // 15 characters but 30 bytes; fits the 28-character column.
        let name = "ñ".repeat(15);
        assert_eq!(truncate_name(&name), name);
    }

    #[test]
    fn long_names_truncate_on_character_boundaries() {
        let name = "ñ".repeat(30);
        let shown = truncate_name(&name);
        assert_eq!(shown, format!("{}...", "ñ".repeat(25)));
        assert_eq!(shown.chars().count(), 28);

        let ascii = "a".repeat(40);
        assert_eq!(truncate_name(&ascii), format!("{}...", "a".repeat(25)));
    }

    #[test]
    fn status_flag_parses_known_values() {
        assert_eq!(parse_status_filter(None).unwrap(), StatusFilter::All);
        assert_eq!(parse_status_filter(Some("all")).unwrap(), StatusFilter::All);
        assert_eq!(
            parse_status_filter(Some("Alive")).unwrap(),
            StatusFilter::Only(CharacterStatus::Alive)
        );
        assert_eq!(
            parse_status_filter(Some("unknown")).unwrap(),
            StatusFilter::Only(CharacterStatus::Unknown)
        );
        assert!(parse_status_filter(Some("pickle")).is_err());
    }
}
