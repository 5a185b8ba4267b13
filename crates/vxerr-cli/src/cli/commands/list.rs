//! `vxerr list` – registry codes, optionally filtered by category.

use anyhow::Result;
use vxerr_core::{Category, Registry};

pub fn run_list(category: Option<&str>) -> Result<()> {
    let filter = category.map(|c| c.parse::<Category>()).transpose()?;
    let rows: Vec<_> = Registry::global()
        .iter()
        .filter(|d| filter.map_or(true, |c| d.category == c))
        .collect();
    if rows.is_empty() {
        println!("No codes match.");
        return Ok(());
    }
    println!("{:<52} {:<11} {:<6} {}", "CODE", "CATEGORY", "STATUS", "FLAGS");
    for d in rows {
        let mut flags = Vec::new();
        if !d.actionable {
            flags.push("not-actionable");
        }
        if d.contact_support {
            flags.push("support");
        }
        println!(
            "{:<52} {:<11} {:<6} {}",
            d.code,
            d.category.to_string(),
            d.status_code,
            flags.join(",")
        );
    }
    Ok(())
}
