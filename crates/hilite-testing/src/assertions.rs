//! Custom assertions over the CLI's JSON output.
//!
//! Provides:
//! - Highlight count validation
//! - Emission order checks by kind
//! - License attribution checks

use anyhow::{Context, Result};
use serde_json::Value;

fn highlights(json: &Value) -> Result<&Vec<Value>> {
    json["content"]["highlights"]
        .as_array()
        .context("Expected 'content.highlights' array in JSON")
}

/// Assert that JSON output contains the expected number of highlights.
pub fn assert_highlight_count(json: &Value, expected: usize) -> Result<()> {
    let highlights = highlights(json)?;

    if highlights.len() != expected {
        anyhow::bail!(
            "Expected {} highlights, got {}",
            expected,
            highlights.len()
        );
    }

    Ok(())
}

/// Assert the exact sequence of highlight kinds.
pub fn assert_kind_sequence(json: &Value, expected: &[&str]) -> Result<()> {
    let kinds = highlights(json)?
        .iter()
        .enumerate()
        .map(|(i, hl)| {
            hl["kind"]
                .as_str()
                .with_context(|| format!("Highlight {} missing kind", i))
        })
        .collect::<Result<Vec<_>>>()?;

    if kinds != expected {
        anyhow::bail!("Expected kinds {:?}, got {:?}", expected, kinds);
    }

    Ok(())
}

/// Assert every license-attributed highlight points at `license_id`.
pub fn assert_licenses_match(json: &Value, license_id: i64) -> Result<()> {
    for (i, hl) in highlights(json)?.iter().enumerate() {
        if hl["kind"] == "keyword" {
            continue;
        }
        let license = hl["license"]
            .as_i64()
            .with_context(|| format!("Highlight {} has no numeric license", i))?;
        if license != license_id {
            anyhow::bail!(
                "Highlight {} belongs to license {} but expected {}",
                i,
                license,
                license_id
            );
        }
    }

    Ok(())
}
