// src/utils.rs
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::path::Path;

pub const RECORD_EXTENSIONS: [&str; 4] = ["json", "yaml", "yml", "toml"];

/// Normalize a free-form location for comparison
pub fn normalize_location(location: &str) -> String {
    location
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// First comma-separated segment, usually the city
pub fn primary_location_segment(location: &str) -> String {
    location
        .split(',')
        .next()
        .map(|segment| segment.trim().to_string())
        .unwrap_or_default()
}

/// Get file extension in lowercase
pub fn get_file_extension(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Validate file extension against allowed types
pub fn validate_file_extension(filename: &str, allowed: &[&str]) -> Result<String> {
    let ext = get_file_extension(filename)
        .ok_or_else(|| anyhow::anyhow!("File has no extension: {}", filename))?;

    if !allowed.contains(&ext.as_str()) {
        anyhow::bail!(
            "Unsupported file extension: {}. Allowed: {:?}",
            ext,
            allowed
        );
    }

    Ok(ext)
}

/// Read file content as string with proper error context
pub async fn read_file_content(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Parse records exported from the data store, picking the format by extension
pub fn parse_records<T: DeserializeOwned>(content: &str, extension: &str) -> Result<T> {
    match extension {
        "json" => serde_json::from_str(content).context("Failed to parse JSON records"),
        "yaml" | "yml" => serde_yaml::from_str(content).context("Failed to parse YAML records"),
        "toml" => toml::from_str(content).context("Failed to parse TOML records"),
        other => anyhow::bail!("Unsupported record format: {}", other),
    }
}

pub async fn load_records<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let filename = path.to_string_lossy();
    let extension = validate_file_extension(&filename, &RECORD_EXTENSIONS)?;
    let content = read_file_content(path).await?;

    parse_records(&content, &extension)
        .with_context(|| format!("Invalid records in {}", path.display()))
}
