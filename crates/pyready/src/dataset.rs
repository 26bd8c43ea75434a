use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

/// One entry of the static top-projects dataset.
///
/// The dataset is an externally produced BigQuery export of the most
/// downloaded PyPI projects; it is read-only input here and never
/// regenerated or validated for freshness. Field names follow the export
/// (`project`, `total_downloads`); `name`/`downloads` are accepted for
/// hand-built fixtures.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectRef {
    #[serde(rename = "project", alias = "name")]
    pub name: String,
    #[serde(rename = "total_downloads", alias = "downloads", default)]
    pub total_downloads: Option<u64>,
}

/// Loads the dataset, preserving its order (entries are rank-ordered).
///
/// # Errors
///
/// Unreadable or unparseable files and entries with empty names are fatal
/// input errors: the dataset is trusted input, and a broken one should
/// stop the run before any network activity.
pub fn load_projects(path: &Path) -> anyhow::Result<Vec<ProjectRef>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read project dataset {}", path.display()))?;
    let projects: Vec<ProjectRef> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse project dataset {}", path.display()))?;

    if let Some(index) = projects.iter().position(|p| p.name.trim().is_empty()) {
        anyhow::bail!(
            "project dataset {}: entry {} has an empty name",
            path.display(),
            index
        );
    }

    Ok(projects)
}
