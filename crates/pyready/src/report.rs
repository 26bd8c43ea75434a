use ready_pypi::{
    Classification, ProjectMetadata, ReadyStatus, TargetVersion, Verdict, Wheel,
    advertised_versions, classify, package_url,
};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Readiness record of one project.
///
/// `verdict` is the contract; the remaining fields carry the evidence so
/// a consumer (or a human diffing two snapshots) can see why. The field
/// set is fixed — absent values serialize as `null`/`[]` rather than
/// disappearing, so two runs over the same inputs are byte-identical.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectReadiness {
    pub verdict: Verdict,
    pub rank: usize,
    pub total_downloads: Option<u64>,
    pub latest_version: Option<String>,
    pub latest_wheels: Vec<Wheel>,
    pub previous_version: Option<String>,
    pub previous_wheels: Vec<Wheel>,
    pub classifier_versions: Vec<String>,
    pub classifier_readiness: ReadyStatus,
    pub wheel_readiness: ReadyStatus,
    pub combined_readiness: ReadyStatus,
    pub url: String,
}

impl ProjectReadiness {
    /// Record for a project whose metadata was fetched and classified.
    pub fn classified(
        rank: usize,
        total_downloads: Option<u64>,
        name: &str,
        target: &TargetVersion,
        metadata: &ProjectMetadata,
    ) -> Self {
        let classification = classify(target, metadata);
        let latest = metadata.latest();
        let previous = metadata.previous();

        Self {
            verdict: classification.verdict,
            rank,
            total_downloads,
            latest_version: latest.map(|r| r.version.to_string()),
            latest_wheels: latest.map(|r| r.wheels.clone()).unwrap_or_default(),
            previous_version: previous.map(|r| r.version.to_string()),
            previous_wheels: previous.map(|r| r.wheels.clone()).unwrap_or_default(),
            classifier_versions: advertised_versions(target, &metadata.classifiers),
            classifier_readiness: classification.classifier_readiness,
            wheel_readiness: classification.wheel_readiness,
            combined_readiness: classification.combined_readiness,
            url: package_url(name),
        }
    }

    /// Record for a project whose metadata lookup failed.
    pub fn unknown(rank: usize, total_downloads: Option<u64>, name: &str) -> Self {
        let classification = Classification::unknown();

        Self {
            verdict: classification.verdict,
            rank,
            total_downloads,
            latest_version: None,
            latest_wheels: vec![],
            previous_version: None,
            previous_wheels: vec![],
            classifier_versions: vec![],
            classifier_readiness: classification.classifier_readiness,
            wheel_readiness: classification.wheel_readiness,
            combined_readiness: classification.combined_readiness,
            url: package_url(name),
        }
    }
}

/// The run's output: project name → readiness record, in dataset order.
///
/// Serialized as a JSON object with a hand-written `Serialize` so key
/// order follows insertion order (diff-friendly output).
#[derive(Debug, Clone, Default)]
pub struct Report {
    entries: Vec<(String, ProjectReadiness)>,
}

impl Report {
    pub fn from_entries(entries: Vec<(String, ProjectReadiness)>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Project names in report order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&ProjectReadiness> {
        self.entries
            .iter()
            .find(|(entry_name, _)| entry_name == name)
            .map(|(_, record)| record)
    }

    /// Renders the report as its single JSON output artifact.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, record) in &self.entries {
            map.serialize_entry(name, record)?;
        }
        map.end()
    }
}
