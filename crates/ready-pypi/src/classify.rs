//! Readiness classification.
//!
//! Two independent evidence channels are evaluated per project:
//!
//! - **classifier channel**: trove classifiers declare support at minor
//!   precision (`Programming Language :: Python :: 3.11`); only an exact
//!   minor match counts as a positive signal.
//! - **wheel channel**: the latest release's wheel tags are turned into
//!   version constraints (`cp311` means exactly 3.11, `cp37-abi3` means
//!   3.7 or newer) and matched against the target.
//!
//! Each channel yields a four-state [`ReadyStatus`]; the combined signal
//! keeps the more optimistic of the two, and either channel's `yes` is
//! enough for a `ready` verdict.

use crate::types::{ProjectMetadata, ReadyStatus, ReleaseVersion, TargetVersion, Verdict};
use crate::wheel::{is_cpython_compatible, python_tag_version};
use pep440_rs::Version;

const CLASSIFIER_PREFIX: &str = "Programming Language :: Python ::";

fn trove_classifier(version: &str) -> String {
    format!("{CLASSIFIER_PREFIX} {version}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Comparator {
    AtLeast,
    Exact,
}

fn any_matches(constraints: &[(Comparator, Version)], version: &Version) -> bool {
    constraints.iter().any(|(cmp, base)| match cmp {
        Comparator::AtLeast => version >= base,
        Comparator::Exact => version == base,
    })
}

/// Readiness according to the trove classifiers alone.
pub fn classifier_status(target: &TargetVersion, classifiers: &[String]) -> ReadyStatus {
    // Is the exact version in the classifiers?
    let exact = target.classifier();
    if classifiers.iter().any(|c| *c == exact) {
        return ReadyStatus::Yes;
    }

    // The package lists Python versions at minor granularity and ours is
    // not among them.
    let minor_prefix = trove_classifier(&format!("{}.", target.major()));
    if classifiers.iter().any(|c| c.starts_with(&minor_prefix)) {
        return ReadyStatus::No;
    }

    let bare_major = trove_classifier(&target.major().to_string());
    if classifiers.iter().any(|c| *c == bare_major) {
        return ReadyStatus::Maybe;
    }

    ReadyStatus::Unknown
}

/// Readiness according to the latest release's wheel tags alone.
pub fn wheel_status(target: &TargetVersion, versions: &[ReleaseVersion]) -> ReadyStatus {
    let Some(latest) = versions.last() else {
        return ReadyStatus::Unknown;
    };

    let mut constraints: Vec<(Comparator, Version)> = Vec::new();
    for wheel in &latest.wheels {
        // abi3 wheels run on every CPython from their declared minimum up
        let comparator = if wheel.abi_tags.iter().any(|t| t == "abi3") {
            Comparator::AtLeast
        } else {
            Comparator::Exact
        };
        for tag in &wheel.python_tags {
            if !is_cpython_compatible(tag) {
                continue;
            }
            match python_tag_version(tag) {
                Some(version) => constraints.push((comparator, version)),
                None => tracing::warn!(
                    "ignoring invalid python tag '{}' from wheel {}",
                    tag,
                    wheel.filename
                ),
            }
        }
    }

    if any_matches(&constraints, target.version()) {
        return ReadyStatus::Yes;
    }

    // Wheels exist for an earlier minor of this major but not for ours.
    // Major-only constraints (py3) are too coarse to count here.
    let minor_constraints: Vec<(Comparator, Version)> = constraints
        .iter()
        .filter(|(_, v)| v.release().len() > 1)
        .cloned()
        .collect();
    for previous_minor in (0..target.minor()).rev() {
        let previous = Version::new([target.major(), previous_minor]);
        if any_matches(&minor_constraints, &previous) {
            return ReadyStatus::No;
        }
    }

    if constraints
        .iter()
        .any(|(_, v)| v.release().first() == Some(&target.major()))
    {
        return ReadyStatus::Maybe;
    }

    ReadyStatus::Unknown
}

/// Combined result of both evidence channels for one project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub verdict: Verdict,
    pub classifier_readiness: ReadyStatus,
    pub wheel_readiness: ReadyStatus,
    pub combined_readiness: ReadyStatus,
}

impl Classification {
    /// Classification recorded for a project whose metadata lookup failed.
    pub fn unknown() -> Self {
        Self {
            verdict: Verdict::Unknown,
            classifier_readiness: ReadyStatus::Unknown,
            wheel_readiness: ReadyStatus::Unknown,
            combined_readiness: ReadyStatus::Unknown,
        }
    }
}

/// Classifies fetched metadata against the target version.
pub fn classify(target: &TargetVersion, metadata: &ProjectMetadata) -> Classification {
    let classifier_readiness = classifier_status(target, &metadata.classifiers);
    let wheel_readiness = wheel_status(target, &metadata.versions);
    let combined_readiness = classifier_readiness.combine(wheel_readiness);

    Classification {
        verdict: Verdict::from_combined(combined_readiness),
        classifier_readiness,
        wheel_readiness,
        combined_readiness,
    }
}

/// Python versions advertised via trove classifiers of the target's major,
/// with `:: Only` markers excluded.
pub fn advertised_versions(target: &TargetVersion, classifiers: &[String]) -> Vec<String> {
    let major_prefix = trove_classifier(&target.major().to_string());
    let strip_prefix = format!("{CLASSIFIER_PREFIX} ");

    classifiers
        .iter()
        .filter(|c| c.starts_with(&major_prefix) && !c.ends_with(":: Only"))
        .filter_map(|c| c.strip_prefix(&strip_prefix))
        .map(str::to_string)
        .collect()
}
