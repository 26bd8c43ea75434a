use crate::dataset::ProjectRef;
use crate::report::{ProjectReadiness, Report};
use futures::StreamExt;
use futures::stream;
use ready_pypi::{PypiRegistry, TargetVersion};
use std::collections::HashSet;

/// Classifies every project in the dataset against the target version and
/// assembles the report.
///
/// Lookups are independent, so up to `concurrency` of them run at once;
/// `buffered` yields results in input order, which keeps the report in
/// dataset order without a separate sort. A failed lookup degrades that
/// project to verdict `unknown` and never aborts the run — a snapshot
/// where every project is `unknown` is still a valid snapshot.
pub async fn run(
    registry: &PypiRegistry,
    target: &TargetVersion,
    projects: &[ProjectRef],
    concurrency: usize,
) -> Report {
    // Report keys must be unique; first occurrence carries the rank
    let mut seen = HashSet::new();
    let unique: Vec<(usize, &ProjectRef)> = projects
        .iter()
        .filter(|p| seen.insert(p.name.clone()))
        .enumerate()
        .map(|(index, project)| (index + 1, project))
        .collect();

    let lookups = unique.into_iter().map(|(rank, project)| async move {
        let record = match registry.get_project(&project.name).await {
            Ok(metadata) => ProjectReadiness::classified(
                rank,
                project.total_downloads,
                &project.name,
                target,
                &metadata,
            ),
            Err(err) => {
                tracing::warn!("lookup failed for '{}': {}", project.name, err);
                ProjectReadiness::unknown(rank, project.total_downloads, &project.name)
            }
        };
        (project.name.clone(), record)
    });

    let entries = stream::iter(lookups)
        .buffered(concurrency.max(1))
        .collect::<Vec<_>>()
        .await;

    Report::from_entries(entries)
}
