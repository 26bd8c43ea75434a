use crate::error::PypiError;
use pep440_rs::Version;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The Python version a run classifies against.
///
/// Restricted to exactly `<major>.<minor>`: no epoch, pre/post/dev
/// segments, or a third release component. Anything else is a fatal
/// input error, rejected before any network activity.
///
/// # Examples
///
/// ```
/// use ready_pypi::types::TargetVersion;
///
/// let target: TargetVersion = "3.11".parse().unwrap();
/// assert_eq!(target.major(), 3);
/// assert_eq!(target.minor(), 11);
/// assert_eq!(target.classifier(), "Programming Language :: Python :: 3.11");
///
/// assert!("3".parse::<TargetVersion>().is_err());
/// assert!("3.x".parse::<TargetVersion>().is_err());
/// assert!("3.11.1".parse::<TargetVersion>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetVersion {
    version: Version,
    major: u64,
    minor: u64,
}

impl TargetVersion {
    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    /// The PEP 440 view of this version, for comparisons against wheel tags.
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// The trove classifier asserting support for exactly this version.
    pub fn classifier(&self) -> String {
        format!("Programming Language :: Python :: {self}")
    }
}

impl FromStr for TargetVersion {
    type Err = PypiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let invalid = || PypiError::InvalidTargetVersion {
            input: input.to_string(),
        };

        let version = Version::from_str(input).map_err(|_| invalid())?;
        let release = version.release();
        if release.len() != 2 {
            return Err(invalid());
        }
        let (major, minor) = (release[0], release[1]);
        // "3.11rc1" parses to release [3, 11] but is not a bare minor version
        if format!("{major}.{minor}") != input {
            return Err(invalid());
        }

        Ok(Self {
            version,
            major,
            minor,
        })
    }
}

impl fmt::Display for TargetVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Per-channel readiness signal.
///
/// Variant order is meaningful: earlier variants are more optimistic, and
/// combining two channels keeps the more optimistic one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadyStatus {
    Yes,
    Maybe,
    No,
    Unknown,
}

impl ReadyStatus {
    /// Combines two channel signals, keeping the more optimistic one.
    pub fn combine(self, other: Self) -> Self {
        self.min(other)
    }
}

/// Final per-project verdict in the report.
///
/// `Unknown` is reserved for projects whose metadata could not be fetched
/// at all; a fetched project with no positive evidence is `NotReady`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Ready,
    NotReady,
    Unknown,
}

impl Verdict {
    /// Derives the verdict from the combined channel signal of fetched
    /// metadata. Lookup failures never reach this; they map straight to
    /// `Unknown`.
    pub fn from_combined(combined: ReadyStatus) -> Self {
        if combined == ReadyStatus::Yes {
            Self::Ready
        } else {
            Self::NotReady
        }
    }
}

/// One published wheel of a release, reduced to its compatibility tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Wheel {
    pub filename: String,
    pub python_tags: Vec<String>,
    pub abi_tags: Vec<String>,
}

/// A stable release that has at least one wheel.
#[derive(Debug, Clone)]
pub struct ReleaseVersion {
    pub version: Version,
    pub wheels: Vec<Wheel>,
}

/// Everything classification needs about one project, reduced from the
/// PyPI JSON API response.
#[derive(Debug, Clone)]
pub struct ProjectMetadata {
    /// Canonical project name as reported by the index.
    pub name: String,
    /// Trove classifiers from `info.classifiers`.
    pub classifiers: Vec<String>,
    /// Stable wheel-bearing versions, ascending PEP 440 order.
    pub versions: Vec<ReleaseVersion>,
}

impl ProjectMetadata {
    /// Latest stable wheel-bearing release, if any.
    pub fn latest(&self) -> Option<&ReleaseVersion> {
        self.versions.last()
    }

    /// Release immediately before [`latest`](Self::latest), if any.
    pub fn previous(&self) -> Option<&ReleaseVersion> {
        self.versions
            .len()
            .checked_sub(2)
            .and_then(|i| self.versions.get(i))
    }
}
