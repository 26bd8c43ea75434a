//! Wheel filename handling.
//!
//! Built-distribution filenames encode compatibility per PEP 427:
//! `{distribution}-{version}[-{build}]-{python}-{abi}-{platform}.whl`,
//! where each tag field is a `.`-separated set (`py2.py3-none-any`).
//! The Python tag carries the interpreter version with the dot dropped
//! (`cp311` is CPython 3.11), which is what readiness classification
//! compares against the target version.

use pep440_rs::Version;
use std::str::FromStr;
use thiserror::Error;

/// A wheel filename that does not follow the PEP 427 shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid wheel filename: {filename}")]
pub struct InvalidWheelFilename {
    pub filename: String,
}

/// Parsed components of a wheel filename.
///
/// # Examples
///
/// ```
/// use ready_pypi::wheel::WheelFilename;
///
/// let wheel: WheelFilename = "cryptography-41.0.0-cp37-abi3-manylinux_2_28_x86_64.whl"
///     .parse()
///     .unwrap();
/// assert_eq!(wheel.distribution, "cryptography");
/// assert_eq!(wheel.python_tags, vec!["cp37"]);
/// assert_eq!(wheel.abi_tags, vec!["abi3"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WheelFilename {
    pub distribution: String,
    pub version: String,
    pub build: Option<String>,
    pub python_tags: Vec<String>,
    pub abi_tags: Vec<String>,
    pub platform_tags: Vec<String>,
}

impl FromStr for WheelFilename {
    type Err = InvalidWheelFilename;

    fn from_str(filename: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidWheelFilename {
            filename: filename.to_string(),
        };

        let stem = filename.strip_suffix(".whl").ok_or_else(invalid)?;
        let parts: Vec<&str> = stem.split('-').collect();
        if parts.iter().any(|p| p.is_empty()) {
            return Err(invalid());
        }

        let (distribution, version, build, python, abi, platform) = match parts.as_slice() {
            [dist, ver, python, abi, platform] => (*dist, *ver, None, *python, *abi, *platform),
            [dist, ver, build, python, abi, platform] => {
                (*dist, *ver, Some((*build).to_string()), *python, *abi, *platform)
            }
            _ => return Err(invalid()),
        };

        Ok(Self {
            distribution: distribution.to_string(),
            version: version.to_string(),
            build,
            python_tags: split_tags(python),
            abi_tags: split_tags(abi),
            platform_tags: split_tags(platform),
        })
    }
}

fn split_tags(field: &str) -> Vec<String> {
    field.split('.').map(str::to_string).collect()
}

/// True for Python tags that describe CPython-compatible code
/// (`cp*` CPython builds, `py*` generic Python).
pub fn is_cpython_compatible(tag: &str) -> bool {
    tag.starts_with("cp") || tag.starts_with("py")
}

/// Decodes the version embedded in a Python tag: `cp311` is 3.11,
/// `py3` is the bare major 3. Returns `None` for tags that do not
/// encode a version.
pub fn python_tag_version(tag: &str) -> Option<Version> {
    let digits = tag.get(2..)?;
    let mut chars = digits.chars();
    let major = chars.next()?;
    let minor: String = chars.collect();

    let rendered = if minor.is_empty() {
        major.to_string()
    } else {
        format!("{major}.{minor}")
    };
    Version::from_str(&rendered).ok()
}
