//! Format version classification.
//!
//! The interchange format ships in two mutually incompatible field-layout
//! families. A [`VersionPolicy`] is classified once per job from the version
//! identifier in the drawing header and passed explicitly into every decoder;
//! it selects which decoder slot applies and which fallback defaults hold.

use std::fmt;

use crate::error::{DxfError, Result};

/// The two supported schema families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionPolicy {
    /// R12-era files ("AC1009"): flat entity records, no lightweight entities.
    Legacy,
    /// R2010-era files ("AC1024"): subclassed records, lightweight entities.
    Modern,
}

impl VersionPolicy {
    /// Classify a version identifier string from the drawing header.
    ///
    /// Anything other than the two recognized identifiers fails with
    /// [`DxfError::UnsupportedVersion`].
    pub fn from_version_string(version: &str) -> Result<Self> {
        match version {
            "AC1009" => Ok(VersionPolicy::Legacy),
            "AC1024" => Ok(VersionPolicy::Modern),
            other => Err(DxfError::UnsupportedVersion(other.to_string())),
        }
    }

    /// The version identifier string of this family.
    pub fn version_string(&self) -> &'static str {
        match self {
            VersionPolicy::Legacy => "AC1009",
            VersionPolicy::Modern => "AC1024",
        }
    }

    pub fn is_legacy(&self) -> bool {
        matches!(self, VersionPolicy::Legacy)
    }

    pub fn is_modern(&self) -> bool {
        matches!(self, VersionPolicy::Modern)
    }
}

impl fmt::Display for VersionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionPolicy::Legacy => write!(f, "legacy (AC1009)"),
            VersionPolicy::Modern => write!(f, "modern (AC1024)"),
        }
    }
}
