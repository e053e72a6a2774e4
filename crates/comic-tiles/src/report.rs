//! JSON run reports.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::batch::DetectionSummary;
use crate::detect::DetectorParams;
use crate::store::{MergeSummary, ReviewStatus};

#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// One id waiting for a manual annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingReview {
    pub id: u32,
    pub status: ReviewStatus,
}

/// Summary of one batch invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub root: String,
    /// Half-open id range `[start, end)`.
    pub ids: [u32; 2],
    #[serde(default)]
    pub params: Option<DetectorParams>,
    #[serde(default)]
    pub detection: Option<DetectionSummary>,
    #[serde(default)]
    pub merge: Option<MergeSummary>,
    #[serde(default)]
    pub pending: Option<Vec<PendingReview>>,
}

impl BatchReport {
    pub fn new(root: &Path, ids: std::ops::Range<u32>) -> Self {
        Self {
            root: root.to_string_lossy().into_owned(),
            ids: [ids.start, ids.end],
            ..Self::default()
        }
    }

    /// Load a report from JSON on disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ReportError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this report to disk as pretty JSON, creating parent directories.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), ReportError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
