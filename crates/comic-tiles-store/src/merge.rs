//! Pick the authoritative tile record per id.
//!
//! Manual annotations always win. A detection record is used only when it
//! is non-empty and does not start with the `needs review` sentinel, the same
//! test the review queue applies. Files are copied verbatim; nothing is
//! re-parsed.

use std::fs;
use std::ops::Range;
use std::path::Path;

use log::{debug, error, info, warn};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::io::{copy_atomic, file_starts_with};
use crate::layout::DataLayout;
use crate::record::NEEDS_REVIEW;

#[cfg(feature = "tracing")]
use tracing::instrument;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeOutcome {
    /// Merged record copied from `tiles_annotated/`.
    Annotated,
    /// Merged record copied from `tiles_detected/`.
    Detected,
    /// Neither a manual nor a trusted automatic record exists.
    Insufficient,
}

/// Merge one id.
///
/// On [`MergeOutcome::Insufficient`] no merged record exists afterwards: a
/// record left over from an earlier merge is removed.
#[cfg_attr(feature = "tracing", instrument(level = "debug", skip(layout)))]
pub fn merge_id(layout: &DataLayout, id: u32) -> Result<MergeOutcome, StoreError> {
    let merged = layout.merged(id);

    let annotated = layout.annotated(id);
    if annotated.is_file() {
        copy_atomic(&annotated, &merged)?;
        info!("comic {id} used annotated version");
        return Ok(MergeOutcome::Annotated);
    }

    let detected = layout.detected(id);
    if is_trusted_detection(&detected)? {
        copy_atomic(&detected, &merged)?;
        info!("comic {id} used automatically detected version");
        return Ok(MergeOutcome::Detected);
    }

    warn!("there is no sufficient tile information about comic {id}");
    if merged.is_file() {
        fs::remove_file(&merged)?;
        debug!("comic {id}: removed stale merged record");
    }
    Ok(MergeOutcome::Insufficient)
}

/// An automatic record the merge may copy: present, non-empty, no sentinel.
fn is_trusted_detection(path: &Path) -> Result<bool, StoreError> {
    if !path.is_file() || fs::metadata(path)?.len() == 0 {
        return Ok(false);
    }
    Ok(!file_starts_with(path, NEEDS_REVIEW)?)
}

/// Tallies of a merge batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeSummary {
    pub annotated: usize,
    pub detected: usize,
    pub insufficient: usize,
    /// Ids whose merge hit an I/O error.
    pub failed: usize,
    /// Ids with neither a raster nor any record.
    #[serde(default)]
    pub unknown: usize,
}

impl MergeSummary {
    pub fn record(&mut self, outcome: MergeOutcome) {
        match outcome {
            MergeOutcome::Annotated => self.annotated += 1,
            MergeOutcome::Detected => self.detected += 1,
            MergeOutcome::Insufficient => self.insufficient += 1,
        }
    }

    pub fn merged(&self) -> usize {
        self.annotated + self.detected
    }
}

/// Whether anything at all is known about `id`.
fn is_known(layout: &DataLayout, id: u32) -> bool {
    layout.has_comic(id)
        || layout.annotated(id).is_file()
        || layout.detected(id).is_file()
        || layout.merged(id).is_file()
}

/// Merge every known id in `ids`. Failures are logged and counted; they
/// never stop the batch.
pub fn merge_all(layout: &DataLayout, ids: Range<u32>) -> MergeSummary {
    let mut summary = MergeSummary::default();
    for id in ids {
        if !is_known(layout, id) {
            debug!("comic {id}: no raster and no tile records, skipped");
            summary.unknown += 1;
            continue;
        }
        match merge_id(layout, id) {
            Ok(outcome) => summary.record(outcome),
            Err(e) => {
                error!("comic {id}: merge failed: {e}");
                summary.failed += 1;
            }
        }
    }
    info!(
        "merged {} comics ({} annotated, {} detected), {} without sufficient tile information, {} failed",
        summary.merged(),
        summary.annotated,
        summary.detected,
        summary.insufficient,
        summary.failed
    );
    summary
}
