//! Which comics still need a manual annotation.

use std::fs;
use std::ops::Range;

use log::{debug, error};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::io::file_starts_with;
use crate::layout::DataLayout;
use crate::record::NEEDS_REVIEW;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    /// A manual record exists.
    Annotated,
    /// The automatic record is trusted.
    Detected,
    /// The automatic record carries the `needs review` sentinel.
    NeedsReview,
    /// The automatic record file is empty.
    EmptyRecord,
    /// Detection has not been run.
    Undetected,
}

impl ReviewStatus {
    pub fn needs_annotation(self) -> bool {
        matches!(
            self,
            Self::NeedsReview | Self::EmptyRecord | Self::Undetected
        )
    }
}

/// Status of one id, `None` when there is no source raster.
pub fn review_status(layout: &DataLayout, id: u32) -> Result<Option<ReviewStatus>, StoreError> {
    if !layout.has_comic(id) {
        return Ok(None);
    }
    if layout.annotated(id).is_file() {
        return Ok(Some(ReviewStatus::Annotated));
    }
    let detected = layout.detected(id);
    if !detected.is_file() {
        return Ok(Some(ReviewStatus::Undetected));
    }
    if fs::metadata(&detected)?.len() == 0 {
        return Ok(Some(ReviewStatus::EmptyRecord));
    }
    if file_starts_with(&detected, NEEDS_REVIEW)? {
        return Ok(Some(ReviewStatus::NeedsReview));
    }
    Ok(Some(ReviewStatus::Detected))
}

/// Ids in `ids` that have a raster but no usable tile record yet.
pub fn pending_reviews(layout: &DataLayout, ids: Range<u32>) -> Vec<(u32, ReviewStatus)> {
    let mut pending = Vec::new();
    for id in ids {
        match review_status(layout, id) {
            Ok(Some(status)) if status.needs_annotation() => pending.push((id, status)),
            Ok(Some(status)) => debug!("comic {id}: {status:?}"),
            Ok(None) => {}
            Err(e) => error!("comic {id}: cannot read records: {e}"),
        }
    }
    pending
}
