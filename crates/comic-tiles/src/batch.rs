//! Batch detection over an id range.
//!
//! Each image is processed start to finish on one worker; images run in
//! parallel on the current rayon pool. A missing or unreadable raster skips
//! its id, a failed write is logged, and neither stops the batch.

use std::ops::Range;

use log::{debug, error, info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::detect::{DetectionResult, TileDetector};
use crate::load::load_raster;
use crate::store::{DataLayout, TileRecord};

/// Options for [`detect_all`].
#[derive(Clone, Copy, Debug, Default)]
pub struct DetectOptions {
    /// Leave ids that already have a detection record untouched.
    pub skip_existing: bool,
}

/// What happened to one id.
#[derive(Clone, Debug, PartialEq)]
pub enum IdOutcome {
    /// No source raster.
    Missing,
    /// The raster exists but could not be decoded.
    Unreadable,
    /// A detection record already exists and `skip_existing` was set.
    Skipped,
    /// Detection ran and its record was written.
    Detected(DetectionResult),
    /// Detection ran but the record could not be written.
    WriteFailed,
}

/// Detect tiles for one id and write `tiles_detected/<id>.txt`.
pub fn detect_id(
    layout: &DataLayout,
    detector: &TileDetector,
    id: u32,
    options: DetectOptions,
) -> IdOutcome {
    let comic = layout.comic(id);
    if !comic.is_file() {
        debug!("comic {id} not found");
        return IdOutcome::Missing;
    }
    let record_path = layout.detected(id);
    if options.skip_existing && record_path.is_file() {
        debug!("tiles for comic {id} already exist");
        return IdOutcome::Skipped;
    }

    debug!("reading comic {id}");
    let raster = match load_raster(&comic) {
        Ok(r) => r,
        Err(e) => {
            warn!("comic {id}: cannot load {}: {e}", comic.display());
            return IdOutcome::Unreadable;
        }
    };

    let result = detector.detect(raster);
    info!(
        "comic {id}: {} tiles, result is {}",
        result.tiles.len(),
        if result.valid { "valid" } else { "not valid" }
    );

    match TileRecord::from(&result).write(&record_path) {
        Ok(()) => IdOutcome::Detected(result),
        Err(e) => {
            error!("comic {id}: cannot write {}: {e}", record_path.display());
            IdOutcome::WriteFailed
        }
    }
}

/// Tallies of a detection batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionSummary {
    /// Comics that went through detection.
    pub analyzed: usize,
    /// Of those, how many passed the validity gate.
    pub valid: usize,
    /// Total pixels analyzed.
    pub pixels: u64,
    pub skipped: usize,
    pub unreadable: usize,
    pub write_failed: usize,
}

impl DetectionSummary {
    pub fn record(&mut self, outcome: &IdOutcome) {
        match outcome {
            IdOutcome::Missing => {}
            IdOutcome::Unreadable => self.unreadable += 1,
            IdOutcome::Skipped => self.skipped += 1,
            IdOutcome::WriteFailed => self.write_failed += 1,
            IdOutcome::Detected(res) => {
                self.analyzed += 1;
                self.pixels += res.total_area;
                if res.valid {
                    self.valid += 1;
                }
            }
        }
    }

    /// Combine two partial summaries.
    pub fn merge(mut self, other: Self) -> Self {
        self.analyzed += other.analyzed;
        self.valid += other.valid;
        self.pixels += other.pixels;
        self.skipped += other.skipped;
        self.unreadable += other.unreadable;
        self.write_failed += other.write_failed;
        self
    }

    /// Share of analyzed comics with a valid result, 0 for an empty batch.
    pub fn valid_fraction(&self) -> f64 {
        if self.analyzed == 0 {
            return 0.0;
        }
        self.valid as f64 / self.analyzed as f64
    }
}

/// Run detection for every id in `ids` on the current rayon pool.
pub fn detect_all(
    layout: &DataLayout,
    detector: &TileDetector,
    ids: Range<u32>,
    options: DetectOptions,
) -> DetectionSummary {
    let summary = ids
        .into_par_iter()
        .map(|id| {
            let mut s = DetectionSummary::default();
            s.record(&detect_id(layout, detector, id, options));
            s
        })
        .reduce(DetectionSummary::default, DetectionSummary::merge);

    info!(
        "{} pixels of {} comics analyzed",
        summary.pixels, summary.analyzed
    );
    info!(
        "the analysis of {} comics ({:.0}%) resulted in valid tiles",
        summary.valid,
        100.0 * summary.valid_fraction()
    );
    if summary.unreadable + summary.write_failed > 0 {
        warn!(
            "{} unreadable comics, {} records could not be written",
            summary.unreadable, summary.write_failed
        );
    }
    summary
}
