//! Tile records on disk and the merge of automatic and manual results.
//!
//! A data root holds four directories, one file per zero-padded id:
//!
//! | path | written by |
//! |---|---|
//! | `comics/<id>.png` | downloader (input) |
//! | `tiles_detected/<id>.txt` | detector |
//! | `tiles_annotated/<id>.txt` | manual annotation tool |
//! | `tiles/<id>.txt` | [`merge_id`] |
//!
//! All writes go through a temp file and a rename, so an interrupted run
//! never leaves a truncated record behind.

mod error;
mod io;
mod layout;
mod merge;
mod record;
mod review;

pub use error::{RecordError, StoreError};
pub use io::{copy_atomic, file_starts_with, write_atomic};
pub use layout::{
    format_id, DataLayout, ANNOTATED_DIR, COMICS_DIR, DETECTED_DIR, ID_WIDTH, MAX_COMICS,
    MERGED_DIR,
};
pub use merge::{merge_all, merge_id, MergeOutcome, MergeSummary};
pub use record::{TileRecord, NEEDS_REVIEW};
pub use review::{pending_reviews, review_status, ReviewStatus};
