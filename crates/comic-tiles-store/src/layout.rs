//! Directory layout and file naming for one data root.

use std::path::{Path, PathBuf};

/// Upper bound (exclusive) of the id range scanned by batch runs.
pub const MAX_COMICS: u32 = 10_000;

/// Ids are zero-padded to this many digits in file names.
pub const ID_WIDTH: usize = 4;

pub const COMICS_DIR: &str = "comics";
pub const DETECTED_DIR: &str = "tiles_detected";
pub const ANNOTATED_DIR: &str = "tiles_annotated";
pub const MERGED_DIR: &str = "tiles";

/// `42 -> "0042"`. Ids wider than [`ID_WIDTH`] are printed as is.
pub fn format_id(id: u32) -> String {
    format!("{id:0width$}", width = ID_WIDTH)
}

/// Paths of the source rasters and the three record kinds under one root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataLayout {
    root: PathBuf,
}

impl DataLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `comics/<id>.png`
    pub fn comic(&self, id: u32) -> PathBuf {
        self.file(COMICS_DIR, id, "png")
    }

    /// `tiles_detected/<id>.txt`
    pub fn detected(&self, id: u32) -> PathBuf {
        self.file(DETECTED_DIR, id, "txt")
    }

    /// `tiles_annotated/<id>.txt`
    pub fn annotated(&self, id: u32) -> PathBuf {
        self.file(ANNOTATED_DIR, id, "txt")
    }

    /// `tiles/<id>.txt`
    pub fn merged(&self, id: u32) -> PathBuf {
        self.file(MERGED_DIR, id, "txt")
    }

    pub fn has_comic(&self, id: u32) -> bool {
        self.comic(id).is_file()
    }

    fn file(&self, dir: &str, id: u32, ext: &str) -> PathBuf {
        self.root.join(dir).join(format!("{}.{ext}", format_id(id)))
    }
}

impl Default for DataLayout {
    fn default() -> Self {
        Self::new(".")
    }
}
