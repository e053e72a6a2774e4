//! Line-oriented tile records.
//!
//! ```text
//! needs review        <- optional, detection records only
//! 10 10 189 189       <- left top right bottom, inclusive
//! ```

use std::fmt::Write as _;
use std::{fs, path::Path};

use comic_tiles_core::BoundingBox;
use comic_tiles_detect::DetectionResult;
use serde::{Deserialize, Serialize};

use crate::error::{RecordError, StoreError};
use crate::io::write_atomic;

/// First line of a detection record that must not be used unattended.
pub const NEEDS_REVIEW: &str = "needs review";

/// Contents of a detected, annotated or merged record file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileRecord {
    pub needs_review: bool,
    pub tiles: Vec<BoundingBox>,
}

impl TileRecord {
    pub fn new(tiles: Vec<BoundingBox>) -> Self {
        Self {
            needs_review: false,
            tiles,
        }
    }

    /// Serialize to the record text, one `\n`-terminated line per entry.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        if self.needs_review {
            out.push_str(NEEDS_REVIEW);
            out.push('\n');
        }
        for t in &self.tiles {
            let _ = writeln!(out, "{} {} {} {}", t.left, t.top, t.right, t.bottom);
        }
        out
    }

    /// Parse record text.
    ///
    /// Blank lines are skipped. Corners written in either order (as manual
    /// drags may produce) are normalized.
    pub fn parse(text: &str) -> Result<Self, RecordError> {
        let mut record = Self::default();
        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            if idx == 0 && line == NEEDS_REVIEW {
                record.needs_review = true;
                continue;
            }
            record.tiles.push(parse_tile(line).ok_or_else(|| {
                RecordError::MalformedLine {
                    line: idx + 1,
                    content: raw.to_string(),
                }
            })?);
        }
        Ok(record)
    }

    /// Read and parse a record file.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        Self::parse(&text).map_err(|source| StoreError::Record {
            path: path.display().to_string(),
            source,
        })
    }

    /// Atomically replace the record at `path`, creating parent directories.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        write_atomic(path.as_ref(), self.to_text().as_bytes())
    }
}

impl From<&DetectionResult> for TileRecord {
    fn from(res: &DetectionResult) -> Self {
        Self {
            needs_review: res.needs_review(),
            tiles: res.tiles.clone(),
        }
    }
}

fn parse_tile(line: &str) -> Option<BoundingBox> {
    let mut fields = line.split_whitespace().map(|f| f.parse::<u32>());
    let mut next = || fields.next()?.ok();
    let (x0, y0, x1, y1) = (next()?, next()?, next()?, next()?);
    if fields.next().is_some() {
        return None;
    }
    Some(BoundingBox::from_corners(x0, y0, x1, y1))
}
