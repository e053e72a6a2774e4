//! Component classification into tiles, free content and artifacts.

use comic_tiles_core::BoundingBox;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::detector::DetectorParams;
use crate::segment::Component;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Too small to be anything but noise.
    Artifact,
    /// Real content that does not form a clean panel.
    FreeContent,
    /// A panel.
    Tile,
}

/// First matching rule wins:
///
/// | rule | result |
/// |---|---|
/// | `area < min_content_area` | artifact |
/// | `area < min_tile_area` | free content |
/// | `fill_ratio < min_fill_ratio` | free content |
/// | otherwise | tile |
pub fn classify(component: &Component, params: &DetectorParams) -> Classification {
    let area = component.area();
    if area < params.min_content_area {
        Classification::Artifact
    } else if area < params.min_tile_area || component.fill_ratio() < params.min_fill_ratio {
        Classification::FreeContent
    } else {
        Classification::Tile
    }
}

/// Tiles in discovery order plus rejection tallies.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Classified {
    pub tiles: Vec<BoundingBox>,
    pub free_content: usize,
    pub artifacts: usize,
}

/// Classify every component, keeping only tile bounds.
pub fn classify_all(components: &[Component], params: &DetectorParams) -> Classified {
    let mut out = Classified::default();
    for c in components {
        match classify(c, params) {
            Classification::Artifact => out.artifacts += 1,
            Classification::FreeContent => {
                out.free_content += 1;
                if c.area() < params.min_tile_area {
                    debug!("content too small (area={}), considered free", c.area());
                } else {
                    debug!(
                        "content is not rectangular ({:.1}% of rect is content), considered free",
                        100.0 * c.fill_ratio()
                    );
                }
            }
            Classification::Tile => {
                debug!(
                    "tile found {}: {} pixels, {:.1}% filled",
                    c.bounds,
                    c.area(),
                    100.0 * c.fill_ratio()
                );
                out.tiles.push(c.bounds);
            }
        }
    }
    out
}
