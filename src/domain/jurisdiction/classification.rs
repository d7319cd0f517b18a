//! Coordinate classification by bounding boxes.
//!
//! Used by the stand-in reverse geocoder. Boxes are checked in the order
//! they were listed; the first box containing the point wins, so overlapping
//! boxes resolve to the earlier entry. Points outside every box map to the
//! rule set's default jurisdiction.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Coordinates, Jurisdiction};

/// An axis-aligned region with exclusive bounds on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub jurisdiction: Jurisdiction,
    pub lat_min: f64,
    pub lat_max: f64,
    pub lng_min: f64,
    pub lng_max: f64,
}

impl BoundingBox {
    pub fn new(
        jurisdiction: Jurisdiction,
        (lat_min, lat_max): (f64, f64),
        (lng_min, lng_max): (f64, f64),
    ) -> Self {
        Self {
            jurisdiction,
            lat_min,
            lat_max,
            lng_min,
            lng_max,
        }
    }

    /// True when the point lies strictly inside the box.
    pub fn contains(&self, coords: &Coordinates) -> bool {
        coords.lat > self.lat_min
            && coords.lat < self.lat_max
            && coords.lng > self.lng_min
            && coords.lng < self.lng_max
    }
}

/// Ordered bounding boxes plus the jurisdiction used when none match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationRules {
    boxes: Vec<BoundingBox>,
    default: Jurisdiction,
}

impl ClassificationRules {
    pub fn new(boxes: Vec<BoundingBox>, default: Jurisdiction) -> Self {
        Self { boxes, default }
    }

    /// California and Texas boxes, everything else New York.
    pub fn reference() -> Self {
        let named = |name: &str| Jurisdiction::parse(name).unwrap_or_default();
        Self::new(
            vec![
                BoundingBox::new(named("California"), (32.0, 42.0), (-124.0, -114.0)),
                BoundingBox::new(named("Texas"), (25.0, 37.0), (-107.0, -93.0)),
            ],
            named("New York"),
        )
    }

    pub fn boxes(&self) -> &[BoundingBox] {
        &self.boxes
    }

    pub fn default_jurisdiction(&self) -> Jurisdiction {
        self.default
    }

    /// Classifies a point; first-listed box wins.
    pub fn classify(&self, coords: &Coordinates) -> Jurisdiction {
        self.boxes
            .iter()
            .find(|b| b.contains(coords))
            .map(|b| b.jurisdiction)
            .unwrap_or(self.default)
    }
}

impl Default for ClassificationRules {
    fn default() -> Self {
        Self::reference()
    }
}
