//! Wind bearing classification
//!
//! Maps a compass bearing to one of 8 cardinal/intercardinal sectors.

/// One of the 8 compass sectors a wind bearing can fall into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindSector {
    /// North, `[0, 22.5]` and `(337.5, 360]`
    North,
    /// North-east, `(22.5, 67.5]`
    NorthEast,
    /// East, `(67.5, 112.5]`
    East,
    /// South-east, `(112.5, 157.5]`
    SouthEast,
    /// South, `(157.5, 202.5]`
    South,
    /// South-west, `(202.5, 247.5]`
    SouthWest,
    /// West, `(247.5, 292.5]`
    West,
    /// North-west, `(292.5, 337.5]`
    NorthWest,
}

/// Ordered sector table, each entry a half-open `(lo, hi]` interval.
///
/// North owns the closed `[0, 22.5]` start (handled before the scan) plus
/// the wrap-around `(337.5, 360]` tail entry. Intervals are disjoint, so
/// the first match is the only match; the scan order is still fixed to
/// keep the tie-break deterministic.
const SECTORS: [(f64, f64, WindSector); 8] = [
    (22.5, 67.5, WindSector::NorthEast),
    (67.5, 112.5, WindSector::East),
    (112.5, 157.5, WindSector::SouthEast),
    (157.5, 202.5, WindSector::South),
    (202.5, 247.5, WindSector::SouthWest),
    (247.5, 292.5, WindSector::West),
    (292.5, 337.5, WindSector::NorthWest),
    (337.5, 360.0, WindSector::North),
];

impl WindSector {
    /// Classify a compass bearing in degrees
    ///
    /// Returns `None` for bearings outside `[0, 360]` (including NaN)
    /// rather than guessing a sector.
    #[must_use]
    pub fn classify(deg: f64) -> Option<Self> {
        if (0.0..=22.5).contains(&deg) {
            return Some(Self::North);
        }

        SECTORS
            .iter()
            .find(|(lo, hi, _)| *lo < deg && deg <= *hi)
            .map(|&(_, _, sector)| sector)
    }

    /// Sector label in the reply language
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::North => "С",
            Self::NorthEast => "СВ",
            Self::East => "В",
            Self::SouthEast => "ЮВ",
            Self::South => "Ю",
            Self::SouthWest => "ЮЗ",
            Self::West => "З",
            Self::NorthWest => "СЗ",
        }
    }
}
