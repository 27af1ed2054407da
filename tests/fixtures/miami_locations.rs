//! Real Miami metro locations for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap. Grouped by area so tests can
//! build geographically plausible routes (a crew working the Beach should
//! not be zig-zagging to Doral between stops).

use route_optimizer::model::Coordinate;

/// A named place with coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Site {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Site {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}

// ============================================================================
// Depots (crew home bases)
// ============================================================================

pub const DOWNTOWN_DEPOT: Site = Site::new("Downtown Miami Depot", 25.78, -80.19);
pub const DORAL_DEPOT: Site = Site::new("Doral Depot", 25.80, -80.32);
pub const KENDALL_DEPOT: Site = Site::new("Kendall Depot", 25.6793, -80.3173);

// ============================================================================
// Miami Beach / Coastal
// ============================================================================

pub const BEACH_SITES: &[Site] = &[
    Site::new("South Beach", 25.7826, -80.1341),
    Site::new("Mid-Beach", 25.8098, -80.1282),
    Site::new("North Beach", 25.8540, -80.1200),
    Site::new("Surfside", 25.8784, -80.1256),
    Site::new("Bal Harbour", 25.8919, -80.1269),
    Site::new("Key Biscayne", 25.6907, -80.1628),
];

// ============================================================================
// Downtown / Urban Core
// ============================================================================

pub const DOWNTOWN_SITES: &[Site] = &[
    Site::new("Downtown Miami", 25.7743, -80.1937),
    Site::new("Brickell", 25.7617, -80.1918),
    Site::new("Wynwood", 25.8007, -80.1998),
    Site::new("Overtown", 25.7871, -80.2005),
    Site::new("Little Havana", 25.7657, -80.2196),
    Site::new("Allapattah", 25.8150, -80.2240),
    Site::new("Little Haiti", 25.8260, -80.1918),
    Site::new("Miami Shores", 25.8632, -80.1928),
];

// ============================================================================
// South / Gables
// ============================================================================

pub const GABLES_SITES: &[Site] = &[
    Site::new("Coral Gables", 25.7215, -80.2684),
    Site::new("Coconut Grove", 25.7126, -80.2567),
    Site::new("South Miami", 25.7079, -80.2934),
    Site::new("Pinecrest", 25.6671, -80.3082),
    Site::new("Kendall", 25.6793, -80.3173),
    Site::new("Westchester", 25.7482, -80.3269),
];

// ============================================================================
// West / Northwest
// ============================================================================

pub const WEST_SITES: &[Site] = &[
    Site::new("Doral", 25.8195, -80.3553),
    Site::new("Sweetwater", 25.7634, -80.3730),
    Site::new("Hialeah", 25.8576, -80.2781),
    Site::new("Miami Springs", 25.8223, -80.2895),
    Site::new("Opa-locka", 25.9023, -80.2503),
];

// ============================================================================
// North
// ============================================================================

pub const NORTH_SITES: &[Site] = &[
    Site::new("North Miami", 25.8901, -80.1867),
    Site::new("North Miami Beach", 25.9331, -80.1625),
    Site::new("Miami Gardens", 25.9420, -80.2456),
    Site::new("Aventura", 25.9565, -80.1392),
];

/// Returns all customer sites as one list.
pub fn all_sites() -> Vec<Site> {
    let mut all = Vec::with_capacity(32);
    all.extend_from_slice(BEACH_SITES);
    all.extend_from_slice(DOWNTOWN_SITES);
    all.extend_from_slice(GABLES_SITES);
    all.extend_from_slice(WEST_SITES);
    all.extend_from_slice(NORTH_SITES);
    all
}

/// Sites spread across the metro (good for multi-crew tests).
pub fn geographically_diverse_sites() -> Vec<Site> {
    vec![
        Site::new("South Beach", 25.7826, -80.1341),
        Site::new("Aventura", 25.9565, -80.1392),
        Site::new("Brickell", 25.7617, -80.1918),
        Site::new("Hialeah", 25.8576, -80.2781),
        Site::new("Doral", 25.8195, -80.3553),
        Site::new("Kendall", 25.6793, -80.3173),
        Site::new("Coconut Grove", 25.7126, -80.2567),
        Site::new("North Miami", 25.8901, -80.1867),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_in_miami_area() {
        for site in all_sites() {
            assert!(
                site.lat > 25.6 && site.lat < 26.0,
                "{} lat out of range: {}",
                site.name,
                site.lat
            );
            assert!(
                site.lng > -80.4 && site.lng < -80.1,
                "{} lng out of range: {}",
                site.name,
                site.lng
            );
        }
    }
}
