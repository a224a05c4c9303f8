use serde::{Deserialize, Serialize};

/// Geospatial constraint on a trail search.
///
/// No explicit center is carried; the search backend resolves the center
/// from the requester's stored location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NearFilter {
    pub radius: u32,
}

/// Search constraints for a trail listing query.
///
/// Field names serialize in camelCase, the wire format shared by the
/// search backend and the view layer. Built fresh for every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrailFilter {
    /// Free-text query
    pub q: String,
    /// Category identifiers, insertion order = relevance of append
    pub category: Vec<String>,
    /// Difficulty labels included in the search
    pub difficulty: Vec<String>,
    pub near: NearFilter,
    pub distance_min: u32,
    pub distance_max: u32,
    /// Ceiling the distance slider must not exceed
    pub distance_limit: u32,
    pub elevation_gain_min: u32,
    pub elevation_gain_max: u32,
    /// Ceiling the elevation gain slider must not exceed
    pub elevation_gain_limit: u32,
    /// Sort key
    pub sort: String,
    /// "+" for ascending, "-" for descending
    pub sort_order: String,
}

impl Default for TrailFilter {
    fn default() -> Self {
        Self {
            q: String::new(),
            category: Vec::new(),
            difficulty: vec![
                "easy".to_string(),
                "moderate".to_string(),
                "difficult".to_string(),
            ],
            near: NearFilter { radius: 2000 },
            distance_min: 0,
            distance_max: 20_000,
            distance_limit: 20_000,
            elevation_gain_min: 0,
            elevation_gain_max: 4_000,
            elevation_gain_limit: 4_000,
            sort: "created".to_string(),
            sort_order: "+".to_string(),
        }
    }
}
