use serde_json::json;

use super::common::Pagination;
use super::trail::TrailFilter;

#[test]
fn default_filter_matches_page_defaults() {
    let filter = TrailFilter::default();

    assert_eq!(filter.q, "");
    assert!(filter.category.is_empty());
    assert_eq!(filter.difficulty, ["easy", "moderate", "difficult"]);
    assert_eq!(filter.near.radius, 2000);
    assert_eq!(filter.distance_min, 0);
    assert_eq!(filter.distance_max, 20_000);
    assert_eq!(filter.distance_limit, 20_000);
    assert_eq!(filter.elevation_gain_min, 0);
    assert_eq!(filter.elevation_gain_max, 4_000);
    assert_eq!(filter.elevation_gain_limit, 4_000);
    assert_eq!(filter.sort, "created");
    assert_eq!(filter.sort_order, "+");
}

#[test]
fn default_filter_bounds_are_consistent() {
    let filter = TrailFilter::default();

    assert!(filter.distance_min <= filter.distance_max);
    assert!(filter.distance_max <= filter.distance_limit);
    assert!(filter.elevation_gain_min <= filter.elevation_gain_max);
    assert!(filter.elevation_gain_max <= filter.elevation_gain_limit);
}

#[test]
fn filter_serializes_in_camel_case() {
    let value = serde_json::to_value(TrailFilter::default()).unwrap();

    assert_eq!(
        value,
        json!({
            "q": "",
            "category": [],
            "difficulty": ["easy", "moderate", "difficult"],
            "near": { "radius": 2000 },
            "distanceMin": 0,
            "distanceMax": 20000,
            "distanceLimit": 20000,
            "elevationGainMin": 0,
            "elevationGainMax": 4000,
            "elevationGainLimit": 4000,
            "sort": "created",
            "sortOrder": "+"
        })
    );
}

#[test]
fn filter_round_trips_through_the_wire_format() {
    let mut filter = TrailFilter::default();
    filter.category.push("birdwatching".to_string());

    let encoded = serde_json::to_string(&filter).unwrap();
    let decoded: TrailFilter = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, filter);
}

#[test]
fn pagination_serializes_total_pages_in_camel_case() {
    let value = serde_json::to_value(Pagination {
        page: 1,
        total_pages: 7,
    })
    .unwrap();

    assert_eq!(value, json!({ "page": 1, "totalPages": 7 }));
}
