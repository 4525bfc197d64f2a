use url::Url;

const OSM_EMBED_BASE: &str = "https://www.openstreetmap.org/export/embed.html";

/// Name of the region covered by the map.
pub const MAP_REGION: &str = "Buenos Aires";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Reference city centre; also the fallback coordinate for unplaced listings.
pub const REFERENCE_CENTER: GeoPoint = GeoPoint {
    lat: -34.6037,
    lng: -58.3816,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

pub const MAP_BOUNDS: BoundingBox = BoundingBox {
    west: -58.5316,
    south: -34.7052,
    east: -58.3316,
    north: -34.5052,
};

/// Read-only OpenStreetMap embed for `bounds` with a marker at `marker`.
pub fn map_embed_url(bounds: BoundingBox, marker: GeoPoint) -> String {
    let bbox = format!(
        "{},{},{},{}",
        bounds.west, bounds.south, bounds.east, bounds.north
    );
    let marker = format!("{},{}", marker.lat, marker.lng);
    match Url::parse_with_params(
        OSM_EMBED_BASE,
        &[
            ("bbox", bbox.as_str()),
            ("layer", "mapnik"),
            ("marker", marker.as_str()),
        ],
    ) {
        Ok(url) => url.into(),
        Err(_) => OSM_EMBED_BASE.to_string(),
    }
}
