use serde::Serialize;

pub const SELECTED_COUNTRY_COLOR: &str = "#EA382E";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub country: String,
    pub color: String,
    pub coordinates: [f64; 2],
}

// One world-map layer. Shapes are matched to markers by country name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapLayer {
    pub shape_property_path: String,
    pub shape_data_path: String,
    pub data_source: Vec<MapMarker>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapPreview {
    pub zoom_factor: u8,
    pub layers: Vec<MapLayer>,
}
