use crate::models::country::Country;
use crate::models::map::{MapLayer, MapMarker, MapPreview, SELECTED_COUNTRY_COLOR};

// World outline is matched on the GeoJSON "name" property.
const SHAPE_PROPERTY: &str = "name";
const DEFAULT_ZOOM: u8 = 1;

/// Builds the preview layer for the selected country. An empty or unknown
/// selection still yields the layer, just without a highlighted marker.
pub fn build_map_preview(countries: &[Country], selected: &str) -> MapPreview {
    let data_source = countries
        .iter()
        .filter(|country| !selected.is_empty() && country.value == selected)
        .map(|country| MapMarker {
            country: country.value.clone(),
            color: SELECTED_COUNTRY_COLOR.to_string(),
            coordinates: country.coordinates,
        })
        .take(1)
        .collect();

    MapPreview {
        zoom_factor: DEFAULT_ZOOM,
        layers: vec![MapLayer {
            shape_property_path: SHAPE_PROPERTY.to_string(),
            shape_data_path: "country".to_string(),
            data_source,
        }],
    }
}
