use serde::{Deserialize, Serialize};

// Record shape returned by restcountries.com/v3.1/all. Only the fields the
// form needs are decoded, everything else is ignored.
#[derive(Debug, Deserialize)]
pub struct RestCountry {
    pub name: RestCountryName,
    pub flag: Option<String>,
    pub latlng: Option<Vec<f64>>,
    pub maps: Option<RestCountryMaps>,
}

#[derive(Debug, Deserialize)]
pub struct RestCountryName {
    pub common: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestCountryMaps {
    pub open_street_maps: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub name: String,          // display name, flag first
    pub coordinates: [f64; 2], // latitude, longitude
    pub value: String,         // canonical name submitted with the form
    pub open_street_map: Option<String>,
}

impl From<RestCountry> for Country {
    fn from(raw: RestCountry) -> Self {
        let value = raw.name.common;
        let name = match raw.flag.as_deref().map(str::trim) {
            Some(flag) if !flag.is_empty() => format!("{} {}", flag, value),
            _ => value.clone(),
        };
        let coordinates = match raw.latlng.as_deref() {
            Some([lat, lng, ..]) => [*lat, *lng],
            _ => [0.0, 0.0],
        };

        Country {
            name,
            coordinates,
            value,
            open_street_map: raw.maps.and_then(|maps| maps.open_street_maps),
        }
    }
}
