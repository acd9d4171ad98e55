use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const MIN_TRIP_DAYS: i64 = 1;
pub const MAX_TRIP_DAYS: i64 = 10;

/// Form state for a single page view. Fields start empty and are filled in
/// one at a time as the admin works through the controls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TripFormData {
    #[serde(deserialize_with = "lenient_text")]
    pub country: String,
    #[serde(deserialize_with = "lenient_text")]
    pub travel_style: String,
    #[serde(deserialize_with = "lenient_text")]
    pub interest: String,
    #[serde(deserialize_with = "lenient_text")]
    pub budget: String,
    #[serde(deserialize_with = "lenient_days")]
    pub duration: i64,
    #[serde(deserialize_with = "lenient_text")]
    pub group_type: String,
}

// The page posts whatever its controls hold: null for a cleared combo box,
// a number or numeric string from the duration input. Anything unusable
// becomes empty / 0 so that validation reports it.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        _ => String::new(),
    })
}

fn lenient_days<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(number) => whole_days(&number),
        Value::String(text) => match text.trim().parse::<serde_json::Number>() {
            Ok(number) => whole_days(&number),
            Err(_) => 0,
        },
        _ => 0,
    })
}

fn whole_days(number: &serde_json::Number) -> i64 {
    if let Some(days) = number.as_i64() {
        return days;
    }
    match number.as_f64() {
        Some(days) if days.fract() == 0.0 && days.abs() < i64::MAX as f64 => days as i64,
        _ => 0,
    }
}

// Backend ids may come back as strings or numbers.
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(id) => Some(id),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Country,
    TravelStyle,
    Interest,
    Budget,
    Duration,
    GroupType,
}

impl FormField {
    pub fn key(&self) -> &'static str {
        match self {
            FormField::Country => "country",
            FormField::TravelStyle => "travelStyle",
            FormField::Interest => "interest",
            FormField::Budget => "budget",
            FormField::Duration => "duration",
            FormField::GroupType => "groupType",
        }
    }
}

impl TripFormData {
    /// Applies one control change. The duration control hands over raw text;
    /// anything that does not parse leaves the form at 0 days, which the
    /// submit check rejects.
    pub fn set_field(&mut self, field: FormField, value: &str) {
        match field {
            FormField::Country => self.country = value.to_string(),
            FormField::TravelStyle => self.travel_style = value.to_string(),
            FormField::Interest => self.interest = value.to_string(),
            FormField::Budget => self.budget = value.to_string(),
            FormField::GroupType => self.group_type = value.to_string(),
            FormField::Duration => self.duration = value.trim().parse().unwrap_or(0),
        }
    }

    pub fn text_fields(&self) -> [(FormField, &str); 5] {
        [
            (FormField::Country, self.country.as_str()),
            (FormField::TravelStyle, self.travel_style.as_str()),
            (FormField::Interest, self.interest.as_str()),
            (FormField::Budget, self.budget.as_str()),
            (FormField::GroupType, self.group_type.as_str()),
        ]
    }
}

/*
    Body of POST /api/create-trip
*/
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTripRequest {
    pub country: String,
    pub number_of_days: i64,
    pub travel_style: String,
    pub interests: String,
    pub budget: String,
    pub group_type: String,
    pub user_id: String,
}

impl CreateTripRequest {
    pub fn new(form: TripFormData, user_id: impl Into<String>) -> Self {
        CreateTripRequest {
            country: form.country,
            number_of_days: form.duration,
            travel_style: form.travel_style,
            interests: form.interest,
            budget: form.budget,
            group_type: form.group_type,
            user_id: user_id.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CreateTripResponse {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripCreated {
    pub id: String,
    pub redirect: String,
}

impl TripCreated {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        TripCreated {
            redirect: trip_detail_path(&id),
            id,
        }
    }
}

pub fn trip_detail_path(id: &str) -> String {
    format!("/admin/trip-detail/{}", id)
}
