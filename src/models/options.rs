use serde::Serialize;

pub const TRAVEL_STYLES: &[&str] = &[
    "Relaxed",
    "Luxury",
    "Adventure",
    "Cultural",
    "Nature & Outdoors",
    "City Exploration",
];

pub const INTERESTS: &[&str] = &[
    "Food & Culinary",
    "Historical Sites",
    "Hiking & Nature Walks",
    "Beaches & Water Activities",
    "Museums & Art",
    "Nightlife & Bars",
    "Photography Spots",
    "Shopping",
    "Local Experiences",
];

pub const BUDGET_OPTIONS: &[&str] = &["Budget", "Mid-range", "Luxury", "Premium"];

pub const GROUP_TYPES: &[&str] = &["Solo", "Couple", "Family", "Friends", "Business"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectOption {
    pub text: String,
    pub value: String,
}

impl From<&str> for SelectOption {
    fn from(item: &str) -> Self {
        SelectOption {
            text: item.to_string(),
            value: item.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripOptions {
    pub travel_styles: Vec<SelectOption>,
    pub interests: Vec<SelectOption>,
    pub budget_options: Vec<SelectOption>,
    pub group_types: Vec<SelectOption>,
}
