use crate::models::options::{
    SelectOption, TripOptions, BUDGET_OPTIONS, GROUP_TYPES, INTERESTS, TRAVEL_STYLES,
};
use crate::services::form_service::filter_by_text;

fn to_options(items: &[&str], query: &str) -> Vec<SelectOption> {
    let items: Vec<SelectOption> = items.iter().copied().map(SelectOption::from).collect();
    filter_by_text(&items, query, |option| option.text.as_str())
}

/// Static dropdown lists, each narrowed by the combo-box query.
pub fn trip_options(query: &str) -> TripOptions {
    TripOptions {
        travel_styles: to_options(TRAVEL_STYLES, query),
        interests: to_options(INTERESTS, query),
        budget_options: to_options(BUDGET_OPTIONS, query),
        group_types: to_options(GROUP_TYPES, query),
    }
}
