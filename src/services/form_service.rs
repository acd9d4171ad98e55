use std::fmt;

use crate::models::country::Country;
use crate::models::trip::{FormField, TripFormData, MAX_TRIP_DAYS, MIN_TRIP_DAYS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    MissingFields(Vec<FormField>),
    InvalidDuration(i64),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::MissingFields(_) => write!(f, "Please provide values for all fields"),
            FormError::InvalidDuration(_) => write!(
                f,
                "Duration must be between {} and {} days",
                MIN_TRIP_DAYS, MAX_TRIP_DAYS
            ),
        }
    }
}

impl FormError {
    /// Keys of the controls the page should highlight.
    pub fn fields(&self) -> Vec<&'static str> {
        match self {
            FormError::MissingFields(fields) => fields.iter().map(FormField::key).collect(),
            FormError::InvalidDuration(_) => vec![FormField::Duration.key()],
        }
    }
}

/// Submit-time check. Empty fields are reported before the duration.
pub fn validate(form: &TripFormData) -> Result<(), FormError> {
    let missing: Vec<FormField> = form
        .text_fields()
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();

    if !missing.is_empty() {
        return Err(FormError::MissingFields(missing));
    }

    if !(MIN_TRIP_DAYS..=MAX_TRIP_DAYS).contains(&form.duration) {
        return Err(FormError::InvalidDuration(form.duration));
    }

    Ok(())
}

/// Case-insensitive substring match on the text returned by `text`.
/// An empty query keeps every item.
pub fn filter_by_text<T, F>(items: &[T], query: &str, text: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> &str,
{
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| text(item).to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

pub fn filter_countries(countries: &[Country], query: &str) -> Vec<Country> {
    filter_by_text(countries, query, |country| country.name.as_str())
}
