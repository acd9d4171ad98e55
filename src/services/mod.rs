pub mod auth_service;
pub mod country_service;
pub mod form_service;
pub mod map_service;
pub mod options_service;
pub mod submission_service;
pub mod trip_api;
