pub mod admin;
pub mod countries;
pub mod health;
pub mod map;
pub mod options;
pub mod trip;
