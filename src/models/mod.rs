pub mod country;
pub mod map;
pub mod options;
pub mod trip;
pub mod user;
