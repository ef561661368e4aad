mod home;

pub use home::{index_handler, lookup_handler, CityForm};
