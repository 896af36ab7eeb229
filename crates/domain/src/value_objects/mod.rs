//! Value Objects - Immutable, identity-less domain primitives

mod geo_location;
mod weather_parameter;

pub use geo_location::GeoLocation;
pub use weather_parameter::WeatherParameter;
