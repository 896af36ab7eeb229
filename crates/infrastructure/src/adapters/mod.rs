//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod archive_weather_adapter;

pub use archive_weather_adapter::ArchiveWeatherAdapter;
