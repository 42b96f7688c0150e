pub mod clock_service;
pub mod weather_service;
