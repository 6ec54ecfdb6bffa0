pub mod weather_api;
