// Application layer - Use cases over the device API
pub mod device_api;
pub mod history_refresher;
pub mod settings_service;
pub mod telemetry_poller;
pub mod view;
pub mod wifi_service;
