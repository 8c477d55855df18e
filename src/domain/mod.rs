// Domain layer - Pure dashboard types and rendering rules
pub mod acknowledgment;
pub mod chart;
pub mod display;
pub mod settings;
pub mod telemetry;
pub mod wifi;
