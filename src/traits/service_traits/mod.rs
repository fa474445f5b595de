pub mod chart_service;
pub mod derived_field_service;
pub mod extract_service;
pub mod fallback_service;
