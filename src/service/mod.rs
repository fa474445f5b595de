pub mod chart_service_impl;
pub mod derived_field_service_impl;
pub mod extract_service_impl;
pub mod fallback_service_impl;
