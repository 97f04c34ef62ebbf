/// OpenAPI documentation generation.
pub mod documentation;
/// Game record creation, updates and listing.
pub mod game_service;
/// Health check service.
pub mod health_service;
