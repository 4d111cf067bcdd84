//! Profiles domain: worker profile details, service offerings, persona projection

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{Persona, PersonaService, ProfileDetails, ServiceOffering, WorkerProfile};

// Re-export repository types
pub use repository::{ProfileRepositories, ProfileRepository, ServiceRepository};

// Re-export API types
pub use api::routes;
pub use api::ProfilesState;
