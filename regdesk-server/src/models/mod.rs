//! Domain models with validation at construction
//!
//! A `NewUser` can only be built from a `RegistrationRequest` whose
//! password fields match, so the repository never sees unvalidated input.

pub mod envelope;
pub mod registration;
pub mod user;
pub mod validation;

pub use envelope::Envelope;
pub use registration::{NewUser, RegistrationRequest};
pub use user::UserListing;
pub use validation::ValidationError;
