/// Gateway services
pub mod auth;
pub mod sessions;

pub use auth::{TokenVerifier, VerificationMode};
pub use sessions::{Session, SessionStore};
