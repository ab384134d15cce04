//! Identity resolution.
//!
//! Bearer tokens are verified by an external identity provider; this module
//! only transports tokens and claims.

mod errors;
pub mod firebase;
mod models;
mod service;

pub use errors::IdentityError;
pub use firebase::{FirebaseConfig, FirebaseIdentityService};
pub use models::{Identity, UserId};
pub use service::{IdentityService, MockIdentityService};
