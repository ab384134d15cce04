//! Request authentication: bearer tokens for shoppers, a shared API key
//! for the admin surface.

pub(crate) mod admin;
pub(crate) mod middleware;
