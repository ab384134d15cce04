//! Blog

pub mod errors;
pub mod models;
mod repository;
pub mod service;

pub use errors::BlogServiceError;
pub use service::*;
