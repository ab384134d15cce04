//! Shared application domain and persistence modules.

pub mod context;
pub mod database;
pub mod domain;
pub mod identity;
pub mod shipping;
pub mod slug;

#[cfg(test)]
mod test;
