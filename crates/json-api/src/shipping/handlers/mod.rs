//! Shipping Handlers

pub(crate) mod rates;
pub(crate) mod ship;
