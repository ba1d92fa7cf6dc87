//! Request handlers

pub mod form;
pub mod health;
pub mod risk;
