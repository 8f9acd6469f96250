//! HTTP surface of the recommendation service.

pub mod rest;

pub use rest::{AppState, RestApi};
