//! Shared types for the Sivory Design site: content entities, routes,
//! page lifecycle and contact form contracts.

pub mod domain;
pub mod shared;
pub mod usecases;
