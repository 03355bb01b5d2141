//! Shared numeric and conversion helpers.

pub mod converter;
pub mod real;
