//! Windows configuration persistence.

pub mod config;
