//! HTTP front end for the calc service.
//!
//! Serves the key request form and the four arithmetic endpoints, gated by
//! API keys issued through that form.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod pages;
pub mod routes;
