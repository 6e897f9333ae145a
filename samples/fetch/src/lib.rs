//! # Fetch Sample Application
//!
//! A sample HTTP fetch program using outcome.
//!
//! ## Overview
//!
//! The demo fetches a resource over HTTP and resolves every way the request
//! can end - success, not-found, redirect, timeout, or any other transport
//! failure - into exactly one two-track `Outcome` before anything else looks
//! at the result. Presentation then happens purely through taps and folds.
//!
//! ## Module Structure
//!
//! - `failure`: The tagged failure payloads (`FetchFailure`) with their
//!   shared message accessor
//! - `client`: The fetch boundary - request execution and status
//!   classification

#![forbid(unsafe_code)]

pub mod client;
pub mod failure;

pub use client::{Resource, build_client, classify, fetch};
pub use failure::FetchFailure;
