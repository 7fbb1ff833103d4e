//! Bank Marketing Inference Service
//!
//! Serves a pre-trained term-deposit subscription classifier over HTTP.
//!
//! # Modules
//! - [`model`] - classifier abstraction, request schema, artifact loading
//! - [`server`] - HTTP server with health, prediction, and model-info endpoints
//!
//! Model training and feature encoding happen offline; this crate only loads
//! the serialized artifact and answers prediction requests against it.

pub mod model;
pub mod server;
