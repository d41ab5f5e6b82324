//! End-to-end tests against a local WireMock server.
//!
//! Every test drives the real reqwest transport, so these cover URL construction, headers,
//! body encoding and error mapping together.

mod call;
mod common;
mod conformance;
mod files;
mod fine_tuning;
mod models;
