//! TypedObject Test Suite
//!
//! Tests for blueprint-checked objects through the public facade.
//!
//! ## Test Organization
//!
//! - **construction**: seeding and initial values
//! - **access**: get/set semantics, acceptance rule, failed-write isolation
//! - **sentinel**: the `Void` type and void fields
//! - **inspection**: primitive classification and type names
//! - **properties**: property-based checks over random blueprints


mod access;
mod construction;
mod properties;
