//! Shared test utilities for the folder-mirror workspace.
//!
//! This crate provides standardised fixtures so crate test suites do not each
//! rebuild the same source/replica trees. It is a dev-dependency only, never
//! published.
//!
//! # Modules
//!
//! - [`logger`]: [`RecordingLogger`], a `MirrorLogger` that keeps every line
//! - [`fixture`]: [`MirrorFixture`], temporary source and replica trees

pub mod fixture;
pub mod logger;

pub use fixture::MirrorFixture;
pub use logger::{Level, RecordingLogger};
