//! Core types and data models for the traffic analyzer
//!
//! This crate provides the fundamental data structures shared by the
//! ingestion, aggregation, and reporting crates.

pub mod observations;

pub use observations::{LowTrafficWindow, Observation, TopPeriod};
