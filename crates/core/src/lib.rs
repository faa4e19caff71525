//! Core library for ticktools
//!
//! This crate implements the **Functional Core** of the ticktools application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The ticktools project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`ticktools_core`** (this crate): Pure transformation functions with zero I/O
//! - **`ticktools`**: I/O operations and orchestration (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Deterministic**: Behavior is predictable and reproducible
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! - [`tick`]: Domain models and transformations for the Tick time-tracking API
//!
//! The module contains:
//!
//! - **Domain models**: Structured types representing API responses and outputs
//! - **Transformation functions**: Pure functions that convert API data to domain models
//! - **Comprehensive tests**: Unit tests using fixture data (no mocking)
//!
//! The shell crate decides where data comes from (the Tick HTTP API) and where
//! it goes (CLI tables or MCP tool results); this crate only decides what the
//! data means.

pub mod tick;
