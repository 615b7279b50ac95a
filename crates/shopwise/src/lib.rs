//! Core engine for comparing a free-text grocery list across supermarket
//! chains.
//!
//! The library is deliberately stateless: callers own a [`basket::BasketSession`]
//! holding accumulated match results, the [`catalog::Catalog`] is loaded once
//! and read-only afterwards, and every aggregation recomputes totals from the
//! full result set. Rendering, CSV file placement, and any narrative summary
//! generation beyond the rule-based fallback live in the service layer.

pub mod basket;
pub mod catalog;
pub mod config;
pub mod error;
pub mod telemetry;
