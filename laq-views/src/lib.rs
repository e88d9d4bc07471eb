//! Data transformation and view assembly for air quality dashboards.
//!
//! This crate turns the immutable series held by a
//! [`laq_core::store::MeasurementStore`] into the derived views a
//! rendering layer consumes: daily county-wide averages, latest-day
//! snapshots, month- and pollutant-filtered subsets, threshold exceedance
//! statistics, and the packaged map/trend/summary payloads. Every
//! operation here is a pure function over its inputs; nothing mutates
//! the loaded data.

pub mod aggregate;
pub mod dashboard;
pub mod filter;
pub mod stats;
pub mod views;
