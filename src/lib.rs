//! Freight rate and carrier matching engine
//!
//! This crate prices truckload shipments (carrier rate, fuel surcharge and the
//! customer rate that holds a target margin), measures great-circle distance
//! between two points, and ranks carriers for a shipment by rating, on-time
//! delivery, experience and insurance.
//!
//! The pricing and scoring tables are loaded from YAML (see
//! [`config::ConfigLoader`]); every calculation is a pure function over its
//! inputs and a configuration table. The [`api`] module exposes the same
//! operations over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
