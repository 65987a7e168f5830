//! Surf conditions API server.
//!
//! A thin authenticated facade over a third-party surf data provider:
//! resolves named spots through a static catalog, fetches forecasts and
//! buoy readings, and reshapes them into a stable JSON schema.

pub mod catalog;
pub mod config;
pub mod provider;
pub mod report;
pub mod web;
