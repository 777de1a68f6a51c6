//! DMED training schedule viewer.
//!
//! Presents a roster of training sessions grouped by region, district and
//! institution, with cascading selectors, search and pagination.

pub mod app;
pub mod config;
pub mod dataset;
pub mod db;
pub mod error;
pub mod export;
pub mod schedule;
pub mod screens;
pub mod storage;
