//! Personality Engine - Forced-choice personality inventory scoring
//!
//! This crate derives a four-letter personality type, per-letter scores and
//! confidence values from a vector of forced-choice answers, and serves the
//! question bank and type descriptors over HTTP.

pub mod adapters;
pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod ports;
