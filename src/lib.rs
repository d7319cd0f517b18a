//! Encounter Guide - location-aware legal guidance and emergency alerts.
//!
//! Resolves the user's jurisdiction, generates jurisdiction-specific
//! guidance through an AI backend with static fallbacks, and drives the
//! emergency-alert lifecycle that starts when a recording begins.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
