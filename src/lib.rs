//! Court practice analysis: case-file schema maintenance, outcome statistics
//! and LLM-written narrative analysis of grouped court decisions.

pub mod api;
pub mod app;
pub mod model;
pub mod service;
pub mod telemetry;
