// src/presentation/http/mod.rs
pub mod controllers;
pub mod error;
pub mod extractors;
pub mod named_routes;
pub mod routes;
pub mod state;
pub mod views;
