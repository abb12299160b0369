//! A small server-rendered blog: named routes, article CRUD over SQLite and
//! Tera-rendered HTML views.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
