// src/presentation/http/mod.rs
pub mod app;
pub mod controllers;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod state;
