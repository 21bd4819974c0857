//! A small REST API for managing a personal todo list persisted to a flat JSON file.

pub mod api;
pub mod config;
pub mod models;
pub mod service;
pub mod store;
