// src/handlers/mod.rs

pub mod auth;
pub mod blogs;
pub mod stats;
pub mod users;
