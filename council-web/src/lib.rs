//! Conversation navigation panel for the LLM Council web client.

pub mod app;
pub mod components;
pub mod config;
pub mod interaction;
pub mod logging;
pub mod models;
pub mod view;
