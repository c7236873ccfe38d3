//! Models shared between the LLM Council panel and the code that owns its data.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod models;
