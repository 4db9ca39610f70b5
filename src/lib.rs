pub mod app;
pub mod catalog;
pub mod classify;
pub mod config;
pub mod llm;
pub mod pipeline;
pub mod recommend;
