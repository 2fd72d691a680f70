pub mod cli;
pub mod demo;
pub mod input;
pub mod render;
pub mod runtime;
pub mod tracing_setup;
pub mod ui;
