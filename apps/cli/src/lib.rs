pub mod cli;
pub mod commands;
pub mod config;
mod main_lib;

pub use main_lib::{
    build_state, build_state_with_sink, init_tracing, startup, AppState,
    TracingEventSink,
};
