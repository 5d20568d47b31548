use std::ffi::OsString;
use std::sync::Arc;

use clap::Parser;
use homestead_core::{
    chat::{ChatService, ChatServiceTrait},
    documents::{DocumentService, DocumentServiceTrait, InMemoryDocumentRepository},
    events::{DomainEvent, DomainEventSink},
    properties::{InMemoryPropertyRepository, PropertyService, PropertyServiceTrait},
    users::{AuthService, AuthServiceTrait},
    utils::DisplayFormatter,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::cli::Cli;
use crate::config::{Config, LogFormat};

/// Forwards domain events to the tracing pipeline.
#[derive(Clone, Default)]
pub struct TracingEventSink;

impl DomainEventSink for TracingEventSink {
    fn emit(&self, event: DomainEvent) {
        match serde_json::to_string(&event) {
            Ok(json) => tracing::debug!(target: "homestead::events", "{}", json),
            Err(e) => tracing::warn!("Failed to serialize domain event: {}", e),
        }
    }
}

pub struct AppState {
    pub event_sink: Arc<dyn DomainEventSink>,
    pub auth_service: Arc<dyn AuthServiceTrait>,
    pub property_service: Arc<dyn PropertyServiceTrait>,
    pub document_service: Arc<dyn DocumentServiceTrait>,
    pub chat_service: Arc<dyn ChatServiceTrait>,
    pub formatter: DisplayFormatter,
}

/// Parses the command line, then loads configuration.
///
/// Arguments come first so `--help` and `--version` never depend on the
/// environment being valid.
pub fn startup<I, T>(
    args: I,
    load_config: impl FnOnce() -> homestead_core::Result<Config>,
) -> anyhow::Result<(Cli, Config)>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;
    let config = load_config()?;
    Ok((cli, config))
}

pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

/// Wires the in-memory services behind their traits.
pub fn build_state(config: &Config) -> AppState {
    build_state_with_sink(config, Arc::new(TracingEventSink))
}

pub fn build_state_with_sink(config: &Config, event_sink: Arc<dyn DomainEventSink>) -> AppState {
    let (property_repo, document_repo) = if config.seed_demo_data {
        (
            InMemoryPropertyRepository::with_demo_data(),
            InMemoryDocumentRepository::with_demo_data(),
        )
    } else {
        (
            InMemoryPropertyRepository::new(),
            InMemoryDocumentRepository::new(),
        )
    };
    tracing::debug!("Demo data seeded: {}", config.seed_demo_data);

    let auth_service: Arc<dyn AuthServiceTrait> = Arc::new(AuthService::new(event_sink.clone()));
    let property_service = Arc::new(PropertyService::new(
        Arc::new(property_repo),
        auth_service.clone(),
        event_sink.clone(),
    ));
    let document_service = Arc::new(DocumentService::new(
        Arc::new(document_repo),
        auth_service.clone(),
        event_sink.clone(),
    ));
    let chat_service = Arc::new(match config.chat_seed {
        Some(seed) => ChatService::with_seed(auth_service.clone(), seed),
        None => ChatService::new(auth_service.clone()),
    });

    AppState {
        event_sink,
        auth_service,
        property_service,
        document_service,
        chat_service,
        formatter: DisplayFormatter::new(config.currency_symbol.clone(), config.display_decimals),
    }
}
