//! Command line surface
//!
//! Each subcommand maps to one operation of
//! [`CapacityServiceInterface`]. Results are printed to stdout as JSON;
//! failures print an error body and exit with status 1.

use anyhow::Context;
use capacity_application::ports::CapacityServiceInterface;
use capacity_domain::entities::{Capacity, CapacityId, TechnologyId};
use capacity_domain::error::{Error, Result};
use capacity_domain::value_objects::{CorrelationId, PaginationRequest, SortDirection, SortField};
use capacity_infrastructure::config::ConfigLoader;
use capacity_infrastructure::di::init_app;
use capacity_infrastructure::logging::init_logging;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;

/// Command line interface for the capacity service
#[derive(Parser, Debug)]
#[command(name = "capacity")]
#[command(about = "Capacity service - register, check and list capacities")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Correlation id forwarded to the technology service (generated when absent)
    #[arg(long, global = true)]
    pub correlation_id: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Capacity operations
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Register a new capacity
    Register {
        /// Unique capacity name
        #[arg(long)]
        name: String,

        /// Capacity description
        #[arg(long)]
        description: String,

        /// Linked technology ids, comma separated
        #[arg(long = "technologies", value_delimiter = ',')]
        technology_ids: Vec<TechnologyId>,
    },

    /// Report which capacity ids exist
    Check {
        /// Capacity ids to look up
        ids: Vec<CapacityId>,
    },

    /// List capacities with their technologies
    List {
        /// Zero-based page index
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        page: i64,

        /// Page size (1 to 100)
        #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
        size: i64,

        /// `name` or `technology_count`
        #[arg(long)]
        sort_by: Option<SortField>,

        /// `asc` or `desc`
        #[arg(long)]
        sort_direction: Option<SortDirection>,
    },
}

/// Error body printed on failure
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ErrorBody {
    /// `"400"` or `"500"`
    pub code: &'static str,
    /// Caller-safe message
    pub message: String,
    /// Offending request field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<&'static str>,
    /// Violated rule, for validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<&'static str>,
}

impl From<&Error> for ErrorBody {
    fn from(error: &Error) -> Self {
        Self {
            code: error.code(),
            message: error.public_message(),
            param: error.field(),
            rule: error.validation().map(|v| v.code()),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<serde_json::Value> {
    serde_json::to_value(value)
        .map_err(|e| Error::internal(format!("Failed to serialize output: {e}")))
}

/// Run one command against the service and return its JSON result
pub async fn execute(
    service: &dyn CapacityServiceInterface,
    command: Command,
    correlation_id: &CorrelationId,
) -> Result<serde_json::Value> {
    match command {
        Command::Register {
            name,
            description,
            technology_ids,
        } => {
            let saved = service
                .register_capacity(Capacity::new(name, description, technology_ids), correlation_id)
                .await?;
            to_json(&saved)
        }
        Command::Check { ids } => {
            let existence = service.check_capacities_exist(&ids, correlation_id).await?;
            to_json(&existence)
        }
        Command::List {
            page,
            size,
            sort_by,
            sort_direction,
        } => {
            let pagination = PaginationRequest::new(page, size, sort_by, sort_direction);
            let page = service.list_capacities(pagination, correlation_id).await?;
            to_json(&page)
        }
    }
}

/// Load configuration, wire the service and run the parsed command
pub async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load().context("Failed to load configuration")?;

    init_logging(config.logging.clone())?;
    let context = init_app(config).await?;

    let correlation_id = CorrelationId::from_optional(cli.correlation_id.as_deref());
    let service = context.capacity_service();

    match execute(service.as_ref(), cli.command, &correlation_id).await {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            println!("{}", serde_json::to_string_pretty(&ErrorBody::from(&error))?);
            Ok(ExitCode::FAILURE)
        }
    }
}
