//! Check the relational mapping against a live PostgreSQL schema.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::env;
use std::io;
use std::process::ExitCode;

use backend::domain::{MappingConfigurationError, MappingValidationService};
use backend::outbound::persistence::{
    ENTITY_MAPPINGS, PostgresSchemaSnapshotRepository, run_pending_migrations,
};
use clap::Parser;

/// `schema-check` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "schema-check",
    about = "Validate the food truck entity mappings against a PostgreSQL schema",
    version
)]
struct CliArgs {
    /// Database connection URL. Falls back to `DATABASE_URL` when omitted.
    #[arg(long = "database-url", value_name = "url")]
    database_url: Option<String>,
    /// Apply pending migrations before checking.
    #[arg(long = "migrate")]
    migrate: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(error) => {
            eprintln!("schema-check: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> io::Result<bool> {
    let args = CliArgs::try_parse().map_err(io::Error::other)?;
    let database_url = resolve_database_url(args.database_url)?;

    if args.migrate {
        let applied = run_pending_migrations(&database_url)
            .map_err(|error| io::Error::other(format!("migrate: {error}")))?;
        for version in applied {
            println!("applied={version}");
        }
    }

    let repository = PostgresSchemaSnapshotRepository::new(database_url);
    match MappingValidationService::new(ENTITY_MAPPINGS).validate(&repository) {
        Ok(()) => {
            println!("mappings={} status=ok", ENTITY_MAPPINGS.len());
            Ok(true)
        }
        Err(MappingConfigurationError::Mismatched { mismatches }) => {
            for mismatch in &mismatches {
                println!("mismatch: {mismatch}");
            }
            println!("mismatches={}", mismatches.len());
            Ok(false)
        }
        Err(error @ MappingConfigurationError::Snapshot(_)) => {
            Err(io::Error::other(format!("read schema: {error}")))
        }
    }
}

fn resolve_database_url(explicit: Option<String>) -> io::Result<String> {
    let value = match explicit {
        Some(value) => value,
        None => env::var("DATABASE_URL").map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "database URL missing: set --database-url or DATABASE_URL",
            )
        })?,
    };
    if value.trim().is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "database URL must not be empty",
        ));
    }
    Ok(value)
}
