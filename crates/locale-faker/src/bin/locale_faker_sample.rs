//! Prints sample records as JSON lines.
//!
//! Settings come from `--locale`, `--seed`, `--locale-path` and `--records`,
//! `FAKER_*` environment variables and the configuration file, flags winning.
//! Logs go to stderr as JSON so stdout stays machine-readable.

use std::io::{self, Write};
use std::net::Ipv4Addr;
use std::process::ExitCode;

use locale_faker::{Faker, FakerSettings, GenerationError, LocaleError, UsernameSpec};
use ortho_config::OrthoConfig;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};
use uuid::Uuid;

/// Failures surfaced by the sample binary.
#[derive(Debug, Error)]
enum SampleError {
    #[error("failed to load settings: {0}")]
    Settings(String),
    #[error(transparent)]
    Locale(#[from] LocaleError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error("failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to write record: {0}")]
    Write(#[from] io::Error),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SampleRecord {
    name: String,
    username: String,
    email: String,
    company: String,
    ip_address: Ipv4Addr,
    user_agent: String,
    uuid: Uuid,
    bio: String,
}

fn main() -> ExitCode {
    if let Err(err) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %err, "tracing init failed");
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), SampleError> {
    let settings =
        FakerSettings::load().map_err(|err| SampleError::Settings(err.to_string()))?;
    let mut faker = Faker::from_settings(&settings)?;

    let mut out = io::stdout().lock();
    for _ in 0..settings.records {
        let record = sample_record(&mut faker)?;
        writeln!(out, "{}", serde_json::to_string(&record)?)?;
    }
    info!(records = settings.records, "sample records written");
    Ok(())
}

fn sample_record(faker: &mut Faker) -> Result<SampleRecord, GenerationError> {
    let name = faker.name().name()?;
    let username = faker.internet().username(UsernameSpec::Generated)?;
    let email = faker.internet().free_email(name.as_str())?;
    let company = faker.company().name()?;
    let ip_address = faker.internet().public_ip_v4_address();
    let user_agent = faker.internet().user_agent(None)?;
    let uuid = faker.internet().uuid();
    let bio = faker.lorem().sentence(8, true, 4)?;
    Ok(SampleRecord {
        name,
        username,
        email,
        company,
        ip_address,
        user_agent,
        uuid,
        bio,
    })
}
