//! Entry point composing fetch → parse → query into one operation.
//!
//! # Design
//! `Pipeline` holds only connection configuration (a `reqwest::Client` and
//! the optional default address); invocations share no mutable state, so
//! concurrent runs are fully isolated. `run` is the fallible composition
//! with gender and species exposed as parameters; `generate_results` is the
//! boundary the presentation layer calls — it fixes the reference query
//! (Female, all species), never lets a failure escape, and reports
//! diagnostics to the log rather than the client payload.

use std::time::Duration;

use tracing::{error, info};

use crate::error::PipelineError;
use crate::fetch::fetch_resource;
use crate::parse::parse_owners;
use crate::query::select_pet_names;
use crate::types::{Outcome, OwnerGender, PetType, PetsByGender};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Injected configuration for a [`Pipeline`]. Read-only after startup.
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    /// Address used when an invocation supplies none. Absence is valid only
    /// if every invocation passes an explicit address.
    pub default_address: Option<String>,

    /// Transport deadline for the single fetch attempt. The pipeline
    /// imposes no deadline of its own beyond this.
    pub timeout: Option<Duration>,
}

/// The fetch → deserialize → query pipeline.
#[derive(Debug, Clone)]
pub struct Pipeline {
    client: reqwest::Client,
    default_address: Option<String>,
}

impl Pipeline {
    /// Build a pipeline from injected configuration.
    pub fn new(config: PipelineConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()?;
        Ok(Self {
            client,
            default_address: config.default_address,
        })
    }

    /// Run the full pipeline for one gender and optional species filter.
    ///
    /// Stages run strictly in sequence; a stage only runs if the previous
    /// one succeeded, and its failure surfaces as the matching
    /// [`PipelineError`] variant.
    pub async fn run(
        &self,
        address: Option<&str>,
        gender: OwnerGender,
        species: Option<PetType>,
    ) -> Result<PetsByGender, PipelineError> {
        let address = address
            .or(self.default_address.as_deref())
            .ok_or(PipelineError::Configuration)?;

        let body = fetch_resource(&self.client, address).await?;
        let owners = parse_owners(&body)?;
        let result = select_pet_names(Some(&owners), gender, species)?;
        Ok(result)
    }

    /// Boundary operation for the presentation layer: the reference query
    /// (gender = Female, no species filter) wrapped in a tagged outcome.
    /// Never returns an error; failures are logged and reported as
    /// `hasError`.
    pub async fn generate_results(&self, address: Option<&str>) -> Outcome {
        self.generate_results_for(address, OwnerGender::Female).await
    }

    /// Same boundary contract with the queried gender supplied by the
    /// caller.
    pub async fn generate_results_for(
        &self,
        address: Option<&str>,
        gender: OwnerGender,
    ) -> Outcome {
        match self.run(address, gender, None).await {
            Ok(result) => {
                info!(matches = result.pet_names.len(), "pipeline completed");
                Outcome::success(result)
            }
            Err(err) => {
                error!(stage = err.stage(), error = %err, "pipeline failed");
                Outcome::failure()
            }
        }
    }
}
