//! Error taxonomy for the pipeline stages.
//!
//! # Design
//! Each stage owns an error type naming only the failures a caller can
//! react to at that stage's boundary; nothing crosses into the next stage
//! as raw input. `PipelineError` is the top-level union with `#[from]`
//! conversions, plus a `stage()` label so the diagnostics sink can say
//! where a run died without the client payload carrying internals.

use thiserror::Error;

use crate::codec::CodecError;

/// Failures while retrieving the remote document.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Malformed address, unreachable host, timeout, or a transport-level
    /// failure mid-response. The original error is kept for diagnostics.
    #[error("request to {address} failed: {source}")]
    Transport {
        address: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("{address} returned HTTP {status}")]
    Status { address: String, status: u16 },
}

/// Failures while turning the raw body into owner records.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The fetched body was empty or whitespace-only. Application-level,
    /// distinct from a parser failure.
    #[error("fetched document is empty")]
    EmptyInput,

    /// The body is not a well-formed JSON array of owner objects.
    #[error("malformed document: {0}")]
    MalformedDocument(String),

    /// One enum field failed strict decoding; the whole parse aborts.
    #[error("field `{field}`: {source}")]
    FieldValidation {
        field: String,
        #[source]
        source: CodecError,
    },
}

/// Failures in the in-memory query stage.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// The query was invoked with no source sequence at all — the upstream
    /// stage never ran. Distinct from an empty sequence, which is simply
    /// zero matches.
    #[error("no source records to query")]
    MissingSource,
}

/// Union of every failure the pipeline entry point can observe.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// No address was supplied and none is configured.
    #[error("no data address supplied and no default configured")]
    Configuration,

    #[error("retrieval failed: {0}")]
    Retrieval(#[from] FetchError),

    #[error("deserialization failed: {0}")]
    Parse(#[from] ParseError),

    #[error("query failed: {0}")]
    Query(#[from] QueryError),
}

impl PipelineError {
    /// Which stage produced the failure. Used only for the diagnostics log.
    pub fn stage(&self) -> &'static str {
        match self {
            PipelineError::Configuration => "configuration",
            PipelineError::Retrieval(_) => "fetch",
            PipelineError::Parse(_) => "parse",
            PipelineError::Query(_) => "query",
        }
    }
}
