use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("no access token given (use --token or SUPABASE_ACCESS_TOKEN)")] MissingToken,
    #[error("expected a list of projects, got: {0}")] UnexpectedShape(String),
    #[error("could not decode projects: {0}")] Decode(#[from] serde_json::Error),
    #[error("request failed: {0}")] Transport(#[from] reqwest::Error),
}
