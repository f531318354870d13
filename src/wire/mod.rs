use serde::Deserialize;
use serde_json::Value;

use crate::errors::ProbeError;

/// Placeholder shown when a project carries no name.
pub const UNNAMED: &str = "?";

/// One entry of `GET /projects`. Only the fields we print are kept.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl Project {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED)
    }
}

/// Outcome of the single listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectsResponse {
    Success(Vec<Project>),
    Failure { code: u16, body: String },
}

/// Decode a 2xx body. Anything other than a JSON array is an error, even when
/// it parses (e.g. an error object served with status 200).
pub fn decode_projects(body: &str) -> Result<Vec<Project>, ProbeError> {
    let value: Value = serde_json::from_str(body)?;
    if !value.is_array() {
        return Err(ProbeError::UnexpectedShape(body.to_string()));
    }
    Ok(serde_json::from_value(value)?)
}
