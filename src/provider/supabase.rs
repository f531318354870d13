use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;

use crate::errors::ProbeError;
use crate::log;
use crate::wire::{self, ProjectsResponse};

/// Management API client. Holds the token for the lifetime of the process
/// and sends it on the one request we make.
pub struct SupabaseApi {
    api_base: String,
    token: String,
    client: Client,
    debug: bool,
}

impl SupabaseApi {
    pub fn new(api_base: String, token: String, debug: bool) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("supa_probe/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build http client")?;
        Ok(Self { api_base, token, client, debug })
    }

    /// `api_base` arrives already trimmed of trailing slashes by `Config`.
    fn url(&self) -> String {
        format!("{}/projects", self.api_base)
    }
}

#[async_trait]
impl super::ManagementApi for SupabaseApi {
    async fn list_projects(&self) -> Result<ProjectsResponse> {
        let url = self.url();
        if self.debug {
            log::print_request_debug("GET", &url);
        }

        let resp = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(ProbeError::from)
            .context("list projects request failed")?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(ProbeError::from)
            .context("failed to read response body")?;

        if self.debug {
            log::print_response_debug(status.as_u16(), &text);
        }

        if !status.is_success() {
            return Ok(ProjectsResponse::Failure { code: status.as_u16(), body: text });
        }

        let projects = wire::decode_projects(&text)?;
        Ok(ProjectsResponse::Success(projects))
    }
}
