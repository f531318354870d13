use anyhow::Result;
use async_trait::async_trait;

use crate::config::Config;
use crate::wire::ProjectsResponse;

pub mod supabase;

#[async_trait]
pub trait ManagementApi: Send + Sync {
    /// Issue exactly one `GET /projects`. HTTP errors come back as
    /// `ProjectsResponse::Failure`; only transport and decode problems are `Err`.
    async fn list_projects(&self) -> Result<ProjectsResponse>;
}

pub type DynApi = Box<dyn ManagementApi + Send + Sync>;

pub fn make_api(cfg: &Config) -> Result<DynApi> {
    Ok(Box::new(supabase::SupabaseApi::new(
        cfg.api_base.clone(),
        cfg.token.clone(),
        cfg.debug,
    )?))
}
