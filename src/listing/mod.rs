use anyhow::Result;
use std::io::Write;

use crate::config::Config;
use crate::provider::ManagementApi;
use crate::ux;
use crate::wire::ProjectsResponse;

/// Print the header, issue the one request, print the outcome.
/// Returns the process exit code: 0 for a listing (even an empty one),
/// 1 for anything else.
pub async fn run<W: Write>(api: &dyn ManagementApi, cfg: &Config, out: &mut W) -> Result<i32> {
    writeln!(out, "{}", ux::header())?;
    out.flush()?;

    let code = match api.list_projects().await {
        Ok(ProjectsResponse::Success(projects)) => {
            for p in &projects {
                writeln!(out, "{}", ux::project_line(p, &cfg.target_project, &cfg.marker))?;
            }
            0
        }
        Ok(ProjectsResponse::Failure { code, body }) => {
            writeln!(out, "{}", ux::error_line(&ux::http_failure(code, &body)))?;
            1
        }
        Err(e) => {
            writeln!(out, "{}", ux::error_line(&format!("{e:#}")))?;
            1
        }
    };
    out.flush()?;
    Ok(code)
}
