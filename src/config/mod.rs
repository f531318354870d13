use crate::cli::Args;
use crate::errors::ProbeError;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base: String,
    pub token: String,
    pub target_project: String,
    pub marker: String,
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: "https://api.supabase.com/v1".into(),
            token: String::new(),
            target_project: "tasaalobestljwraqjov".into(),
            marker: " <-- WENKEY".into(),
            debug: false,
        }
    }
}

impl Config {
    /// Build the run configuration from parsed arguments. The token must be
    /// present and non-blank; nothing else is validated.
    pub fn from_args(args: &Args) -> Result<Self, ProbeError> {
        let token = args
            .token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(ProbeError::MissingToken)?;

        let mut cfg = Self::default();
        cfg.api_base = args.api_base.trim_end_matches('/').to_string();
        cfg.token = token.to_string();
        cfg.target_project = args.project.clone();
        cfg.marker = args.marker.clone();
        cfg.debug = args.debug;
        Ok(cfg)
    }
}
