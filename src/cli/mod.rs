use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "supa_probe", version, about = "Verify a management API token by listing its projects")]
pub struct Args {
    /// Personal access token sent as `Authorization: Bearer <token>`.
    #[arg(long, env = "SUPABASE_ACCESS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Project reference to flag in the listing.
    #[arg(long, env = "SUPABASE_PROJECT_REF", default_value = "tasaalobestljwraqjov")]
    pub project: String,

    #[arg(long, env = "SUPABASE_API_BASE", default_value = "https://api.supabase.com/v1")]
    pub api_base: String,

    #[arg(long, default_value = " <-- WENKEY")]
    pub marker: String,

    #[arg(long, default_value_t = false)]
    pub no_color: bool,

    #[arg(long, default_value_t = false)]
    pub debug: bool,
}
