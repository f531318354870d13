use clap::Parser;
use std::process;

mod cli;
mod config;
mod errors;
mod listing;
mod log;
mod provider;
mod ux;
mod wire;

fn fail(descriptor: impl std::fmt::Display) -> ! {
    println!("{}", ux::error_line(&descriptor.to_string()));
    process::exit(1);
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    if args.no_color {
        colored::control::set_override(false);
    }

    let cfg = config::Config::from_args(&args).unwrap_or_else(|e| fail(e));
    if cfg.debug {
        eprintln!("debug: target project: {}", cfg.target_project);
    }

    let api = provider::make_api(&cfg).unwrap_or_else(|e| fail(format!("{e:#}")));

    let mut stdout = std::io::stdout().lock();
    let code = listing::run(api.as_ref(), &cfg, &mut stdout).await?;
    process::exit(code);
}
