use anyhow::Context;
use clap::Parser;
use sbwallet::cli::Args;
use sbwallet::config::Config;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config_path = args.config_path();
    let config = Config::resolve(&config_path, args.overrides())?;

    let log_path = sbwallet::logging::init_tracing(&config.logging)?;
    tracing::info!(
        config = %config_path.display(),
        log = %log_path.display(),
        "Starting Simple Bitcoin wallet"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let _enter = runtime.enter();

    sbwallet::ui::run(&config)
}
