//! CLI entrypoint for `koin-codegen`.

use clap::Parser;
use koin_codegen::cli::Args;
use koin_codegen::fs_helpers::load_document;
use koin_codegen::sink::DirSinkFactory;
use koin_codegen::{CodegenError, generate_run, load_config};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), CodegenError> {
    init_tracing();
    run().inspect_err(|err| tracing::error!(error = %err, "generation failed"))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<(), CodegenError> {
    let args = Args::parse();
    let config = load_config(args.config.as_deref(), &args.overrides())?;
    let document = load_document(&args.metadata)?;
    let mut factory = DirSinkFactory::create(&config.out_dir)?;
    let report = generate_run(&document, &config, &mut factory)?;
    tracing::info!(
        units = report.units().len(),
        out_dir = %factory.root(),
        "generation complete"
    );
    Ok(())
}
