use anyhow::{Context, Result};
use folio::{Config, SiteOptions, UreqClient, generate_site};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(config.verbose);

    config.validate().context("Invalid configuration")?;

    let profile = config.load_profile().context("Failed to load profile")?;
    let endpoints = config.endpoints();
    let static_dir = config.static_source();
    let client = UreqClient::new(config.timeout());

    tracing::info!("Generating portfolio for {}", endpoints.account());

    let report = generate_site(
        SiteOptions {
            endpoints: &endpoints,
            profile: &profile,
            output: &config.output,
            static_dir: static_dir.as_deref(),
        },
        &client,
    )
    .context("Failed to generate portfolio")?;

    if report.listing_failed {
        tracing::warn!("Project gallery is empty: repository listing unavailable");
    }
    if report.static_files > 0 {
        tracing::info!("Copied {} static files", report.static_files);
    }
    println!(
        "Generated: {} ({} projects, {} previews)",
        report.index_path.display(),
        report.projects,
        report.previews
    );

    if !config.no_open
        && let Err(e) = open::that(&report.index_path)
    {
        tracing::warn!("Failed to open browser: {}", e);
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("folio=debug")
    } else {
        EnvFilter::new("folio=info")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
