use anyhow::{bail, Context, Result};
use nf_requirements_core::load_data_networks;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod report;

use config::{InspectConfig, OutputFormat};
use report::DataNetworkReport;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = InspectConfig::from_env()?;
    debug!("Output format: {:?}", config.output);

    let paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        bail!("usage: dnn-inspect <manifest>...");
    }

    let mut reports = Vec::new();
    for path in &paths {
        let networks = load_data_networks(path)
            .with_context(|| format!("loading manifest {}", path))?;
        if networks.is_empty() {
            warn!("No DataNetwork resources found in {}", path);
        }
        reports.extend(networks.iter().map(DataNetworkReport::from));
    }
    info!("Inspected {} DataNetworks from {} manifests", reports.len(), paths.len());

    match config.output {
        OutputFormat::Text => print!("{}", report::render_text(&reports)),
        OutputFormat::Json => println!("{}", report::render_json(&reports)?),
    }

    Ok(())
}
