use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;

use sentiscan::api;
use sentiscan::{Credentials, NluClient, ServiceConfig};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

/// Credential precedence: explicit file first, then username/password flags
/// or their NLU_* environment fallbacks.
fn resolve_credentials(args: &CliArgs) -> Result<Credentials, AppError> {
    if let Some(path) = &args.cred_file {
        return Credentials::from_file(path).map_err(|e| AppError::Credentials(e.to_string()));
    }

    if let (Some(user), Some(password)) = (&args.user, &args.password) {
        info!("Using credentials from flags/environment");
        return Ok(Credentials {
            username: user.clone(),
            password: password.clone(),
        });
    }

    Err(AppError::Credentials(
        "no credential file and no username/password given".to_string(),
    ))
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    init_logging(args.verbose);

    let data_path = Path::new(&args.data);

    if args.stats {
        // Progress survey only: no credentials, no scoring calls
        if !data_path.is_dir() {
            return Err(AppError::NotADirectory(data_path.to_path_buf()));
        }
        let stats = api::dataset_stats(data_path)?;
        for dir in &stats.directories {
            println!(
                "{}: analyzed={} not_scored={}",
                dir.directory.display(),
                dir.analyzed,
                dir.not_scored
            );
        }
        println!(
            "total: analyzed={} not_scored={}",
            stats.analyzed, stats.not_scored
        );
        return Ok(());
    }

    let credentials = resolve_credentials(&args)?;
    let mut config = ServiceConfig::default();
    if let Some(url) = &args.url {
        config.endpoint = url.clone();
    }
    let client = NluClient::new(&credentials, &config);

    if data_path.is_dir() {
        info!("Analyzing dataset rooted at {:?}", data_path);
        let report = api::analyze_dataset(&client, data_path)?;
        println!(
            "Scored {} documents ({} already analyzed, {} failed, {} unmatched)",
            report.scored, report.already_analyzed, report.failed, report.unmatched
        );
    } else if data_path.is_file() {
        info!("Analyzing file: {:?}", data_path);
        let count = api::analyze_file(&client, data_path)?;
        println!("Correctly analyzed {count} phrases");
    } else {
        let score = api::analyze_text(&client, &args.data)?;
        println!("score: {score}");
    }

    Ok(())
}
