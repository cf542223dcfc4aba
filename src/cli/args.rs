use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sentiscan", version, about = "sentiscan CLI")]
pub struct CliArgs {
    /// Input data: a corpus directory, a text file, or a literal text string
    #[arg(env = "DATA")]
    pub data: String,

    /// File from which to load credentials (BLUEMIX json format)
    #[arg(short = 'c', long, env = "NLU_CRED_FILE")]
    pub cred_file: Option<PathBuf>,

    /// Service username (used when no credential file is given)
    #[arg(long, env = "NLU_USER")]
    pub user: Option<String>,

    /// Service password (used when no credential file is given)
    #[arg(long, env = "NLU_PASSWORD")]
    pub password: Option<String>,

    /// Service endpoint override
    #[arg(long, env = "NLU_URL")]
    pub url: Option<String>,

    /// Report per-directory progress statistics instead of scoring
    #[arg(long, default_value_t = false)]
    pub stats: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, default_value_t = false)]
    pub verbose: bool,
}
