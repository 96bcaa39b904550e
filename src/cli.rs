use std::path::PathBuf;

use clap::Parser;

/// KLUCON Panel — self-hosted media-center control panel backend
#[derive(Parser, Debug)]
#[command(name = "klucon-panel")]
#[command(author, version, about = "KLUCON Panel — media-center control panel backend")]
#[command(long_about = "KLUCON Panel serves the control-panel HTTP API for a self-hosted \n\
    media center. On first run every request is steered to the setup \n\
    endpoint, which reports detected host hardware and creates the \n\
    initial administrator account and configuration record.")]
pub struct Cli {
    /// Address to bind the HTTP server to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 8080)]
    pub port: u16,

    /// Directory holding settings.json
    #[arg(long, default_value = "config")]
    pub config_dir: PathBuf,

    /// Directory holding language catalogs
    #[arg(long, default_value = "lang")]
    pub lang_dir: PathBuf,
}
