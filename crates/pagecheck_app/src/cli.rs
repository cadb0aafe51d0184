use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "pagecheck", version)]
#[command(about = "Check a page's doctype and validate its markup with the Nu HTML Checker")]
pub struct Cli {
    #[arg(help = "HTML file path or http(s) URL")]
    pub target: String,
    #[arg(short, long, help = "RON config file")]
    pub config: Option<PathBuf>,
    #[arg(long, help = "Validator endpoint, e.g. https://validator.w3.org/nu/")]
    pub endpoint: Option<String>,
    #[arg(long, help = "Request timeout in seconds")]
    pub timeout_secs: Option<u64>,
    #[arg(short, long, help = "Directory for the annotated page")]
    pub output: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = LogTarget::Terminal)]
    pub log: LogTarget,
    #[arg(short, long)]
    pub verbose: bool,
    #[arg(long, help = "Print the report as JSON")]
    pub json: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Terminal,
    File,
    Both,
}

impl Cli {
    /// Flags win over values from the config file.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(secs) = self.timeout_secs {
            config.request_timeout_secs = secs;
        }
        if let Some(dir) = &self.output {
            config.output_dir = Some(dir.clone());
        }
    }
}
