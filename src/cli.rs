//! Command-line interface.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{ArgGroup, Parser};

use crate::config::{Config, ConfigError};
use crate::service::SummaryStyle;

#[derive(Debug, Parser)]
#[command(
    name = "textsum",
    version,
    about = "Summarize text with a remote summarization service",
    group(ArgGroup::new("input").args(["text", "file"]))
)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Summarization service base URL (overrides config)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Summary length style
    #[arg(short, long, value_enum, value_name = "STYLE")]
    pub style: Option<SummaryStyle>,

    /// Request timeout in seconds (overrides config)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u32>,

    /// Summarize this text once and print the result
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Summarize the contents of a file ("-" for stdin) once and print the result
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Also save the summary as summary.txt (one-shot mode only)
    #[arg(long, requires = "input")]
    pub save: bool,
}

impl Cli {
    /// Read the config file (explicit or default), apply CLI overrides, then
    /// validate the merged result.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let path = self.config.clone().unwrap_or_else(Config::config_path);
        let mut config = Config::read_from(&path)?;
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(url) = &self.base_url {
            config.service.base_url = url.clone();
        }
        if let Some(style) = self.style {
            config.defaults.style = style;
        }
        if let Some(timeout) = self.timeout {
            config.service.timeout_seconds = timeout;
        }
    }

    /// Text for one-shot mode, or `None` to start the interactive UI.
    pub fn one_shot_input(&self) -> io::Result<Option<String>> {
        if let Some(text) = &self.text {
            return Ok(Some(text.clone()));
        }
        match &self.file {
            Some(path) => read_input(path).map(Some),
            None => Ok(None),
        }
    }
}

fn read_input(path: &Path) -> io::Result<String> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }
    std::fs::read_to_string(path)
}
