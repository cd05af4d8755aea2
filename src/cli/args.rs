//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode};
use crate::consts::DEFAULT_CATALOG;
use crate::core::HistoryCap;
use crate::error::AppError;
use crate::session::SessionName;

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser)]
#[command(name = "creaturegen")]
#[command(about = "Random Magic: The Gathering creature type generator", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Catalog file with one creature type per line [default: creature_types.txt]
    #[arg(long, global = true, value_name = "PATH")]
    pub(crate) catalog: Option<PathBuf>,

    /// Session whose history is read and updated [default: default]
    #[arg(short, long, global = true, value_name = "NAME")]
    pub(crate) session: Option<String>,

    /// History length to keep, or "unbounded" [default: 50]
    #[arg(long, global = true, value_name = "N")]
    pub(crate) cap: Option<HistoryCap>,

    /// Keep every generated entry (same as --cap unbounded)
    #[arg(long, global = true, conflicts_with = "cap")]
    pub(crate) unbounded: bool,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Seed the random draw for reproducible output
    #[arg(long, global = true, value_name = "SEED")]
    pub(crate) seed: Option<u64>,

    /// Enable debug output on stderr
    #[arg(long, global = true)]
    pub(crate) debug: bool,

    /// Append an activity log to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub(crate) log_file: Option<PathBuf>,

    /// Ignore the config file
    #[arg(long, global = true)]
    pub(crate) no_config: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Result<Self, AppError> {
        // Boolean flags: config only applies if CLI left them off
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }

        if let Some(color) = config.color
            && self.color == ColorMode::Auto
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        if self.cap.is_none() && !self.unbounded {
            self.cap = config.history_cap()?;
        }
        if self.catalog.is_none() {
            self.catalog = config.catalog.clone();
        }
        if self.session.is_none() {
            self.session = config.session.clone();
        }
        if self.log_file.is_none() {
            self.log_file = config.log_file.clone();
        }

        Ok(self)
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }

    pub(crate) fn catalog_path(&self) -> PathBuf {
        self.catalog
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG))
    }

    pub(crate) fn history_cap(&self) -> HistoryCap {
        if self.unbounded {
            return HistoryCap::Unbounded;
        }
        self.cap.unwrap_or_default()
    }

    pub(crate) fn session_name(&self) -> Result<SessionName, AppError> {
        match &self.session {
            Some(name) => SessionName::parse(name),
            None => Ok(SessionName::default()),
        }
    }
}
