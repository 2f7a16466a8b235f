//! CLI for the helpmirror pipeline.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use helpmirror_core::config::{self, MirrorConfig};
use std::path::PathBuf;

use commands::{run_extract, run_fetch, run_relink, run_validate};

/// Top-level CLI for the helpmirror page-mirror pipeline.
#[derive(Debug, Parser)]
#[command(name = "helpmirror")]
#[command(about = "Mirror help pages: fetch HTML, extract body text, relink, validate", long_about = None)]
pub struct Cli {
    /// Source JSON manifest (overrides config).
    #[arg(long, global = true, value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// Directory for downloaded HTML artifacts (overrides config).
    #[arg(long, global = true, value_name = "DIR")]
    pub download_dir: Option<PathBuf>,

    /// Directory for extracted text artifacts (overrides config).
    #[arg(long, global = true, value_name = "DIR")]
    pub text_dir: Option<PathBuf>,

    /// Directory the rewritten manifest is written into (overrides config).
    #[arg(long, global = true, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Hosting root for rewritten links (overrides config).
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds (overrides config).
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Pause between validation probes in milliseconds (overrides config).
    #[arg(long, global = true, value_name = "MS")]
    pub pause_ms: Option<u64>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download every item's HTML page into the download cache.
    Fetch,

    /// Convert downloaded HTML into plain-text body files.
    Extract,

    /// Write a manifest copy whose detailUrls point at the mirror host.
    Relink,

    /// Probe every rewritten detailUrl for reachability.
    Validate,

    /// Run fetch then extract (optionally relink and validate too).
    Run {
        /// Also rewrite the manifest after extraction.
        #[arg(long)]
        relink: bool,

        /// Also probe the rewritten links (implies --relink).
        #[arg(long)]
        validate: bool,
    },
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        cli.apply_overrides(&mut cfg);
        tracing::debug!("effective config: {:?}", cfg);

        match cli.command {
            CliCommand::Fetch => run_fetch(&cfg)?,
            CliCommand::Extract => run_extract(&cfg)?,
            CliCommand::Relink => run_relink(&cfg)?,
            CliCommand::Validate => run_validate(&cfg)?,
            CliCommand::Run { relink, validate } => {
                run_fetch(&cfg)?;
                run_extract(&cfg)?;
                if relink || validate {
                    run_relink(&cfg)?;
                }
                if validate {
                    run_validate(&cfg)?;
                }
            }
        }

        Ok(())
    }

    fn apply_overrides(&self, cfg: &mut MirrorConfig) {
        if let Some(p) = &self.manifest {
            cfg.source_manifest_path = p.clone();
        }
        if let Some(p) = &self.download_dir {
            cfg.download_dir = p.clone();
        }
        if let Some(p) = &self.text_dir {
            cfg.text_dir = p.clone();
        }
        if let Some(p) = &self.out_dir {
            cfg.rewritten_manifest_dir = p.clone();
        }
        if let Some(u) = &self.base_url {
            cfg.rewrite_base_url = u.clone();
        }
        if let Some(s) = self.timeout_secs {
            cfg.request_timeout_secs = s;
        }
        if let Some(ms) = self.pause_ms {
            cfg.validation_pause_ms = ms;
        }
    }
}
