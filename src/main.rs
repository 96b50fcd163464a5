//! Tracksync - Commit History Time Tracker
//!
//! gitのコミット履歴をタイムトラッカーの日次エントリとして送信

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

// Clean Architecture layers
mod adapter;
mod application;
mod domain;
mod driver;

use adapter::config::Config;
use driver::{Args, TimesheetSyncWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration from the environment
    let config = Config::from_env();

    // Create workflow with injected configuration
    let workflow = TimesheetSyncWorkflow::new(config);

    workflow.execute(args).await
}
