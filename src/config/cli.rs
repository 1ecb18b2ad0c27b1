use crate::domain::SortCriterion;
use clap::{Parser, Subcommand};

pub const DEFAULT_API_BASE: &str = "https://mspevaluator.duckdns.org";

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Base URL of the evaluation backend
    #[arg(long, env = "PARTNERBOARD_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Retries for leaderboard and group reads (the refresh POST is never retried)
    #[arg(long, default_value_t = 0)]
    pub retries: u32,

    /// Delay before the first retry in milliseconds, doubled for each further retry
    #[arg(long, default_value_t = 500)]
    pub retry_delay_ms: u64,

    /// How long refresh notices stay visible, in seconds
    #[arg(long, default_value_t = 5)]
    pub notice_ttl_secs: u64,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Show the ranked leaderboard
    Board {
        /// "total" or a category label such as "인적역량"
        #[arg(long, default_value = "total")]
        sort: SortCriterion,

        /// Print the board as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one partner's scores in detail
    Detail {
        /// Partner name as shown on the board
        name: String,
    },
    /// Report whether the backend has unclassified partners
    Status,
    /// Ask the backend to recompute scores and show the updated board
    Refresh {
        #[arg(long, default_value = "total")]
        sort: SortCriterion,
    },
}

impl Default for Command {
    fn default() -> Self {
        Self::Board {
            sort: SortCriterion::Total,
            json: false,
        }
    }
}
