//! Configuration and CLI argument handling

use std::time::Duration;
use clap::Parser;

use crate::{tasks::TICK_PERIOD, timer::DEFAULT_TRANSITION};

/// CLI argument parsing structure
#[derive(Parser, Debug, Clone)]
#[command(name = "microbreak")]
#[command(about = "A small HTTP service driving guided micro-break challenge timers")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Challenge duration in minutes when a request names none
    #[arg(short, long, default_value = "10")]
    pub default_minutes: u32,

    /// Countdown tick period in milliseconds
    #[arg(
        long,
        default_value_t = TICK_PERIOD.as_millis() as u64,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub tick_ms: u64,

    /// Duration of a progress ring transition in milliseconds
    #[arg(long, default_value_t = DEFAULT_TRANSITION.as_millis() as u64)]
    pub transition_ms: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}
