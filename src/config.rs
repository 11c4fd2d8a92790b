//! Command-line and environment configuration for the chat server.
//!
//! Every flag can also come from a `CHATBOT_*` environment variable, and
//! `main` loads a `.env` file before parsing. Flags win over the
//! environment; the environment wins over the defaults below.
use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use crate::rules;
use crate::services::chatbot::RuleSet;

pub const DEFAULT_ADDR: &str = "127.0.0.1:5000";

#[derive(Parser, Debug, Clone)]
#[command(name = "chatbot-web", version, about = "Rule-based chatbot web server")]
pub struct ServerArgs {
    /// Address the HTTP listener binds to.
    #[arg(long, env = "CHATBOT_ADDR", default_value = DEFAULT_ADDR)]
    pub addr: SocketAddr,

    /// JSON rules file. The built-in rule table is used when omitted.
    #[arg(long, env = "CHATBOT_RULES")]
    pub rules: Option<PathBuf>,

    /// HTML page served at `/`.
    #[arg(long, env = "CHATBOT_TEMPLATE", default_value = "templates/index.html")]
    pub template: PathBuf,

    /// Directory served under `/static`.
    #[arg(long, env = "CHATBOT_STATIC_DIR", default_value = "static")]
    pub static_dir: PathBuf,

    /// Do not send CORS headers.
    #[arg(long, env = "CHATBOT_NO_CORS")]
    pub no_cors: bool,
}

/// Effective settings after argument parsing.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub rules: Option<PathBuf>,
    pub template: PathBuf,
    pub static_dir: PathBuf,
    pub enable_cors: bool,
}

impl ServerConfig {
    pub fn from_args(args: ServerArgs) -> Self {
        Self {
            addr: args.addr,
            rules: args.rules,
            template: args.template,
            static_dir: args.static_dir,
            enable_cors: !args.no_cors,
        }
    }

    /// Builds the rule table the server will answer with.
    pub fn load_responder(&self) -> anyhow::Result<RuleSet> {
        match &self.rules {
            Some(path) => {
                let set = rules::load_rules(path)?;
                info!("Loaded {} rules from {}", set.len(), path.display());
                Ok(set)
            }
            None => {
                let set = rules::default_rules();
                info!("Using {} built-in rules", set.len());
                Ok(set)
            }
        }
    }
}
