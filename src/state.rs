// src/state.rs
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::chatbot::RuleSet;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub responder: RuleSet,
    pub template_path: PathBuf,
    pub static_dir: PathBuf,
    pub enable_cors: bool,
}

impl AppState {
    pub fn new(responder: RuleSet, template_path: impl Into<PathBuf>, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            responder,
            template_path: template_path.into(),
            static_dir: static_dir.into(),
            enable_cors: true,
        }
    }

    pub fn from_config(config: &ServerConfig, responder: RuleSet) -> Self {
        Self {
            responder,
            template_path: config.template.clone(),
            static_dir: config.static_dir.clone(),
            enable_cors: config.enable_cors,
        }
    }
}
