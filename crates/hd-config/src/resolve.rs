//! Model resolution.
//!
//! Precedence, highest first:
//! 1. `--model <PATH>` on the command line
//! 2. the `HEREDITY_MODEL` environment variable
//! 3. `<config_dir>/heredity/model.json` when the file exists
//! 4. the embedded default model
//!
//! An explicitly named file (1 or 2) that cannot be read is an error rather
//! than a silent fallback. Whatever source wins is validated before use.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::model::ModelParams;
use crate::validate::ValidationResult;

/// Environment variable naming a model file.
pub const MODEL_ENV_VAR: &str = "HEREDITY_MODEL";

/// Where the active model came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "snake_case")]
pub enum ModelSource {
    Cli(PathBuf),
    Env(PathBuf),
    UserConfig(PathBuf),
    Default,
}

impl fmt::Display for ModelSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelSource::Cli(p) => write!(f, "cli:{}", p.display()),
            ModelSource::Env(p) => write!(f, "env:{}", p.display()),
            ModelSource::UserConfig(p) => write!(f, "config:{}", p.display()),
            ModelSource::Default => write!(f, "default"),
        }
    }
}

/// A validated model together with its origin.
#[derive(Debug, Clone)]
pub struct ResolvedModel {
    pub params: ModelParams,
    pub source: ModelSource,
}

/// Default per-user model location, if the platform has a config directory.
pub fn user_model_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("heredity").join("model.json"))
}

/// Resolve the model using the process environment and user config dir.
pub fn resolve_model(cli_path: Option<&Path>) -> ValidationResult<ResolvedModel> {
    let env_path = std::env::var_os(MODEL_ENV_VAR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from);
    let user_path = user_model_path();
    resolve_model_with(cli_path, env_path.as_deref(), user_path.as_deref())
}

/// Resolve the model from explicit candidate locations.
pub fn resolve_model_with(
    cli_path: Option<&Path>,
    env_path: Option<&Path>,
    user_path: Option<&Path>,
) -> ValidationResult<ResolvedModel> {
    let (params, source) = if let Some(path) = cli_path {
        (ModelParams::load(path)?, ModelSource::Cli(path.to_path_buf()))
    } else if let Some(path) = env_path {
        (ModelParams::load(path)?, ModelSource::Env(path.to_path_buf()))
    } else if let Some(path) = user_path.filter(|p| p.is_file()) {
        (
            ModelParams::load(path)?,
            ModelSource::UserConfig(path.to_path_buf()),
        )
    } else {
        debug!("no model file found, using embedded defaults");
        let params = ModelParams::default();
        params.validate()?;
        (params, ModelSource::Default)
    };

    info!(source = %source, mutation_rate = params.mutation_rate, "model resolved");
    Ok(ResolvedModel { params, source })
}
