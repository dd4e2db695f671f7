//! Command handlers.

pub mod completions;
pub mod doctor;
pub mod new;

use lumiforge_core::domain::EngineContext;

use crate::{cli::GlobalArgs, config::AppConfig, error::CliResult};

/// Resolve the engine installation for this invocation.
///
/// Precedence: `--engine-dir` flag, then `LUMINA_DIR`, then the config
/// file. Absence everywhere is the fatal precondition; nothing may be
/// scaffolded without an engine.
pub fn resolve_engine(global: &GlobalArgs, config: &AppConfig) -> CliResult<EngineContext> {
    if let Some(dir) = &global.engine_dir {
        return Ok(EngineContext::new(dir.clone())?);
    }
    match EngineContext::from_env() {
        Ok(engine) => Ok(engine),
        Err(env_err) => match &config.engine.install_dir {
            Some(dir) => Ok(EngineContext::new(dir.clone())?),
            None => Err(env_err.into()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use std::path::{Path, PathBuf};

    fn global_with_engine(engine_dir: Option<PathBuf>) -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: true,
            config: None,
            engine_dir,
            output_format: OutputFormat::Plain,
        }
    }

    #[test]
    fn flag_wins_over_config() {
        let mut config = AppConfig::default();
        config.engine.install_dir = Some(PathBuf::from("/from/config"));
        let global = global_with_engine(Some(PathBuf::from("/from/flag")));

        let engine = resolve_engine(&global, &config).unwrap();
        assert_eq!(engine.install_dir(), Path::new("/from/flag"));
    }

    #[test]
    fn config_is_used_when_flag_absent() {
        // Note: passes only when LUMINA_DIR is unset in the test
        // environment; the env lookup sits between flag and config.
        if std::env::var_os("LUMINA_DIR").is_some() {
            return;
        }
        let mut config = AppConfig::default();
        config.engine.install_dir = Some(PathBuf::from("/from/config"));
        let global = global_with_engine(None);

        let engine = resolve_engine(&global, &config).unwrap();
        assert_eq!(engine.install_dir(), Path::new("/from/config"));
    }
}
