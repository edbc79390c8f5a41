use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Effective configuration (after `--db` overrides) as YAML.
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration:\n");
        println!("{}", cfg.to_yaml()?);
        Ok(())
    }

    /// Open the config file in an editor: `--editor`, then `$EDITOR`,
    /// `$VISUAL`, then the platform default.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let requested = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&requested).arg(path).status() {
            Ok(s) if s.success() => return Ok(()),
            _ if requested == default_editor => {
                return Err(AppError::Config(format!(
                    "failed to edit configuration with '{requested}'"
                )));
            }
            _ => eprintln!(
                "⚠️  Editor '{}' not available, falling back to '{}'",
                requested, default_editor
            ),
        }

        let status = Command::new(&default_editor)
            .arg(path)
            .status()
            .map_err(|e| AppError::Config(e.to_string()))?;

        if status.success() {
            Ok(())
        } else {
            Err(AppError::Config(format!(
                "failed to edit configuration with fallback '{default_editor}'"
            )))
        }
    }
}
