use loophole_config::Config;
use loophole_core::{Mode, Report, build_output_with};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::read_input;

/// Input parameters for the Explain command strategy.
#[derive(Debug, Clone)]
pub struct ExplainInput {
    /// Mode override (config default otherwise)
    pub mode: Option<Mode>,
    /// Inline text
    pub text: Option<String>,
    /// Input file
    pub file: Option<PathBuf>,
    /// `Some(None)` saves to the configured output file
    pub save: Option<Option<PathBuf>>,
}

/// Strategy for the offline heuristic report.
///
/// Works without a config file; the built-in lexicon and `neutral` mode are
/// used unless the config says otherwise.
#[derive(Debug, Clone, Copy)]
pub struct ExplainStrategy;

impl super::CommandStrategy for ExplainStrategy {
    type Input = ExplainInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load_or_default()?;
        let raw = read_input(input.text, input.file.as_deref())?;
        let mode = input.mode.unwrap_or(config.report.default_mode);

        info!("Explaining {} chars in {mode} mode", raw.chars().count());
        let report = build_output_with(mode, &raw, &config.lexicon);
        println!("{report}");

        if let Some(path) = input.save {
            let path = path.unwrap_or(config.report.output_file);
            save_report(&report, &path)?;
        }

        Ok(())
    }
}

/// Write the trimmed report; placeholder output is not saved.
fn save_report(report: &Report, path: &Path) -> anyhow::Result<bool> {
    let text = report.as_str().trim();
    if text.is_empty() || report.is_placeholder() {
        warn!("Nothing to save");
        return Ok(false);
    }

    std::fs::write(path, text)?;
    info!("Saved report to {}", path.display());
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use loophole_core::build_output;

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_save_report_round_trip() {
        let path = std::env::temp_dir().join(format!("loophole-save-{}.txt", std::process::id()));
        let report = build_output(Mode::Simple, "Firms must report trades.");

        assert!(save_report(&report, &path).expect("temp dir should be writable"));
        let saved = std::fs::read_to_string(&path).expect("saved file should exist");
        assert_eq!(saved, report.as_str());

        std::fs::remove_file(&path).ok();
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_placeholder_not_saved() {
        let path = std::env::temp_dir().join(format!("loophole-empty-{}.txt", std::process::id()));
        let report = build_output(Mode::Neutral, "  ");

        assert!(!save_report(&report, &path).expect("nothing to write"));
        assert!(!path.exists());
    }
}
