use loophole_config::{API_KEY_ENV, Config};
use loophole_core::Mode;

/// Strategy for displaying configuration information.
///
/// Prints provider settings (API key masked), interpreter defaults, report
/// defaults and the size of the active word lists.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let path = Config::config_path()?;
        let config = Config::load_or_default()?;

        println!("=== loophole Configuration ===\n");

        println!("Config File:");
        if path.exists() {
            println!("  Path: {}", path.display());
        } else {
            println!("  Path: {} (missing, using defaults)", path.display());
        }
        println!();

        let openai = &config.providers.openai;
        println!("OpenAI:");
        match openai.resolve_api_key() {
            Ok(key) => println!("  API Key: {}", mask_api_key(&key)),
            Err(_) => println!("  API Key: (not set, checked config and {API_KEY_ENV})"),
        }
        println!("  Base URL: {}", openai.base_url);
        println!("  Timeout: {}s", openai.timeout_secs);
        println!();

        let interpreter = &config.interpreter;
        println!("Interpreter:");
        println!("  Model: {}", interpreter.model);
        println!("  Tone: {}", interpreter.tone);
        println!(
            "  Jurisdiction: {}",
            interpreter.jurisdiction.as_deref().unwrap_or("(not specified)")
        );
        println!(
            "  Retry: {} attempts, delays {:?}ms then {}ms",
            interpreter.retry.max_attempts(),
            interpreter.retry.base_delays_ms,
            interpreter.retry.final_delay_ms
        );
        println!();

        println!("Report:");
        println!("  Default Mode: {}", config.report.default_mode);
        println!(
            "  Modes: {}",
            Mode::ALL.map(|m| m.as_str()).join(", ")
        );
        println!("  Output File: {}", config.report.output_file.display());
        println!();

        println!("Lexicon:");
        println!("  Keywords: {}", config.lexicon.keywords.len());
        println!(
            "  Ambiguity Triggers: {}",
            config.lexicon.ambiguity_triggers.len()
        );

        Ok(())
    }
}

fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}...{tail}")
    } else {
        "***".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_api_key() {
        assert_eq!(mask_api_key("sk-abcdefghijkl"), "sk-a...ijkl");
        assert_eq!(mask_api_key("short"), "***");
        assert_eq!(mask_api_key(""), "***");
    }
}
