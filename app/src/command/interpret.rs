use loophole_config::Config;
use loophole_core::{InterpretRequest, Interpreter};
use loophole_providers::OpenAiProvider;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

use super::read_input;

/// Input parameters for the Interpret command strategy.
#[derive(Debug, Clone)]
pub struct InterpretInput {
    /// Inline text
    pub text: Option<String>,
    /// Input file
    pub file: Option<PathBuf>,
    /// Jurisdiction override
    pub jurisdiction: Option<String>,
    /// Tone override
    pub tone: Option<String>,
    /// Model override
    pub model: Option<String>,
    /// Print the raw JSON answer instead of rendered text
    pub json: bool,
}

/// Strategy for the remote model interpretation.
///
/// Invalid model output is reported separately from transport and status
/// failures, since only the former is worth an immediate manual retry.
#[derive(Debug, Clone, Copy)]
pub struct InterpretStrategy;

impl super::CommandStrategy for InterpretStrategy {
    type Input = InterpretInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load_or_default()?;
        let openai = &config.providers.openai;

        let provider = OpenAiProvider::new(
            openai.resolve_api_key()?,
            Duration::from_secs(openai.timeout_secs),
        )?
        .with_base_url(openai.base_url.clone())
        .with_model(input.model.unwrap_or(config.interpreter.model))
        .with_retry(config.interpreter.retry);

        let raw = read_input(input.text, input.file.as_deref())?;
        let request = InterpretRequest::new(raw)
            .with_jurisdiction(input.jurisdiction.or(config.interpreter.jurisdiction))
            .with_tone(input.tone.unwrap_or(config.interpreter.tone));

        info!("Interpreting with model {}", provider.model());
        let interpretation = match provider.interpret(&request).await {
            Ok(interpretation) => interpretation,
            Err(e) if e.is_invalid_output() => {
                anyhow::bail!("{e} The input was accepted; run the command again to retry.")
            }
            Err(e) => {
                let status = e.http_status();
                return Err(anyhow::Error::new(e).context(format!("Interpretation failed ({status})")));
            }
        };

        if input.json {
            println!("{}", serde_json::to_string_pretty(&interpretation)?);
        } else {
            println!("{}", interpretation.render());
        }

        Ok(())
    }
}
