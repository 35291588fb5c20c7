//! The detached AI formulation task: one prompt out, one bounded field
//! mutation back. Fire-and-forget — nothing else awaits it, and a user
//! edit racing the pending call is a benign last-writer-wins; the domain
//! has exactly one local writer.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{info, warn};

use jianji_ai::{build_formulation_prompt, AiError, GenAiClient};

use crate::config::AiConfig;
use crate::state::AppState;

/// User-facing notice when the call fails after takeoff.
const FAILURE_NOTICE: &str = "AI 生成失败，请检查配置。";

/// Validate configuration, build the prompt from the current record, and
/// spawn the detached generation task.
///
/// Missing configuration is reported here, synchronously, before anything
/// is spawned ([`AiError::MissingConfig`]). Once the task is running,
/// failure surfaces only through `notify` and mutates nothing; success
/// performs a single whole-value overwrite of
/// `summary.clinical_formulation` followed by a save.
pub fn spawn_formulation<F>(
    app: Arc<AppState>,
    config: &AiConfig,
    notify: F,
) -> Result<JoinHandle<()>, AiError>
where
    F: Fn(&str) + Send + 'static,
{
    let client = GenAiClient::new(config.api_key.clone(), config.model.clone())?;
    let prompt = build_formulation_prompt(&app.snapshot())?;

    Ok(tokio::spawn(async move {
        let outcome = tokio::task::spawn_blocking(move || client.generate(&prompt)).await;
        match outcome {
            Ok(Ok(text)) => {
                if let Err(e) = apply_formulation(&app, text) {
                    warn!(error = %e, "formulation generated but could not be saved");
                    notify(FAILURE_NOTICE);
                }
            }
            Ok(Err(e)) => {
                warn!(error = %e, "formulation generation failed");
                notify(FAILURE_NOTICE);
            }
            Err(e) => {
                warn!(error = %e, "formulation task panicked");
                notify(FAILURE_NOTICE);
            }
        }
    }))
}

fn apply_formulation(app: &AppState, text: String) -> eyre::Result<()> {
    let mut data = app.lock();
    data.summary.clinical_formulation = text;
    let snapshot = data.clone();
    drop(data);
    app.persist(&snapshot)?;
    info!("clinical formulation updated from generation service");
    Ok(())
}
