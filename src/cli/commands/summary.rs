//! Summary command implementations.

use crate::cli::Output;
use crate::config::Settings;
use crate::orchestrator::Orchestrator;
use anyhow::Result;

/// Summarize a video and print the result.
pub async fn run_summary(video_id: &str, model: Option<String>, settings: Settings) -> Result<()> {
    let orchestrator = build_orchestrator(&settings)?;

    let spinner = Output::spinner(&format!("Summarizing {}...", video_id));
    let result = orchestrator.summarize_video(video_id, model.as_deref()).await;
    spinner.finish_and_clear();

    print_summary(result)
}

/// Summarize text given on the command line and print the result.
pub async fn run_summarize_text(text: &str, model: Option<String>, settings: Settings) -> Result<()> {
    let orchestrator = build_orchestrator(&settings)?;

    let spinner = Output::spinner("Summarizing text...");
    let result = orchestrator
        .summarizer()
        .summarize(text, model.as_deref())
        .await;
    spinner.finish_and_clear();

    print_summary(result)
}

fn build_orchestrator(settings: &Settings) -> Result<Orchestrator> {
    Orchestrator::new(settings).map_err(|e| {
        Output::error(&e.to_string());
        e.into()
    })
}

fn print_summary(result: crate::Result<String>) -> Result<()> {
    match result {
        Ok(summary) if summary.is_empty() => {
            Output::warning("Summary could not be generated");
            Ok(())
        }
        Ok(summary) => {
            println!("\n{}\n", summary);
            Ok(())
        }
        Err(e) => {
            Output::error(&format!("Failed to generate summary: {}", e));
            Err(e.into())
        }
    }
}
