use std::sync::Arc;

use anyhow::{bail, Context};
use clap::Parser;

use textsum::cli::Cli;
use textsum::config::Config;
use textsum::export::{DirectoryExporter, FileExporter};
use textsum::logging::{init_tracing, LogMode};
use textsum::service::{HttpSummaryClient, SummaryService};
use textsum::ui::summarize::RequestState;
use textsum::workflow::RequestWorkflow;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let one_shot = cli.one_shot_input().context("Failed to read input")?;

    init_tracing(if one_shot.is_some() {
        LogMode::OneShot
    } else {
        LogMode::Interactive
    });

    let config = cli.resolve_config()?;
    let client = HttpSummaryClient::new(&config.service)
        .context("Failed to build summarization client")?;
    let service: Arc<dyn SummaryService> = Arc::new(client);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    match one_shot {
        Some(text) => runtime.block_on(run_once(&config, service, text, cli.save)),
        None => {
            textsum::ui::run(&config, service, runtime.handle().clone())?;
            Ok(())
        }
    }
}

/// Summarize `text` once and print the summary to stdout.
async fn run_once(
    config: &Config,
    service: Arc<dyn SummaryService>,
    text: String,
    save: bool,
) -> anyhow::Result<()> {
    let mut workflow = RequestWorkflow::new(service, config.defaults.style);
    workflow.set_input_text(text);

    match workflow.summarize().await {
        RequestState::Succeeded { summary } => println!("{}", summary),
        RequestState::Failed { message } => bail!("{}", message),
        other => bail!("Summarization did not settle: {:?}", other),
    }

    if save {
        if let Some(file) = workflow.export_file() {
            let exporter = DirectoryExporter::new(config.export.directory_or_cwd());
            let path = exporter
                .save(&file)
                .with_context(|| format!("Failed to save summary to {}", exporter.dir().display()))?;
            eprintln!("Saved to {}", path.display());
        }
    }

    Ok(())
}
