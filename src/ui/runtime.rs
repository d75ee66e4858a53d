use crate::clipboard::SystemClipboard;
use crate::config::Config;
use crate::export::DirectoryExporter;
use crate::service::SummaryService;
use crate::ui::app::{App, UiCommand};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::workflow::RequestWorkflow;
use std::io;
use std::sync::mpsc as std_mpsc;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

/// Fast enough for a smooth spinner.
const TICK_RATE: Duration = Duration::from_millis(100);

/// Only one request is ever in flight; a little slack is plenty.
const COMMAND_BUFFER: usize = 4;

pub fn run(config: &Config, service: Arc<dyn SummaryService>, runtime: Handle) -> io::Result<()> {
    let workflow = RequestWorkflow::new(Arc::clone(&service), config.defaults.style);
    let exporter = DirectoryExporter::new(config.export.directory_or_cwd());
    let mut app = App::new(
        workflow,
        config.defaults.theme,
        config.service.base_url.clone(),
        Box::new(exporter),
    );
    match SystemClipboard::new() {
        Ok(clipboard) => app = app.with_clipboard(Box::new(clipboard)),
        Err(err) => tracing::warn!(error = %err, "Clipboard unavailable; copy is disabled"),
    }

    let (mut terminal, guard) = setup_terminal()?;
    let (events, event_tx) = EventHandler::new(TICK_RATE);

    let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
    spawn_summarize_worker(&runtime, service, command_rx, event_tx);
    app.attach_commands(command_tx);

    tracing::info!(url = %config.service.base_url, style = %config.defaults.style, "UI started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(TICK_RATE) {
            Ok(event) => handle_event(&mut app, event),
            Err(std_mpsc::RecvTimeoutError::Timeout) => {}
            Err(std_mpsc::RecvTimeoutError::Disconnected) => {
                app.on_input_closed("event channel closed".into())
            }
        }
    }

    drop(guard);
    tracing::info!("UI stopped");

    match app.take_input_error() {
        Some(reason) => Err(io::Error::other(format!("Terminal input failed: {}", reason))),
        None => Ok(()),
    }
}

fn handle_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Paste(text) => app.insert_str(&text),
        AppEvent::Tick => app.on_tick(),
        // Terminal::draw resizes on its own.
        AppEvent::Resize(_, _) => {}
        AppEvent::InputClosed(reason) => app.on_input_closed(reason),
        AppEvent::SummaryFinished { request, outcome } => app.on_summary_finished(request, outcome),
    }
}

/// Run service calls on the tokio runtime and post outcomes back to the UI loop.
fn spawn_summarize_worker(
    runtime: &Handle,
    service: Arc<dyn SummaryService>,
    mut commands: mpsc::Receiver<UiCommand>,
    events: std_mpsc::Sender<AppEvent>,
) {
    runtime.spawn(async move {
        while let Some(command) = commands.recv().await {
            match command {
                UiCommand::Summarize(request) => {
                    let outcome = service.summarize(&request).await;
                    if events
                        .send(AppEvent::SummaryFinished { request, outcome })
                        .is_err()
                    {
                        break;
                    }
                }
            }
        }
    });
}
