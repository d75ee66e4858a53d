use crate::clipboard::ClipboardWriter;
use crate::export::FileExporter;
use crate::service::{SummarizeError, SummarizeRequest};
use crate::ui::theme::{Palette, ThemeMode};
use crate::workflow::RequestWorkflow;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// How long a notice stays in the footer.
const NOTICE_TTL: Duration = Duration::from_secs(3);

#[derive(Debug)]
pub enum UiCommand {
    Summarize(SummarizeRequest),
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Transient message shown in the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub is_error: bool,
    shown_at: Instant,
}

impl Notice {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
            shown_at: Instant::now(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
            shown_at: Instant::now(),
        }
    }

    fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= NOTICE_TTL
    }
}

pub struct App {
    should_quit: bool,
    workflow: RequestWorkflow,
    theme: ThemeMode,
    service_url: String,
    history_scroll: usize,
    notice: Option<Notice>,
    input_error: Option<String>,
    command_sender: Option<UiCommandSender>,
    clipboard: Option<Box<dyn ClipboardWriter>>,
    exporter: Box<dyn FileExporter>,
}

impl App {
    pub fn new(
        workflow: RequestWorkflow,
        theme: ThemeMode,
        service_url: String,
        exporter: Box<dyn FileExporter>,
    ) -> Self {
        Self {
            should_quit: false,
            workflow,
            theme,
            service_url,
            history_scroll: 0,
            notice: None,
            input_error: None,
            command_sender: None,
            clipboard: None,
            exporter,
        }
    }

    pub fn with_clipboard(mut self, clipboard: Box<dyn ClipboardWriter>) -> Self {
        self.clipboard = Some(clipboard);
        self
    }

    pub fn attach_commands(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn workflow(&self) -> &RequestWorkflow {
        &self.workflow
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn palette(&self) -> &'static Palette {
        self.theme.palette()
    }

    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    pub fn history_scroll(&self) -> usize {
        self.history_scroll
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Terminal input is gone, so the user can no longer quit by key.
    pub fn on_input_closed(&mut self, reason: String) {
        tracing::error!(reason = %reason, "Terminal input closed");
        self.input_error = Some(reason);
        self.should_quit = true;
    }

    /// Why input stopped, if it did.
    pub fn take_input_error(&mut self) -> Option<String> {
        self.input_error.take()
    }

    pub fn on_tick(&mut self) {
        self.workflow.tick();
        if self
            .notice
            .as_ref()
            .is_some_and(|notice| notice.is_expired(Instant::now()))
        {
            self.notice = None;
        }
    }

    pub fn insert_char(&mut self, ch: char) {
        let mut text = self.workflow.input_text().to_string();
        text.push(ch);
        self.workflow.set_input_text(text);
    }

    /// Insert pasted text, normalizing line endings.
    pub fn insert_str(&mut self, pasted: &str) {
        let normalized = pasted.replace("\r\n", "\n").replace('\r', "\n");
        let mut text = self.workflow.input_text().to_string();
        text.push_str(&normalized);
        self.workflow.set_input_text(text);
    }

    pub fn backspace(&mut self) {
        let mut text = self.workflow.input_text().to_string();
        if text.pop().is_some() {
            self.workflow.set_input_text(text);
        }
    }

    pub fn clear_input(&mut self) {
        self.workflow.set_input_text(String::new());
    }

    pub fn next_style(&mut self) {
        self.workflow.set_style(self.workflow.style().next());
    }

    pub fn prev_style(&mut self) {
        self.workflow.set_style(self.workflow.style().prev());
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn scroll_history(&mut self, delta: isize) {
        let max = self.workflow.history().len().saturating_sub(1);
        self.history_scroll = self.history_scroll.saturating_add_signed(delta).min(max);
    }

    /// Start a summarize call; the worker reports back via `on_summary_finished`.
    pub fn submit(&mut self) {
        let Some(request) = self.workflow.begin() else {
            return;
        };

        let Some(sender) = &self.command_sender else {
            self.workflow.complete(
                request,
                Err(SummarizeError::Unavailable("no worker attached".into())),
            );
            return;
        };

        if let Err(err) = sender.try_send(UiCommand::Summarize(request)) {
            let request = match err {
                mpsc::error::TrySendError::Full(UiCommand::Summarize(request))
                | mpsc::error::TrySendError::Closed(UiCommand::Summarize(request)) => request,
            };
            self.workflow.complete(
                request,
                Err(SummarizeError::Unavailable("worker channel rejected request".into())),
            );
        }
    }

    pub fn on_summary_finished(
        &mut self,
        request: SummarizeRequest,
        outcome: Result<String, SummarizeError>,
    ) {
        self.workflow.complete(request, outcome);
        self.history_scroll = 0;
    }

    /// Copy the current summary. The outcome only shows up as a notice.
    pub fn copy_summary(&mut self) {
        let Some(summary) = self.workflow.state().current_summary() else {
            self.notice = Some(Notice::error("No summary to copy yet"));
            return;
        };

        let result = match self.clipboard.as_mut() {
            Some(clipboard) => clipboard.write_text(summary).map_err(|e| e.to_string()),
            None => Err("Clipboard unavailable".to_string()),
        };

        self.notice = Some(match result {
            Ok(()) => Notice::info("Summary copied to clipboard"),
            Err(err) => {
                tracing::warn!(error = %err, "Copy to clipboard failed");
                Notice::error(err)
            }
        });
    }

    /// Save the current summary as `summary.txt`.
    pub fn save_summary(&mut self) {
        let Some(file) = self.workflow.export_file() else {
            self.notice = Some(Notice::error("No summary to save yet"));
            return;
        };

        self.notice = Some(match self.exporter.save(&file) {
            Ok(path) => Notice::info(format!("Saved to {}", path.display())),
            Err(err) => {
                tracing::warn!(error = %err, "Saving summary failed");
                Notice::error(format!("Failed to save summary: {}", err))
            }
        });
    }
}
