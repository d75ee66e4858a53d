use crate::ui::app::Notice;
use crate::ui::theme::Palette;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HINTS: &str = " Ctrl+S: Summarize │ Tab: Style │ Ctrl+Y: Copy │ Ctrl+D: Save │ Ctrl+T: Theme │ Ctrl+U: Clear │ Ctrl+Q: Quit";

pub struct Footer;

impl Footer {
    /// Key hints, or the pending notice when there is one.
    pub fn widget(area: Rect, notice: Option<&Notice>, palette: &Palette) -> Paragraph<'static> {
        let version = format!("v{} ", VERSION);

        let (message, message_style) = match notice {
            Some(notice) if notice.is_error => (
                format!(" {}", notice.text),
                Style::default().fg(palette.status_error),
            ),
            Some(notice) => (
                format!(" {}", notice.text),
                Style::default().fg(palette.status_ok),
            ),
            None => (
                HINTS.to_string(),
                Style::default().fg(palette.text).add_modifier(Modifier::DIM),
            ),
        };

        // Calculate padding using char count, not byte count (for Unicode)
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(message.chars().count())
            .saturating_sub(version.chars().count());

        let dim = Style::default().fg(palette.muted).add_modifier(Modifier::DIM);
        let line = Line::from(vec![
            Span::styled(message, message_style),
            Span::styled(" ".repeat(padding), dim),
            Span::styled(version, dim),
        ]);

        Paragraph::new(line).alignment(Alignment::Left).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border)),
        )
    }
}
