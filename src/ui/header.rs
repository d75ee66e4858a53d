use crate::service::SummaryStyle;
use crate::ui::theme::{Palette, ThemeMode};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    style: SummaryStyle,
    service_url: &'a str,
    theme: ThemeMode,
}

impl<'a> Header<'a> {
    pub fn new(style: SummaryStyle, service_url: &'a str, theme: ThemeMode) -> Self {
        Self {
            style,
            service_url,
            theme,
        }
    }

    pub fn widget(&self, palette: &Palette) -> Paragraph<'a> {
        let text_style = Style::default().fg(palette.text);
        let separator_style = Style::default().fg(palette.muted);
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                "AI Text Summarizer",
                Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("Style: {}", self.style.label()), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(self.service_url, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} mode", self.theme.label()), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(palette.border)),
        )
    }
}
