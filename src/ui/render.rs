use crate::service::SummaryStyle;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::summarize::{render_history, render_result};
use crate::ui::theme::Palette;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

/// Cursor glyph appended to the input text.
const CURSOR: char = '▏';

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let palette = app.palette();
    let regions = layout_regions(area);
    let workflow = app.workflow();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        area,
    );

    let header = Header::new(workflow.style(), app.service_url(), app.theme());
    frame.render_widget(header.widget(palette), regions.header);

    frame.render_widget(style_selector(workflow.style(), palette), regions.styles);
    draw_input(frame, regions.input, workflow.input_text(), workflow.word_count(), palette);
    render_result(frame, regions.result, workflow.request_state(), palette);
    render_history(
        frame,
        regions.history,
        workflow.history(),
        app.history_scroll(),
        palette,
    );

    frame.render_widget(Footer::widget(regions.footer, app.notice(), palette), regions.footer);
}

fn style_selector(selected: SummaryStyle, palette: &Palette) -> Paragraph<'static> {
    let mut spans = vec![Span::styled(" ", Style::default())];
    for style in SummaryStyle::ALL {
        let span_style = if style == selected {
            Style::default()
                .fg(palette.text)
                .bg(palette.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.muted)
        };
        spans.push(Span::styled(format!(" {} ", style.label()), span_style));
        spans.push(Span::raw("  "));
    }

    Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(" Summary Style (Tab) ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border)),
    )
}

fn draw_input(frame: &mut Frame<'_>, area: Rect, input: &str, words: usize, palette: &Palette) {
    let mut text = input.to_string();
    text.push(CURSOR);

    // Keep the cursor line in view; wrapping is ignored, which is close enough.
    let line_count = text.lines().count();
    let visible = area.height.saturating_sub(2) as usize;
    let scroll = line_count.saturating_sub(visible) as u16;

    let paragraph = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(
            Block::default()
                .title(format!(" Enter your text │ Word Count: {} ", words))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent)),
        );
    frame.render_widget(paragraph, area);
}
