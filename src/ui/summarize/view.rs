//! Rendering for the result and history panes.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::theme::Palette;

use super::state::{HistoryEntry, RequestState};

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// History cards show at most this many characters of the input.
pub const INPUT_PREVIEW_CHARS: usize = 100;

/// Render the result pane for the current request state.
pub fn render_result(frame: &mut Frame, area: Rect, state: &RequestState, palette: &Palette) {
    let block = Block::default()
        .title(" Summary ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));

    let lines = match state {
        RequestState::Idle => vec![
            Line::from(""),
            Line::from(Span::styled(
                "  Type or paste text, then press Ctrl+S to summarize.",
                Style::default().fg(palette.muted),
            )),
        ],

        RequestState::Loading { animation_tick } => progress_lines(*animation_tick, palette),

        RequestState::Failed { message } => vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("  ✗ ", Style::default().fg(palette.status_error)),
                Span::styled(message.as_str(), Style::default().fg(palette.status_error)),
            ]),
        ],

        RequestState::Succeeded { summary } => {
            let mut lines: Vec<Line> = summary
                .lines()
                .map(|line| {
                    Line::from(Span::styled(line.to_string(), Style::default().fg(palette.text)))
                })
                .collect();
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Ctrl+Y: Copy │ Ctrl+D: Save summary.txt",
                Style::default().fg(palette.muted).add_modifier(Modifier::DIM),
            )));
            lines
        }
    };

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(palette.card))
        .block(block);
    frame.render_widget(paragraph, area);
}

fn progress_lines(animation_tick: u8, palette: &Palette) -> Vec<Line<'static>> {
    let spinner = SPINNER_FRAMES[(animation_tick as usize) % SPINNER_FRAMES.len()];
    vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("  {} ", spinner), Style::default().fg(palette.status_ok)),
            Span::styled("Generating summary...", Style::default().fg(palette.text)),
        ]),
    ]
}

/// Render the session history, most recent first.
pub fn render_history(
    frame: &mut Frame,
    area: Rect,
    entries: &[HistoryEntry],
    scroll_offset: usize,
    palette: &Palette,
) {
    let block = Block::default()
        .title(format!(" History ({}) ", entries.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));

    let lines: Vec<Line> = entries
        .iter()
        .skip(scroll_offset)
        .flat_map(|entry| {
            [
                Line::from(vec![
                    Span::styled("Input: ", Style::default().fg(palette.muted)),
                    Span::styled(input_preview(&entry.input), Style::default().fg(palette.muted)),
                ]),
                Line::from(vec![
                    Span::styled(
                        "Summary: ",
                        Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(entry.summary.clone(), Style::default().fg(palette.text)),
                ]),
                Line::from(""),
            ]
        })
        .collect();

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
    frame.render_widget(paragraph, area);
}

/// First [`INPUT_PREVIEW_CHARS`] characters of the input on one line.
fn input_preview(input: &str) -> String {
    let flat = input.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= INPUT_PREVIEW_CHARS {
        flat
    } else {
        let head: String = flat.chars().take(INPUT_PREVIEW_CHARS).collect();
        format!("{}...", head)
    }
}
