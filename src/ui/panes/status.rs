//! Status bar rendering: list state, last message, prompt and keybindings

use super::list::mode_label;
use crate::list::ListMode;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// An open numeric prompt
pub struct PromptView<'a> {
    pub label: &'a str,
    pub buffer: &'a str,
}

/// Data needed to render the status bar
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub mode: ListMode,
    pub node_count: usize,
    pub busy: bool,
    pub prompt: Option<PromptView<'a>>,
}

const KEYBINDS: &[(&str, &str)] = &[
    ("i", "insert head"),
    ("a", "append"),
    ("k", "after key"),
    ("d", "del head"),
    ("e", "del tail"),
    ("x", "del key"),
    ("/", "search"),
    ("t", "traverse"),
    ("r", "reverse"),
    ("c", "clear"),
    ("m", "mode"),
    ("⇥", "focus"),
    ("q", "quit"),
];

/// Render the two-row status bar at the bottom.
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: StatusRenderData) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[0]);

    let bar_style = Style::default().bg(DEFAULT_THEME.status_bg);
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.comment);

    // Left: list summary and the latest message, or the open prompt
    let summary = format!(
        " Nodes: {} | Type: {} ",
        data.node_count,
        mode_label(data.mode)
    );
    let mut left_spans = vec![Span::styled(
        summary,
        Style::default()
            .bg(DEFAULT_THEME.primary)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    )];
    match &data.prompt {
        Some(prompt) => {
            left_spans.push(Span::styled(
                format!(" {}: ", prompt.label),
                Style::default()
                    .bg(DEFAULT_THEME.status_bg)
                    .fg(DEFAULT_THEME.secondary),
            ));
            left_spans.push(Span::styled(
                format!("{}▏", prompt.buffer),
                desc_style.add_modifier(Modifier::BOLD),
            ));
        }
        None => {
            left_spans.push(Span::styled(" | ", sep_style));
            left_spans.push(Span::styled(format!(" {} ", data.message), desc_style));
        }
    }
    frame.render_widget(
        Paragraph::new(Line::from(left_spans))
            .style(bar_style)
            .alignment(Alignment::Left),
        top[0],
    );

    // Right: animation indicator
    let indicator = if data.prompt.is_some() {
        Span::styled(
            " ⌨ INPUT ",
            Style::default()
                .bg(DEFAULT_THEME.secondary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
    } else if data.busy {
        Span::styled(
            " ▶ Animation in progress... ",
            Style::default()
                .bg(DEFAULT_THEME.secondary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            " READY ",
            Style::default()
                .bg(DEFAULT_THEME.success)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
    };
    frame.render_widget(
        Paragraph::new(Line::from(indicator))
            .style(bar_style)
            .alignment(Alignment::Right),
        top[1],
    );

    // Bottom: keybindings, or prompt controls while typing
    let mut key_spans = Vec::new();
    if data.prompt.is_some() {
        key_spans.push(Span::styled(" ↵ ", key_style));
        key_spans.push(Span::styled(" confirm ", desc_style));
        key_spans.push(Span::styled("│", sep_style));
        key_spans.push(Span::styled(" esc ", key_style));
        key_spans.push(Span::styled(" cancel ", desc_style));
    } else {
        for (i, (key, desc)) in KEYBINDS.iter().enumerate() {
            if i > 0 {
                key_spans.push(Span::styled("│", sep_style));
            }
            key_spans.push(Span::styled(format!(" {} ", key), key_style));
            key_spans.push(Span::styled(format!(" {} ", desc), desc_style));
        }
    }
    frame.render_widget(
        Paragraph::new(Line::from(key_spans))
            .style(bar_style)
            .alignment(Alignment::Left),
        rows[1],
    );
}
