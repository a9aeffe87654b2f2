//! Notifications pane: the outcome of every operation, newest at the bottom

use crate::snapshot::{Level, Notification, NotificationLog};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

fn level_marker(level: Level) -> (&'static str, Style) {
    match level {
        Level::Success => ("✓ ", Style::default().fg(DEFAULT_THEME.success)),
        Level::Error => ("✗ ", Style::default().fg(DEFAULT_THEME.error)),
        Level::Info => ("• ", Style::default().fg(DEFAULT_THEME.info)),
    }
}

fn notification_line(notification: &Notification) -> Line<'static> {
    let (marker, style) = level_marker(notification.level);
    Line::from(vec![
        Span::styled(
            format!("{:>6.1}s ", notification.at.as_secs_f64()),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(marker, style.add_modifier(Modifier::BOLD)),
        Span::styled(notification.text.clone(), style),
    ])
}

/// Render the notifications pane
pub fn render_notifications_pane(
    frame: &mut Frame,
    area: Rect,
    log: &NotificationLog,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Notifications ")
        .borders(Borders::ALL)
        .border_style(border_style);

    if log.is_empty() {
        let paragraph = Paragraph::new("(no operations yet)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let all_items: Vec<ListItem> = log
        .iter()
        .map(|n| ListItem::new(notification_line(n)))
        .collect();

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    // usize::MAX from the app means "follow the newest entry"
    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
