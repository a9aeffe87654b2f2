//! List canvas pane: nodes drawn as boxes joined by pointer arrows
//!
//! Layout per row of nodes:
//!
//! ```text
//! HEAD          TAIL
//! ┌───┐   ┌───┐   ┌───┐
//! │ 5 │ ⇄ │ 7 │ ⇄ │ 9 │ → NULL
//! └───┘   └───┘   └───┘
//! [0]     [1]     [2]
//! ```
//!
//! Arrows are derived from the snapshot's links, not from the mode: `⇄` is
//! drawn only when the next node's `prev` points back, and `↺` marks a tail
//! whose `next` wraps to the head. Rows wrap to the pane width.

use crate::list::ListMode;
use crate::snapshot::{NodeView, StateSnapshot};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding},
    Frame,
};

/// Human-readable list type, as shown in titles and the status bar
pub fn mode_label(mode: ListMode) -> &'static str {
    match mode {
        ListMode::Singly => "Singly Linked List",
        ListMode::Doubly => "Doubly Linked List",
        ListMode::Circular => "Circular Linked List",
    }
}

/// One node plus the connector drawn to its right
struct Cell {
    label: &'static str,
    value: String,
    connector: &'static str,
    wraps: bool,
    highlighted: bool,
    index: usize,
}

impl Cell {
    fn box_width(&self) -> usize {
        self.value.chars().count() + 4
    }

    fn width(&self) -> usize {
        (self.box_width() + self.connector.chars().count())
            .max(self.label.chars().count() + 1)
            .max(format!("[{}]", self.index).len() + 1)
    }
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}

fn connector_for(nodes: &[NodeView], i: usize) -> (&'static str, bool) {
    let node = &nodes[i];
    match (node.next, nodes.get(i + 1)) {
        (Some(next), Some(following)) if following.id == next => {
            if following.prev == Some(node.id) {
                (" ⇄ ", false)
            } else {
                (" → ", false)
            }
        }
        (Some(next), None) if nodes.first().is_some_and(|h| h.id == next) => (" ↺", true),
        (Some(_), _) => (" → ", false),
        (None, _) => (" → NULL", false),
    }
}

fn build_cells(snapshot: &StateSnapshot) -> Vec<Cell> {
    let nodes = &snapshot.nodes;
    nodes
        .iter()
        .enumerate()
        .map(|(i, node)| {
            let is_head = snapshot.head == Some(node.id);
            let is_tail = snapshot.tail == Some(node.id);
            let label = match (is_head, is_tail) {
                (true, true) => "HEAD/TAIL",
                (true, false) => "HEAD",
                (false, true) => "TAIL",
                (false, false) => "",
            };
            let (connector, wraps) = connector_for(nodes, i);
            Cell {
                label,
                value: node.value.to_string(),
                connector,
                wraps,
                highlighted: snapshot.highlighted == Some(node.id),
                index: i,
            }
        })
        .collect()
}

/// Greedily pack cells into rows no wider than `width` (at least one per row)
fn pack_rows(cells: &[Cell], width: usize) -> Vec<&[Cell]> {
    let mut rows = Vec::new();
    let mut start = 0;
    let mut used = 0;

    for (i, cell) in cells.iter().enumerate() {
        let w = cell.width();
        if i > start && used + w > width {
            rows.push(&cells[start..i]);
            start = i;
            used = 0;
        }
        used += w;
    }
    if start < cells.len() {
        rows.push(&cells[start..]);
    }
    rows
}

/// Build the canvas text for `snapshot` at the given content width
pub fn canvas_lines(snapshot: &StateSnapshot, width: usize) -> Vec<Line<'static>> {
    if snapshot.nodes.is_empty() {
        return vec![
            Line::from(Span::styled(
                "Empty List",
                Style::default()
                    .fg(DEFAULT_THEME.comment)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Add nodes to start visualizing your linked list",
                Style::default().fg(DEFAULT_THEME.comment),
            )),
        ];
    }

    let cells = build_cells(snapshot);
    let mut lines = Vec::new();

    for row in pack_rows(&cells, width.max(1)) {
        let mut labels = Vec::new();
        let mut tops = Vec::new();
        let mut mids = Vec::new();
        let mut bottoms = Vec::new();
        let mut indexes = Vec::new();

        for cell in row {
            let w = cell.width();
            let box_w = cell.box_width();
            let rest = w - box_w;
            let box_style = if cell.highlighted {
                Style::default()
                    .bg(DEFAULT_THEME.highlight_bg)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.node_border)
            };
            let value_style = if cell.highlighted {
                box_style
            } else {
                Style::default()
                    .fg(DEFAULT_THEME.node_value)
                    .add_modifier(Modifier::BOLD)
            };
            let connector_style = if cell.wraps {
                Style::default().fg(DEFAULT_THEME.back_pointer)
            } else {
                Style::default().fg(DEFAULT_THEME.pointer)
            };
            let horizontal = "─".repeat(box_w - 2);

            labels.push(Span::styled(
                pad(cell.label, w),
                Style::default()
                    .fg(DEFAULT_THEME.label)
                    .add_modifier(Modifier::BOLD),
            ));

            tops.push(Span::styled(format!("┌{}┐", horizontal), box_style));
            tops.push(Span::raw(" ".repeat(rest)));

            mids.push(Span::styled("│ ", box_style));
            mids.push(Span::styled(cell.value.clone(), value_style));
            mids.push(Span::styled(" │", box_style));
            mids.push(Span::styled(pad(cell.connector, rest), connector_style));

            bottoms.push(Span::styled(format!("└{}┘", horizontal), box_style));
            bottoms.push(Span::raw(" ".repeat(rest)));

            indexes.push(Span::styled(
                pad(&format!("[{}]", cell.index), w),
                Style::default().fg(DEFAULT_THEME.comment),
            ));
        }

        lines.push(Line::from(labels));
        lines.push(Line::from(tops));
        lines.push(Line::from(mids));
        lines.push(Line::from(bottoms));
        lines.push(Line::from(indexes));
        lines.push(Line::default());
    }

    if let Some(wrap) = wrap_note(snapshot) {
        lines.push(Line::from(Span::styled(
            wrap,
            Style::default().fg(DEFAULT_THEME.back_pointer),
        )));
    }

    lines
}

/// Describe the wrap-around links of a circular list, if any
fn wrap_note(snapshot: &StateSnapshot) -> Option<String> {
    let head = snapshot.nodes.first()?;
    let tail = snapshot.nodes.last()?;

    let forward = tail.next == Some(head.id);
    let backward = head.prev == Some(tail.id);
    match (forward, backward) {
        (true, true) => Some(format!(
            "↺ tail ({}) → head ({}), head.prev → tail",
            tail.value, head.value
        )),
        (true, false) => Some(format!("↺ tail ({}) → head ({})", tail.value, head.value)),
        (false, true) => Some(format!("head ({}).prev → tail ({})", head.value, tail.value)),
        (false, false) => None,
    }
}

/// Render the list canvas pane
pub fn render_list_pane(
    frame: &mut Frame,
    area: Rect,
    snapshot: &StateSnapshot,
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
        .title(format!(" {} ", mode_label(snapshot.mode)))
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::new(1, 1, 0, 0));

    let content_width = area.width.saturating_sub(4) as usize; // borders + padding
    let all_items: Vec<ListItem> = canvas_lines(snapshot, content_width)
        .into_iter()
        .map(ListItem::new)
        .collect();

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ListEngine;

    fn text(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| {
                l.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    fn snapshot(mode: ListMode, values: &[i64]) -> StateSnapshot {
        ListEngine::from_values(mode, values.iter().copied()).snapshot()
    }

    #[test]
    fn empty_list_shows_placeholder() {
        let lines = text(&canvas_lines(&snapshot(ListMode::Singly, &[]), 80));
        assert_eq!(lines[0], "Empty List");
    }

    #[test]
    fn singly_row_ends_in_null() {
        let lines = text(&canvas_lines(&snapshot(ListMode::Singly, &[5, 7, 9]), 80));
        assert!(lines[0].starts_with("HEAD"));
        assert!(lines[0].ends_with("TAIL"));
        assert_eq!(lines[2], "│ 5 │ → │ 7 │ → │ 9 │ → NULL");
        assert_eq!(lines[4], "[0]     [1]     [2]");
    }

    #[test]
    fn doubly_uses_two_way_arrows() {
        let lines = text(&canvas_lines(&snapshot(ListMode::Doubly, &[1, 2]), 80));
        assert_eq!(lines[2], "│ 1 │ ⇄ │ 2 │ → NULL");
    }

    #[test]
    fn circular_marks_wrap_around() {
        let lines = text(&canvas_lines(&snapshot(ListMode::Circular, &[1, 2]), 80));
        assert_eq!(lines[2], "│ 1 │ → │ 2 │ ↺");
        assert_eq!(lines.last().unwrap(), "↺ tail (2) → head (1), head.prev → tail");
    }

    #[test]
    fn single_node_is_head_and_tail() {
        let lines = text(&canvas_lines(&snapshot(ListMode::Singly, &[4]), 80));
        assert_eq!(lines[0], "HEAD/TAIL");
    }

    #[test]
    fn rows_wrap_to_width() {
        let snap = snapshot(ListMode::Singly, &[1, 2, 3, 4, 5, 6]);
        let lines = text(&canvas_lines(&snap, 24));
        let value_rows: Vec<_> = lines.iter().filter(|l| l.starts_with('│')).collect();
        assert!(value_rows.len() > 1);
        assert!(value_rows.iter().all(|l| l.chars().count() <= 24));
    }
}
