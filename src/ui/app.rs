//! Main TUI application state and logic

use crate::engine::{ListEngine, OperationRequest};
use crate::ui::panes::{self, PromptView, StatusRenderData};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Upper bound on how long the loop waits for a key before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Canvas,
    Notifications,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Canvas => FocusedPane::Notifications,
            FocusedPane::Notifications => FocusedPane::Canvas,
        }
    }
}

/// What the open numeric prompt will be used for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    InsertBeginning,
    InsertEnd,
    /// First half of insert-after-key: asks for the key
    AfterKeyKey,
    /// Second half: asks for the value to insert after `key`
    AfterKeyValue { key: i64 },
    DeleteByKey,
    Search,
}

impl PromptKind {
    fn label(self) -> String {
        match self {
            PromptKind::InsertBeginning => "Value to insert at the beginning".to_string(),
            PromptKind::InsertEnd => "Value to insert at the end".to_string(),
            PromptKind::AfterKeyKey => "Insert after key".to_string(),
            PromptKind::AfterKeyValue { key } => format!("Value to insert after {}", key),
            PromptKind::DeleteByKey => "Key to delete".to_string(),
            PromptKind::Search => "Value to search for".to_string(),
        }
    }
}

/// An open numeric prompt and what has been typed so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub kind: PromptKind,
    pub buffer: String,
}

/// The main application state
pub struct App {
    /// The engine holding the list
    pub engine: ListEngine,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub canvas_scroll: usize,
    pub notifications_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Numeric input in progress, if any
    pub prompt: Option<Prompt>,

    /// When the engine clock was last advanced
    pub last_tick: Instant,
}

impl App {
    pub fn new(engine: ListEngine) -> Self {
        App {
            engine,
            focused_pane: FocusedPane::Canvas,
            canvas_scroll: 0,
            notifications_scroll: usize::MAX,
            should_quit: false,
            status_message: String::from("Ready!"),
            prompt: None,
            last_tick: Instant::now(),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            self.tick();
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Wake up early when an animation step is due
            let timeout = self
                .engine
                .time_to_next_action()
                .map_or(POLL_INTERVAL, |due| due.min(POLL_INTERVAL));

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Advance the engine clock by the wall time since the last tick
    fn tick(&mut self) {
        let now = Instant::now();
        let elapsed = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;

        if self.engine.advance(elapsed) > 0 {
            self.notifications_scroll = usize::MAX;
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Canvas on top, notifications below, two-row status bar at the bottom
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(65),
                Constraint::Min(3),
                Constraint::Length(2),
            ])
            .split(size);

        let snapshot = self.engine.snapshot();

        panes::render_list_pane(
            frame,
            chunks[0],
            &snapshot,
            self.focused_pane == FocusedPane::Canvas,
            &mut self.canvas_scroll,
        );

        panes::render_notifications_pane(
            frame,
            chunks[1],
            self.engine.notifications(),
            self.focused_pane == FocusedPane::Notifications,
            &mut self.notifications_scroll,
        );

        let label = self.prompt.as_ref().map(|p| p.kind.label());
        let prompt = match (&self.prompt, &label) {
            (Some(p), Some(label)) => Some(PromptView {
                label,
                buffer: &p.buffer,
            }),
            _ => None,
        };

        panes::render_status_bar(
            frame,
            chunks[2],
            StatusRenderData {
                message: &self.status_message,
                mode: snapshot.mode,
                node_count: snapshot.nodes.len(),
                busy: snapshot.busy,
                prompt,
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.prompt.is_some() {
            self.handle_prompt_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Canvas => {
                    self.canvas_scroll = self.canvas_scroll.saturating_sub(1);
                }
                FocusedPane::Notifications => {
                    self.notifications_scroll = self.notifications_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Canvas => {
                    self.canvas_scroll = self.canvas_scroll.saturating_add(1);
                }
                FocusedPane::Notifications => {
                    self.notifications_scroll = self.notifications_scroll.saturating_add(1);
                }
            },
            KeyCode::Char('i') => self.open_prompt(PromptKind::InsertBeginning),
            KeyCode::Char('a') => self.open_prompt(PromptKind::InsertEnd),
            KeyCode::Char('k') => self.open_prompt(PromptKind::AfterKeyKey),
            KeyCode::Char('x') => self.open_prompt(PromptKind::DeleteByKey),
            KeyCode::Char('/') => self.open_prompt(PromptKind::Search),
            KeyCode::Char('d') => {
                self.submit(OperationRequest::DeleteBeginning);
            }
            KeyCode::Char('e') => {
                self.submit(OperationRequest::DeleteEnd);
            }
            KeyCode::Char('t') => {
                self.submit(OperationRequest::Traverse);
            }
            KeyCode::Char('r') => {
                self.submit(OperationRequest::Reverse);
            }
            KeyCode::Char('c') => {
                self.submit(OperationRequest::Clear);
            }
            KeyCode::Char('m') => {
                let mode = self.engine.mode().next();
                self.submit(OperationRequest::ChangeMode { mode });
            }
            _ => {}
        }
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        let Some(prompt) = self.prompt.as_mut() else {
            return;
        };

        match key.code {
            KeyCode::Esc => {
                self.prompt = None;
                self.status_message = "Cancelled".to_string();
            }
            KeyCode::Backspace => {
                prompt.buffer.pop();
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                prompt.buffer.push(c);
            }
            KeyCode::Char('-') if prompt.buffer.is_empty() => {
                prompt.buffer.push('-');
            }
            KeyCode::Enter => {
                let number = match prompt.buffer.parse::<i64>() {
                    Ok(number) => number,
                    Err(_) => {
                        self.status_message =
                            format!("'{}' is not a whole number", prompt.buffer);
                        return;
                    }
                };

                let request = match prompt.kind {
                    PromptKind::AfterKeyKey => {
                        prompt.kind = PromptKind::AfterKeyValue { key: number };
                        prompt.buffer.clear();
                        return;
                    }
                    PromptKind::InsertBeginning => {
                        OperationRequest::InsertBeginning { value: number }
                    }
                    PromptKind::InsertEnd => OperationRequest::InsertEnd { value: number },
                    PromptKind::AfterKeyValue { key } => OperationRequest::InsertAfterKey {
                        key,
                        value: number,
                    },
                    PromptKind::DeleteByKey => OperationRequest::DeleteByKey { key: number },
                    PromptKind::Search => OperationRequest::Search { value: number },
                };

                self.prompt = None;
                self.submit(request);
            }
            _ => {}
        }
    }

    fn open_prompt(&mut self, kind: PromptKind) {
        if self.refuse_if_busy() {
            return;
        }
        self.prompt = Some(Prompt {
            kind,
            buffer: String::new(),
        });
    }

    /// Send a request to the engine unless an animation is still running
    ///
    /// Returns whether the request was submitted.
    fn submit(&mut self, request: OperationRequest) -> bool {
        if self.refuse_if_busy() {
            return false;
        }

        self.status_message = match self.engine.execute(request) {
            Ok(outcome) => outcome.to_string(),
            Err(err) => err.to_string(),
        };
        self.notifications_scroll = usize::MAX;
        true
    }

    fn refuse_if_busy(&mut self) -> bool {
        if self.engine.is_busy() {
            self.status_message = "Animation in progress... please wait".to_string();
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::ListMode;
    use crossterm::event::KeyModifiers;

    fn app(values: &[i64]) -> App {
        App::new(ListEngine::from_values(
            ListMode::Singly,
            values.iter().copied(),
        ))
    }

    fn press(app: &mut App, keys: &str) {
        for c in keys.chars() {
            let code = match c {
                '\n' => KeyCode::Enter,
                '\x1b' => KeyCode::Esc,
                c => KeyCode::Char(c),
            };
            app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
        }
    }

    #[test]
    fn append_through_prompt() {
        let mut app = app(&[]);
        press(&mut app, "a42\n");
        assert_eq!(app.engine.values(), vec![42]);
        assert_eq!(app.status_message, "Inserted 42 at the end");
        assert!(app.prompt.is_none());
    }

    #[test]
    fn insert_after_key_asks_twice() {
        let mut app = app(&[5, 9]);
        press(&mut app, "k5\n");
        assert_eq!(
            app.prompt.as_ref().map(|p| p.kind),
            Some(PromptKind::AfterKeyValue { key: 5 })
        );
        press(&mut app, "7\n");
        assert_eq!(app.engine.values(), vec![5, 7, 9]);
    }

    #[test]
    fn non_numeric_input_keeps_prompt_open() {
        let mut app = app(&[1]);
        press(&mut app, "a-\n");
        assert!(app.prompt.is_some());
        assert_eq!(app.engine.values(), vec![1]);

        press(&mut app, "\x1b");
        assert!(app.prompt.is_none());
    }

    #[test]
    fn letters_are_ignored_inside_prompt() {
        let mut app = app(&[]);
        press(&mut app, "i-3q\n");
        assert!(!app.should_quit);
        assert_eq!(app.engine.values(), vec![-3]);
    }

    #[test]
    fn busy_engine_refuses_new_operations() {
        let mut app = app(&[1, 2]);
        press(&mut app, "d");
        assert!(app.engine.is_busy());

        press(&mut app, "e");
        assert_eq!(app.engine.values(), vec![2]);
        assert!(app.status_message.starts_with("Animation in progress"));

        press(&mut app, "a");
        assert!(app.prompt.is_none());

        app.engine.advance(Duration::from_millis(500));
        press(&mut app, "e");
        assert!(app.engine.is_empty());
    }

    #[test]
    fn mode_key_cycles_list_type() {
        let mut app = app(&[1]);
        press(&mut app, "m");
        assert_eq!(app.engine.mode(), ListMode::Doubly);
        press(&mut app, "m");
        assert_eq!(app.engine.mode(), ListMode::Circular);
    }

    #[test]
    fn search_miss_is_reported() {
        let mut app = app(&[1]);
        press(&mut app, "/8\n");
        assert_eq!(app.status_message, "Value 8 not found in the list");
    }
}
