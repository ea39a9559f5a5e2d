//! TUI application model (Elm architecture).

use std::io;
use std::time::Duration;

use crossbeam_channel::Receiver;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;

use rackcalc_core::constants::MAX_RACK_TOTAL;
use rackcalc_core::{InputField, RackInputs, RackLayout, RawInputs};

use crate::distribution::{render_distribution, DistributionScroll};
use crate::footer::render_footer;
use crate::form::{render_form, FORM_HEIGHT, MAX_FIELD_LEN};
use crate::header::render_header;
use crate::keymap::{map_key, KeyAction};
use crate::messages::TuiMessage;
use crate::results::render_results;

/// Racks moved per PageUp/PageDown.
pub const PAGE_SIZE: usize = 10;

/// TUI application state (Elm Model).
pub struct TuiApp {
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Field text exactly as typed.
    pub raw: RawInputs,
    /// Field receiving keystrokes.
    pub focused: InputField,
    /// Show the per-rack list.
    pub show_distribution: bool,
    pub scroll: DistributionScroll,
    /// Inputs after lenient coercion.
    pub inputs: RackInputs,
    /// Layout for `inputs`, recomputed on every edit.
    pub layout: RackLayout,
    /// Latest status line.
    pub status: Option<String>,
    /// Message receiver.
    rx: Receiver<TuiMessage>,
}

impl TuiApp {
    /// Create a new TUI app with empty fields.
    #[must_use]
    pub fn new(rx: Receiver<TuiMessage>) -> Self {
        Self {
            should_quit: false,
            raw: RawInputs::default(),
            focused: InputField::TotalServers,
            show_distribution: false,
            scroll: DistributionScroll::new(),
            inputs: RackInputs::default(),
            layout: RackLayout::default(),
            status: None,
            rx,
        }
    }

    /// Replace all four fields and recompute.
    pub fn set_inputs(&mut self, raw: RawInputs) {
        self.raw = raw;
        self.recompute();
    }

    /// Derive inputs and layout from the raw fields.
    pub fn recompute(&mut self) {
        self.inputs = self.raw.to_inputs_lenient();
        self.layout = self.inputs.layout();
        if self.layout.rack_limit_exceeded {
            self.status = Some(format!(
                "Rack total above {MAX_RACK_TOTAL} is not supported"
            ));
        }
        self.scroll.clamp(self.layout.distribution.len());
        tracing::trace!(inputs = ?self.inputs, valid = self.layout.valid, "recomputed");
    }

    /// Clear every field and hide the distribution.
    pub fn reset(&mut self) {
        self.raw.clear();
        self.show_distribution = false;
        self.scroll.home();
        self.focused = InputField::TotalServers;
        self.recompute();
        self.status = Some("Inputs reset".to_string());
    }

    /// Update the model with incoming messages (Elm Update).
    pub fn update(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            self.handle_message(msg);
        }
    }

    /// Handle a single message.
    pub fn handle_message(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::KeyPress(action) => self.handle_key_action(action),
            TuiMessage::SetInputs(raw) => self.set_inputs(raw),
            TuiMessage::Log(text) => self.status = Some(text),
            TuiMessage::Quit => self.should_quit = true,
        }
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        let total = self.layout.distribution.len();
        match action {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::NextField => self.focused = self.focused.next(),
            KeyAction::PrevField => self.focused = self.focused.prev(),
            KeyAction::Input(c) => {
                let field = self.raw.get_mut(self.focused);
                if field.len() < MAX_FIELD_LEN {
                    field.push(c);
                    self.status = None;
                    self.recompute();
                }
            }
            KeyAction::Backspace => {
                if self.raw.get_mut(self.focused).pop().is_some() {
                    self.status = None;
                    self.recompute();
                }
            }
            KeyAction::ClearField => {
                self.raw.get_mut(self.focused).clear();
                self.status = None;
                self.recompute();
            }
            KeyAction::ToggleDistribution => self.show_distribution = !self.show_distribution,
            KeyAction::Reset => self.reset(),
            KeyAction::ScrollUp => self.scroll.scroll_up(),
            KeyAction::ScrollDown => self.scroll.scroll_down(total),
            KeyAction::PageUp => self.scroll.page_up(PAGE_SIZE),
            KeyAction::PageDown => self.scroll.page_down(PAGE_SIZE, total),
            KeyAction::Home => self.scroll.home(),
            KeyAction::End => self.scroll.end(total),
            KeyAction::None => {}
        }
    }

    /// Compute the screen layout.
    ///
    /// Returns (header, form, results, distribution, footer). The distribution
    /// rect is `None` while the list is hidden.
    #[must_use]
    pub fn compute_layout(area: Rect, show_distribution: bool) -> (Rect, Rect, Rect, Option<Rect>, Rect) {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),           // header
                Constraint::Length(FORM_HEIGHT), // form
                Constraint::Min(5),              // results
                Constraint::Length(2),           // footer
            ])
            .split(area);

        if !show_distribution {
            return (outer[0], outer[1], outer[2], None, outer[3]);
        }

        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(60), // results
                Constraint::Percentage(40), // distribution
            ])
            .split(outer[2]);

        (outer[0], outer[1], main[0], Some(main[1]), outer[3])
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let (header_area, form_area, results_area, distribution_area, footer_area) =
            Self::compute_layout(frame.area(), self.show_distribution);

        render_header(
            frame,
            header_area,
            self.layout.valid,
            self.layout.distribution.len(),
        );
        render_form(frame, form_area, &self.raw, self.focused);
        render_results(frame, results_area, &self.inputs, &self.layout);
        if let Some(area) = distribution_area {
            render_distribution(frame, area, &self.layout, self.scroll.offset);
        }
        render_footer(
            frame,
            footer_area,
            self.show_distribution,
            self.status.as_deref(),
        );
    }

    /// Set up the terminal for TUI mode.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop.
    ///
    /// The terminal is restored even when the loop fails.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        Self::teardown_terminal(&mut terminal)?;
        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        let tick_rate = Duration::from_millis(250);

        loop {
            terminal.draw(|frame| {
                self.render(frame);
            })?;

            if self.should_quit {
                return Ok(());
            }

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                        self.handle_key_action(map_key(key_event));
                    }
                    // Resizes need no state; the next draw picks up the new size.
                    _ => {}
                }
            }

            // Messages from outside the event loop, e.g. SIGINT
            self.update();
        }
    }
}
