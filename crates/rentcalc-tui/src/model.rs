//! TUI application model (Elm architecture).

use std::io;
use std::time::{Duration, Instant};

use crossbeam_channel::Receiver;
use crossterm::event::{self, Event};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{event::DisableMouseCapture, event::EnableMouseCapture, execute};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;

use rentcalc_core::constants::TICK_INTERVAL_MS;
use rentcalc_core::search::search_url;
use rentcalc_core::{bills_estimate, City, CountUp, SearchAction};

use crate::footer::render_footer;
use crate::form::render_form;
use crate::header::render_header;
use crate::keymap::{map_key, Focus, KeyAction};
use crate::launcher::SearchLauncher;
use crate::messages::TuiMessage;
use crate::results::{render_action, render_results, ResultsView};
use crate::styles::ColorTheme;

/// TUI application state (Elm Model).
pub struct CalcApp {
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Raw income text, stored verbatim.
    pub income: String,
    /// Selected city, `None` until the user picks one.
    pub city: Option<City>,
    /// Which field receives input.
    pub focus: Focus,
    /// Count-up animator for the rent figure.
    count_up: CountUp,
    /// Animation window for each retarget.
    animation: Duration,
    /// Last target handed to the animator, to skip no-op retargets.
    last_target: i64,
    /// One-line status under the action control.
    pub status: Option<String>,
    /// Terminal width.
    pub terminal_width: u16,
    /// Terminal height.
    pub terminal_height: u16,
    /// Message receiver.
    rx: Receiver<TuiMessage>,
    /// Browser launch seam.
    launcher: Box<dyn SearchLauncher>,
    /// Color theme.
    theme: ColorTheme,
}

impl CalcApp {
    /// Create a new app.
    #[must_use]
    pub fn new(
        rx: Receiver<TuiMessage>,
        animation: Duration,
        launcher: Box<dyn SearchLauncher>,
    ) -> Self {
        Self {
            should_quit: false,
            income: String::new(),
            city: None,
            focus: Focus::default(),
            count_up: CountUp::new(),
            animation,
            last_target: 0,
            status: None,
            terminal_width: 80,
            terminal_height: 24,
            rx,
            launcher,
            theme: ColorTheme::default(),
        }
    }

    /// Prefill the income field (CLI flag passthrough).
    pub fn set_income(&mut self, income: impl Into<String>) {
        self.income = income.into();
        self.refresh_animation(Instant::now());
    }

    /// Prefill the city selection (CLI flag passthrough).
    pub fn set_city(&mut self, city: Option<City>) {
        self.city = city;
    }

    /// The derived affordable monthly rent.
    #[must_use]
    pub fn affordable_rent(&self) -> f64 {
        rentcalc_core::affordable_rent(&self.income)
    }

    /// The derived bills estimate for the current selection.
    #[must_use]
    pub fn bills_gbp(&self) -> u32 {
        bills_estimate(self.city)
    }

    /// The derived search-control state.
    #[must_use]
    pub fn action(&self) -> SearchAction {
        SearchAction::derive(self.city, self.affordable_rent())
    }

    /// The animator's currently displayed value.
    #[must_use]
    pub fn animated_rent(&self) -> i64 {
        self.count_up.displayed()
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
            TuiMessage::Tick => {
                self.advance_animation(Instant::now());
            }
            TuiMessage::KeyPress(action) => {
                self.handle_key_action(action);
            }
            TuiMessage::Resize { width, height } => {
                self.terminal_width = width;
                self.terminal_height = height;
            }
            TuiMessage::Quit => {
                self.should_quit = true;
            }
        }
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => {
                self.should_quit = true;
            }
            KeyAction::FocusNext | KeyAction::FocusPrev => {
                self.focus = self.focus.toggled();
            }
            KeyAction::InsertChar(c) => {
                self.income.push(c);
                self.refresh_animation(Instant::now());
            }
            KeyAction::DeleteChar => {
                self.income.pop();
                self.refresh_animation(Instant::now());
            }
            KeyAction::CityNext => {
                self.city = cycle_city(self.city, true);
            }
            KeyAction::CityPrev => {
                self.city = cycle_city(self.city, false);
            }
            KeyAction::Search => {
                self.open_search();
            }
            KeyAction::None => {}
        }
    }

    /// Retarget the animator if the derived rent changed.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn refresh_animation(&mut self, now: Instant) {
        let target = self.affordable_rent().round().max(0.0) as i64;
        if target != self.last_target {
            self.count_up.set_target(target as f64, self.animation, now);
            self.last_target = target;
        }
    }

    /// Advance the animation; returns `true` while frames are still wanted.
    pub fn advance_animation(&mut self, now: Instant) -> bool {
        self.count_up.tick(now)
    }

    /// Open the outbound property search.
    ///
    /// A no-op unless a city is selected and a rent was derived.
    pub fn open_search(&mut self) {
        let Some(city) = self.city else { return };
        let Some(url) = search_url(city, self.affordable_rent()) else {
            return;
        };
        match self.launcher.open(url.as_str()) {
            Ok(()) => {
                self.status = Some(format!("Opened search for {city}"));
            }
            Err(err) => {
                tracing::warn!(%err, "browser launch failed");
                self.status = Some(format!("Could not open browser: {err}"));
            }
        }
    }

    /// Compute the vertical panel layout.
    ///
    /// Returns (header, form, results, action, footer) rects.
    #[must_use]
    pub fn compute_layout(area: Rect) -> (Rect, Rect, Rect, Rect, Rect) {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Length(6), // form (income + city)
                Constraint::Min(5),    // results
                Constraint::Length(4), // action + status
                Constraint::Length(3), // footer
            ])
            .split(area);

        (outer[0], outer[1], outer[2], outer[3], outer[4])
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let (header_area, form_area, results_area, action_area, footer_area) =
            Self::compute_layout(frame.area());

        render_header(frame, header_area, &self.theme);
        render_form(
            frame,
            form_area,
            &self.income,
            self.city,
            self.focus,
            &self.theme,
        );

        let view = ResultsView {
            animated_rent: self.animated_rent(),
            rent_positive: self.affordable_rent() > 0.0,
            bills_gbp: self.bills_gbp(),
            city_selected: self.city.is_some(),
        };
        render_results(frame, results_area, &view, &self.theme);
        render_action(
            frame,
            action_area,
            self.action(),
            self.status.as_deref(),
            &self.theme,
        );
        render_footer(frame, footer_area, &self.theme);
    }

    /// Set up the terminal for TUI mode.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop.
    ///
    /// Sets up the terminal, runs the main loop (poll events, update,
    /// render), and tears down on exit. Animation frames arrive as
    /// `Tick` messages from the shell's ticker thread.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;

        let poll_interval = Duration::from_millis(TICK_INTERVAL_MS);

        loop {
            terminal.draw(|frame| {
                self.render(frame);
            })?;

            if self.should_quit {
                break;
            }

            if event::poll(poll_interval)? {
                match event::read()? {
                    Event::Key(key_event) => {
                        let action = map_key(key_event, self.focus);
                        self.handle_key_action(action);
                    }
                    Event::Resize(w, h) => {
                        self.terminal_width = w;
                        self.terminal_height = h;
                    }
                    _ => {}
                }
            }

            self.update();
        }

        // No frame may land after teardown.
        self.count_up.cancel();
        Self::teardown_terminal(&mut terminal)?;
        Ok(())
    }
}

/// Cycle the city selection; the first press selects an end of the list.
fn cycle_city(current: Option<City>, forward: bool) -> Option<City> {
    let all = City::all();
    let next = match current {
        None => {
            if forward {
                all[0]
            } else {
                all[all.len() - 1]
            }
        }
        Some(city) => {
            let idx = all.iter().position(|&c| c == city).unwrap_or(0);
            if forward {
                all[(idx + 1) % all.len()]
            } else {
                all[(idx + all.len() - 1) % all.len()]
            }
        }
    };
    Some(next)
}
