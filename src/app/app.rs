use std::{
    io,
    path::PathBuf,
    time::{Duration, Instant},
};

use anyhow::Result;
use chrono::{DateTime, Local};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{error, info};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    widgets::TableState,
};
use tokio::sync::mpsc::{self, error::TryRecvError};

use crate::{
    api::StocksApi,
    app::{
        dashboard::{HtmlDashboard, TerminalDashboard},
        html,
        refresh::{CycleOutcome, CycleResult, RefreshLoop, render_quotes},
        ui,
    },
    models::Quote,
};

const EVENT_POLL: Duration = Duration::from_millis(200);

pub struct App {
    refresh: RefreshLoop<StocksApi>,
    source: String,
    dashboard: TerminalDashboard,
    table_state: TableState,
    last_refreshed: Option<DateTime<Local>>,
    html_out: Option<PathBuf>,
}

impl App {
    pub fn new(api: StocksApi, interval: Duration, html_out: Option<PathBuf>) -> Self {
        Self {
            source: api.base_url().to_string(),
            refresh: RefreshLoop::new(api, interval),
            dashboard: TerminalDashboard::default(),
            table_state: TableState::default(),
            last_refreshed: None,
            html_out,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_app(&mut terminal).await;

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    async fn run_app<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel::<CycleResult>();

        self.refresh.spawn_cycle(tx.clone());
        let mut last_trigger = Instant::now();

        loop {
            terminal.draw(|frame| {
                ui::render(
                    frame,
                    &self.dashboard,
                    &mut self.table_state,
                    self.last_refreshed.as_ref(),
                    &self.source,
                )
            })?;

            loop {
                match rx.try_recv() {
                    Ok((seq, result)) => self.apply(seq, result),
                    Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
                }
            }

            if last_trigger.elapsed() >= self.refresh.interval() {
                last_trigger = Instant::now();
                self.refresh.spawn_cycle(tx.clone());
            }

            // Blocks this worker only; fetches run on their own tasks.
            if !event::poll(EVENT_POLL)? {
                continue;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Char('r') => {
                        if self.refresh.spawn_cycle(tx.clone()).is_some() {
                            last_trigger = Instant::now();
                        }
                    }
                    KeyCode::Esc => self.table_state.select(None),
                    KeyCode::Down => {
                        let rows = self.dashboard.table_body();
                        if !rows.is_empty() {
                            let i = match self.table_state.selected() {
                                Some(i) => {
                                    if i >= rows.len() - 1 {
                                        0
                                    } else {
                                        i + 1
                                    }
                                }
                                None => 0,
                            };
                            self.table_state.select(Some(i));
                        }
                    }
                    KeyCode::Up => {
                        let rows = self.dashboard.table_body();
                        if !rows.is_empty() {
                            let i = match self.table_state.selected() {
                                Some(i) => {
                                    if i == 0 {
                                        rows.len() - 1
                                    } else {
                                        i - 1
                                    }
                                }
                                None => 0,
                            };
                            self.table_state.select(Some(i));
                        }
                    }
                    _ => {}
                }
            }
        }
    }

    fn apply(&mut self, seq: u64, result: Result<Vec<Quote>>) {
        let quotes = match &result {
            Ok(quotes) if self.html_out.is_some() => Some(quotes.clone()),
            _ => None,
        };

        let outcome = self.refresh.complete(seq, result, &mut self.dashboard);
        if !matches!(outcome, CycleOutcome::Rendered(_)) {
            return;
        }

        self.last_refreshed = Some(Local::now());

        let row_count = self.dashboard.table_body().len();
        if self.table_state.selected().is_some_and(|i| i >= row_count) {
            self.table_state.select(None);
        }

        if let (Some(path), Some(quotes)) = (&self.html_out, quotes) {
            let mut page = HtmlDashboard::default();
            let written = render_quotes(&mut page, &quotes).and_then(|_| html::write_page(path, &page));
            match written {
                Ok(()) => info!("Dashboard page written to {}", path.display()),
                Err(e) => error!("Failed to write dashboard page: {:?}", e),
            }
        }
    }
}
