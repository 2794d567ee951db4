mod records;

use std::time::Duration;

use api_types::summary::CategorySummary;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::{
    client::{Client, ClientError},
    config::AppConfig,
    error::{AppError, Result},
    ui::{
        self,
        keymap::{AppAction, map_key},
    },
};

pub use records::{FormField, RecordListView};

#[cfg(test)]
pub(crate) use records::view_with_records;

/// Grand total and per-category sums, fetched when the panel opens.
#[derive(Debug)]
pub enum SummaryState {
    Loaded {
        total: i64,
        categories: CategorySummary,
    },
    Unavailable,
}

#[derive(Debug)]
pub struct AppState {
    pub view: RecordListView,
    pub summary: Option<SummaryState>,
    pub base_url: String,
}

pub struct App {
    client: Client,
    pub state: AppState,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = Client::new(&config.base_url)?;
        let state = AppState {
            view: RecordListView::new(),
            summary: None,
            base_url: config.base_url,
        };

        Ok(Self {
            client,
            state,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal).await;
        ui::restore_terminal(&mut terminal)?;
        result
    }

    fn draw(&self, terminal: &mut ui::Terminal) -> Result<()> {
        terminal
            .draw(|frame| ui::render(frame, &self.state))
            .map_err(|err| AppError::Terminal(err.to_string()))?;
        Ok(())
    }

    async fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        // First paint, then the initial fetch.
        self.draw(terminal)?;
        self.state.view.load(&self.client).await;

        while !self.should_quit {
            self.draw(terminal)?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key).await;
                    }
                    _ => {}
                }
            }
        }

        Ok(())
    }

    async fn handle_key(&mut self, key: KeyEvent) {
        match map_key(key) {
            AppAction::Quit => {
                self.should_quit = true;
            }
            AppAction::Cancel => {
                if self.state.summary.take().is_none() {
                    self.should_quit = true;
                }
            }
            AppAction::ToggleSummary => {
                self.toggle_summary().await;
            }
            // The overlay hides the form; form keys are dropped until it closes.
            _ if self.state.summary.is_some() => {}
            AppAction::NextField => self.state.view.focus_next(),
            AppAction::PrevField => self.state.view.focus_prev(),
            AppAction::Submit => self.submit().await,
            AppAction::Backspace => self.state.view.backspace(),
            AppAction::Input(ch) => self.state.view.input(ch),
            AppAction::None => {}
        }
    }

    async fn submit(&mut self) {
        // The view leaves submit failures to us; nothing is shown to the user.
        if let Err(err) = self.state.view.submit(&self.client).await {
            tracing::warn!("unhandled error while submitting record: {err}");
        }
    }

    async fn toggle_summary(&mut self) {
        if self.state.summary.take().is_some() {
            return;
        }

        let summary = match fetch_summary(&self.client).await {
            Ok(summary) => summary,
            Err(err) => {
                tracing::error!("failed to load summary: {err}");
                SummaryState::Unavailable
            }
        };
        self.state.summary = Some(summary);
    }
}

async fn fetch_summary(client: &Client) -> std::result::Result<SummaryState, ClientError> {
    let total = client.records_total().await?;
    let categories = client.records_summary().await?;
    Ok(SummaryState::Loaded {
        total: total.total,
        categories,
    })
}
