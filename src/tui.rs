//! Terminal front-end
//!
//! The event loop owns `TuiState` and is the only place it is mutated.
//! Submissions spawn the search on a tokio task and the outcome comes back
//! over a channel. At most one search is in flight: a new submission aborts
//! the previous one, which kills its child process.

pub mod input;
pub mod renderer;
pub mod state;

pub use input::{EditableText, InputOperation};
pub use renderer::TuiRenderer;
pub use state::{TuiAction, TuiState};

use crate::app::{apply_result, AppContext};
use crate::error::{GggError, Result};
use crate::parser::MatchRecord;
use crate::presenter;
use crate::query::normalize;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Result of a background search, tagged with the submission it belongs to
#[derive(Debug)]
pub struct SearchOutcome {
    pub generation: u64,
    pub result: Result<Vec<MatchRecord>>,
}

/// Tracks the single in-flight search
#[derive(Default)]
pub struct SearchSlot {
    generation: u64,
    handle: Option<JoinHandle<()>>,
}

impl SearchSlot {
    /// Start a search for `raw`, aborting any pending one. Returns false if
    /// the query normalized to nothing.
    pub fn submit(
        &mut self,
        ctx: &AppContext,
        raw: &str,
        tx: &mpsc::UnboundedSender<SearchOutcome>,
    ) -> bool {
        let Some(query) = normalize(raw) else {
            return false;
        };

        self.cancel();
        self.generation += 1;

        let generation = self.generation;
        let ctx = ctx.clone();
        let tx = tx.clone();
        log::debug!("Starting search #{} for {:?}", generation, query.as_str());
        self.handle = Some(tokio::spawn(async move {
            let result = ctx.search(&query).await;
            let _ = tx.send(SearchOutcome { generation, result });
        }));
        true
    }

    /// Whether `outcome` answers the latest submission
    pub fn is_current(&self, outcome: &SearchOutcome) -> bool {
        outcome.generation == self.generation
    }

    /// Abort the pending search, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            if !handle.is_finished() {
                log::debug!("Cancelling search #{}", self.generation);
            }
            handle.abort();
        }
    }

    /// Abort the pending search and wait until its task, and with it the
    /// child process, is gone.
    pub async fn shutdown(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            let _ = handle.await;
        }
    }
}

/// Run the interactive UI until the user quits.
pub async fn run_tui(ctx: AppContext) -> Result<()> {
    let mut terminal = setup_terminal().map_err(|e| GggError::LayoutInitError(e.to_string()))?;

    let mut state = TuiState::new(&ctx.base_dir);
    presenter::initialize(&mut state);

    let result = run_app(&mut terminal, &mut state, &ctx).await;
    let restored = restore_terminal(&mut terminal);
    finish(result, restored)
}

/// Combine the loop outcome with terminal restoration. The loop's own error
/// takes precedence over a failed restore.
fn finish(result: Result<()>, restored: io::Result<()>) -> Result<()> {
    result.and(restored.map_err(|e| GggError::RunLoopError(e.to_string())))
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    state: &mut TuiState,
    ctx: &AppContext,
) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<SearchOutcome>();
    let mut slot = SearchSlot::default();

    let result = loop {
        if let Err(e) = terminal.draw(|f| TuiRenderer::render(f, state)) {
            break Err(GggError::RunLoopError(e.to_string()));
        }

        if state.should_quit {
            break Ok(());
        }

        while let Ok(outcome) = rx.try_recv() {
            if slot.is_current(&outcome) {
                apply_result(outcome.result, state);
            } else {
                log::debug!("Dropping stale result of search #{}", outcome.generation);
            }
        }

        match next_key_action(state) {
            Ok(Some(TuiAction::Submit(raw))) => {
                if slot.submit(ctx, &raw, &tx) {
                    state.begin_search();
                }
            }
            Ok(Some(TuiAction::Quit)) | Ok(None) => {}
            Err(e) => break Err(GggError::RunLoopError(e.to_string())),
        }
    };

    slot.shutdown().await;
    result
}

/// Wait briefly for a key press and let the state handle it.
fn next_key_action(state: &mut TuiState) -> io::Result<Option<TuiAction>> {
    if event::poll(POLL_INTERVAL)? {
        if let Event::Key(key) = event::read()? {
            return Ok(state.handle_key(key));
        }
    }
    Ok(None)
}
