//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them.
//!
//! ## Inbox Pattern
//!
//! Async handlers send `UiEvent`s to `inbox_tx`; the runtime drains
//! `inbox_rx` each frame before rendering, so completions are applied in
//! order (a `*Started` event always precedes its `*Finished`).

mod handlers;

use std::future::Future;
use std::io::Stdout;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use beescore_core::auth::AuthClient;
use beescore_core::config::Config;
use beescore_core::session::{self, SessionStore};
use crossterm::event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::effects::UiEffect;
use crate::events::{AuthUiEvent, UiEvent};
use crate::state::AppState;
use crate::task::TaskStarted;
use crate::{render, terminal, update};

/// Poll duration for terminal events between frames.
const POLL_DURATION: Duration = Duration::from_millis(50);

/// Full-screen TUI runtime.
///
/// Owns the terminal, the application state, the HTTP client, and the
/// injected session store. `run` must be called from within a tokio runtime
/// context; effect handlers are spawned onto it.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    inbox_tx: mpsc::UnboundedSender<UiEvent>,
    inbox_rx: mpsc::UnboundedReceiver<UiEvent>,
    client: Arc<AuthClient>,
    store: Box<dyn SessionStore>,
}

impl TuiRuntime {
    /// Creates a new TUI runtime.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub fn new(config: Config, client: AuthClient, store: Box<dyn SessionStore>) -> Result<Self> {
        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            state: AppState::new(config),
            inbox_tx,
            inbox_rx,
            client: Arc::new(client),
            store,
        })
    }

    /// Runs the main event loop.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub fn run(&mut self) -> Result<()> {
        let result = self.event_loop();
        let _ = terminal::restore_terminal();
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        while !self.state.should_quit {
            // Drain async results first so completions render this frame.
            while let Ok(event) = self.inbox_rx.try_recv() {
                self.dispatch(event);
            }

            self.terminal
                .draw(|frame| render::render(&self.state, frame))
                .context("Failed to draw frame")?;

            if event::poll(POLL_DURATION).context("Failed to poll terminal events")? {
                let term_event = event::read().context("Failed to read terminal event")?;
                self.dispatch(UiEvent::Terminal(term_event));
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, event: UiEvent) {
        let effects = update::update(&mut self.state, event);
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::SubmitLogin { task, input } => {
                let token = CancellationToken::new();
                self.send(UiEvent::Auth(AuthUiEvent::LoginStarted(TaskStarted {
                    id: task,
                    cancel: Some(token.clone()),
                })));
                let client = Arc::clone(&self.client);
                self.spawn_cancellable(token, handlers::login_submit(client, input, task));
            }
            UiEffect::SubmitSignup { task, input } => {
                let token = CancellationToken::new();
                self.send(UiEvent::Auth(AuthUiEvent::SignupStarted(TaskStarted {
                    id: task,
                    cancel: Some(token.clone()),
                })));
                let client = Arc::clone(&self.client);
                self.spawn_cancellable(token, handlers::signup_submit(client, input, task));
            }
            UiEffect::PersistSession { record } => {
                if let Err(error) = record.persist(self.store.as_mut()) {
                    tracing::warn!(error = %error, "failed to persist session");
                }
            }
            UiEffect::PersistUserId { uid } => {
                if let Err(error) = self.store.set(session::KEY_USER_ID, &uid) {
                    tracing::warn!(error = %error, "failed to persist user id");
                }
            }
            UiEffect::ScheduleRedirect { task, route, delay } => {
                let token = CancellationToken::new();
                self.send(UiEvent::Auth(AuthUiEvent::RedirectStarted(TaskStarted {
                    id: task,
                    cancel: Some(token.clone()),
                })));
                self.spawn_cancellable(token, handlers::redirect_after(delay, route, task));
            }
            UiEffect::CancelTask { kind, token } => {
                tracing::debug!(?kind, "cancelling task");
                if let Some(token) = token {
                    token.cancel();
                }
            }
        }
    }

    fn send(&self, event: UiEvent) {
        let _ = self.inbox_tx.send(event);
    }

    /// Spawns a handler future raced against a cancellation token.
    ///
    /// A cancelled handler produces no event at all, so the reducer never
    /// observes output from a torn-down task.
    fn spawn_cancellable<F>(&self, token: CancellationToken, future: F)
    where
        F: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        tokio::spawn(async move {
            tokio::select! {
                () = token.cancelled() => {}
                event = future => {
                    let _ = tx.send(event);
                }
            }
        });
    }
}
