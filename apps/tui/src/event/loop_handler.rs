use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use market_dashboard_core::{
    DashboardError, MarketData, PendingRequest, RequestToken, Settled, Suburb,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedSender};

use crate::app::{handle_input, App};
use crate::source::HttpSource;
use crate::ui;

/// Results delivered from background fetches back to the UI loop.
#[derive(Debug)]
enum Message {
    Suburbs(Result<Vec<Suburb>, DashboardError>),
    MarketData {
        token: RequestToken,
        outcome: Result<MarketData, DashboardError>,
    },
}

/// Run the main application event loop
pub async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    source: HttpSource,
) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    let (tx, mut rx) = mpsc::unbounded_channel();
    spawn_suburbs(&source, &tx);

    loop {
        app.update();

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if let Some(pending) = handle_input(app, key.code) {
                        spawn_fetch(&source, &tx, pending);
                    }
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    if terminal.draw(|f| ui::ui(app, f)).is_err() {
                        tracing::debug!("redraw after resize failed");
                    }
                }
                Ok(_) | Err(_) => {}
            }
        }

        while let Ok(message) = rx.try_recv() {
            if let Some(pending) = apply_message(app, message) {
                spawn_fetch(&source, &tx, pending);
            }
        }
    }

    Ok(())
}

fn apply_message(app: &mut App, message: Message) -> Option<PendingRequest> {
    match message {
        Message::Suburbs(result) => app.load_locations(result),
        Message::MarketData { token, outcome } => {
            if let Settled::Failed(error) = app.settle(token, outcome) {
                tracing::warn!(%error, "market data request failed");
            }
            None
        }
    }
}

fn spawn_suburbs(source: &HttpSource, tx: &UnboundedSender<Message>) {
    let source = source.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = source.suburbs().await;
        if tx.send(Message::Suburbs(result)).is_err() {
            tracing::debug!("ui closed before suburbs arrived");
        }
    });
}

fn spawn_fetch(source: &HttpSource, tx: &UnboundedSender<Message>, pending: PendingRequest) {
    let source = source.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let outcome = source.market_data(&pending.query).await;
        let message = Message::MarketData {
            token: pending.token,
            outcome,
        };
        if tx.send(message).is_err() {
            tracing::debug!(
                generation = pending.token.generation(),
                "ui closed before response arrived"
            );
        }
    });
}
