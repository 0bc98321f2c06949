use crate::{
    game::{DisplayCommand, Game, GameError, Grid, Transition},
    models::{ClickEvent, Point, Position},
    websocket::messages::{ClientMessage, ServerMessage},
    AppState, GameSession,
};
use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::IntoResponse,
};
use chrono::Utc;
use futures::{sink::SinkExt, stream::StreamExt};
use std::sync::Arc;
use tokio::sync::mpsc;
use uuid::Uuid;

type SessionGame = Game<Vec<DisplayCommand>>;

/// WebSocket upgrade handler; every connection plays its own game
pub async fn handle_websocket(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Handle individual WebSocket connection
async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let session_id = Uuid::new_v4();
    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::channel::<ServerMessage>(100);

    let mut game = Game::new(
        Grid::standard(state.layout),
        state.lexicon.clone(),
        Vec::new(),
    );
    if let Err(e) = game.new_game() {
        tracing::error!("Failed to deal board for session {}: {}", session_id, e);
        return;
    }
    // The welcome message carries the initial letters
    game.sink_mut().clear();

    state
        .active_games
        .insert(session_id, GameSession::new(session_id));
    tracing::info!("Game session {} started", session_id);

    let welcome = ServerMessage::Welcome {
        session_id,
        layout: state.layout,
        letters: game.grid().letters(),
    };
    let _ = tx.send(welcome).await;

    // Spawn a task to send messages to the client
    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            let is_final = matches!(msg, ServerMessage::GameOver { .. });
            match serde_json::to_string(&msg) {
                Ok(json) => {
                    if sender.send(Message::Text(json.into())).await.is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to serialize message: {}", e);
                }
            }
            if is_final {
                let _ = sender.send(Message::Close(None)).await;
                break;
            }
        }
    });

    // Handle incoming messages from the client, one event at a time
    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(msg)) = receiver.next().await {
            match msg {
                Message::Text(text) => match serde_json::from_str::<ClientMessage>(&text) {
                    Ok(client_msg) => match handle_client_message(client_msg, &mut game, &tx).await
                    {
                        Ok(true) => {}
                        Ok(false) => break,
                        Err(e) => {
                            tracing::error!(
                                "Game session {} hit an invariant breach: {}",
                                session_id,
                                e
                            );
                            let error_msg = ServerMessage::Error {
                                message: e.to_string(),
                            };
                            let _ = tx.send(error_msg).await;
                            break;
                        }
                    },
                    Err(e) => {
                        tracing::error!("Failed to parse message: {}", e);
                        let error_msg = ServerMessage::Error {
                            message: format!("Invalid message format: {}", e),
                        };
                        let _ = tx.send(error_msg).await;
                    }
                },
                Message::Close(_) => {
                    tracing::info!("Client for session {} disconnected", session_id);
                    break;
                }
                _ => {}
            }
        }
    });

    // Let queued replies drain once the receiving side is done
    let recv_finished = tokio::select! {
        _ = (&mut send_task) => false,
        _ = (&mut recv_task) => true,
    };
    if recv_finished {
        let _ = send_task.await;
    } else {
        recv_task.abort();
    }

    if let Some((_, session)) = state.active_games.remove(&session_id) {
        let played = Utc::now() - session.started_at;
        tracing::info!(
            "Game session {} closed after {}s",
            session.session_id,
            played.num_seconds()
        );
    }
}

/// Apply one client event and forward the resulting display commands.
/// Returns `Ok(false)` once the game is over.
async fn handle_client_message(
    msg: ClientMessage,
    game: &mut SessionGame,
    tx: &mpsc::Sender<ServerMessage>,
) -> Result<bool, GameError> {
    let transition = match msg {
        ClientMessage::Click { x, y } => game.handle_point(Point::new(x, y))?,
        ClientMessage::SelectCell { row, col } => {
            game.handle_click(ClickEvent::Cell(Position::new(row, col)))?
        }
        ClientMessage::Reset => game.handle_click(ClickEvent::Reset)?,
        ClientMessage::Exit => game.handle_click(ClickEvent::Exit)?,
    };
    tracing::debug!("Transition {:?}, now {:?}", transition, game.state());

    let commands = std::mem::take(game.sink_mut());
    if !commands.is_empty() {
        let _ = tx.send(ServerMessage::Display { commands }).await;
    }

    if transition == Transition::Exited {
        let game_over = ServerMessage::GameOver {
            found_words: game.found_words().to_vec(),
            score: game.score(),
        };
        let _ = tx.send(game_over).await;
        return Ok(false);
    }

    Ok(true)
}
