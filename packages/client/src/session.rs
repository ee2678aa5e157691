//! WebSocket client session management.

use futures_util::{SinkExt, StreamExt};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use synonym_sleuth_shared::{
    protocol::{ClientEvent, ServerMessage},
    time::now_millis,
};
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::protocol::Message};

use crate::{
    command::{HELP, UserCommand, parse_command},
    error::ClientError,
    formatter::MessageFormatter,
    ui::{prompt, redisplay_prompt},
};

/// Run one WebSocket client session
///
/// Joins `room_id` as `name`, then relays input lines until `/quit`,
/// end of input, or the server closing the connection.
pub async fn run_client_session(url: &str, room_id: &str, name: &str) -> Result<(), ClientError> {
    let (ws_stream, _response) = connect_async(url)
        .await
        .map_err(|e| ClientError::ConnectionError(e.to_string()))?;

    tracing::info!("Connected to {}", url);

    let (mut write, mut read) = ws_stream.split();

    let join = serde_json::to_string(&ClientEvent::JoinRoom {
        room_id: room_id.to_string(),
        name: name.to_string(),
    })?;
    write
        .send(Message::Text(join.into()))
        .await
        .map_err(|e| ClientError::ConnectionError(e.to_string()))?;

    print!("{}", MessageFormatter::format_welcome(room_id, name));

    // Spawn a task to handle incoming messages
    let name_for_read = name.to_string();
    let mut read_task = tokio::spawn(async move {
        let mut connection_error = false;

        while let Some(message) = read.next().await {
            match message {
                Ok(Message::Text(text)) => {
                    let formatted = match serde_json::from_str::<ServerMessage>(&text) {
                        Ok(ServerMessage::Message { content }) => {
                            MessageFormatter::format_server_message(&content, now_millis())
                        }
                        Err(_) => MessageFormatter::format_raw_message(&text),
                    };
                    print!("{}", formatted);
                    redisplay_prompt(&name_for_read);
                }
                Ok(Message::Close(_)) => {
                    tracing::info!("Server closed the connection");
                    connection_error = true;
                    break;
                }
                Err(e) => {
                    tracing::warn!("WebSocket read error: {}", e);
                    connection_error = true;
                    break;
                }
                _ => {}
            }
        }

        connection_error
    });

    // Create channel for rustyline input
    let (input_tx, mut input_rx) = mpsc::unbounded_channel::<UserCommand>();

    // Spawn a blocking thread for rustyline (synchronous readline)
    let prompt_text = prompt(name);
    let _readline_handle = std::thread::spawn(move || {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(e) => {
                eprintln!("Failed to initialize readline: {}", e);
                return;
            }
        };

        loop {
            match rl.readline(&prompt_text) {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    rl.add_history_entry(line.as_str()).ok();
                    let command = parse_command(&line);
                    let quit = command == UserCommand::Quit;
                    if input_tx.send(command).is_err() || quit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    // Ctrl+C
                    tracing::info!("Interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    // Ctrl+D
                    tracing::info!("EOF");
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {}", err);
                    break;
                }
            }
        }
    });

    // Spawn a task to send commands to the server
    let name_for_write = name.to_string();
    let mut write_task = tokio::spawn(async move {
        let mut write_error = false;

        while let Some(command) = input_rx.recv().await {
            let event = match command {
                UserCommand::Quit => break,
                UserCommand::Help => {
                    println!("{}", HELP);
                    continue;
                }
                UserCommand::Unknown(command) => {
                    println!("Unknown command '{}'.\n{}", command, HELP);
                    continue;
                }
                command => match command.into_event() {
                    Some(event) => event,
                    None => continue,
                },
            };

            let json = match serde_json::to_string(&event) {
                Ok(json) => json,
                Err(e) => {
                    tracing::error!("Failed to serialize event: {}", e);
                    continue;
                }
            };

            if let Err(e) = write.send(Message::Text(json.into())).await {
                tracing::warn!("Failed to send event: {}", e);
                write_error = true;
                break;
            }
        }

        write.close().await.ok();
        tracing::debug!("Input closed for '{}'", name_for_write);
        write_error
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        read_result = &mut read_task => {
            write_task.abort();
            if read_result.unwrap_or(false) {
                return Err(ClientError::ConnectionLost);
            }
        }
        write_result = &mut write_task => {
            read_task.abort();
            if write_result.unwrap_or(false) {
                return Err(ClientError::ConnectionLost);
            }
        }
    }

    Ok(())
}
