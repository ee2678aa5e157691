//! Input line parsing.
//!
//! Lines starting with `/` are commands, everything else is chat text.

use synonym_sleuth_shared::protocol::ClientEvent;

/// What the user asked for with one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    /// Plain chat text
    Chat(String),
    /// `/secret`: start a round
    SendSecretWord,
    /// `/reveal`: reveal the sleuth of the last round
    RevealSleuth,
    /// `/help`
    Help,
    /// `/quit`
    Quit,
    /// A `/...` line that is not a known command
    Unknown(String),
}

/// Usage shown for `/help` and unknown commands
pub const HELP: &str = "\
Commands:
  /secret   start a round (needs at least 3 players)
  /reveal   reveal the sleuth of the last round
  /help     show this help
  /quit     leave the room
Anything else is sent as chat.";

pub fn parse_command(line: &str) -> UserCommand {
    let trimmed = line.trim();
    if !trimmed.starts_with('/') {
        return UserCommand::Chat(line.to_string());
    }

    match trimmed {
        "/secret" => UserCommand::SendSecretWord,
        "/reveal" => UserCommand::RevealSleuth,
        "/help" => UserCommand::Help,
        "/quit" | "/exit" => UserCommand::Quit,
        other => UserCommand::Unknown(other.to_string()),
    }
}

impl UserCommand {
    /// The event to send to the server, if this command sends one
    pub fn into_event(self) -> Option<ClientEvent> {
        match self {
            Self::Chat(text) => Some(ClientEvent::ChatMessage { text }),
            Self::SendSecretWord => Some(ClientEvent::SendSecretWord),
            Self::RevealSleuth => Some(ClientEvent::RevealSleuth),
            Self::Help | Self::Quit | Self::Unknown(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_game_commands() {
        // テスト項目: ゲーム用のコマンドが対応するイベントに変換される
        // given (前提条件):
        let secret = "/secret";
        let reveal = "  /reveal  ";

        // when (操作):
        let secret = parse_command(secret);
        let reveal = parse_command(reveal);

        // then (期待する結果):
        assert_eq!(secret, UserCommand::SendSecretWord);
        assert_eq!(reveal, UserCommand::RevealSleuth);
        assert_eq!(secret.into_event(), Some(ClientEvent::SendSecretWord));
        assert_eq!(reveal.into_event(), Some(ClientEvent::RevealSleuth));
    }

    #[test]
    fn test_plain_text_is_chat() {
        // テスト項目: スラッシュで始まらない行はそのままチャットとして送られる
        // given (前提条件):
        let line = "is it something you eat?";

        // when (操作):
        let command = parse_command(line);

        // then (期待する結果):
        assert_eq!(
            command.into_event(),
            Some(ClientEvent::ChatMessage {
                text: "is it something you eat?".to_string()
            })
        );
    }

    #[test]
    fn test_local_commands_send_nothing() {
        // テスト項目: /quit, /help, 未知のコマンドはサーバーに何も送らない
        // given (前提条件):
        let lines = ["/quit", "/help", "/kick Dana"];

        for line in lines {
            // when (操作):
            let event = parse_command(line).into_event();

            // then (期待する結果):
            assert_eq!(event, None, "line = {}", line);
        }
        assert_eq!(
            parse_command("/kick Dana"),
            UserCommand::Unknown("/kick Dana".to_string())
        );
    }
}
