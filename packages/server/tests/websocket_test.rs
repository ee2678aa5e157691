//! End-to-end tests driving the server over real WebSocket / HTTP connections.

use std::{net::SocketAddr, sync::Arc, time::Duration};

use futures_util::{SinkExt, StreamExt};
use synonym_sleuth_server::{
    domain::{RandomSource, Word, WordList},
    infrastructure::{
        message_pusher::WebSocketMessagePusher, repository::InMemorySleuthRepository,
    },
    ui::Server,
    usecase::GameCoordinator,
};
use synonym_sleuth_shared::protocol::{ClientEvent, ServerMessage};
use tokio::net::TcpStream;
use tokio_tungstenite::{
    MaybeTlsStream, WebSocketStream, connect_async, tungstenite::protocol::Message,
};

type Client = WebSocketStream<MaybeTlsStream<TcpStream>>;

const RECV_TIMEOUT: Duration = Duration::from_secs(2);

/// Always picks the first candidate: the earliest joined member and the first word
struct FirstPick;

impl RandomSource for FirstPick {
    fn pick_index(&self, _len: usize) -> usize {
        0
    }
}

struct TestServer {
    addr: SocketAddr,
    _static_dir: tempfile::TempDir,
}

impl TestServer {
    async fn start() -> Self {
        let static_dir = tempfile::tempdir().unwrap();
        std::fs::write(static_dir.path().join("login.html"), "<h1>login</h1>").unwrap();
        std::fs::write(static_dir.path().join("room.html"), "<h1>room</h1>").unwrap();

        let words = WordList::new(vec![Word::new("apple"), Word::new("river")]).unwrap();
        let coordinator = GameCoordinator::new(
            Arc::new(WebSocketMessagePusher::new()),
            Arc::new(InMemorySleuthRepository::new()),
            Arc::new(FirstPick),
            Arc::new(words),
        );
        let router = Server::new(coordinator, static_dir.path().to_path_buf()).into_router();

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            addr,
            _static_dir: static_dir,
        }
    }

    fn ws_url(&self) -> String {
        format!("ws://{}/ws", self.addr)
    }

    fn http_url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

async fn send(client: &mut Client, event: ClientEvent) {
    let json = serde_json::to_string(&event).unwrap();
    client.send(Message::Text(json.into())).await.unwrap();
}

async fn recv(client: &mut Client) -> String {
    loop {
        let frame = tokio::time::timeout(RECV_TIMEOUT, client.next())
            .await
            .expect("timed out waiting for a message")
            .expect("connection closed")
            .unwrap();
        if let Message::Text(text) = frame {
            let ServerMessage::Message { content } = serde_json::from_str(text.as_str()).unwrap();
            return content;
        }
    }
}

/// Connect and join, waiting until the client sees its own join notice
async fn join(server: &TestServer, room_id: &str, name: &str) -> Client {
    let (mut client, _) = connect_async(server.ws_url()).await.unwrap();
    send(
        &mut client,
        ClientEvent::JoinRoom {
            room_id: room_id.to_string(),
            name: name.to_string(),
        },
    )
    .await;
    assert_eq!(recv(&mut client).await, format!("{} has joined the room.", name));
    client
}

#[tokio::test]
async fn test_round_and_reveal_over_websocket() {
    // テスト項目: 3 人のルームでラウンドを開始し、公開で sleuth の名前が全員に届く
    // given (前提条件):
    let server = TestServer::start().await;
    let mut alice = join(&server, "R1", "Alice").await;
    let mut bob = join(&server, "R1", "Bob").await;
    assert_eq!(recv(&mut alice).await, "Bob has joined the room.");
    let mut carol = join(&server, "R1", "Carol").await;
    assert_eq!(recv(&mut alice).await, "Carol has joined the room.");
    assert_eq!(recv(&mut bob).await, "Carol has joined the room.");

    // when (操作):
    send(&mut bob, ClientEvent::SendSecretWord).await;

    // then (期待する結果): 最初に参加した Alice が sleuth になり、他の 2 人に単語が届く
    assert_eq!(
        recv(&mut alice).await,
        "#FF0000You are the Synonym Sleuth. Blend in"
    );
    assert_eq!(recv(&mut bob).await, "#00D100The secret word is apple");
    assert_eq!(recv(&mut carol).await, "#00D100The secret word is apple");

    // when (操作):
    send(&mut carol, ClientEvent::RevealSleuth).await;

    // then (期待する結果):
    for client in [&mut alice, &mut bob, &mut carol] {
        assert_eq!(recv(client).await, "#bb86fcThe sleuth is Alice!");
    }
}

#[tokio::test]
async fn test_round_needs_three_players() {
    // テスト項目: 2 人のルームではラウンドが始まらず、警告がルーム全員に届く
    // given (前提条件):
    let server = TestServer::start().await;
    let mut alice = join(&server, "R2", "Alice").await;
    let mut bob = join(&server, "R2", "Bob").await;
    assert_eq!(recv(&mut alice).await, "Bob has joined the room.");

    // when (操作):
    send(&mut alice, ClientEvent::SendSecretWord).await;

    // then (期待する結果):
    for client in [&mut alice, &mut bob] {
        assert_eq!(
            recv(client).await,
            "#bb86fcThere needs to be at least 3 players to start."
        );
    }

    // when (操作): ラウンドがないので公開は本人にだけ通知される
    send(&mut bob, ClientEvent::RevealSleuth).await;

    // then (期待する結果):
    assert_eq!(
        recv(&mut bob).await,
        "#bb86fcNo sleuth has been selected yet. Send a secret word first."
    );
}

#[tokio::test]
async fn test_chat_and_leave_are_scoped_to_room() {
    // テスト項目: チャットと退室通知は同じルームの参加者にだけ届く
    // given (前提条件):
    let server = TestServer::start().await;
    let mut alice = join(&server, "R3", "Alice").await;
    let mut bob = join(&server, "R3", "Bob").await;
    assert_eq!(recv(&mut alice).await, "Bob has joined the room.");
    let mut outsider = join(&server, "R4", "Olive").await;

    // when (操作):
    send(
        &mut alice,
        ClientEvent::ChatMessage {
            text: "is it a fruit?".to_string(),
        },
    )
    .await;
    assert_eq!(recv(&mut bob).await, "Alice: is it a fruit?");
    drop(bob);

    // then (期待する結果):
    assert_eq!(recv(&mut alice).await, "Alice: is it a fruit?");
    assert_eq!(recv(&mut alice).await, "Bob has left the room.");

    // then (期待する結果): 別ルームの参加者には何も届かない
    let nothing = tokio::time::timeout(Duration::from_millis(200), outsider.next()).await;
    assert!(nothing.is_err());
}

#[tokio::test]
async fn test_malformed_frame_keeps_connection_open() {
    // テスト項目: 解析できないフレームは無視され、接続はそのまま使える
    // given (前提条件):
    let server = TestServer::start().await;
    let mut alice = join(&server, "R5", "Alice").await;

    // when (操作):
    alice
        .send(Message::Text(r#"{"type":"kickPlayer"}"#.into()))
        .await
        .unwrap();
    send(
        &mut alice,
        ClientEvent::ChatMessage {
            text: "still here".to_string(),
        },
    )
    .await;

    // then (期待する結果):
    assert_eq!(recv(&mut alice).await, "Alice: still here");
}

#[tokio::test]
async fn test_http_pages() {
    // テスト項目: ヘルスチェック、ログインページ、ルームページのリダイレクト
    // given (前提条件):
    let server = TestServer::start().await;
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    // when (操作):
    let health: serde_json::Value = client
        .get(server.http_url("/api/health"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let login = client.get(server.http_url("/login")).send().await.unwrap();
    let missing_name = client.get(server.http_url("/?r=R1")).send().await.unwrap();
    let room = client
        .get(server.http_url("/?r=R1&n=Dana"))
        .send()
        .await
        .unwrap();

    // then (期待する結果):
    assert_eq!(health, serde_json::json!({"status": "ok"}));
    assert_eq!(login.status(), reqwest::StatusCode::OK);
    assert_eq!(login.text().await.unwrap(), "<h1>login</h1>");
    assert_eq!(missing_name.status(), reqwest::StatusCode::SEE_OTHER);
    assert_eq!(
        missing_name.headers().get(reqwest::header::LOCATION).unwrap(),
        "/login"
    );
    assert_eq!(room.status(), reqwest::StatusCode::OK);
    assert_eq!(room.text().await.unwrap(), "<h1>room</h1>");
}
