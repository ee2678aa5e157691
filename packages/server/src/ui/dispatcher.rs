//! Event dispatcher.
//!
//! Every connection forwards its events into one channel. A single task
//! drains it and awaits each handler to completion before taking the next
//! event, so handlers never interleave and room membership cannot change
//! while a handler runs.

use tokio::{sync::mpsc, task::JoinHandle};

use crate::{
    domain::{ConnectionId, InboundEvent, PusherChannel},
    usecase::GameCoordinator,
};

/// What happened on a connection
#[derive(Debug)]
pub enum DispatchEvent {
    /// The socket was upgraded; frames for it go through `channel`
    Opened(PusherChannel),
    Inbound(InboundEvent),
}

/// One event tagged with its connection
#[derive(Debug)]
pub struct Dispatch {
    pub connection_id: ConnectionId,
    pub event: DispatchEvent,
}

/// Spawn the dispatcher task.
///
/// The task ends once every sender has been dropped.
pub fn spawn_dispatcher(
    coordinator: GameCoordinator,
) -> (mpsc::UnboundedSender<Dispatch>, JoinHandle<()>) {
    let (tx, mut rx) = mpsc::unbounded_channel::<Dispatch>();

    let handle = tokio::spawn(async move {
        while let Some(Dispatch {
            connection_id,
            event,
        }) = rx.recv().await
        {
            match event {
                DispatchEvent::Opened(channel) => {
                    coordinator.connect(connection_id, channel).await
                }
                DispatchEvent::Inbound(event) => coordinator.handle(connection_id, event).await,
            }
        }
        tracing::debug!("Dispatcher stopped");
    });

    (tx, handle)
}
