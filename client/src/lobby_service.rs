use std::sync::Arc;

use bevy::prelude::*;
use parking_lot::Mutex;

/// Something that can ask the lobby to put us into a room.
///
/// Calls are fire-and-forget: whoever implements this owns the request,
/// retries and any feedback shown when the join fails.
pub trait JoinRequester: Send + Sync + 'static {
    fn request_join(&self, room_name: &str);
}

// 🚪 Handle to the lobby subsystem used by the room list
#[derive(Resource, Clone)]
pub struct LobbyService {
    requester: Arc<dyn JoinRequester>,
}

impl LobbyService {
    pub fn new(requester: impl JoinRequester) -> Self {
        Self {
            requester: Arc::new(requester),
        }
    }

    pub fn request_join(&self, room_name: &str) {
        debug!("Requesting join for room '{}'", room_name);
        self.requester.request_join(room_name);
    }
}

/// Collects join requests until the next frame forwards them as events.
#[derive(Clone, Default)]
pub struct JoinRequestQueue {
    pending: Arc<Mutex<Vec<String>>>,
}

impl JoinRequestQueue {
    pub fn drain(&self) -> Vec<String> {
        std::mem::take(&mut *self.pending.lock())
    }
}

impl JoinRequester for JoinRequestQueue {
    fn request_join(&self, room_name: &str) {
        self.pending.lock().push(room_name.to_owned());
    }
}

// Queue shared with the default LobbyService
#[derive(Resource, Clone, Default)]
pub struct PendingJoinRequests(pub JoinRequestQueue);

/// Emitted once per join intent, for the lobby subsystem to act on.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct JoinRoomRequested {
    pub room_name: String,
}

pub(crate) fn plugin(app: &mut App) {
    app.init_resource::<PendingJoinRequests>();
    let queue = app.world().resource::<PendingJoinRequests>().0.clone();
    if !app.world().contains_resource::<LobbyService>() {
        app.insert_resource(LobbyService::new(queue));
    }
    app.add_event::<JoinRoomRequested>()
        .add_systems(PreUpdate, forward_join_requests);
}

fn forward_join_requests(
    pending: Res<PendingJoinRequests>,
    mut join_events: EventWriter<JoinRoomRequested>,
) {
    for room_name in pending.0.drain() {
        info!("🚪 Join requested for room '{}'", room_name);
        join_events.write(JoinRoomRequested { room_name });
    }
}
