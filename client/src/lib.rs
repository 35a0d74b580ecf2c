pub mod client_plugin;
pub mod config;
pub mod lobby_service;
pub mod screens;

pub mod prelude {
    pub use crate::client_plugin::ClientPlugin;
    pub use crate::config::{ClientArgs, ClientConfig};
    pub use crate::lobby_service::{
        JoinRequestQueue, JoinRequester, JoinRoomRequested, LobbyService, PendingJoinRequests,
    };
    pub use crate::screens::{LobbyPlugin, RoomList, RoomListItem, RoomListItemCommandsExt};
    pub use shared::prelude::*;
}
