pub mod lobby;
pub mod room_list_item;

use bevy::prelude::*;

pub use lobby::{RoomList, RoomListContainer};
pub use room_list_item::{
    set_room_list_item, spawn_room_list_item, unbind_room_list_item, JoinRoomOnClick,
    RoomListItem, RoomListItemCommandsExt,
};

use crate::lobby_service;

// 🎯 Room browser: lobby service seam, room list screen and its rows
pub struct LobbyPlugin;

impl Plugin for LobbyPlugin {
    fn build(&self, app: &mut App) {
        lobby_service::plugin(app);
        lobby::plugin(app);
        room_list_item::plugin(app);
    }
}
