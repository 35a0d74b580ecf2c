use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use shared::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "lobby-browser", about = "Browse and join lobby rooms")]
pub struct ClientArgs {
    /// JSON file holding the room list snapshot to show on startup
    #[arg(long, env = "LOBBY_ROOMS_FILE")]
    pub rooms: Option<PathBuf>,

    /// Window title
    #[arg(long, env = "LOBBY_WINDOW_TITLE", default_value = "Lobby Browser")]
    pub title: String,

    /// Log filter handed to bevy's LogPlugin
    #[arg(long, env = "RUST_LOG", default_value = "info,wgpu=error,naga=warn")]
    pub log_filter: String,
}

// 🎮 Resolved client settings
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub window_title: String,
    pub log_filter: String,
    pub initial_rooms: Vec<RoomInfo>,
}

impl ClientArgs {
    pub fn into_config(self) -> Result<ClientConfig> {
        let initial_rooms = match &self.rooms {
            Some(path) => load_room_list(path)?,
            None => Vec::new(),
        };
        Ok(ClientConfig {
            window_title: self.title,
            log_filter: self.log_filter,
            initial_rooms,
        })
    }
}
