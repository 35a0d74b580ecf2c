use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

// Snapshot of one joinable room, as handed out by the lobby
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoomInfo {
    pub name: String,
    pub current_slots: u32,
    pub max_slots: u32,
}

impl RoomInfo {
    pub fn new(name: impl Into<String>, current_slots: u32, max_slots: u32) -> Self {
        Self {
            name: name.into(),
            current_slots,
            max_slots,
        }
    }

    /// Occupancy as shown in the room list, e.g. `3/8`.
    pub fn slot_text(&self) -> String {
        format!("{}/{}", self.current_slots, self.max_slots)
    }
}

// Decode a room list snapshot: a JSON array of rooms
pub fn parse_room_list(json: &str) -> Result<Vec<RoomInfo>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Read and decode a room list file; errors name the file.
pub fn load_room_list(path: &Path) -> Result<Vec<RoomInfo>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading room list {}", path.display()))?;
    parse_room_list(&json).with_context(|| format!("decoding room list {}", path.display()))
}
