use bevy::log::LogPlugin;
use bevy::prelude::*;

use crate::config::ClientConfig;
use crate::lobby_service::JoinRoomRequested;
use crate::screens::{LobbyPlugin, RoomList};

pub struct ClientPlugin {
    pub config: ClientConfig,
}

impl ClientPlugin {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

impl Plugin for ClientPlugin {
    fn build(&self, app: &mut App) {
        // Basic Bevy plugins
        app.add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: self.config.window_title.clone(),
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    filter: self.config.log_filter.clone(),
                    ..default()
                }),
        );

        info!(
            "🏠 Starting with {} rooms",
            self.config.initial_rooms.len()
        );
        app.insert_resource(RoomList::new(self.config.initial_rooms.clone()));

        // Room list UI and the lobby service it joins through
        app.add_plugins(LobbyPlugin);

        app.add_systems(Startup, setup_camera);
        app.add_systems(Update, log_join_requests);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

// Join handling lives in the lobby subsystem; the standalone client only reports intents
fn log_join_requests(mut join_events: EventReader<JoinRoomRequested>) {
    for event in join_events.read() {
        info!("➡️ Handing join of '{}' to the lobby", event.room_name);
    }
}
