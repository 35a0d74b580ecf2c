use bevy::prelude::*;
use shared::prelude::*;

use super::room_list_item::{
    room_list_item_is_complete, set_room_list_item, spawn_room_list_item, RoomListItem,
    RoomListItemCommandsExt,
};

// 📋 Rooms currently advertised by the lobby
#[derive(Resource, Clone, Debug, Default)]
pub struct RoomList {
    rooms: Vec<RoomInfo>,
}

impl RoomList {
    pub fn new(rooms: Vec<RoomInfo>) -> Self {
        Self { rooms }
    }

    /// Swap in a fresh snapshot; the list screen rebinds its rows next frame.
    pub fn replace(&mut self, rooms: Vec<RoomInfo>) {
        self.rooms = rooms;
    }

    pub fn rooms(&self) -> &[RoomInfo] {
        &self.rooms
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

/// Container of room rows. Rows are pooled: they are spawned on demand and
/// hidden instead of despawned when the list shrinks.
#[derive(Component, Default, Debug)]
pub struct RoomListContainer {
    rows: Vec<Entity>,
}

impl RoomListContainer {
    pub fn rows(&self) -> &[Entity] {
        &self.rows
    }
}

#[derive(Component)]
struct RoomListScreen;

#[derive(Component)]
struct RoomCountText;

#[derive(Component)]
struct EmptyListHint;

pub(super) fn plugin(app: &mut App) {
    app.init_resource::<RoomList>()
        .add_systems(Startup, spawn_room_list_screen)
        .add_systems(
            Update,
            refresh_room_list.run_if(resource_changed::<RoomList>),
        );
}

// 🏠 Build the static part of the room list screen
fn spawn_room_list_screen(mut commands: Commands) {
    info!("🏠 Setting up room list");

    commands
        .spawn((
            RoomListScreen,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                padding: UiRect::all(Val::Percent(2.0)),
                ..default()
            },
            BackgroundColor(Color::srgb(0.2, 0.1, 0.3)),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("🎮 Rooms"),
                TextFont {
                    font_size: 28.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 1.0, 1.0)),
                Node {
                    margin: UiRect::all(Val::Px(15.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new("Rooms: 0"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.9)),
                Node {
                    margin: UiRect::all(Val::Px(8.0)),
                    ..default()
                },
                RoomCountText,
            ));

            parent.spawn((
                Text::new("No rooms available"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.8)),
                Node {
                    margin: UiRect::all(Val::Px(10.0)),
                    ..default()
                },
                EmptyListHint,
            ));

            parent.spawn((
                RoomListContainer::default(),
                Node {
                    width: Val::Percent(90.0),
                    max_width: Val::Px(640.0),
                    flex_direction: FlexDirection::Column,
                    overflow: Overflow::scroll_y(),
                    ..default()
                },
            ));
        });
}

// 🔄 Rebind pooled rows to the current snapshot
fn refresh_room_list(
    mut commands: Commands,
    room_list: Res<RoomList>,
    container: Single<(Entity, &mut RoomListContainer)>,
    mut rows: Query<&mut Node, With<RoomListItem>>,
    count_text: Single<&mut Text, With<RoomCountText>>,
    mut empty_hint: Single<&mut Node, (With<EmptyListHint>, Without<RoomListItem>)>,
) {
    let (container_entity, mut container) = container.into_inner();

    for (index, info) in room_list.rooms().iter().enumerate() {
        match container.rows.get(index).copied() {
            Some(row) => {
                let info = info.clone();
                commands.queue(move |world: &mut World| show_pooled_row(world, row, &info));
            }
            None => {
                let row = spawn_room_list_item(&mut commands, container_entity);
                container.rows.push(row);
                commands.set_room_info(row, info.clone());
            }
        }
    }

    for &row in container.rows.iter().skip(room_list.len()) {
        if let Ok(mut node) = rows.get_mut(row) {
            node.display = Display::None;
        }
        commands.unbind_room_info(row);
    }

    count_text.into_inner().0 = format!("Rooms: {}", room_list.len());
    empty_hint.display = if room_list.is_empty() {
        Display::Flex
    } else {
        Display::None
    };

    debug!(
        "📋 Room list refreshed: {} rooms, {} pooled rows",
        room_list.len(),
        container.rows.len()
    );
}

// A pooled row only comes back on screen once it shows the new room
fn show_pooled_row(world: &mut World, row: Entity, info: &RoomInfo) {
    if !room_list_item_is_complete(world, row) {
        warn!("Pooled row {} is broken, leaving it hidden", row);
        return;
    }
    set_room_list_item(world, row, info);
    if let Some(mut node) = world.get_mut::<Node>(row) {
        node.display = Display::Flex;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::*;
    use crate::lobby_service::{JoinRequester, LobbyService};
    use crate::screens::room_list_item::{self, JoinRoomOnClick};

    #[derive(Clone, Default)]
    struct RecordingRequester(Arc<Mutex<Vec<String>>>);

    impl JoinRequester for RecordingRequester {
        fn request_join(&self, room_name: &str) {
            self.0.lock().push(room_name.to_owned());
        }
    }

    fn app_with_rooms(rooms: Vec<RoomInfo>) -> (App, RecordingRequester) {
        let requester = RecordingRequester::default();
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(LobbyService::new(requester.clone()))
            .insert_resource(RoomList::new(rooms));
        plugin(&mut app);
        room_list_item::plugin(&mut app);
        // startup + first refresh, then let queued bindings settle
        app.update();
        app.update();
        (app, requester)
    }

    fn pooled_rows(app: &mut App) -> Vec<Entity> {
        app.world_mut()
            .query::<&RoomListContainer>()
            .single(app.world())
            .unwrap()
            .rows()
            .to_vec()
    }

    fn row_item(app: &App, row: Entity) -> RoomListItem {
        *app.world().get::<RoomListItem>(row).unwrap()
    }

    fn row_label(app: &App, entity: Entity) -> String {
        app.world().get::<Text>(entity).unwrap().0.clone()
    }

    fn is_shown(app: &App, row: Entity) -> bool {
        app.world().get::<Node>(row).unwrap().display != Display::None
    }

    fn count_label(app: &mut App) -> String {
        app.world_mut()
            .query_filtered::<&Text, With<RoomCountText>>()
            .single(app.world())
            .unwrap()
            .0
            .clone()
    }

    fn replace_rooms(app: &mut App, rooms: Vec<RoomInfo>) {
        app.world_mut().resource_mut::<RoomList>().replace(rooms);
        app.update();
    }

    #[test]
    fn rows_render_each_room() {
        let (mut app, _) = app_with_rooms(vec![
            RoomInfo::new("Arena-7", 3, 8),
            RoomInfo::new("Dust", 0, 4),
        ]);

        let rows = pooled_rows(&mut app);
        assert_eq!(rows.len(), 2);
        let first = row_item(&app, rows[0]);
        let second = row_item(&app, rows[1]);
        assert_eq!(row_label(&app, first.name_text), "Arena-7");
        assert_eq!(row_label(&app, first.slot_text), "3/8");
        assert_eq!(row_label(&app, second.name_text), "Dust");
        assert_eq!(row_label(&app, second.slot_text), "0/4");
        assert_eq!(count_label(&mut app), "Rooms: 2");
    }

    #[test]
    fn shrinking_hides_and_unbinds_surplus_rows() {
        let (mut app, _) = app_with_rooms(vec![
            RoomInfo::new("A", 1, 4),
            RoomInfo::new("B", 2, 4),
        ]);
        let before = pooled_rows(&mut app);

        replace_rooms(&mut app, vec![RoomInfo::new("C", 0, 2)]);

        let after = pooled_rows(&mut app);
        assert_eq!(after, before);
        assert!(is_shown(&app, after[0]));
        assert!(!is_shown(&app, after[1]));
        let hidden = row_item(&app, after[1]);
        assert!(app.world().get::<JoinRoomOnClick>(hidden.join_button).is_none());
        assert_eq!(count_label(&mut app), "Rooms: 1");
    }

    #[test]
    fn growing_reuses_pool_before_spawning() {
        let (mut app, _) = app_with_rooms(vec![RoomInfo::new("A", 1, 4)]);
        let before = pooled_rows(&mut app);

        replace_rooms(&mut app, vec![]);
        replace_rooms(
            &mut app,
            vec![RoomInfo::new("B", 2, 4), RoomInfo::new("C", 3, 4)],
        );

        let after = pooled_rows(&mut app);
        assert_eq!(after.len(), 2);
        assert_eq!(after[0], before[0]);
        assert!(is_shown(&app, after[0]));
        assert!(is_shown(&app, after[1]));
        assert_eq!(row_label(&app, row_item(&app, after[0]).name_text), "B");
    }

    #[test]
    fn reused_row_joins_the_new_room() {
        let (mut app, requester) = app_with_rooms(vec![RoomInfo::new("A", 1, 4)]);
        replace_rooms(&mut app, vec![RoomInfo::new("B", 2, 4)]);

        let row = pooled_rows(&mut app)[0];
        let button = row_item(&app, row).join_button;
        *app.world_mut().get_mut::<Interaction>(button).unwrap() = Interaction::Pressed;
        app.update();

        assert_eq!(*requester.0.lock(), ["B"]);
    }

    #[test]
    fn broken_pooled_row_stays_hidden() {
        let (mut app, requester) = app_with_rooms(vec![
            RoomInfo::new("A", 1, 4),
            RoomInfo::new("B", 2, 4),
        ]);
        replace_rooms(&mut app, vec![RoomInfo::new("A", 1, 4)]);

        let rows = pooled_rows(&mut app);
        let broken = row_item(&app, rows[1]);
        app.world_mut().entity_mut(broken.slot_text).despawn();

        replace_rooms(
            &mut app,
            vec![RoomInfo::new("A", 1, 4), RoomInfo::new("C", 3, 4)],
        );

        assert!(is_shown(&app, rows[0]));
        assert!(!is_shown(&app, rows[1]));
        assert_eq!(row_label(&app, broken.name_text), "B");
        assert!(app.world().get::<JoinRoomOnClick>(broken.join_button).is_none());

        *app.world_mut().get_mut::<Interaction>(broken.join_button).unwrap() =
            Interaction::Pressed;
        app.update();
        assert!(requester.0.lock().is_empty());
    }

    #[test]
    fn empty_list_shows_hint() {
        let (mut app, _) = app_with_rooms(vec![]);
        let hint_display = app
            .world_mut()
            .query_filtered::<&Node, With<EmptyListHint>>()
            .single(app.world())
            .unwrap()
            .display;
        assert_eq!(hint_display, Display::Flex);
        assert_eq!(count_label(&mut app), "Rooms: 0");

        replace_rooms(&mut app, vec![RoomInfo::new("A", 1, 4)]);
        let hint_display = app
            .world_mut()
            .query_filtered::<&Node, With<EmptyListHint>>()
            .single(app.world())
            .unwrap()
            .display;
        assert_eq!(hint_display, Display::None);
    }
}
