use bevy::prelude::*;
use shared::prelude::*;

use crate::lobby_service::LobbyService;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Update, join_button_system);
}

/// One row of the room list. Points at the widgets the row is made of.
#[derive(Component, Debug, Clone, Copy)]
pub struct RoomListItem {
    pub name_text: Entity,
    pub slot_text: Entity,
    pub join_button: Entity,
}

// 🏷️ UI component markers
#[derive(Component)]
pub struct RoomNameText;

#[derive(Component)]
pub struct RoomSlotText;

#[derive(Component)]
pub struct JoinButton;

/// What a join button does when pressed.
///
/// The room name is captured when the row is bound. A button holds at most
/// one of these, so rebinding a pooled row replaces the old target instead of
/// adding a second one.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct JoinRoomOnClick {
    room_name: String,
}

impl JoinRoomOnClick {
    pub fn new(room_name: impl Into<String>) -> Self {
        Self {
            room_name: room_name.into(),
        }
    }

    pub fn room_name(&self) -> &str {
        &self.room_name
    }
}

const ROW_BACKGROUND: Color = Color::srgb(0.27, 0.0, 0.33);
const NORMAL_BUTTON: Color = Color::srgb(0.57, 0.23, 1.0);
const HOVERED_BUTTON: Color = Color::srgb(0.7, 0.3, 1.0);
const PRESSED_BUTTON: Color = Color::srgb(0.3, 0.6, 0.3);

/// Spawn an unbound row under `parent` and return the row entity.
pub fn spawn_room_list_item(commands: &mut Commands, parent: Entity) -> Entity {
    let name_text = commands
        .spawn((
            RoomNameText,
            Text::default(),
            TextFont {
                font_size: 16.0,
                ..default()
            },
            TextColor(Color::srgb(1.0, 1.0, 1.0)),
            Node {
                flex_grow: 1.0,
                ..default()
            },
        ))
        .id();

    let slot_text = commands
        .spawn((
            RoomSlotText,
            Text::default(),
            TextFont {
                font_size: 14.0,
                ..default()
            },
            TextColor(Color::srgb(0.9, 0.9, 0.9)),
            Node {
                margin: UiRect::horizontal(Val::Px(12.0)),
                ..default()
            },
        ))
        .id();

    let join_button = commands
        .spawn((
            JoinButton,
            Button,
            Node {
                width: Val::Px(90.0),
                height: Val::Px(32.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(NORMAL_BUTTON),
        ))
        .with_children(|button_parent| {
            button_parent.spawn((
                Text::new("JOIN"),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 1.0, 1.0)),
            ));
        })
        .id();

    let row = commands
        .spawn((
            RoomListItem {
                name_text,
                slot_text,
                join_button,
            },
            Node {
                width: Val::Percent(100.0),
                flex_direction: FlexDirection::Row,
                align_items: AlignItems::Center,
                padding: UiRect::all(Val::Px(8.0)),
                margin: UiRect::bottom(Val::Px(4.0)),
                ..default()
            },
            BackgroundColor(ROW_BACKGROUND),
        ))
        .add_children(&[name_text, slot_text, join_button])
        .id();

    commands.entity(parent).add_child(row);
    row
}

/// Point `row` at `info`: both labels and the join target.
///
/// Nothing is touched unless all of the row's widgets exist, so the labels
/// and the button never describe different rooms.
pub fn set_room_list_item(world: &mut World, row: Entity, info: &RoomInfo) {
    let Some(item) = world.get::<RoomListItem>(row).copied() else {
        warn!("set_room_list_item: {} is not a room list row", row);
        return;
    };
    if !room_list_item_is_complete(world, row) {
        warn!("set_room_list_item: row {} is missing widgets, skipping '{}'", row, info.name);
        return;
    }

    if let Some(mut text) = world.get_mut::<Text>(item.name_text) {
        text.0.clone_from(&info.name);
    }
    if let Some(mut text) = world.get_mut::<Text>(item.slot_text) {
        text.0 = info.slot_text();
    }
    world
        .entity_mut(item.join_button)
        .insert(JoinRoomOnClick::new(info.name.clone()));
}

/// Whether `row` still has both labels and its join button.
pub fn room_list_item_is_complete(world: &World, row: Entity) -> bool {
    let Some(item) = world.get::<RoomListItem>(row) else {
        return false;
    };
    world.get::<Text>(item.name_text).is_some()
        && world.get::<Text>(item.slot_text).is_some()
        && world
            .get_entity(item.join_button)
            .is_ok_and(|button| button.contains::<JoinButton>())
}

/// Drop the join target of `row`; pressing it does nothing afterwards.
pub fn unbind_room_list_item(world: &mut World, row: Entity) {
    if let Some(item) = world.get::<RoomListItem>(row).copied() {
        if let Ok(mut button) = world.get_entity_mut(item.join_button) {
            button.remove::<JoinRoomOnClick>();
        }
    }
}

pub trait RoomListItemCommandsExt {
    fn set_room_info(&mut self, row: Entity, info: RoomInfo);
    fn unbind_room_info(&mut self, row: Entity);
}

impl RoomListItemCommandsExt for Commands<'_, '_> {
    fn set_room_info(&mut self, row: Entity, info: RoomInfo) {
        self.queue(move |world: &mut World| set_room_list_item(world, row, &info));
    }

    fn unbind_room_info(&mut self, row: Entity) {
        self.queue(move |world: &mut World| unbind_room_list_item(world, row));
    }
}

// 🎮 Forward presses on bound join buttons to the lobby
fn join_button_system(
    mut interaction_query: Query<
        (&Interaction, &mut BackgroundColor, Option<&JoinRoomOnClick>),
        (Changed<Interaction>, With<JoinButton>),
    >,
    lobby: Res<LobbyService>,
) {
    for (interaction, mut color, on_click) in interaction_query.iter_mut() {
        match *interaction {
            Interaction::Pressed => {
                *color = PRESSED_BUTTON.into();
                if let Some(on_click) = on_click {
                    lobby.request_join(on_click.room_name());
                }
            }
            Interaction::Hovered => {
                *color = HOVERED_BUTTON.into();
            }
            Interaction::None => {
                *color = NORMAL_BUTTON.into();
            }
        }
    }
}
