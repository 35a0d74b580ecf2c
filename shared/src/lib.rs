pub mod room;

pub use room::{load_room_list, parse_room_list, RoomInfo};

pub mod prelude {
    pub use crate::room::{load_room_list, parse_room_list, RoomInfo};
}
