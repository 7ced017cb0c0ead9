pub use super::room::Entity as Room;
pub use super::room_doc::Entity as RoomDoc;
pub use super::room_user::Entity as RoomUser;
pub use super::user::Entity as User;
