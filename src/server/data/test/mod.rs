mod room;
mod room_doc;
mod room_user;
mod user;
