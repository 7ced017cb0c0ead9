mod agora;
mod user;
mod whiteboard;
