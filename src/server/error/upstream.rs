use thiserror::Error;

/// Third-party services answering with something the backend cannot use.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// The whiteboard service accepted the request but its body has no room uuid.
    #[error("Whiteboard service response has no room uuid: {body}")]
    MissingWhiteboardRoomUuid { body: String },
}
