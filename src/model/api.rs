//! Response envelope shared by every endpoint.
//!
//! Successful calls answer `{"status": 0, "data": ...}` and failed calls answer
//! `{"status": <non-zero>, "code": <ErrorCode>}`. Both fields are plain integers on the wire.

use serde::{Serialize, Serializer};

/// Outcome of a request as reported in the envelope's `status` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(dead_code)]
pub enum Status {
    Success = 0,
    Failed = 1,
    Process = 2,
    AuthFailed = 3,
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i8(*self as i8)
    }
}

/// Machine-readable failure reason carried in the envelope's `code` field.
///
/// Codes are grouped by domain: `1xxxxx` for request handling, `2xxxxx` for rooms and
/// `3xxxxx` for users.
///
/// The table mirrors what clients understand; this service does not produce every code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(dead_code)]
pub enum ErrorCode {
    ParamsCheckFailed = 100000,
    ServerFail = 100001,
    CurrentProcessFailed = 100002,
    NotPermission = 100003,
    NeedLoginAgain = 100004,
    JWTSignFailed = 100005,

    RoomNotFound = 200000,

    UserNotFound = 300000,
}

impl ErrorCode {
    pub fn as_u32(self) -> u32 {
        self as u32
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.as_u32())
    }
}

/// The JSON envelope wrapped around every response body.
#[derive(Serialize, Debug)]
#[serde(untagged)]
pub enum ResponseDto<T> {
    Success { status: Status, data: T },
    Failed { status: Status, code: ErrorCode },
}

impl<T> ResponseDto<T> {
    pub fn success(data: T) -> Self {
        Self::Success {
            status: Status::Success,
            data,
        }
    }

    pub fn failed(code: ErrorCode) -> Self {
        Self::Failed {
            status: Status::Failed,
            code,
        }
    }

    pub fn auth_failed(code: ErrorCode) -> Self {
        Self::Failed {
            status: Status::AuthFailed,
            code,
        }
    }
}
