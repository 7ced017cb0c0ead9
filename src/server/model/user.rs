//! User domain models.

use crate::model::user::UserInfoDto;

/// Display identity of a user.
#[derive(Debug, Clone, PartialEq)]
pub struct NameAndAvatar {
    pub user_name: String,
    pub avatar_url: String,
}

impl NameAndAvatar {
    /// Converts to the DTO returned by the user info endpoint.
    pub fn into_dto(self) -> UserInfoDto {
        UserInfoDto {
            name: self.user_name,
            avatar: self.avatar_url,
        }
    }
}
