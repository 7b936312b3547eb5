use gavel_models::{ApiResponse, ChatAdministratorRights};
use serde::Serialize;

use super::impl_prelude::*;
use crate::query::{self, querify};

/// Parameters of [`Http::set_my_default_administrator_rights`].
#[derive(Serialize, Debug, Default, Clone, Eq, PartialEq)]
pub struct SetMyDefaultAdministratorRightsOptions {
    #[serde(serialize_with = "query::json")]
    pub rights: ChatAdministratorRights,
    /// Change the defaults for channels instead of groups.
    pub for_channels: bool,
}

/// Parameters of [`Http::get_my_default_administrator_rights`].
#[derive(Serialize, Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct GetMyDefaultAdministratorRightsOptions {
    pub for_channels: bool,
}

impl<T: Transport> Http<T> {
    /// Changes the default administrator rights the bot asks for when it is
    /// added as an administrator to groups or channels.
    ///
    /// These rights are only suggested to users, who can change them before
    /// adding the bot.
    pub async fn set_my_default_administrator_rights(
        &self,
        opts: &SetMyDefaultAdministratorRightsOptions,
    ) -> Result<ApiResponse<bool>> {
        let url = ep!(self, "/setMyDefaultAdministratorRights?{}" querify(opts)?);

        self.get_checked("setMyDefaultAdministratorRights", &url).await
    }

    pub async fn get_my_default_administrator_rights(
        &self,
        opts: &GetMyDefaultAdministratorRightsOptions,
    ) -> Result<ApiResponse<ChatAdministratorRights>> {
        let url = ep!(self, "/getMyDefaultAdministratorRights?{}" querify(opts)?);

        self.get_checked("getMyDefaultAdministratorRights", &url).await
    }
}
