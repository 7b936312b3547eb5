//! Prints the bot's default administrator rights for groups and channels.
//!
//! With `FOR_CHANNELS=true|false` set, first grants the defaults a moderation
//! bot usually wants for that chat kind.
//!
//! Environment: `TOKEN` (required), `API_ROOT` (optional, for a self-hosted
//! Bot API server), `FOR_CHANNELS` (optional).

use gavel_http::{
    GetMyDefaultAdministratorRightsOptions, Http, SetMyDefaultAdministratorRightsOptions,
};
use gavel_models::ChatAdministratorRights;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let token = std::env::var("TOKEN")
        .expect("Cannot get token; set environment variable TOKEN=... and run again");

    let http = match std::env::var("API_ROOT") {
        Ok(root) => Http::new_with_url(&token, &root),
        Err(_) => Http::new(&token),
    };

    if let Ok(for_channels) = std::env::var("FOR_CHANNELS") {
        let for_channels: bool = for_channels.parse()?;

        let rights = ChatAdministratorRights {
            can_manage_chat: true,
            can_delete_messages: true,
            can_restrict_members: !for_channels,
            can_invite_users: true,
            can_post_messages: for_channels,
            can_edit_messages: for_channels,
            can_pin_messages: !for_channels,
            ..Default::default()
        };

        let res = http
            .set_my_default_administrator_rights(&SetMyDefaultAdministratorRightsOptions {
                rights,
                for_channels,
            })
            .await?;

        tracing::info!(for_channels, applied = ?res.result, "updated default rights");
    }

    for &for_channels in [false, true].iter() {
        let rights = http
            .get_my_default_administrator_rights(&GetMyDefaultAdministratorRightsOptions {
                for_channels,
            })
            .await?
            .into_result()?;

        let kind = if for_channels { "channels" } else { "groups" };
        if rights.is_empty() {
            println!("{}: no rights requested", kind);
        } else {
            println!("{}: {}", kind, rights.granted().collect::<Vec<_>>().join(", "));
        }
    }

    Ok(())
}
