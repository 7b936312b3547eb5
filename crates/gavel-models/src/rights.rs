use serde::{Deserialize, Serialize};

// https://core.telegram.org/bots/api#chatadministratorrights

/// The rights of an administrator in a chat.
///
/// `can_post_messages`, `can_edit_messages` and `can_pin_messages` only
/// matter for some chat types. They are left out of the serialized object
/// when `false`, and a missing one decodes as `false`, so "not granted" and
/// "not reported" look the same.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, Hash, Eq, PartialEq)]
pub struct ChatAdministratorRights {
    /// The administrator's presence in the chat is hidden.
    pub is_anonymous: bool,
    /// The administrator can access the chat event log, statistics, members,
    /// see hidden members and ignore slow mode.
    pub can_manage_chat: bool,
    pub can_delete_messages: bool,
    pub can_manage_video_chats: bool,
    /// Restrict, ban or unban chat members.
    pub can_restrict_members: bool,
    /// Add new administrators with a subset of their own rights.
    pub can_promote_members: bool,
    /// Change the chat title, photo and other settings.
    pub can_change_info: bool,
    pub can_invite_users: bool,

    /// Channels only.
    #[serde(default, skip_serializing_if = "is_false")]
    pub can_post_messages: bool,
    /// Channels only.
    #[serde(default, skip_serializing_if = "is_false")]
    pub can_edit_messages: bool,
    /// Groups and supergroups only.
    #[serde(default, skip_serializing_if = "is_false")]
    pub can_pin_messages: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl ChatAdministratorRights {
    /// Every right granted.
    pub fn all() -> Self {
        Self {
            is_anonymous: true,
            can_manage_chat: true,
            can_delete_messages: true,
            can_manage_video_chats: true,
            can_restrict_members: true,
            can_promote_members: true,
            can_change_info: true,
            can_invite_users: true,
            can_post_messages: true,
            can_edit_messages: true,
            can_pin_messages: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.granted().next().is_none()
    }

    /// The wire names of the granted rights, in declaration order.
    pub fn granted(&self) -> impl Iterator<Item = &'static str> {
        let Self {
            is_anonymous,
            can_manage_chat,
            can_delete_messages,
            can_manage_video_chats,
            can_restrict_members,
            can_promote_members,
            can_change_info,
            can_invite_users,
            can_post_messages,
            can_edit_messages,
            can_pin_messages,
        } = *self;

        [
            ("is_anonymous", is_anonymous),
            ("can_manage_chat", can_manage_chat),
            ("can_delete_messages", can_delete_messages),
            ("can_manage_video_chats", can_manage_video_chats),
            ("can_restrict_members", can_restrict_members),
            ("can_promote_members", can_promote_members),
            ("can_change_info", can_change_info),
            ("can_invite_users", can_invite_users),
            ("can_post_messages", can_post_messages),
            ("can_edit_messages", can_edit_messages),
            ("can_pin_messages", can_pin_messages),
        ]
        .iter()
        .filter(|(_, set)| *set)
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .into_iter()
    }
}
