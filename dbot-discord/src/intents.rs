//! Maps the rejected-event list onto gateway intents, so rejected events are not even delivered
//! when Discord lets us opt out of them.

use dbot_core::EventKind;
use serenity::model::gateway::GatewayIntents;

/// Intent that delivers `kind`, if it needs one beyond the base set.
fn intent_for(kind: EventKind) -> GatewayIntents {
    match kind {
        EventKind::TypingStart => GatewayIntents::GUILD_MESSAGE_TYPING,
        EventKind::PresenceUpdate => GatewayIntents::GUILD_PRESENCES,
        EventKind::GuildMemberAdd | EventKind::GuildMemberUpdate | EventKind::GuildMemberRemove => {
            GatewayIntents::GUILD_MEMBERS
        }
        EventKind::Ready
        | EventKind::MessageCreate
        | EventKind::MessageUpdate
        | EventKind::MessageDelete => GatewayIntents::empty(),
    }
}

/// Intents to request given the rejected events and whether DM events are wanted.
///
/// Guild messages and message content are always requested. Typing, presence and member intents
/// are requested only while at least one of their events is still wanted.
pub fn gateway_intents(reject_events: &[EventKind], dm_events: bool) -> GatewayIntents {
    let mut intents =
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT;

    for kind in EventKind::ALL {
        if !reject_events.contains(&kind) {
            intents |= intent_for(kind);
        }
    }

    if dm_events {
        intents |= GatewayIntents::DIRECT_MESSAGES | GatewayIntents::DIRECT_MESSAGE_REACTIONS;
        if intents.contains(GatewayIntents::GUILD_MESSAGE_TYPING) {
            intents |= GatewayIntents::DIRECT_MESSAGE_TYPING;
        }
    }

    intents
}

/// Privileged events that are not rejected. Each needs its intent enabled for the application,
/// otherwise the gateway refuses the connection.
pub fn privileged_events(reject_events: &[EventKind]) -> Vec<EventKind> {
    EventKind::ALL
        .into_iter()
        .filter(|kind| kind.is_privileged() && !reject_events.contains(kind))
        .collect()
}
