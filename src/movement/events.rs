//! Movement domain: events published for the presentation layer.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// One-shot event emitted whenever a jump impulse or truncation fires, for
/// animation triggers and sound.
#[derive(Debug)]
pub struct JumpTriggered {
    pub entity: Entity,
}

impl Message for JumpTriggered {}
