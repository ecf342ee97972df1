use bevy::prelude::*;
use serde::{Deserialize, Serialize};

//ids may not be stable across program runs. to get a specific id for a name,
// use the corresponding registry. DO NOT HARDCODE (unless the backing id dict is hardcoded)
#[derive(
    Default, Component, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Reflect,
)]
pub enum Id {
    #[default]
    Empty,
    Basic(u32),
}

//the player controlled by this client
#[derive(Component, Default, Clone, Copy)]
pub struct LocalPlayer;

//sent after damage has been applied to `target`
#[derive(Event, Clone, Copy, Debug)]
pub struct DamageTakenEvent {
    pub attacker: Option<Entity>,
    pub target: Entity,
    pub amount: f32,
}
