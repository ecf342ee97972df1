use bevy::prelude::*;
use interfaces::scheduling::LevelSystemSet;

use crate::spawning::{BuildActorRegistry, DefaultSpawnArgs};

pub struct DeerPlugin;

impl Plugin for DeerPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SpawnDeerEvent>()
            .add_actor::<SpawnDeerEvent>("deer")
            .add_systems(Update, spawn_deer.after(LevelSystemSet::PostMain));
    }
}

#[derive(Component, Default)]
pub struct Deer;

#[derive(Event)]
pub struct SpawnDeerEvent {
    pub location: Transform,
}

impl From<DefaultSpawnArgs> for SpawnDeerEvent {
    fn from(value: DefaultSpawnArgs) -> Self {
        Self {
            location: value.transform,
        }
    }
}

fn spawn_deer(mut commands: Commands, mut spawn_requests: EventReader<SpawnDeerEvent>) {
    for spawn in spawn_requests.read() {
        commands.spawn((spawn.location, Name::new("deer"), Deer));
    }
}
