use bevy::prelude::*;
use interfaces::scheduling::LevelSystemSet;

use crate::spawning::{BuildActorRegistry, DefaultSpawnArgs};

pub struct ZombiePlugin;

impl Plugin for ZombiePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SpawnZombieEvent>()
            .add_actor::<SpawnZombieEvent>("zombie")
            .add_systems(Update, spawn_zombie.after(LevelSystemSet::PostMain));
    }
}

#[derive(Component, Default)]
pub struct Zombie;

#[derive(Event)]
pub struct SpawnZombieEvent {
    pub location: Transform,
}

impl From<DefaultSpawnArgs> for SpawnZombieEvent {
    fn from(value: DefaultSpawnArgs) -> Self {
        Self {
            location: value.transform,
        }
    }
}

fn spawn_zombie(mut commands: Commands, mut spawn_requests: EventReader<SpawnZombieEvent>) {
    for spawn in spawn_requests.read() {
        commands.spawn((spawn.location, Name::new("zombie"), Zombie));
    }
}
