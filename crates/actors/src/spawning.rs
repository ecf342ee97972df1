use std::sync::Arc;

use ahash::HashMap;
use bevy::prelude::*;
use interfaces::scheduling::LevelSystemSet;
use util::SendEventCommand;

pub struct SpawningPlugin;

impl Plugin for SpawningPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SpawnActorEvent>()
            .init_resource::<ActorRegistry>()
            .add_systems(Update, actor_spawn_handler.in_set(LevelSystemSet::PostMain));
    }
}

#[derive(Clone, Copy, Default, Debug)]
pub struct DefaultSpawnArgs {
    pub transform: Transform,
}

#[derive(Event, Clone, Debug)]
pub struct SpawnActorEvent {
    pub name: Arc<String>,
    pub args: DefaultSpawnArgs,
}

#[derive(Resource, Default)]
pub struct ActorRegistry {
    spawners: HashMap<String, Box<dyn ActorSpawner>>,
}

impl ActorRegistry {
    pub fn contains(&self, name: &str) -> bool {
        self.spawners.contains_key(name)
    }
}

trait ActorSpawner: Fn(DefaultSpawnArgs, &mut Commands) + Sync + Send {}
impl<T: Fn(DefaultSpawnArgs, &mut Commands) + Sync + Send> ActorSpawner for T {}

pub trait BuildActorRegistry {
    fn add_actor<Event: From<DefaultSpawnArgs> + bevy::prelude::Event>(
        &mut self,
        name: impl Into<String>,
    ) -> &mut Self;
}

impl BuildActorRegistry for App {
    fn add_actor<Event: From<DefaultSpawnArgs> + bevy::prelude::Event>(
        &mut self,
        name: impl Into<String>,
    ) -> &mut App {
        let mut registry = self
            .world_mut()
            .get_resource_or_insert_with(ActorRegistry::default);
        registry.spawners.insert(
            name.into(),
            Box::new(|event: DefaultSpawnArgs, commands: &mut Commands| {
                commands.queue(SendEventCommand(Event::from(event)));
            }),
        );
        self
    }
}

fn actor_spawn_handler(
    mut events: EventReader<SpawnActorEvent>,
    mut commands: Commands,
    registry: Res<ActorRegistry>,
) {
    for SpawnActorEvent { name, args } in events.read() {
        let name: &String = name;
        match registry.spawners.get(name) {
            Some(spawner) => spawner(*args, &mut commands),
            None => warn!("tried to spawn unregistered actor {}", name),
        }
    }
}
