use std::sync::Arc;

use bevy::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

use actors::spawning::{DefaultSpawnArgs, SpawnActorEvent};
use world::{events::ChunkGeneratedEvent, level::Level, BlockName, BlockRegistry};

use crate::{
    conditions::{SpawnCondition, SurfaceCondition},
    group::{spawn_group, ChunkGenerationSpawnable, GroupSizeRule},
    sites::find_chunk_spawn_sites,
};

const MIN_GROUND_EACH: u32 = 5;
const MIN_GROUP_SIZE: u32 = 3;
const MAX_GROUP_SIZE: u32 = 10;
const SPAWN_CHANCE_IN_PERCENT: f32 = 10.0;

//spawns groups of zombies on grass, independent of the spawn table
#[derive(Resource)]
pub struct ZombieSpawner {
    pub rng: StdRng,
    pub actor: Arc<String>,
    pub spawnable: ChunkGenerationSpawnable,
    //LegacyMinOffset matches how zombie groups used to be sized
    pub rule: GroupSizeRule,
    pub ground: BlockName,
    //replaces the default grass surface check when set
    condition: Option<Box<dyn SpawnCondition>>,
}

impl Default for ZombieSpawner {
    fn default() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            actor: Arc::new("zombie".to_string()),
            spawnable: ChunkGenerationSpawnable {
                probability: SPAWN_CHANCE_IN_PERCENT,
                min_group_size: MIN_GROUP_SIZE,
                max_group_size: MAX_GROUP_SIZE,
                min_ground_per_entity: MIN_GROUND_EACH,
            },
            rule: GroupSizeRule::default(),
            ground: BlockName::core("grass"),
            condition: None,
        }
    }
}

impl ZombieSpawner {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            ..default()
        }
    }

    pub fn use_legacy_group_size(&mut self) {
        self.rule = GroupSizeRule::LegacyMinOffset;
    }

    pub fn set_spawn_condition(&mut self, condition: impl SpawnCondition + 'static) {
        self.condition = Some(Box::new(condition));
    }

    pub fn clear_spawn_condition(&mut self) {
        self.condition = None;
    }
}

pub fn spawn_zombies_on_chunk_generated(
    mut reader: EventReader<ChunkGeneratedEvent>,
    mut spawner: ResMut<ZombieSpawner>,
    level: Res<Level>,
    registry: Res<BlockRegistry>,
    mut writer: EventWriter<SpawnActorEvent>,
) {
    let spawner = &mut *spawner;
    for ChunkGeneratedEvent { coord } in reader.read().copied() {
        if !spawner.spawnable.passes_gate(&mut spawner.rng) {
            continue;
        }
        let sites = match &spawner.condition {
            Some(condition) => {
                find_chunk_spawn_sites(coord, condition.as_ref(), &*level, &registry)
            }
            None => {
                let Some(grass) = registry.get_id(&spawner.ground) else {
                    warn!("zombies spawn on {}, which isn't registered", spawner.ground);
                    continue;
                };
                find_chunk_spawn_sites(
                    coord,
                    &SurfaceCondition::on_block(grass),
                    &*level,
                    &registry,
                )
            }
        };
        let actor = &spawner.actor;
        let result = spawn_group(
            sites,
            &spawner.spawnable,
            spawner.rule,
            &mut spawner.rng,
            |site, rotation| {
                writer.send(SpawnActorEvent {
                    name: actor.clone(),
                    args: DefaultSpawnArgs {
                        transform: Transform::from_translation(site.to_vec3())
                            .with_rotation(rotation),
                    },
                });
            },
        );
        match result {
            Ok(0) => {}
            Ok(count) => info!("spawned {} zombies in chunk {:?}", count, coord),
            Err(e) => warn!("couldn't spawn zombies in chunk {:?}: {}", coord, e),
        }
    }
}
