use ahash::HashMap;
use bevy::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

use actors::spawning::{DefaultSpawnArgs, SpawnActorEvent};
use world::{events::ChunkGeneratedEvent, level::Level, BlockCoord, BlockRegistry};

use crate::{
    conditions::{GroundRule, SurfaceCondition},
    group::{spawn_group, ChunkGenerationSpawnable, GroupSizeRule},
    prefabs::SpawnablePrefab,
    sites::find_chunk_spawn_sites,
};

//state for spawning every SpawnablePrefab when chunks generate
#[derive(Resource)]
pub struct ChunkGenerationSpawner {
    pub rng: StdRng,
    pub rule: GroupSizeRule,
}

impl Default for ChunkGenerationSpawner {
    fn default() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            rule: GroupSizeRule::default(),
        }
    }
}

impl ChunkGenerationSpawner {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            ..default()
        }
    }
}

pub fn spawn_prefabs_on_chunk_generated(
    mut reader: EventReader<ChunkGeneratedEvent>,
    prefabs: Query<(&SpawnablePrefab, &ChunkGenerationSpawnable)>,
    mut spawner: ResMut<ChunkGenerationSpawner>,
    level: Res<Level>,
    registry: Res<BlockRegistry>,
    mut writer: EventWriter<SpawnActorEvent>,
) {
    let spawner = &mut *spawner;
    for ChunkGeneratedEvent { coord } in reader.read().copied() {
        //scan lazily, and only once per ground rule
        let mut sites_by_ground: HashMap<GroundRule, Vec<BlockCoord>> = HashMap::default();
        for (prefab, spawnable) in prefabs.iter() {
            if !spawnable.passes_gate(&mut spawner.rng) {
                continue;
            }
            let ground = match &prefab.ground {
                None => GroundRule::AnySolid,
                Some(name) => match registry.get_id(name) {
                    Some(id) => GroundRule::Block(id),
                    None => {
                        warn!(
                            "{} spawns on unregistered block {}, skipping",
                            prefab.actor, name
                        );
                        continue;
                    }
                },
            };
            let sites = sites_by_ground
                .entry(ground)
                .or_insert_with(|| {
                    find_chunk_spawn_sites(
                        coord,
                        &SurfaceCondition { ground },
                        &*level,
                        &registry,
                    )
                })
                .clone();
            let result = spawn_group(
                sites,
                spawnable,
                spawner.rule,
                &mut spawner.rng,
                |site, rotation| {
                    writer.send(SpawnActorEvent {
                        name: prefab.actor.clone(),
                        args: DefaultSpawnArgs {
                            transform: Transform::from_translation(site.to_vec3())
                                .with_rotation(rotation),
                        },
                    });
                },
            );
            match result {
                Ok(0) => {}
                Ok(count) => info!("spawned {} {} in chunk {:?}", count, prefab.actor, coord),
                Err(e) => warn!("couldn't spawn {} in chunk {:?}: {}", prefab.actor, coord, e),
            }
        }
    }
}
