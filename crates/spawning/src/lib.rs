pub mod chunk_spawn;
pub mod conditions;
pub mod group;
pub mod prefabs;
pub mod sites;
pub mod zombie;

use bevy::prelude::*;
use interfaces::scheduling::LevelSystemSet;
use world::{generation::generate_queued_chunks, settings::Settings};

use chunk_spawn::ChunkGenerationSpawner;
use zombie::ZombieSpawner;


pub struct ChunkSpawnPlugin;

impl Plugin for ChunkSpawnPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ChunkGenerationSpawner>()
            .init_resource::<ZombieSpawner>()
            .register_type::<group::ChunkGenerationSpawnable>()
            .register_type::<group::GroupSizeRule>()
            .add_systems(
                Startup,
                (seed_spawners, prefabs::load_spawnable_prefabs),
            )
            .add_systems(
                Update,
                (
                    chunk_spawn::spawn_prefabs_on_chunk_generated,
                    zombie::spawn_zombies_on_chunk_generated,
                )
                    .in_set(LevelSystemSet::LoadingAndMain)
                    .after(generate_queued_chunks),
            );
    }
}

fn seed_spawners(
    settings: Res<Settings>,
    mut chunk_spawner: ResMut<ChunkGenerationSpawner>,
    mut zombie_spawner: ResMut<ZombieSpawner>,
) {
    if let Some(seed) = settings.spawn_seed {
        info!("seeding spawners with {}", seed);
        chunk_spawner.rng = rand::SeedableRng::seed_from_u64(seed);
        zombie_spawner.rng = rand::SeedableRng::seed_from_u64(seed.wrapping_add(1));
    }
}
