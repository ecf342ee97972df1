use std::collections::VecDeque;

use bevy::prelude::*;
use interfaces::scheduling::{LevelLoadState, LevelSystemSet};
use itertools::iproduct;

use crate::{
    chunk::{Chunk, ChunkCoord, ChunkIdx},
    events::ChunkGeneratedEvent,
    level::Level,
    settings::Settings,
    BlockCoord, BlockId, BlockRegistry,
};

pub struct WorldGenPlugin;

impl Plugin for WorldGenPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GenerationQueue>()
            .add_systems(OnEnter(LevelLoadState::Loading), queue_initial_chunks)
            .add_systems(
                Update,
                generate_queued_chunks.in_set(LevelSystemSet::LoadingAndMain),
            )
            .add_systems(
                Update,
                finish_loading
                    .run_if(in_state(LevelLoadState::Loading))
                    .after(generate_queued_chunks),
            );
    }
}

#[derive(Resource, Default)]
pub struct GenerationQueue {
    pending: VecDeque<ChunkCoord>,
}

impl GenerationQueue {
    pub fn push(&mut self, coord: ChunkCoord) {
        self.pending.push_back(coord);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

//filler below the ground height, surface at it, air (and the odd decoration) above
#[derive(Clone, Copy, Debug)]
pub struct FlatGenerator {
    pub ground_height: i32,
    pub surface: BlockId,
    pub filler: BlockId,
    pub decoration: Option<BlockId>,
}

impl FlatGenerator {
    pub fn from_settings(settings: &Settings, registry: &BlockRegistry) -> Option<Self> {
        let surface = registry.get_id(&settings.surface_block);
        if surface.is_none() {
            warn!("surface block {} isn't registered", settings.surface_block);
        }
        let filler = registry.get_id(&settings.filler_block);
        if filler.is_none() {
            warn!("filler block {} isn't registered", settings.filler_block);
        }
        Some(Self {
            ground_height: settings.ground_height,
            surface: surface?,
            filler: filler?,
            decoration: settings
                .decoration_block
                .as_ref()
                .and_then(|name| registry.get_id(name)),
        })
    }

    pub fn block_for(&self, coord: BlockCoord) -> BlockId {
        if coord.y < self.ground_height {
            self.filler
        } else if coord.y == self.ground_height {
            self.surface
        } else if coord.y == self.ground_height + 1 && (coord.x * 7 + coord.z * 13).rem_euclid(11) == 0
        {
            self.decoration.unwrap_or(BlockId::EMPTY)
        } else {
            BlockId::EMPTY
        }
    }

    pub fn generate(&self, coord: ChunkCoord) -> Chunk {
        let mut chunk = Chunk::new(coord);
        for pos in coord.volume().iter() {
            let block_pos = BlockCoord::from(pos);
            let id = self.block_for(block_pos);
            if id != BlockId::EMPTY {
                chunk[ChunkIdx::from(block_pos)] = id;
            }
        }
        chunk
    }
}

pub fn queue_initial_chunks(
    settings: Res<Settings>,
    level: Res<Level>,
    mut queue: ResMut<GenerationQueue>,
) {
    let r = settings.init_radius;
    for (x, y, z) in iproduct!(-r.x..=r.x, -r.y..=r.y, -r.z..=r.z) {
        let coord = ChunkCoord::new(x, y, z);
        if !level.contains_chunk(coord) {
            queue.push(coord);
        }
    }
    info!("queued {} chunks for generation", queue.len());
}

pub fn generate_queued_chunks(
    mut queue: ResMut<GenerationQueue>,
    level: Res<Level>,
    settings: Res<Settings>,
    registry: Res<BlockRegistry>,
    mut writer: EventWriter<ChunkGeneratedEvent>,
) {
    if queue.is_empty() {
        return;
    }
    let Some(generator) = FlatGenerator::from_settings(&settings, &registry) else {
        return;
    };
    for _ in 0..settings.chunks_per_frame {
        let Some(coord) = queue.pending.pop_front() else {
            break;
        };
        if level.contains_chunk(coord) {
            continue;
        }
        level.add_chunk(generator.generate(coord));
        writer.send(ChunkGeneratedEvent { coord });
    }
}

fn finish_loading(queue: Res<GenerationQueue>, mut next_state: ResMut<NextState<LevelLoadState>>) {
    if queue.is_empty() {
        info!("finished generating initial chunks");
        next_state.set(LevelLoadState::Loaded);
    }
}
