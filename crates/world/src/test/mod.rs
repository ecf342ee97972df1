use bevy::prelude::*;

use crate::{
    chunk::*,
    events::ChunkGeneratedEvent,
    generation::{generate_queued_chunks, FlatGenerator, GenerationQueue},
    level::{BlockQuery, Level},
    register_core_blocks,
    settings::Settings,
    BlockCoord, BlockId, BlockName, BlockPhysics, BlockRegistry,
};

fn core_registry() -> BlockRegistry {
    let mut registry = BlockRegistry::default();
    registry.add_basic(BlockName::core("grass"), BlockPhysics::Solid);
    registry.add_basic(BlockName::core("stone"), BlockPhysics::Solid);
    registry.add_basic(BlockName::core("tall_grass"), BlockPhysics::Empty);
    registry
}

#[test]
fn test_chunk_coord_from_negative_block() {
    assert_eq!(
        ChunkCoord::from(BlockCoord::new(-1, 0, CHUNK_SIZE_I32)),
        ChunkCoord::new(-1, 0, 1)
    );
    assert_eq!(
        ChunkIdx::from(BlockCoord::new(-1, 0, CHUNK_SIZE_I32)),
        ChunkIdx::new(CHUNK_SIZE_U8 - 1, 0, 0)
    );
    assert_eq!(
        BlockCoord::from(ChunkCoord::new(-2, 1, 0)),
        BlockCoord::new(-2 * CHUNK_SIZE_I32, CHUNK_SIZE_I32, 0)
    );
}

#[test]
fn test_chunk_idx_usize_roundtrip() {
    for i in [0, 1, CHUNK_SIZE, BLOCKS_PER_CHUNK / 2 + 17, BLOCKS_PER_CHUNK - 1] {
        assert_eq!(ChunkIdx::from_usize(i).to_usize(), i);
    }
}

#[test]
fn test_chunk_volume() {
    let volume = ChunkCoord::new(1, -1, 0).volume();
    assert_eq!(volume.volume() as usize, BLOCKS_PER_CHUNK);
    assert!(volume.contains_point(IVec3::new(CHUNK_SIZE_I32, -1, 0)));
    assert!(!volume.contains_point(IVec3::new(2 * CHUNK_SIZE_I32, -1, 0)));
    assert!(!volume.contains_point(IVec3::new(CHUNK_SIZE_I32, 0, 0)));
}

#[test]
fn test_level_get_set() {
    let level = Level::new();
    let coord = BlockCoord::new(-5, 3, 40);
    assert_eq!(level.get_block(coord), None);
    assert!(!level.set_block(coord, BlockId::EMPTY));

    level.add_chunk(Chunk::new(ChunkCoord::from(coord)));
    assert_eq!(level.block_at(coord), Some(BlockId::EMPTY));
    let stone = core_registry().get_id(&BlockName::core("stone")).unwrap();
    assert!(level.set_block(coord, stone));
    assert_eq!(level.block_at(coord), Some(stone));
    assert_eq!(level.block_at(coord.above()), Some(BlockId::EMPTY));
    assert_eq!(level.chunk_count(), 1);
}

#[test]
fn test_registry_penetrable() {
    let mut registry = core_registry();
    let grass = registry.get_id(&BlockName::core("grass")).unwrap();
    let tall_grass = registry.get_id(&BlockName::core("tall_grass")).unwrap();
    assert!(registry.is_penetrable(BlockId::EMPTY));
    assert!(registry.is_penetrable(tall_grass));
    assert!(!registry.is_penetrable(grass));
    assert_eq!(registry.get_name(grass), Some(&BlockName::core("grass")));

    //duplicate registration keeps the first id
    assert_eq!(
        registry.add_basic(BlockName::core("grass"), BlockPhysics::Empty),
        grass
    );
    assert!(!registry.is_penetrable(grass));
    assert_eq!(registry.len(), 3);
}

#[test]
fn test_flat_generator() {
    let registry = core_registry();
    let settings = Settings {
        ground_height: 4,
        ..default()
    };
    let generator = FlatGenerator::from_settings(&settings, &registry).unwrap();
    let chunk = generator.generate(ChunkCoord::new(0, 0, 0));
    let grass = registry.get_id(&BlockName::core("grass")).unwrap();
    let stone = registry.get_id(&BlockName::core("stone")).unwrap();
    assert_eq!(chunk[ChunkIdx::new(3, 4, 3)], grass);
    assert_eq!(chunk[ChunkIdx::new(3, 0, 3)], stone);
    assert_eq!(chunk[ChunkIdx::new(3, 6, 3)], BlockId::EMPTY);
    //decoration only ever sits directly on the surface
    for x in 0..CHUNK_SIZE_U8 {
        for z in 0..CHUNK_SIZE_U8 {
            let above = chunk[ChunkIdx::new(x, 5, z)];
            assert!(above == BlockId::EMPTY || registry.is_penetrable(above));
        }
    }
}

#[test]
fn test_flat_generator_missing_blocks() {
    let registry = BlockRegistry::default();
    assert!(FlatGenerator::from_settings(&Settings::default(), &registry).is_none());
}

#[derive(Resource, Default)]
struct GeneratedChunks(Vec<ChunkCoord>);

fn collect_generated(
    mut reader: EventReader<ChunkGeneratedEvent>,
    mut generated: ResMut<GeneratedChunks>,
) {
    generated.0.extend(reader.read().map(|event| event.coord));
}

#[test]
fn test_generation_sends_events() {
    let mut app = App::new();
    app.add_event::<ChunkGeneratedEvent>()
        .init_resource::<GeneratedChunks>()
        .init_resource::<Level>()
        .init_resource::<BlockRegistry>()
        .insert_resource(Settings {
            chunks_per_frame: 2,
            ..default()
        })
        .init_resource::<GenerationQueue>()
        .add_systems(Startup, register_core_blocks)
        .add_systems(Update, (generate_queued_chunks, collect_generated).chain());

    {
        let mut queue = app.world_mut().resource_mut::<GenerationQueue>();
        queue.push(ChunkCoord::new(0, 0, 0));
        queue.push(ChunkCoord::new(1, 0, 0));
        queue.push(ChunkCoord::new(0, 0, 0));
        queue.push(ChunkCoord::new(0, -1, 0));
    }

    app.update();
    assert_eq!(app.world().resource::<Level>().chunk_count(), 2);
    app.update();

    let generated = &app.world().resource::<GeneratedChunks>().0;
    //the duplicate is skipped and doesn't send a second event
    assert_eq!(
        generated,
        &vec![
            ChunkCoord::new(0, 0, 0),
            ChunkCoord::new(1, 0, 0),
            ChunkCoord::new(0, -1, 0)
        ]
    );
    assert!(app.world().resource::<GenerationQueue>().is_empty());
    assert_eq!(app.world().resource::<Level>().chunk_count(), 3);
}
