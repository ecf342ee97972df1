use std::{fs, path::Path, sync::Arc};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use world::{settings::Settings, BlockName};

use crate::group::{ChunkGenerationSpawnable, SpawnError};

//an actor that may be spawned when chunks generate. lives on its own entity, like a template
#[derive(Component, Clone, Debug)]
pub struct SpawnablePrefab {
    pub actor: Arc<String>,
    //None means any solid block
    pub ground: Option<BlockName>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpawnablePrefabDef {
    pub actor: String,
    #[serde(default)]
    pub ground: Option<BlockName>,
    #[serde(default)]
    pub spawnable: ChunkGenerationSpawnable,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SpawnTable {
    pub prefabs: Vec<SpawnablePrefabDef>,
}

#[derive(Debug)]
pub enum SpawnConfigError {
    Io(std::io::Error),
    Parse(ron::error::SpannedError),
    Invalid { actor: String, error: SpawnError },
}

impl From<std::io::Error> for SpawnConfigError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ron::error::SpannedError> for SpawnConfigError {
    fn from(err: ron::error::SpannedError) -> Self {
        Self::Parse(err)
    }
}

impl std::fmt::Display for SpawnConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Parse(e) => write!(f, "RON parse error: {}", e),
            Self::Invalid { actor, error } => write!(f, "spawnable {}: {}", actor, error),
        }
    }
}

impl std::error::Error for SpawnConfigError {}

impl SpawnTable {
    pub fn parse(contents: &str) -> Result<SpawnTable, SpawnConfigError> {
        let table: SpawnTable = ron::from_str(contents)?;
        for def in table.prefabs.iter() {
            def.spawnable
                .validate()
                .map_err(|error| SpawnConfigError::Invalid {
                    actor: def.actor.clone(),
                    error,
                })?;
        }
        Ok(table)
    }

    pub fn load(path: &Path) -> Result<SpawnTable, SpawnConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn spawn_prefabs(&self, commands: &mut Commands) {
        for def in self.prefabs.iter() {
            commands.spawn((
                Name::new(format!("{} spawnable", def.actor)),
                SpawnablePrefab {
                    actor: Arc::new(def.actor.clone()),
                    ground: def.ground.clone(),
                },
                def.spawnable,
            ));
        }
    }
}

pub fn load_spawnable_prefabs(mut commands: Commands, settings: Res<Settings>) {
    match SpawnTable::load(Path::new(settings.spawnables_path)) {
        Ok(table) => {
            table.spawn_prefabs(&mut commands);
            info!(
                "Found {} prefabs with ChunkGenerationSpawnable",
                table.prefabs.len()
            );
        }
        Err(e) => error!(
            "couldn't load spawnables from {}: {}",
            settings.spawnables_path, e
        ),
    }
}
