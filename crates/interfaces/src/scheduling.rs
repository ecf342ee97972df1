use bevy::prelude::*;

pub(crate) struct SchedulingPlugin;

impl Plugin for SchedulingPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .add_sub_state::<LevelLoadState>()
            .configure_sets(
                Update,
                LevelSystemSet::Main
                    .run_if(in_state(LevelLoadState::Loaded))
                    .run_if(in_state(GameState::Game)),
            )
            .configure_sets(
                Update,
                LevelSystemSet::LoadingAndMain
                    .run_if(in_state(LevelLoadState::Loading).or(in_state(LevelLoadState::Loaded)))
                    .run_if(in_state(GameState::Game)),
            )
            .configure_sets(
                Update,
                LevelSystemSet::PostMain
                    .after(LevelSystemSet::Main)
                    .after(LevelSystemSet::LoadingAndMain),
            );
    }
}

#[derive(States, Default, Debug, Hash, Eq, PartialEq, Clone)]
pub enum GameState {
    #[default]
    Setup,
    Game,
}

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum LevelSystemSet {
    //only runs in LevelLoadState::Loaded
    Main,
    //like main, but also runs in LevelLoadState::Loading. chunk generation happens here
    LoadingAndMain,
    //runs after both main and loading, commands from those sets are applied beforehand
    PostMain,
}

#[derive(Debug, Clone, Eq, PartialEq, Hash, SubStates, Default)]
#[source(GameState = GameState::Game)]
pub enum LevelLoadState {
    #[default]
    NotLoaded,
    Loading,
    Loaded,
}
