// Engine modules: input, physics, audio, timing

pub mod audio;
pub mod game_loop;
pub mod input;
pub mod physics;
