// Gameplay modules built on top of the engine

pub mod character;
