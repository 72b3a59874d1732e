pub mod climate;
pub mod events;
pub mod geography;
pub mod world;
