// Simulation algorithms
mod random_walk;

pub use random_walk::RandomWalk;
