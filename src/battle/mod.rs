pub mod combat;
pub mod damage;
pub mod engine;
pub mod movement;
pub mod runner;
pub mod state;
pub mod targeting;

#[cfg(test)]
mod tests;
