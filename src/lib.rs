//! Habit Balance - game-balance formulas for a gamified habit tracker
//!
//! Completing a task grants experience, gold, a chance at a critical hit and
//! an item drop; failing one costs health. This crate exposes the pure
//! formulas, the character state they mutate, JSON persistence for that state
//! and a Monte Carlo balance simulator.

pub mod character;
pub mod core;
pub mod simulator;
pub mod utils;
