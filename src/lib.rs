pub mod config;
pub mod hangul;
pub mod quiz;
pub mod word;

pub use hangul::{assemble, classify, WordProfile};
pub use quiz::{profile_for, ComplexityRule, Difficulty, DifficultyProfile};
