//! CLI infrastructure for the coordination experiment runner

pub mod run;
