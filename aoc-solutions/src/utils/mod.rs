//! Reusable building blocks shared by solutions

pub mod schematic;
