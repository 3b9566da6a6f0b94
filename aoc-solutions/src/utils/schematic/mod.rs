//! Crate Schematic Parser
//!
//! Reads the supply-stack notation: a drawing of labeled crates stacked in
//! columns, a header row naming each stack, then a list of move instructions.
//!
//! ```text
//!     [D]
//! [N] [C]
//! [Z] [M] [P]
//!  1   2   3
//!
//! move 1 from 2 to 1
//! move 3 from 1 to 3
//! ```
//!
//! # Rules
//!
//! - A crate is `[X]` with a one-character label.
//! - Crates belong to the stack whose header spans the crate's label column;
//!   headers may be wider than one character.
//! - Stacks are contiguous from the bottom: a crate with nothing under it, or
//!   outside every header, is a floating/excess crate and fails the parse.
//! - The first error aborts the parse; a [`Document`] is only handed out fully
//!   built.
//!
//! # Pipeline
//!
//! - [`token`]: per-line tokenizer for headers and crates
//! - [`Schematic`]: reads the schematic block and builds the [`Stack`]s
//! - [`Instruction`]: parses `move N from A to B`
//! - [`Document`]: owns stacks and instructions and executes moves
//!
//! # Example
//!
//! ```rust
//! use aoc_solutions::utils::schematic::{Document, MoveMode};
//!
//! let input = "    [D]\n[N] [C]\n[Z] [M] [P]\n 1   2   3\n\nmove 1 from 2 to 1\nmove 3 from 1 to 3";
//!
//! let mut document: Document = input.parse().unwrap();
//! assert_eq!(document.stacks().len(), 3);
//!
//! document.execute(MoveMode::OneAtATime);
//! assert_eq!(document.top_labels(), "CZ");
//! ```

mod builder;
mod document;
mod error;
mod instruction;
pub mod token;


pub use builder::{ItemRow, Schematic};
pub use document::{Crate, Document, MoveMode, Stack, StackId};
pub use error::SchematicError;
pub use instruction::{Instruction, parse_instructions};
pub use token::{Token, TokenKind};
