//! Parsed schematic document: stacks of crates plus the move instructions.

use std::fmt;
use std::str::FromStr;

use super::builder::Schematic;
use super::error::SchematicError;
use super::instruction::{Instruction, parse_instructions};

/// Position of a stack within its document (0-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StackId(pub usize);

impl fmt::Display for StackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0 + 1)
    }
}

/// A labeled crate
///
/// `owner` names the stack currently holding the crate; it is `None` while
/// the crate is detached between a take-off and a put-on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crate {
    id: char,
    owner: Option<StackId>,
}

impl Crate {
    pub fn new(id: char) -> Self {
        Self { id, owner: None }
    }

    pub fn id(&self) -> char {
        self.id
    }

    pub fn owner(&self) -> Option<StackId> {
        self.owner
    }
}

/// A labeled LIFO pile of crates, stored bottom to top
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack {
    id: String,
    index: StackId,
    crates: Vec<Crate>,
}

impl Stack {
    pub fn new(id: impl Into<String>, index: StackId) -> Self {
        Self {
            id: id.into(),
            index,
            crates: Vec::new(),
        }
    }

    /// Creates a stack holding `crates`, given bottom first
    pub fn with_crates<I>(id: impl Into<String>, index: StackId, crates: I) -> Self
    where
        I: IntoIterator<Item = Crate>,
    {
        let mut stack = Self::new(id, index);
        stack.put_on_all(crates);
        stack
    }

    /// Header label of the stack
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn index(&self) -> StackId {
        self.index
    }

    /// Crates from bottom to top
    pub fn crates(&self) -> &[Crate] {
        &self.crates
    }

    /// Crate at `index`, counted from the bottom
    pub fn crate_at(&self, index: usize) -> Option<&Crate> {
        self.crates.get(index)
    }

    pub fn top(&self) -> Option<&Crate> {
        self.crates.last()
    }

    pub fn len(&self) -> usize {
        self.crates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crates.is_empty()
    }

    /// Places a crate on top, taking ownership of it
    pub fn put_on(&mut self, mut item: Crate) {
        item.owner = Some(self.index);
        self.crates.push(item);
    }

    /// Places crates on top in iteration order
    pub fn put_on_all<I>(&mut self, crates: I)
    where
        I: IntoIterator<Item = Crate>,
    {
        for item in crates {
            self.put_on(item);
        }
    }

    /// Takes the top crate off
    ///
    /// # Panics
    ///
    /// Panics if the stack is empty.
    pub fn take_off(&mut self) -> Crate {
        let Some(mut item) = self.crates.pop() else {
            panic!("cannot take a crate off empty stack '{}'", self.id);
        };
        item.owner = None;
        item
    }

    /// Takes `amount` crates off one at a time, topmost first
    ///
    /// # Panics
    ///
    /// Panics if the stack holds fewer than `amount` crates.
    pub fn take_off_many(&mut self, amount: usize) -> Vec<Crate> {
        self.assert_depth(amount);
        (0..amount).map(|_| self.take_off()).collect()
    }

    /// Lifts the top `amount` crates as one batch, bottom of the batch first
    ///
    /// # Panics
    ///
    /// Panics if the stack holds fewer than `amount` crates.
    pub fn lift_off(&mut self, amount: usize) -> Vec<Crate> {
        self.assert_depth(amount);
        let mut batch = self.crates.split_off(self.crates.len() - amount);
        for item in &mut batch {
            item.owner = None;
        }
        batch
    }

    fn assert_depth(&self, amount: usize) {
        assert!(
            amount <= self.crates.len(),
            "cannot take {} crates off stack '{}' holding {}",
            amount,
            self.id,
            self.crates.len()
        );
    }
}

/// How a multi-crate move relocates its crates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveMode {
    /// Crates move one by one, reversing their order
    OneAtATime,
    /// Crates move as one batch, keeping their order
    Bulk,
}

/// A fully parsed schematic document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    stacks: Vec<Stack>,
    instructions: Vec<Instruction>,
}

impl Document {
    /// Parses the schematic block followed by the instruction block
    ///
    /// Line numbers in errors count from 1, blank lines included.
    pub fn parse_lines<'a, I>(lines: I) -> Result<Self, SchematicError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut numbered = lines
            .into_iter()
            .enumerate()
            .map(|(index, line)| (index + 1, line));

        let stacks = Schematic::read(&mut numbered)?.build()?;
        let instructions = parse_instructions(numbered)?;

        Ok(Self {
            stacks,
            instructions,
        })
    }

    pub fn stacks(&self) -> &[Stack] {
        &self.stacks
    }

    /// Stack by its 1-based instruction index
    pub fn stack(&self, index: usize) -> Option<&Stack> {
        index.checked_sub(1).and_then(|i| self.stacks.get(i))
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Applies one instruction
    ///
    /// # Panics
    ///
    /// Panics if either index does not name a stack, or the source stack holds
    /// fewer than `count` crates.
    pub fn apply(&mut self, instruction: Instruction, mode: MoveMode) {
        let source = self.stack_mut(instruction.from);
        let moved = match mode {
            MoveMode::OneAtATime => source.take_off_many(instruction.count),
            MoveMode::Bulk => source.lift_off(instruction.count),
        };
        self.stack_mut(instruction.to).put_on_all(moved);
    }

    /// Applies every instruction in order
    pub fn execute(&mut self, mode: MoveMode) {
        for index in 0..self.instructions.len() {
            let instruction = self.instructions[index];
            self.apply(instruction, mode);
        }
    }

    /// Top crate label of every stack, in stack order
    pub fn top_crates(&self) -> impl Iterator<Item = Option<char>> + '_ {
        self.stacks.iter().map(|stack| stack.top().map(Crate::id))
    }

    /// Top crate labels of the non-empty stacks, concatenated
    pub fn top_labels(&self) -> String {
        self.top_crates().flatten().collect()
    }

    fn stack_mut(&mut self, index: usize) -> &mut Stack {
        let count = self.stacks.len();
        index
            .checked_sub(1)
            .and_then(|i| self.stacks.get_mut(i))
            .unwrap_or_else(|| panic!("stack {} does not exist ({} stacks)", index, count))
    }
}

impl FromStr for Document {
    type Err = SchematicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_lines(s.lines())
    }
}
