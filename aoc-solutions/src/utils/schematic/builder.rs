//! Schematic block reader and stack builder.
//!
//! The schematic block is a sequence of crate rows followed by one header row:
//!
//! ```text
//!     [D]
//! [N] [C]
//! [Z] [M] [P]
//!  1   2   3
//! ```
//!
//! Crates are assigned to the stack whose header spans their column. Rows are
//! stacked bottom-up, so the first text line is the top of every stack.

use super::document::{Crate, Stack, StackId};
use super::error::SchematicError;
use super::token::{Token, is_blank, read_header_tokens, read_item_tokens};

/// The crate tokens of one text line, consumed front to back
#[derive(Debug, Clone)]
pub struct ItemRow {
    tokens: Vec<Token>,
    cursor: usize,
}

impl ItemRow {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, cursor: 0 }
    }

    /// Next unconsumed token
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.cursor)
    }

    fn advance(&mut self) {
        self.cursor += 1;
    }

    /// Tokens not yet assigned to a stack
    pub fn remaining(&self) -> &[Token] {
        &self.tokens[self.cursor..]
    }

    /// All tokens of the row, consumed or not
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

/// Tokenized schematic block, before stacks are built
#[derive(Debug, Clone, Default)]
pub struct Schematic {
    rows: Vec<ItemRow>,
    headers: Vec<Token>,
}

impl Schematic {
    /// Reads numbered lines up to and including the header row
    ///
    /// Blank lines are skipped. A line starting with `[` is a crate row, a line
    /// starting with a digit is the header row and ends the block. Running out
    /// of lines leaves the schematic without headers.
    pub fn read<'a, I>(lines: &mut I) -> Result<Self, SchematicError>
    where
        I: Iterator<Item = (usize, &'a str)>,
    {
        let mut schematic = Self::default();

        for (line_number, line) in lines {
            let Some((start, first)) = line.chars().enumerate().find(|&(_, c)| !is_blank(c)) else {
                continue;
            };

            if first == '[' {
                let tokens = read_item_tokens(line, start, line_number)?;
                schematic.rows.push(ItemRow::new(tokens));
            } else if first.is_ascii_digit() {
                schematic.headers = read_header_tokens(line, start, line_number)?;
                break;
            } else {
                return Err(SchematicError::InvalidToken {
                    line: line_number,
                    character: first,
                });
            }
        }

        Ok(schematic)
    }

    /// Crate rows in text order (top row first)
    pub fn rows(&self) -> &[ItemRow] {
        &self.rows
    }

    /// Header tokens, left to right
    pub fn headers(&self) -> &[Token] {
        &self.headers
    }

    /// Number of crate tokens across all rows
    pub fn item_count(&self) -> usize {
        self.rows.iter().map(|row| row.tokens.len()).sum()
    }

    /// Distributes crates onto one stack per header
    ///
    /// For each header, rows are walked bottom-up and each row's next crate is
    /// taken while it lies within the header's column range. A crate left of
    /// the current header, or any crate still unassigned at the end, is
    /// floating. Row cursors keep their position after a failure.
    pub fn build(&mut self) -> Result<Vec<Stack>, SchematicError> {
        let mut stacks = Vec::with_capacity(self.headers.len());

        for (index, header) in self.headers.iter().enumerate() {
            let mut stack = Stack::new(header.content.clone(), StackId(index));

            for row in self.rows.iter_mut().rev() {
                let Some(token) = row.peek() else {
                    break;
                };

                if token.column < header.column {
                    return Err(floating(token));
                }
                if !header.covers(token.column) {
                    break;
                }

                stack.put_on(Crate::new(token.label()));
                row.advance();
            }

            stacks.push(stack);
        }

        if let Some(token) = self.rows.iter().rev().find_map(ItemRow::peek) {
            return Err(floating(token));
        }

        Ok(stacks)
    }
}

fn floating(token: &Token) -> SchematicError {
    SchematicError::FloatingItem {
        line: token.line,
        column: token.column + 1,
        item: token.label(),
    }
}
