//! `move N from A to B` instruction lines.

use std::str::FromStr;

use super::error::SchematicError;
use super::token::is_blank;

/// One move: `count` crates from stack `from` to stack `to` (both 1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Instruction {
    pub count: usize,
    pub from: usize,
    pub to: usize,
}

impl Instruction {
    /// Parses a single instruction line
    ///
    /// The line is split on single spaces and fields 1, 3 and 5 are read as
    /// count, source and destination. The keywords in between are not checked,
    /// and stack indices are not range-checked.
    pub fn parse(line: &str, line_number: usize) -> Result<Self, SchematicError> {
        let fields: Vec<&str> = line.split(' ').collect();

        let field = |index: usize, name: &'static str| -> Result<usize, SchematicError> {
            let raw = fields
                .get(index)
                .ok_or_else(|| SchematicError::MalformedInstruction {
                    line: line_number,
                    field: name,
                    reason: "is missing".to_string(),
                })?;
            raw.parse().map_err(|_| SchematicError::MalformedInstruction {
                line: line_number,
                field: name,
                reason: format!("'{}' is not a valid integer", raw),
            })
        };

        let count = field(1, "count")?;
        let from = field(3, "source")?;
        let to = field(5, "destination")?;

        if count == 0 {
            return Err(SchematicError::MalformedInstruction {
                line: line_number,
                field: "count",
                reason: "must be positive".to_string(),
            });
        }

        Ok(Self { count, from, to })
    }
}

impl FromStr for Instruction {
    type Err = SchematicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, 1)
    }
}

/// Parses every non-blank line into an instruction, in order
pub fn parse_instructions<'a, I>(lines: I) -> Result<Vec<Instruction>, SchematicError>
where
    I: IntoIterator<Item = (usize, &'a str)>,
{
    lines
        .into_iter()
        .filter(|(_, line)| !line.chars().all(is_blank))
        .map(|(line_number, line)| Instruction::parse(line, line_number))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_instruction() {
        assert_eq!(
            "move 3 from 1 to 3".parse::<Instruction>(),
            Ok(Instruction {
                count: 3,
                from: 1,
                to: 3
            })
        );
    }

    #[test]
    fn test_missing_count() {
        let err = Instruction::parse("move from 1 to 3", 12).unwrap_err();
        assert_eq!(err.line(), 12);
        assert!(matches!(
            err,
            SchematicError::MalformedInstruction { field: "count", .. }
        ));
    }

    #[test]
    fn test_truncated_line() {
        let err = Instruction::parse("move 1 from 2", 1).unwrap_err();
        assert_eq!(
            err,
            SchematicError::MalformedInstruction {
                line: 1,
                field: "destination",
                reason: "is missing".to_string()
            }
        );
    }

    #[test]
    fn test_double_space_is_malformed() {
        assert!(Instruction::parse("move  1 from 2 to 3", 1).is_err());
    }

    #[test]
    fn test_zero_count() {
        assert!(matches!(
            Instruction::parse("move 0 from 1 to 2", 4),
            Err(SchematicError::MalformedInstruction { line: 4, field: "count", .. })
        ));
    }

    #[test]
    fn test_indices_not_validated() {
        let instruction = Instruction::parse("move 1 from 0 to 99", 1).unwrap();
        assert_eq!((instruction.from, instruction.to), (0, 99));
    }

    #[test]
    fn test_blank_lines_skipped() {
        let lines = vec![(5, ""), (6, "move 1 from 2 to 1"), (7, "  "), (8, "move 2 from 1 to 3")];
        let instructions = parse_instructions(lines).unwrap();
        assert_eq!(instructions.len(), 2);
        assert_eq!(instructions[1].count, 2);
    }

    #[test]
    fn test_first_error_reported() {
        let lines = vec![(1, "move 1 from 2 to 1"), (2, "move x from 1 to 3"), (3, "bogus")];
        let err = parse_instructions(lines).unwrap_err();
        assert_eq!(err.line(), 2);
        assert!(err.to_string().contains("'x' is not a valid integer"));
    }
}
