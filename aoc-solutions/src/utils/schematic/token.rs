//! Line tokenizer for stack headers and bracketed crates.

use super::error::SchematicError;

/// What a token was read as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Stack label from the header row
    Header,
    /// Single-character crate label from a `[X]` group
    Item,
}

/// A token with its source position
///
/// `column` is the 0-based character offset of the token's first character
/// (for items, the character between the brackets).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub content: String,
    pub line: usize,
    pub column: usize,
    pub length: usize,
}

impl Token {
    /// Whether `column` lies in `[self.column, self.column + self.length)`
    pub fn covers(&self, column: usize) -> bool {
        column >= self.column && column < self.column + self.length
    }

    /// First character of the content; the label of an item token
    pub fn label(&self) -> char {
        self.content.chars().next().unwrap_or_default()
    }
}

pub(crate) fn is_blank(c: char) -> bool {
    c.is_whitespace()
}

pub(crate) fn is_identifier(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Reads stack labels from `line`, starting at character offset `start`
///
/// A label starts with an identifier character (`[A-Za-z0-9_-]`) and runs to
/// whitespace or end of line. Other characters inside the run are dropped and
/// do not count toward the label's length.
pub fn read_header_tokens(
    line: &str,
    start: usize,
    line_number: usize,
) -> Result<Vec<Token>, SchematicError> {
    let mut tokens = Vec::new();
    let mut chars = line.chars().enumerate().skip(start).peekable();

    while let Some((column, c)) = chars.next() {
        if is_blank(c) {
            continue;
        }
        if !is_identifier(c) {
            return Err(SchematicError::InvalidToken {
                line: line_number,
                character: c,
            });
        }

        let mut content = String::from(c);
        while let Some((_, n)) = chars.next_if(|&(_, n)| !is_blank(n)) {
            if is_identifier(n) {
                content.push(n);
            }
        }

        let length = content.chars().count();
        tokens.push(Token {
            kind: TokenKind::Header,
            content,
            line: line_number,
            column,
            length,
        });
    }

    Ok(tokens)
}

/// Reads `[X]` crates from `line`, starting at character offset `start`
///
/// The label is whatever single character sits between the brackets.
pub fn read_item_tokens(
    line: &str,
    start: usize,
    line_number: usize,
) -> Result<Vec<Token>, SchematicError> {
    let mut tokens = Vec::new();
    let mut chars = line.chars().enumerate().skip(start);

    while let Some((column, c)) = chars.next() {
        if is_blank(c) {
            continue;
        }
        if c != '[' {
            return Err(SchematicError::InvalidToken {
                line: line_number,
                character: c,
            });
        }

        let malformed = SchematicError::MalformedItem {
            line: line_number,
            column: column + 1,
        };
        let (label_column, label) = match chars.next() {
            Some(payload) => payload,
            None => return Err(malformed),
        };
        if !matches!(chars.next(), Some((_, ']'))) {
            return Err(malformed);
        }

        tokens.push(Token {
            kind: TokenKind::Item,
            content: label.to_string(),
            line: line_number,
            column: label_column,
            length: 1,
        });
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_tokens_positions() {
        let tokens = read_header_tokens(" 1   2   3 ", 0, 4).unwrap();
        let positions: Vec<_> = tokens.iter().map(|t| (t.content.as_str(), t.column)).collect();
        assert_eq!(positions, vec![("1", 1), ("2", 5), ("3", 9)]);
        assert!(tokens.iter().all(|t| t.kind == TokenKind::Header && t.line == 4));
    }

    #[test]
    fn test_header_tokens_multi_char() {
        let tokens = read_header_tokens("10  a_b  x-1", 0, 1).unwrap();
        assert_eq!(tokens[0].length, 2);
        assert_eq!(tokens[1].content, "a_b");
        assert_eq!(tokens[1].column, 4);
        assert_eq!(tokens[2].content, "x-1");
        assert!(tokens[0].covers(1));
        assert!(!tokens[0].covers(2));
    }

    #[test]
    fn test_header_tokens_start_offset() {
        let tokens = read_header_tokens("  1  2", 2, 1).unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].column, 2);
    }

    #[test]
    fn test_header_invalid_character() {
        assert_eq!(
            read_header_tokens(" 1  [2]", 0, 7),
            Err(SchematicError::InvalidToken {
                line: 7,
                character: '['
            })
        );
    }

    #[test]
    fn test_header_drops_characters_inside_run() {
        let tokens = read_header_tokens(" 1:  2]", 0, 7).unwrap();
        let labels: Vec<_> = tokens
            .iter()
            .map(|t| (t.content.as_str(), t.column, t.length))
            .collect();
        assert_eq!(labels, vec![("1", 1, 1), ("2", 5, 1)]);
    }

    #[test]
    fn test_item_tokens_positions() {
        let tokens = read_item_tokens("[A] [B]     [C]", 0, 2).unwrap();
        let positions: Vec<_> = tokens.iter().map(|t| (t.label(), t.column)).collect();
        assert_eq!(positions, vec![('A', 1), ('B', 5), ('C', 13)]);
        assert!(tokens.iter().all(|t| t.kind == TokenKind::Item && t.length == 1));
    }

    #[test]
    fn test_item_tokens_adjacent() {
        let tokens = read_item_tokens("[A][B]", 0, 1).unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].column, 4);
    }

    #[test]
    fn test_item_unterminated() {
        for line in ["[A", "[AB]", "[", "[]", "    [A] [B"] {
            let err = read_item_tokens(line, 0, 3).unwrap_err();
            assert!(
                matches!(err, SchematicError::MalformedItem { line: 3, .. }),
                "{line:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_item_any_single_label() {
        let tokens = read_item_tokens("[ ] []] [[]", 0, 1).unwrap();
        let labels: Vec<_> = tokens.iter().map(|t| (t.label(), t.column)).collect();
        assert_eq!(labels, vec![(' ', 1), (']', 5), ('[', 9)]);
    }

    #[test]
    fn test_item_malformed_reports_bracket_column() {
        assert_eq!(
            read_item_tokens("[A] [BC]", 0, 1),
            Err(SchematicError::MalformedItem { line: 1, column: 5 })
        );
    }

    #[test]
    fn test_item_invalid_character() {
        assert_eq!(
            read_item_tokens("[A] B", 0, 9),
            Err(SchematicError::InvalidToken {
                line: 9,
                character: 'B'
            })
        );
    }
}
