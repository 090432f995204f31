// src/lexer/scan.rs
// Line-oriented maximal-munch scanner driving a Cursor over a shared graph.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::graph::{Cursor, SENTINEL, StateGraph, TokenType};

/// 1-based source coordinates. Rows count scanned lines: blank lines are
/// skipped without advancing the row counter, so reported rows drift from
/// physical line numbers when blank lines are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub row: u32,
    pub col: u32,
}

/// One output entry: a recognized token carries an id and its matched text;
/// an error entry carries neither and has type `UNKNOWN`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(rename = "type")]
    pub token_type: TokenType,
    pub location: Location,
}

/// Entries in document order, terminated by one `Eof` entry, plus the
/// overall success flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    pub entries: Vec<Token>,
    pub success: bool,
}

/// Characters that separate tokens without ever starting one; they are the
/// only step failures that do not produce an error entry.
#[inline]
fn is_separator(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n')
}

fn error_at(row: u32, col: usize) -> Token {
    Token {
        id: None,
        content: None,
        token_type: TokenType::Unknown,
        location: Location {
            row,
            col: (col + 1) as u32,
        },
    }
}

/// Drives a [`Cursor`] over input lines, one token per longest accepted
/// match. On a failed extension the best match so far is finalized and the
/// failing character is re-fed once from the root; on a failed first
/// character the scanner records an error entry and moves on.
pub struct ScanEngine<'g> {
    graph: &'g StateGraph,
}

impl<'g> ScanEngine<'g> {
    pub fn new(graph: &'g StateGraph) -> Self {
        Self { graph }
    }

    /// Scan `lines` into an ordered token stream.
    ///
    /// Line comments drop the rest of their line; block comment delimiters
    /// toggle suppression (the delimiters themselves are never emitted while
    /// entering or inside a comment). Ids are assigned only to emitted
    /// tokens; the terminal `Eof` entry always takes the next id.
    pub fn scan<I>(&self, lines: I) -> ScanResult
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut entries: Vec<Token> = Vec::new();
        let mut row: u32 = 1;
        let mut next_id: u32 = 1;
        let mut in_comment = false;
        let mut success = true;
        let mut cursor = Cursor::new(self.graph);

        for line in lines {
            let line = line.as_ref();
            if line.trim().is_empty() {
                continue;
            }
            cursor.reset();
            let chars: Vec<char> = line.chars().collect();
            let mut current: Option<(TokenType, usize)> = None;

            let padded = chars.iter().copied().chain(std::iter::once(SENTINEL));
            for (col, ch) in padded.enumerate() {
                let stepped = cursor.step(ch);
                match (current, stepped) {
                    // The best match just stopped extending: finalize it,
                    // then re-feed `ch` as a fresh first character.
                    (Some((ty, len)), None) => {
                        if ty == TokenType::LineComment {
                            break;
                        }
                        if ty == TokenType::BlockCommentStart {
                            in_comment = true;
                        }
                        if !in_comment {
                            entries.push(Token {
                                id: Some(next_id),
                                content: Some(chars[col - len..col].iter().collect()),
                                token_type: ty,
                                location: Location {
                                    row,
                                    col: (col - len + 1) as u32,
                                },
                            });
                            next_id += 1;
                        }
                        if ty == TokenType::BlockCommentEnd {
                            in_comment = false;
                        }
                        current = cursor.step(ch);
                        // The reread failing records an error entry but does
                        // not clear `success`; only a cold failure below does.
                        if current.is_none() && !in_comment && !is_separator(ch) {
                            entries.push(error_at(row, col));
                        }
                    }
                    // No match in progress and `ch` cannot start one.
                    (None, None) => {
                        if !in_comment && !is_separator(ch) {
                            success = false;
                            entries.push(error_at(row, col));
                        }
                    }
                    // Keep munching.
                    (_, Some(m)) => current = Some(m),
                }
            }
            row += 1;
        }

        entries.push(Token {
            id: Some(next_id),
            content: Some(SENTINEL.to_string()),
            token_type: TokenType::Eof,
            location: Location { row, col: 1 },
        });

        log::trace!("scan: {} entries, success={success}", entries.len());
        ScanResult { entries, success }
    }
}

/// Scan many independent inputs in parallel over one shared graph. The graph
/// is read-only; every scan owns a private engine and cursor.
pub fn scan_many<L>(graph: &StateGraph, inputs: &[Vec<L>]) -> Vec<ScanResult>
where
    L: AsRef<str> + Sync,
{
    inputs
        .par_iter()
        .map(|lines| ScanEngine::new(graph).scan(lines))
        .collect()
}
