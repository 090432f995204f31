// src/lexer/graph/cursor.rs
use super::{StateGraph, StateId, TokenType};

/// Mutable scan position over a shared [`StateGraph`]: the current state plus
/// the number of characters consumed since the last reset.
///
/// The graph itself is never touched; a scanner resets its cursor at the
/// start of every line and after every finalized token.
pub struct Cursor<'g> {
    graph: &'g StateGraph,
    state: StateId,
    len: usize,
}

impl<'g> Cursor<'g> {
    pub fn new(graph: &'g StateGraph) -> Self {
        Self {
            graph,
            state: graph.root(),
            len: 0,
        }
    }

    /// Consume one character. On a wired transition, returns the accepting
    /// label of the new state (which may be `Unknown` for a state inside a
    /// lexeme) together with the match length so far. If no transition
    /// exists, the cursor resets to the root and `None` is returned.
    pub fn step(&mut self, ch: char) -> Option<(TokenType, usize)> {
        self.len += 1;
        match self.graph.state(self.state).target(ch) {
            Some(next) => {
                self.state = next;
                Some((self.graph.state(next).accept(), self.len))
            }
            None => {
                self.reset();
                None
            }
        }
    }

    pub fn reset(&mut self) {
        self.state = self.graph.root();
        self.len = 0;
    }

    #[inline]
    pub fn match_len(&self) -> usize {
        self.len
    }
}
