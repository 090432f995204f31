// src/lexer/graph/build.rs
use hashbrown::HashSet;

use super::tokens::{GrammarTemplate, TokenType};
use super::{ROOT, SENTINEL, State, StateGraph, StateId};

fn letters() -> impl Iterator<Item = char> {
    ('a'..='z').chain('A'..='Z')
}

fn ident_start_chars() -> impl Iterator<Item = char> {
    letters().chain(std::iter::once('_'))
}

fn ident_continue_chars() -> impl Iterator<Item = char> {
    ident_start_chars().chain('0'..='9')
}

/// Merges the keyword trie, the symbol trie, the identifier fallback, and the
/// numeric sub-automaton into one [`StateGraph`].
pub struct GraphBuilder {
    states: Vec<State>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            states: vec![State::new()],
        }
    }

    /// Wiring order matters: keyword states must be known before the
    /// identifier fallback runs, and the root's digit edges belong to the
    /// numeric sub-automaton, not the fallback.
    pub fn build(mut self, template: &GrammarTemplate) -> StateGraph {
        let mut keyword_states: HashSet<StateId> = HashSet::new();
        for (lexeme, ty) in &template.keywords {
            keyword_states.extend(self.insert_lexeme(lexeme, *ty));
        }
        self.wire_identifier_fallback(&keyword_states);

        for (lexeme, ty) in &template.symbols {
            self.insert_lexeme(lexeme, *ty);
        }
        // The sentinel is part of the scanner contract, not template data:
        // the per-line retry on it must land in an accepting state.
        self.insert_lexeme(&SENTINEL.to_string(), TokenType::Eof);

        self.wire_numeric();

        log::debug!(
            "state graph built: {} states ({} keywords, {} symbols)",
            self.states.len(),
            template.keywords.len(),
            template.symbols.len(),
        );
        StateGraph::from_states(self.states)
    }

    /// Trie insertion: walk from the root creating states as needed, label
    /// the terminal state, and report every state visited along the way.
    /// A duplicate lexeme overwrites the earlier label at the same terminal.
    fn insert_lexeme(&mut self, lexeme: &str, ty: TokenType) -> Vec<StateId> {
        debug_assert!(!lexeme.is_empty(), "empty lexeme would relabel the root");
        let mut cur = ROOT;
        let mut visited = Vec::with_capacity(lexeme.len());
        for ch in lexeme.chars() {
            let next = match self.states[cur].transitions.get(&ch).copied() {
                Some(id) => id,
                None => {
                    let id = self.alloc();
                    self.states[cur].transitions.insert(ch, id);
                    id
                }
            };
            cur = next;
            visited.push(cur);
        }
        self.states[cur].accept = ty;
        visited
    }

    /// One shared state accepts `Identifier` and self-loops on every letter,
    /// digit, and underscore. The root routes unclaimed letters/underscores
    /// to it; every keyword-visited state additionally routes unclaimed
    /// digits to it, and is itself relabeled `Identifier` if no lexeme ends
    /// there. Longest match then resolves keyword-vs-identifier on its own:
    /// a keyword label only survives if the match stops exactly at the
    /// keyword boundary.
    fn wire_identifier_fallback(&mut self, keyword_states: &HashSet<StateId>) {
        let ident = self.alloc();
        self.states[ident].accept = TokenType::Identifier;
        for ch in ident_continue_chars() {
            self.states[ident].transitions.insert(ch, ident);
        }

        for ch in ident_start_chars() {
            self.states[ROOT].transitions.entry(ch).or_insert(ident);
        }

        for &id in keyword_states {
            if self.states[id].accept == TokenType::Unknown {
                self.states[id].accept = TokenType::Identifier;
            }
            for ch in ident_continue_chars() {
                self.states[id].transitions.entry(ch).or_insert(ident);
            }
        }
    }

    /// Numeric sub-automaton over states s0..s6, reusing the root as s0:
    /// s1 = integer run (accepting `IntegerConstant`), s4 = exponent marker,
    /// s5 = exponent sign, s6 = exponent digits (accepting
    /// `FloatingPointConstant`), s2/s3 = fraction digits.
    ///
    /// s1 has no '.' edge, so s2/s3 stay unreachable and "1.5" lexes as an
    /// integer, an unrecognized '.', and another integer.
    fn wire_numeric(&mut self) {
        let s: Vec<StateId> = (0..7)
            .map(|i| if i == 0 { ROOT } else { self.alloc() })
            .collect();

        self.states[s[1]].accept = TokenType::IntegerConstant;
        self.states[s[3]].accept = TokenType::FloatingPointConstant;
        self.states[s[6]].accept = TokenType::FloatingPointConstant;

        for d in '0'..='9' {
            self.states[s[0]].transitions.insert(d, s[1]);
            self.states[s[1]].transitions.insert(d, s[1]);
            self.states[s[2]].transitions.insert(d, s[3]);
            self.states[s[3]].transitions.insert(d, s[3]);
            self.states[s[4]].transitions.insert(d, s[6]);
            self.states[s[5]].transitions.insert(d, s[6]);
            self.states[s[6]].transitions.insert(d, s[6]);
        }

        for e in ['e', 'E'] {
            self.states[s[1]].transitions.insert(e, s[4]);
            self.states[s[3]].transitions.insert(e, s[4]);
        }
        self.states[s[4]].transitions.insert('+', s[5]);
        self.states[s[4]].transitions.insert('-', s[5]);
    }

    fn alloc(&mut self) -> StateId {
        self.states.push(State::new());
        self.states.len() - 1
    }
}
