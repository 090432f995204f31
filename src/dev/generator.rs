// src/dev/generator.rs
// Shared random-source generator for the sweep tests.

use rand::Rng;

use crate::lexer::{GrammarTemplate, TokenType};

/// Generate `n_tokens` whitespace-separated lexemes drawn from the template
/// plus random identifiers and numeric literals, and return the token
/// sequence a scan of the source must produce, in order.
///
/// Comment delimiters are excluded from the pool (they suppress output), as
/// is the reserved `#` sentinel.
pub fn gen_valid_source<R: Rng>(
    rng: &mut R,
    template: &GrammarTemplate,
    n_tokens: usize,
) -> (String, Vec<(String, TokenType)>) {
    let symbol_pool: Vec<&(String, TokenType)> = template
        .symbols
        .iter()
        .filter(|(_, ty)| {
            !matches!(
                ty,
                TokenType::LineComment
                    | TokenType::BlockCommentStart
                    | TokenType::BlockCommentEnd
                    | TokenType::Eof
            )
        })
        .collect();

    let mut expected = Vec::with_capacity(n_tokens);
    for _ in 0..n_tokens {
        let entry = match rng.random_range(0..5) {
            0 => {
                let (lex, ty) = &template.keywords[rng.random_range(0..template.keywords.len())];
                (lex.clone(), *ty)
            }
            1 => {
                let (lex, ty) = symbol_pool[rng.random_range(0..symbol_pool.len())];
                (lex.clone(), *ty)
            }
            2 => (gen_identifier(rng), TokenType::Identifier),
            3 => (gen_integer(rng), TokenType::IntegerConstant),
            _ => (gen_float(rng), TokenType::FloatingPointConstant),
        };
        expected.push(entry);
    }

    let mut src = String::new();
    for (i, (lex, _)) in expected.iter().enumerate() {
        if i > 0 {
            // occasional newline so the stream spans multiple lines
            src.push(if rng.random_bool(0.15) { '\n' } else { ' ' });
        }
        src.push_str(lex);
    }
    (src, expected)
}

// Leading underscore keeps generated identifiers clear of every keyword.
fn gen_identifier<R: Rng>(rng: &mut R) -> String {
    const TAIL: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
    let len = rng.random_range(1..=8);
    let mut s = String::from("_");
    for _ in 0..len {
        s.push(TAIL[rng.random_range(0..TAIL.len())] as char);
    }
    s
}

fn gen_integer<R: Rng>(rng: &mut R) -> String {
    rng.random_range(0..1_000_000u32).to_string()
}

fn gen_float<R: Rng>(rng: &mut R) -> String {
    let mantissa = rng.random_range(0..10_000u32);
    let marker = if rng.random_bool(0.5) { 'e' } else { 'E' };
    let sign = ["", "+", "-"][rng.random_range(0..3)];
    let exp = rng.random_range(0..40u32);
    format!("{mantissa}{marker}{sign}{exp}")
}
