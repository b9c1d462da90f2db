//! Whitespace tokenization of transliterated text.

/// A single token with its byte range in transliterated coordinates.
/// Half-open range; the range excludes trimmed punctuation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// Returns true for characters trimmed off token edges. Internal
/// punctuation (hyphens in compound names, apostrophes) is preserved.
pub(crate) fn is_trimmable(c: char) -> bool {
    !(c.is_alphanumeric() || c == '\'')
}

/// Split transliterated text into tokens: whitespace-delimited, edge
/// punctuation trimmed, empty tokens discarded. Deterministic.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chunk_start: Option<usize> = None;

    let flush = |tokens: &mut Vec<Token>, start: usize, end: usize| {
        if let Some(token) = trim_chunk(text, start, end) {
            tokens.push(token);
        }
    };

    for (idx, ch) in text.char_indices() {
        if ch.is_whitespace() {
            if let Some(start) = chunk_start.take() {
                flush(&mut tokens, start, idx);
            }
        } else if chunk_start.is_none() {
            chunk_start = Some(idx);
        }
    }
    if let Some(start) = chunk_start {
        flush(&mut tokens, start, text.len());
    }

    tokens
}

fn trim_chunk(text: &str, start: usize, end: usize) -> Option<Token> {
    let chunk = &text[start..end];
    let trimmed_front = chunk.trim_start_matches(is_trimmable);
    let lead = chunk.len() - trimmed_front.len();
    let trimmed = trimmed_front.trim_end_matches(is_trimmable);
    if trimmed.is_empty() {
        return None;
    }
    let token_start = start + lead;
    Some(Token {
        text: trimmed.to_string(),
        start: token_start,
        end: token_start + trimmed.len(),
    })
}
