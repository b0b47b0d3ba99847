//! Splitting text into request-sized pieces for the TTS endpoint.
//!
//! Google's endpoint only accepts short inputs, so text is cut into chunks of
//! at most `max_chars` characters.  Cuts prefer sentence punctuation, then
//! word boundaries; a single word longer than the limit is split on
//! character boundaries.  Adjacent short pieces are packed back together so
//! a page of prose doesn't turn into one request per clause.

/// Characters that end a clause when followed by whitespace or end of text.
const CLAUSE_END: &[char] = &[
    '.', '!', '?', ';', ':', ',', '…', '。', '！', '？', '；', '：', '，', '、',
];

/// Split `text` into chunks of at most `max_chars` characters.
///
/// Whitespace is collapsed, and chunks with no alphanumeric content are
/// dropped.  Returns an empty vector when nothing speakable remains.
///
/// ```
/// use pdf_roundtrip::tts::split_text;
///
/// let chunks = split_text("Hello world. How are you?", 15);
/// assert_eq!(chunks, vec!["Hello world.", "How are you?"]);
/// ```
pub fn split_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");

    let mut pieces: Vec<String> = Vec::new();
    for clause in clauses(&normalized) {
        if char_len(&clause) <= max_chars {
            pieces.push(clause);
        } else {
            pieces.extend(split_words(&clause, max_chars));
        }
    }

    pack(pieces, max_chars)
        .into_iter()
        .filter(|c| c.chars().any(char::is_alphanumeric))
        .collect()
}

/// Cut after clause punctuation that is followed by a space or the end.
fn clauses(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        current.push(c);
        let at_boundary = chars.peek().map_or(true, |next| next.is_whitespace());
        if CLAUSE_END.contains(&c) && at_boundary {
            push_trimmed(&mut out, &current);
            current.clear();
        }
    }
    push_trimmed(&mut out, &current);
    out
}

/// Greedy word packing for a clause that is too long on its own.
fn split_words(clause: &str, max_chars: usize) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();

    for word in clause.split_whitespace() {
        let word_len = char_len(word);
        if word_len > max_chars {
            push_trimmed(&mut out, &current);
            current.clear();
            let chars: Vec<char> = word.chars().collect();
            out.extend(chars.chunks(max_chars).map(|c| c.iter().collect::<String>()));
        } else if current.is_empty() {
            current.push_str(word);
        } else if char_len(&current) + 1 + word_len <= max_chars {
            current.push(' ');
            current.push_str(word);
        } else {
            out.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    push_trimmed(&mut out, &current);
    out
}

/// Join neighbouring pieces while the result still fits.
fn pack(pieces: Vec<String>, max_chars: usize) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for piece in pieces {
        match out.last_mut() {
            Some(last) if char_len(last) + 1 + char_len(&piece) <= max_chars => {
                last.push(' ');
                last.push_str(&piece);
            }
            _ => out.push(piece),
        }
    }
    out
}

fn push_trimmed(out: &mut Vec<String>, s: &str) {
    let s = s.trim();
    if !s.is_empty() {
        out.push(s.to_string());
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
