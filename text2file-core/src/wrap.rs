//! Greedy word wrapping by character count.
//!
//! Text is split into chunks: words, the whitespace runs between them, and
//! word pieces ending in a hyphen (`well-` `known`). Lines are filled with
//! whole chunks, so spacing inside a line is kept as written. Whitespace is
//! dropped only at the start and end of a line. Widths count Unicode scalar
//! values, not bytes. Words longer than the width are broken so that no line
//! ever exceeds it, after a hyphen when one fits.

const TAB_SIZE: usize = 8;

/// Wraps `text` into lines of at most `width` characters.
///
/// Tabs are expanded to 8-column stops and every other break character
/// (newline, carriage return, form feed, vertical tab) becomes a single
/// space. Empty or whitespace-only input yields no lines. A `width` of 0 is
/// treated as 1.
///
/// ```
/// use text2file::wrap;
///
/// let lines = wrap("the quick brown fox", 10);
/// assert_eq!(lines, vec!["the quick", "brown fox"]);
/// ```
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let normalized = normalize_whitespace(text);

    // Reversed so the next chunk is always at the end.
    let mut chunks: Vec<&str> = split_chunks(&normalized);
    chunks.reverse();

    let mut lines = Vec::new();
    while !chunks.is_empty() {
        let mut line: Vec<&str> = Vec::new();
        let mut len = 0;

        if chunks.last().is_some_and(|c| is_space_chunk(c)) {
            chunks.pop();
        }

        while let Some(&chunk) = chunks.last() {
            let chunk_len = chunk.chars().count();
            if len + chunk_len > width {
                break;
            }
            line.push(chunk);
            len += chunk_len;
            chunks.pop();
        }

        if let Some(chunk) = chunks.last_mut() {
            let word: &str = *chunk;
            if word.chars().count() > width {
                let cut = long_word_cut(word, width - len);
                if cut > 0 {
                    let (head, tail) = word.split_at(cut);
                    line.push(head);
                    *chunk = tail;
                }
            }
        }

        if line.last().is_some_and(|c| is_space_chunk(c)) {
            line.pop();
        }
        if !line.is_empty() {
            lines.push(line.concat());
        }
    }

    lines
}

fn is_break_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

fn is_space_chunk(chunk: &str) -> bool {
    chunk.starts_with(' ')
}

/// Expands tabs, then turns every break character into one space.
fn normalize_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut column = 0;
    for c in text.chars() {
        match c {
            '\t' => {
                let pad = TAB_SIZE - column % TAB_SIZE;
                out.extend(std::iter::repeat(' ').take(pad));
                column += pad;
            }
            '\n' | '\r' => {
                out.push(' ');
                column = 0;
            }
            c if is_break_space(c) => {
                out.push(' ');
                column += 1;
            }
            c => {
                out.push(c);
                column += 1;
            }
        }
    }
    out
}

/// Splits normalized text into space runs and words, breaking words after
/// a hyphen joining two letter runs (`well-known`, not `x-ray` or `1-2`).
fn split_chunks(text: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut chunks = Vec::new();
    let mut start = 0;

    for (i, &(idx, c)) in chars.iter().enumerate() {
        let next = chars.get(i + 1).map(|&(_, n)| n);
        let end = idx + c.len_utf8();

        let space_ends = c == ' ' && next != Some(' ');
        let word_ends = c != ' ' && next.map_or(true, |n| n == ' ');
        if space_ends || word_ends || (c == '-' && hyphen_break(&chars, i)) {
            chunks.push(&text[start..end]);
            start = end;
        }
    }
    chunks
}

fn hyphen_break(chars: &[(usize, char)], i: usize) -> bool {
    let alpha = |j: usize| chars.get(j).is_some_and(|&(_, c)| c.is_alphabetic());
    i >= 2 && alpha(i - 1) && alpha(i - 2) && alpha(i + 1) && alpha(i + 2)
}

/// Byte offset at which to cut a chunk that is too long for any line,
/// given `room` characters left on the current line. Prefers cutting just
/// after the last hyphen that fits, unless only hyphens precede it.
fn long_word_cut(chunk: &str, room: usize) -> usize {
    let limit = chunk
        .char_indices()
        .nth(room)
        .map_or(chunk.len(), |(idx, _)| idx);
    let head = &chunk[..limit];

    match head.rfind('-') {
        Some(hyphen) if hyphen > 0 && head[..hyphen].chars().any(|c| c != '-') => hyphen + 1,
        _ => limit,
    }
}
