//! Greedy word wrap against the static font metrics.
//!
//! A word wider than the whole line is hard-split at character boundaries so
//! the renderer never draws past the right margin.

use crate::layout::font_metrics::{get_metrics, FontFace, FontMetricTable, PT_TO_MM};

/// Wraps `text` into lines no wider than `max_width_mm` when set in `face` at
/// `size_pt`. Whitespace runs collapse to a single space. An empty or
/// whitespace-only string returns no lines.
pub fn wrap_text(text: &str, face: FontFace, size_pt: f32, max_width_mm: f32) -> Vec<String> {
    let metrics = get_metrics(face);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0_f32;
    let space_w = metrics.space_width * size_pt * PT_TO_MM;

    for word in text.split_whitespace() {
        let word_w = metrics.width_mm(word, size_pt);

        if word_w > max_width_mm {
            // Flush what we have, then split the oversized word.
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let mut pieces = split_word(word, metrics, size_pt, max_width_mm);
            // The last piece stays open so following words can join it.
            if let Some(last) = pieces.pop() {
                lines.extend(pieces);
                current_width = metrics.width_mm(&last, size_pt);
                current = last;
            }
            continue;
        }

        if current.is_empty() {
            current.push_str(word);
            current_width = word_w;
        } else if current_width + space_w + word_w > max_width_mm {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_w;
        } else {
            current.push(' ');
            current.push_str(word);
            current_width += space_w + word_w;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Splits a single word into chunks that each fit within `max_width_mm`.
/// Every chunk holds at least one character.
fn split_word(
    word: &str,
    metrics: &FontMetricTable,
    size_pt: f32,
    max_width_mm: f32,
) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut chunk = String::new();
    let mut width = 0.0_f32;

    for c in word.chars() {
        let mut buf = [0u8; 4];
        let char_w = metrics.width_mm(c.encode_utf8(&mut buf), size_pt);
        if !chunk.is_empty() && width + char_w > max_width_mm {
            chunks.push(std::mem::take(&mut chunk));
            width = 0.0;
        }
        chunk.push(c);
        width += char_w;
    }
    if !chunk.is_empty() {
        chunks.push(chunk);
    }
    chunks
}
