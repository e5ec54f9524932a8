//! Whitespace word runs used by the estimator and the paragraph splitter

/// Number of whitespace-delimited tokens in `text`
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Split `text` into two word runs.
///
/// The first run receives `floor(word_count * ratio)` words. Runs are rejoined
/// with single spaces, so the original whitespace layout is not preserved.
pub fn split_words(text: &str, ratio: f32) -> (String, String) {
    let words: Vec<&str> = text.split_whitespace().collect();
    let split_at = ((words.len() as f64 * ratio as f64).floor().max(0.0) as usize).min(words.len());
    let (head, tail) = words.split_at(split_at);
    (head.join(" "), tail.join(" "))
}
