/// Text assembly — ordering chosen sentences and joining them into the
/// final "Der Körper …" sentence.

use crate::schema::sentence::Sentence;

/// Fixed opening of every assembled text.
pub const PREAMBLE: &str = "Der Körper ";

/// Stable ordering before joining: sentences containing " und " go to the
/// end; among the remainder, sentences with a colon mid-text go to the
/// end, keeping colon-opening sentences early.
pub fn sort_sentences<'s>(mut sentences: Vec<&'s Sentence>) -> Vec<&'s Sentence> {
    sentences.sort_by_key(|sent| (sent.has_and(), sent.has_colon() && !sent.ends_with_colon));
    sentences
}

/// Join ordered sentences into one text: the first unmodified, the middle
/// ones prefixed with ", ", the last (for more than one sentence) prefixed
/// with " und ", wrapped in the preamble and a closing period.
pub fn join_sentences(sentences: &[&Sentence]) -> String {
    debug_assert!(!sentences.is_empty(), "cannot assemble an empty result");

    let last = sentences.len().saturating_sub(1);
    let mut text = String::from(PREAMBLE);

    for (i, sentence) in sentences.iter().enumerate() {
        if i > 0 {
            if i == last {
                text.push_str(" und ");
            } else {
                text.push_str(", ");
            }
        }
        text.push_str(&sentence.text);
    }

    text.push('.');
    text
}
