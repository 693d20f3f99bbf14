use crate::catalog::Sentence;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

/// Exact comparison of the placed words against the sentence text.
/// Case and accents matter; nothing is normalized.
pub fn verify(placed: &[String], sentence: &Sentence) -> Verdict {
    if placed.join(" ") == sentence.correct_text {
        Verdict::Correct
    } else {
        Verdict::Incorrect
    }
}
