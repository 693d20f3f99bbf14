//! Spoken and on-screen lines for the game. Spanish, like the word lists.

use crate::catalog::Sentence;
use crate::engine::scoring::POINTS_PER_SENTENCE;

/// Mascot line shown above the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Prompt {
    #[default]
    Arrange,
    Excellent,
    Almost,
    HintGiven,
    TryAgain,
}

impl Prompt {
    pub fn text(self) -> &'static str {
        match self {
            Prompt::Arrange => "¡Ordena las palabras!",
            Prompt::Excellent => "¡Excelente! ¡Lo hiciste perfecto!",
            Prompt::Almost => "¡Casi! Inténtalo de nuevo 💪",
            Prompt::HintGiven => "¡Ahí está! 💡",
            Prompt::TryAgain => "¡Vamos otra vez!",
        }
    }
}

pub fn level_intro(level: u32, sentence: &Sentence) -> String {
    format!(
        "Nivel {level}. Tema: {}. ¡Ordena las palabras!",
        sentence.theme
    )
}

pub fn removed(word: &str) -> String {
    format!("Quitaste: {word}")
}

pub fn hint(word: &str) -> String {
    format!("Pista: {word}")
}

pub fn correct() -> String {
    format!("¡Excelente! ¡Lo hiciste perfecto! Ganaste {POINTS_PER_SENTENCE} puntos")
}

/// Correct again after the points were already given for this sentence.
pub fn correct_again() -> String {
    "¡Muy bien! Ya ganaste los puntos de esta oración".to_string()
}

pub fn incorrect() -> String {
    "¡Casi! Inténtalo de nuevo".to_string()
}

pub fn reset() -> String {
    "¡Vamos otra vez!".to_string()
}
