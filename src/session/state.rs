use crate::catalog::Sentence;
use crate::engine::shuffle::Shuffler;
use crate::engine::verify::{self, Verdict};
use crate::session::focus::{Focus, FocusArea};
use crate::session::messages::Prompt;
use crate::session::pool::{HintOutcome, WordPool};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verification {
    #[default]
    Unresolved,
    Correct,
    Incorrect,
}

impl From<Verdict> for Verification {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Correct => Verification::Correct,
            Verdict::Incorrect => Verification::Incorrect,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    None,
    Feedback,
    ResetConfirm,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edit {
    Place(usize),
    Unplace(usize),
    Hint,
    Reset,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Nav {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditOutcome {
    Placed(String),
    Unplaced(String),
    Hinted(String),
    Reset,
    Unchanged,
}

impl EditOutcome {
    pub fn changed(&self) -> bool {
        !matches!(self, EditOutcome::Unchanged)
    }
}

/// Result of one transition: the session to publish and what happened.
#[derive(Clone, Debug)]
pub struct Step {
    pub session: Session,
    pub outcome: EditOutcome,
}

/// Working state for one sentence.
///
/// Transitions never touch `self`; they build the next value, which the
/// controller publishes in one assignment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    sentence: Sentence,
    pool: WordPool,
    focus: Focus,
    verification: Verification,
    modal: Modal,
    prompt: Prompt,
    /// Set once this sentence has paid out. Edits never clear it.
    scored: bool,
}

impl Session {
    pub fn new(sentence: Sentence, shuffler: &mut dyn Shuffler) -> Self {
        let pool = WordPool::new(&sentence.words, shuffler);
        Self::from_pool(sentence, pool)
    }

    pub fn from_pool(sentence: Sentence, pool: WordPool) -> Self {
        Self {
            sentence,
            pool,
            focus: Focus::default(),
            verification: Verification::Unresolved,
            modal: Modal::None,
            prompt: Prompt::Arrange,
            scored: false,
        }
    }

    pub fn sentence(&self) -> &Sentence {
        &self.sentence
    }

    pub fn available(&self) -> &[String] {
        self.pool.available()
    }

    pub fn placed(&self) -> &[String] {
        self.pool.placed()
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn verification(&self) -> Verification {
        self.verification
    }

    pub fn modal(&self) -> Modal {
        self.modal
    }

    pub fn prompt(&self) -> Prompt {
        self.prompt
    }

    pub fn scored(&self) -> bool {
        self.scored
    }

    pub fn can_verify(&self) -> bool {
        self.pool.placed().len() == self.sentence.words.len()
    }

    pub fn can_hint(&self) -> bool {
        self.pool.placed().len() < self.sentence.words.len()
    }

    /// The item the keyboard focus currently points at, if any.
    pub fn focused_word(&self) -> Option<&str> {
        let list = match self.focus.area {
            FocusArea::Available => self.pool.available(),
            FocusArea::Placed => self.pool.placed(),
        };
        list.get(self.focus.index).map(String::as_str)
    }

    /// Apply a pool edit, then clamp focus against the new list lengths.
    pub fn edit(&self, edit: Edit, shuffler: &mut dyn Shuffler) -> Step {
        let mut next = self.clone();

        let outcome = match edit {
            Edit::Place(index) => next
                .pool
                .place(index)
                .map_or(EditOutcome::Unchanged, EditOutcome::Placed),
            Edit::Unplace(index) => next
                .pool
                .unplace(index)
                .map_or(EditOutcome::Unchanged, EditOutcome::Unplaced),
            Edit::Hint => match next.pool.hint(&self.sentence.words) {
                HintOutcome::Moved(word) => {
                    next.prompt = Prompt::HintGiven;
                    EditOutcome::Hinted(word)
                }
                HintOutcome::Complete => EditOutcome::Unchanged,
                HintOutcome::Missing(expected) => {
                    tracing::error!(
                        sentence = self.sentence.id,
                        %expected,
                        available = ?self.pool.available(),
                        "hint target missing from available pool"
                    );
                    EditOutcome::Unchanged
                }
            },
            Edit::Reset => {
                next.pool.reset(&self.sentence.words, shuffler);
                next.focus = Focus::default();
                next.modal = Modal::None;
                next.prompt = Prompt::TryAgain;
                EditOutcome::Reset
            }
        };

        if outcome.changed() {
            let (available, placed) = next.lens();
            next.focus = next.focus.reconcile(available, placed);
            next.verification = Verification::Unresolved;
        }

        Step {
            session: next,
            outcome,
        }
    }

    pub fn navigate(&self, nav: Nav) -> Self {
        let (available, placed) = self.lens();
        let focus = match nav {
            Nav::Up => self.focus.to_placed(placed),
            Nav::Down => self.focus.to_available(available),
            Nav::Left => self.focus.left(available, placed),
            Nav::Right => self.focus.right(available, placed),
        };
        Self {
            focus,
            ..self.clone()
        }
    }

    /// Compare the placed words with the target and open the feedback modal.
    /// Callers check [`Session::can_verify`] first.
    pub fn verified(&self) -> (Self, Verdict) {
        let verdict = verify::verify(self.pool.placed(), &self.sentence);
        let prompt = match verdict {
            Verdict::Correct => Prompt::Excellent,
            Verdict::Incorrect => Prompt::Almost,
        };
        let next = Self {
            verification: verdict.into(),
            modal: Modal::Feedback,
            prompt,
            scored: self.scored || verdict == Verdict::Correct,
            ..self.clone()
        };
        (next, verdict)
    }

    pub fn with_modal(&self, modal: Modal) -> Self {
        Self {
            modal,
            ..self.clone()
        }
    }

    fn lens(&self) -> (usize, usize) {
        (self.pool.available().len(), self.pool.placed().len())
    }
}
