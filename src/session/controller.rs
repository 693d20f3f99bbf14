use crate::catalog::Catalog;
use crate::engine::Verdict;
use crate::engine::scoring::{Progress, ProgressUpdate};
use crate::engine::shuffle::Shuffler;
use crate::session::focus::FocusArea;
use crate::session::messages;
use crate::session::state::{Edit, EditOutcome, Modal, Nav, Session, Verification};

/// Top-level screens the router knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Home,
    Game,
    Rewards,
    Tutorial,
    Settings,
}

/// Discrete input events understood by the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Escape,
    /// Primary action of the open modal (reset, next level, try again).
    Confirm,
    Reset,
    Hint,
    Verify,
    Nav(Nav),
    Select,
    Remove,
    PlaceAt(usize),
    UnplaceAt(usize),
    Exit(Screen),
}

/// Side effects for the shell to carry out. Speech is fire-and-forget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Speak(String),
    Progress(ProgressUpdate),
    Celebrate,
    Navigate(Screen),
}

/// Owns the active session and this game's view of progress, and turns
/// input events into new sessions plus effects.
pub struct Controller {
    catalog: Catalog,
    shuffler: Box<dyn Shuffler>,
    session: Session,
    progress: Progress,
}

impl Controller {
    pub fn new(catalog: Catalog, progress: Progress, mut shuffler: Box<dyn Shuffler>) -> Self {
        let sentence = catalog.sentence(progress.current_level).clone();
        let session = Session::new(sentence, shuffler.as_mut());
        Self {
            catalog,
            shuffler,
            session,
            progress,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Spoken introduction for the current level.
    pub fn intro(&self) -> Vec<Effect> {
        vec![Effect::Speak(messages::level_intro(
            self.progress.current_level,
            self.session.sentence(),
        ))]
    }

    pub fn dispatch(&mut self, input: Input) -> Vec<Effect> {
        let mut effects = Vec::new();
        match (self.session.modal(), input) {
            (Modal::Feedback | Modal::ResetConfirm, Input::Escape) => {
                self.publish(self.session.with_modal(Modal::None));
            }
            (Modal::ResetConfirm, Input::Confirm) => self.apply_edit(Edit::Reset, &mut effects),
            (Modal::Feedback, Input::Confirm) => match self.session.verification() {
                Verification::Correct => self.advance(&mut effects),
                Verification::Incorrect | Verification::Unresolved => {
                    self.publish(self.session.with_modal(Modal::None));
                }
            },
            (Modal::Feedback | Modal::ResetConfirm, suppressed) => {
                tracing::trace!(?suppressed, "input blocked by open modal");
            }
            (Modal::None, input) => self.dispatch_idle(input, &mut effects),
        }
        effects
    }

    fn dispatch_idle(&mut self, input: Input, effects: &mut Vec<Effect>) {
        let focus = self.session.focus();
        match input {
            Input::Escape => effects.push(Effect::Navigate(Screen::Home)),
            Input::Confirm => {}
            Input::Reset => {
                if self.session.placed().is_empty() {
                    self.apply_edit(Edit::Reset, effects);
                } else {
                    self.publish(self.session.with_modal(Modal::ResetConfirm));
                }
            }
            Input::Hint => self.apply_edit(Edit::Hint, effects),
            Input::Verify => self.verify(effects),
            Input::Nav(nav) => self.publish(self.session.navigate(nav)),
            Input::Select => {
                let edit = match focus.area {
                    FocusArea::Available => Edit::Place(focus.index),
                    FocusArea::Placed => Edit::Unplace(focus.index),
                };
                self.apply_edit(edit, effects);
            }
            Input::Remove => {
                if focus.area == FocusArea::Placed {
                    self.apply_edit(Edit::Unplace(focus.index), effects);
                }
            }
            Input::PlaceAt(index) => self.apply_edit(Edit::Place(index), effects),
            Input::UnplaceAt(index) => self.apply_edit(Edit::Unplace(index), effects),
            Input::Exit(screen) => effects.push(Effect::Navigate(screen)),
        }
    }

    fn apply_edit(&mut self, edit: Edit, effects: &mut Vec<Effect>) {
        let step = self.session.edit(edit, self.shuffler.as_mut());
        let utterance = match &step.outcome {
            EditOutcome::Placed(word) => Some(word.clone()),
            EditOutcome::Unplaced(word) => Some(messages::removed(word)),
            EditOutcome::Hinted(word) => Some(messages::hint(word)),
            EditOutcome::Reset => Some(messages::reset()),
            EditOutcome::Unchanged => None,
        };
        self.publish(step.session);
        if let Some(text) = utterance {
            effects.push(Effect::Speak(text));
        }
    }

    fn verify(&mut self, effects: &mut Vec<Effect>) {
        if !self.session.can_verify() {
            tracing::debug!(
                placed = self.session.placed().len(),
                needed = self.session.sentence().len(),
                "verify ignored, sentence incomplete"
            );
            return;
        }
        // Already scored: show the result again instead of paying twice.
        if self.session.verification() == Verification::Correct {
            self.publish(self.session.with_modal(Modal::Feedback));
            return;
        }

        let already_scored = self.session.scored();
        let (next, verdict) = self.session.verified();
        self.publish(next);
        match verdict {
            Verdict::Correct if already_scored => {
                tracing::debug!(sentence = self.session.sentence().id, "re-solved, no award");
                effects.push(Effect::Speak(messages::correct_again()));
            }
            Verdict::Correct => {
                self.progress = self.progress.award_correct();
                tracing::info!(
                    level = self.progress.current_level,
                    points = self.progress.points,
                    "sentence solved"
                );
                effects.push(Effect::Progress(ProgressUpdate::score(&self.progress)));
                effects.push(Effect::Celebrate);
                effects.push(Effect::Speak(messages::correct()));
            }
            Verdict::Incorrect => effects.push(Effect::Speak(messages::incorrect())),
        }
    }

    /// Move to the next level. Only valid once the sentence is verified correct.
    fn advance(&mut self, effects: &mut Vec<Effect>) {
        if self.session.verification() != Verification::Correct {
            return;
        }
        self.progress = self.progress.advanced();
        effects.push(Effect::Progress(ProgressUpdate::level(&self.progress)));

        let sentence = self.catalog.sentence(self.progress.current_level).clone();
        self.session = Session::new(sentence, self.shuffler.as_mut());
        tracing::debug!(
            level = self.progress.current_level,
            sentence = self.session.sentence().id,
            "level loaded"
        );
        effects.extend(self.intro());
    }

    fn publish(&mut self, next: Session) {
        self.session = next;
    }
}
