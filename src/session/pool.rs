use crate::engine::shuffle::Shuffler;

/// Outcome of asking for the next expected word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HintOutcome {
    Moved(String),
    /// Every word is already placed.
    Complete,
    /// The expected token is not in `available`. Only reachable if the
    /// partition invariant was broken somewhere.
    Missing(String),
}

/// Partition of a sentence's words into the available and placed lists.
///
/// Every operation moves tokens between the two lists, so their combined
/// multiset always equals the sentence's words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordPool {
    available: Vec<String>,
    placed: Vec<String>,
}

impl WordPool {
    pub fn new(words: &[String], shuffler: &mut dyn Shuffler) -> Self {
        Self {
            available: shuffler.shuffle(words),
            placed: Vec::new(),
        }
    }

    /// Pool with a fixed arrangement, for restoring a known layout.
    pub fn from_parts(available: Vec<String>, placed: Vec<String>) -> Self {
        Self { available, placed }
    }

    pub fn available(&self) -> &[String] {
        &self.available
    }

    pub fn placed(&self) -> &[String] {
        &self.placed
    }

    pub fn total(&self) -> usize {
        self.available.len() + self.placed.len()
    }

    pub fn is_complete(&self) -> bool {
        self.available.is_empty() && !self.placed.is_empty()
    }

    /// Move `available[index]` to the end of `placed`.
    pub fn place(&mut self, index: usize) -> Option<String> {
        if index >= self.available.len() {
            return None;
        }
        let word = self.available.remove(index);
        self.placed.push(word.clone());
        Some(word)
    }

    /// Move `placed[index]` back to the end of `available`.
    pub fn unplace(&mut self, index: usize) -> Option<String> {
        if index >= self.placed.len() {
            return None;
        }
        let word = self.placed.remove(index);
        self.available.push(word.clone());
        Some(word)
    }

    /// Place the leftmost available copy of `words[placed.len()]`.
    pub fn hint(&mut self, words: &[String]) -> HintOutcome {
        let Some(expected) = words.get(self.placed.len()) else {
            return HintOutcome::Complete;
        };
        match self.available.iter().position(|w| w == expected) {
            Some(index) => {
                let word = self.available.remove(index);
                self.placed.push(word.clone());
                HintOutcome::Moved(word)
            }
            None => HintOutcome::Missing(expected.clone()),
        }
    }

    pub fn reset(&mut self, words: &[String], shuffler: &mut dyn Shuffler) {
        self.available = shuffler.shuffle(words);
        self.placed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::shuffle::{IdentityShuffler, RandomShuffler, ReverseShuffler};

    fn words(text: &str) -> Vec<String> {
        text.split(' ').map(str::to_string).collect()
    }

    fn multiset(pool: &WordPool) -> Vec<String> {
        let mut all: Vec<String> = pool
            .available()
            .iter()
            .chain(pool.placed().iter())
            .cloned()
            .collect();
        all.sort();
        all
    }

    fn sorted(mut v: Vec<String>) -> Vec<String> {
        v.sort();
        v
    }

    #[test]
    fn new_pool_has_everything_available() {
        let w = words("Me gusta ir a la escuela");
        let pool = WordPool::new(&w, &mut ReverseShuffler);
        assert_eq!(pool.available(), words("escuela la a ir gusta Me").as_slice());
        assert!(pool.placed().is_empty());
        assert!(!pool.is_complete());
    }

    #[test]
    fn place_moves_to_end_of_placed() {
        let w = words("a b c");
        let mut pool = WordPool::new(&w, &mut IdentityShuffler);
        assert_eq!(pool.place(1), Some("b".to_string()));
        assert_eq!(pool.place(0), Some("a".to_string()));
        assert_eq!(pool.available(), ["c"]);
        assert_eq!(pool.placed(), ["b", "a"]);
    }

    #[test]
    fn out_of_range_is_noop() {
        let w = words("a b");
        let mut pool = WordPool::new(&w, &mut IdentityShuffler);
        let before = pool.clone();
        assert_eq!(pool.place(2), None);
        assert_eq!(pool.unplace(0), None);
        assert_eq!(pool, before);
    }

    #[test]
    fn unplace_returns_to_end_of_available() {
        let w = words("a b c");
        let mut pool = WordPool::new(&w, &mut IdentityShuffler);
        pool.place(0);
        pool.place(0);
        assert_eq!(pool.unplace(0), Some("a".to_string()));
        assert_eq!(pool.available(), ["c", "a"]);
        assert_eq!(pool.placed(), ["b"]);
    }

    #[test]
    fn hint_places_next_expected_word() {
        let w = words("Me gusta ir");
        let mut pool = WordPool::new(&w, &mut ReverseShuffler);
        assert_eq!(pool.hint(&w), HintOutcome::Moved("Me".to_string()));
        assert_eq!(pool.hint(&w), HintOutcome::Moved("gusta".to_string()));
        assert_eq!(pool.placed(), ["Me", "gusta"]);
        assert_eq!(pool.available(), ["ir"]);
    }

    #[test]
    fn hint_takes_leftmost_duplicate() {
        let w = words("la x la");
        let mut pool = WordPool::from_parts(words("x la la"), Vec::new());
        assert_eq!(pool.hint(&w), HintOutcome::Moved("la".to_string()));
        assert_eq!(pool.available(), ["x", "la"]);
    }

    #[test]
    fn hint_when_complete_is_noop() {
        let w = words("a b");
        let mut pool = WordPool::new(&w, &mut IdentityShuffler);
        pool.place(0);
        pool.place(0);
        let before = pool.clone();
        assert_eq!(pool.hint(&w), HintOutcome::Complete);
        assert_eq!(pool, before);
    }

    #[test]
    fn hint_does_not_care_about_wrong_prefix() {
        // The expected word is chosen by position, even if earlier picks are wrong.
        let w = words("a b c");
        let mut pool = WordPool::new(&w, &mut IdentityShuffler);
        pool.place(2); // "c" placed first
        assert_eq!(pool.hint(&w), HintOutcome::Moved("b".to_string()));
        assert_eq!(pool.placed(), ["c", "b"]);
    }

    #[test]
    fn hint_miss_leaves_pool_untouched() {
        let w = words("a b");
        let mut pool = WordPool::from_parts(words("b"), Vec::new());
        let before = pool.clone();
        assert_eq!(pool.hint(&w), HintOutcome::Missing("a".to_string()));
        assert_eq!(pool, before);
    }

    #[test]
    fn reset_clears_placed_and_reshuffles() {
        let w = words("Yo veo la luna y la estrella");
        let mut pool = WordPool::new(&w, &mut IdentityShuffler);
        pool.place(3);
        pool.place(0);
        pool.reset(&w, &mut RandomShuffler::seeded(9));
        assert!(pool.placed().is_empty());
        assert_eq!(sorted(pool.available().to_vec()), sorted(w.clone()));
    }

    #[test]
    fn partition_holds_through_mixed_operations() {
        let w = words("Yo veo la luna y la estrella");
        let mut pool = WordPool::new(&w, &mut RandomShuffler::seeded(11));
        let expected = sorted(w.clone());
        let ops: [(u8, usize); 12] = [
            (0, 3), (0, 0), (2, 0), (1, 1), (0, 9), (2, 0),
            (1, 0), (0, 2), (3, 0), (0, 1), (2, 0), (1, 5),
        ];
        for (op, idx) in ops {
            match op {
                0 => {
                    pool.place(idx);
                }
                1 => {
                    pool.unplace(idx);
                }
                2 => {
                    pool.hint(&w);
                }
                _ => pool.reset(&w, &mut RandomShuffler::seeded(idx as u64)),
            }
            assert_eq!(multiset(&pool), expected);
            assert_eq!(pool.total(), w.len());
        }
    }
}
