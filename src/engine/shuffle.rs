use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

/// Produces a new ordering of a sentence's words.
///
/// Implementations must return a permutation: the same multiset of tokens,
/// only reordered. Callers invoke this once per level load and once per reset.
pub trait Shuffler {
    fn shuffle(&mut self, words: &[String]) -> Vec<String>;
}

pub struct RandomShuffler {
    rng: SmallRng,
}

impl RandomShuffler {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomShuffler {
    fn default() -> Self {
        Self::new()
    }
}

impl Shuffler for RandomShuffler {
    fn shuffle(&mut self, words: &[String]) -> Vec<String> {
        let mut out = words.to_vec();
        out.shuffle(&mut self.rng);
        out
    }
}

/// Leaves the order untouched. Useful for scripted sessions.
pub struct IdentityShuffler;

impl Shuffler for IdentityShuffler {
    fn shuffle(&mut self, words: &[String]) -> Vec<String> {
        words.to_vec()
    }
}

/// Reverses the order, so tests get a known non-trivial permutation.
pub struct ReverseShuffler;

impl Shuffler for ReverseShuffler {
    fn shuffle(&mut self, words: &[String]) -> Vec<String> {
        words.iter().rev().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        text.split(' ').map(str::to_string).collect()
    }

    fn sorted(mut v: Vec<String>) -> Vec<String> {
        v.sort();
        v
    }

    #[test]
    fn random_shuffle_preserves_multiset() {
        let input = words("Yo veo la luna y la estrella");
        let mut shuffler = RandomShuffler::seeded(7);
        for _ in 0..50 {
            let out = shuffler.shuffle(&input);
            assert_eq!(sorted(out), sorted(input.clone()));
        }
    }

    #[test]
    fn seeded_shuffles_are_reproducible() {
        let input = words("Me gusta ir a la escuela");
        let a = RandomShuffler::seeded(42).shuffle(&input);
        let b = RandomShuffler::seeded(42).shuffle(&input);
        assert_eq!(a, b);
    }

    #[test]
    fn random_shuffle_eventually_reorders() {
        let input = words("uno dos tres cuatro cinco seis");
        let mut shuffler = RandomShuffler::seeded(1);
        assert!((0..20).any(|_| shuffler.shuffle(&input) != input));
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(RandomShuffler::seeded(3).shuffle(&[]).is_empty());
    }

    #[test]
    fn reverse_shuffler_reverses() {
        let out = ReverseShuffler.shuffle(&words("a b c"));
        assert_eq!(out, words("c b a"));
    }
}
