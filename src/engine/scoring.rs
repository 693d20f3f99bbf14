pub const POINTS_PER_SENTENCE: u32 = 100;
pub const POINTS_PER_STAR: u32 = 300;
pub const POINTS_PER_TROPHY: u32 = 1000;
pub const POINTS_PER_STICKER: u32 = 100;
pub const POINTS_PER_BADGE: u32 = 500;
pub const STARS_PER_CROWN: u32 = 5;
pub const ALBUM_COMPLETE_POINTS: u32 = 2000;

pub const STICKERS: [&str; 12] = [
    "🎨", "🦁", "🏖️", "⚽", "🎵", "🌈", "🚀", "🦋", "🌟", "🎪", "🐬", "🎭",
];

pub fn stars_for(points: u32) -> u32 {
    points / POINTS_PER_STAR
}

pub fn trophies_for(points: u32) -> u32 {
    points / POINTS_PER_TROPHY
}

/// Cumulative player statistics. `stars` and `trophies` are always derived
/// from `points`; construct through [`Progress::with_points`] to keep them so.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progress {
    pub points: u32,
    pub stars: u32,
    pub trophies: u32,
    pub current_level: u32,
}

impl Default for Progress {
    fn default() -> Self {
        Self::new(0, 1)
    }
}

impl Progress {
    pub fn new(points: u32, current_level: u32) -> Self {
        Self {
            points,
            stars: stars_for(points),
            trophies: trophies_for(points),
            current_level: current_level.max(1),
        }
    }

    pub fn with_points(self, points: u32) -> Self {
        Self::new(points, self.current_level)
    }

    pub fn award_correct(self) -> Self {
        self.with_points(self.points.saturating_add(POINTS_PER_SENTENCE))
    }

    pub fn advanced(self) -> Self {
        Self {
            current_level: self.current_level.saturating_add(1),
            ..self
        }
    }

    pub fn points_to_next_star(&self) -> u32 {
        POINTS_PER_STAR - self.points % POINTS_PER_STAR
    }

    /// Fraction of the catalog reached, clamped to 1.
    pub fn level_progress(&self, catalog_len: usize) -> f64 {
        if catalog_len == 0 {
            return 0.0;
        }
        (self.current_level as f64 / catalog_len as f64).min(1.0)
    }

    pub fn merge(&mut self, update: ProgressUpdate) {
        if let Some(points) = update.points {
            self.points = points;
        }
        if let Some(stars) = update.stars {
            self.stars = stars;
        }
        if let Some(trophies) = update.trophies {
            self.trophies = trophies;
        }
        if let Some(level) = update.current_level {
            self.current_level = level;
        }
    }

    pub fn rewards(&self) -> Rewards {
        Rewards::from_progress(self)
    }
}

/// Partial progress change handed to the external progress store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProgressUpdate {
    pub points: Option<u32>,
    pub stars: Option<u32>,
    pub trophies: Option<u32>,
    pub current_level: Option<u32>,
}

impl ProgressUpdate {
    pub fn score(progress: &Progress) -> Self {
        Self {
            points: Some(progress.points),
            stars: Some(progress.stars),
            trophies: Some(progress.trophies),
            current_level: None,
        }
    }

    pub fn level(progress: &Progress) -> Self {
        Self {
            current_level: Some(progress.current_level),
            ..Self::default()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rewards {
    pub stars: u32,
    pub trophies: u32,
    pub badges: u32,
    pub crowns: u32,
    pub stickers_unlocked: usize,
    pub album_ratio_percent: u32,
}

impl Rewards {
    pub fn from_progress(progress: &Progress) -> Self {
        let stickers = (progress.points / POINTS_PER_STICKER) as usize;
        Self {
            stars: progress.stars,
            trophies: progress.trophies,
            badges: progress.points / POINTS_PER_BADGE,
            crowns: progress.stars / STARS_PER_CROWN,
            stickers_unlocked: stickers.min(STICKERS.len()),
            album_ratio_percent: (progress.points.min(ALBUM_COMPLETE_POINTS) * 100)
                / ALBUM_COMPLETE_POINTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_derive_from_points() {
        for points in [0, 99, 299, 300, 301, 999, 1000, 1350, 5000] {
            let p = Progress::new(points, 1);
            assert_eq!(p.stars, points / 300);
            assert_eq!(p.trophies, points / 1000);
        }
    }

    #[test]
    fn award_from_250_crosses_first_star() {
        let p = Progress::new(250, 3).award_correct();
        assert_eq!(p.points, 350);
        assert_eq!(p.stars, 1);
        assert_eq!(p.trophies, 0);
        assert_eq!(p.current_level, 3);
    }

    #[test]
    fn repeated_awards_keep_tiers_consistent() {
        let mut p = Progress::default();
        for _ in 0..23 {
            p = p.award_correct();
            assert_eq!(p.stars, p.points / POINTS_PER_STAR);
            assert_eq!(p.trophies, p.points / POINTS_PER_TROPHY);
        }
        assert_eq!(p.points, 2300);
        assert_eq!(p.trophies, 2);
    }

    #[test]
    fn advanced_only_moves_level() {
        let p = Progress::new(400, 5).advanced();
        assert_eq!(p.current_level, 6);
        assert_eq!(p.points, 400);
    }

    #[test]
    fn points_to_next_star_counts_down() {
        assert_eq!(Progress::new(0, 1).points_to_next_star(), 300);
        assert_eq!(Progress::new(250, 1).points_to_next_star(), 50);
        assert_eq!(Progress::new(300, 1).points_to_next_star(), 300);
    }

    #[test]
    fn level_progress_is_clamped() {
        assert!((Progress::new(0, 2).level_progress(4) - 0.5).abs() < f64::EPSILON);
        assert!((Progress::new(0, 9).level_progress(4) - 1.0).abs() < f64::EPSILON);
        assert_eq!(Progress::new(0, 1).level_progress(0), 0.0);
    }

    #[test]
    fn merge_applies_only_present_fields() {
        let mut p = Progress::new(100, 2);
        p.merge(ProgressUpdate::level(&Progress::new(0, 3)));
        assert_eq!(p.current_level, 3);
        assert_eq!(p.points, 100);

        p.merge(ProgressUpdate::score(&Progress::new(1000, 1)));
        assert_eq!(p.points, 1000);
        assert_eq!(p.trophies, 1);
        assert_eq!(p.current_level, 3);
    }

    #[test]
    fn rewards_derivations() {
        let r = Progress::new(1600, 1).rewards();
        assert_eq!(r.stars, 5);
        assert_eq!(r.trophies, 1);
        assert_eq!(r.badges, 3);
        assert_eq!(r.crowns, 1);
        assert_eq!(r.stickers_unlocked, 12);
        assert_eq!(r.album_ratio_percent, 80);

        let r = Progress::new(5000, 1).rewards();
        assert_eq!(r.album_ratio_percent, 100);
        assert_eq!(r.stickers_unlocked, STICKERS.len());
    }
}
