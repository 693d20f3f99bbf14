#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FocusArea {
    #[default]
    Available,
    Placed,
}

/// Keyboard focus: which list is active and which item in it.
///
/// Every transition takes the current lengths of both lists and clamps the
/// index against the active one, so `index < len(active)` whenever the active
/// list is non-empty and `index == 0` when it is empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Focus {
    pub area: FocusArea,
    pub index: usize,
}

fn clamp_index(index: usize, len: usize) -> usize {
    index.min(len.saturating_sub(1))
}

impl Focus {
    pub fn active_len(&self, available: usize, placed: usize) -> usize {
        match self.area {
            FocusArea::Available => available,
            FocusArea::Placed => placed,
        }
    }

    pub fn to_placed(self, placed: usize) -> Self {
        Self {
            area: FocusArea::Placed,
            index: clamp_index(self.index, placed),
        }
    }

    pub fn to_available(self, available: usize) -> Self {
        Self {
            area: FocusArea::Available,
            index: clamp_index(self.index, available),
        }
    }

    pub fn left(self, available: usize, placed: usize) -> Self {
        let len = self.active_len(available, placed);
        Self {
            index: clamp_index(self.index.saturating_sub(1), len),
            ..self
        }
    }

    pub fn right(self, available: usize, placed: usize) -> Self {
        let len = self.active_len(available, placed);
        Self {
            index: clamp_index(self.index.saturating_add(1), len),
            ..self
        }
    }

    /// Clamp after a pool mutation changed the list lengths.
    pub fn reconcile(self, available: usize, placed: usize) -> Self {
        let len = self.active_len(available, placed);
        Self {
            index: clamp_index(self.index, len),
            ..self
        }
    }

    pub fn is_on(&self, area: FocusArea, index: usize) -> bool {
        self.area == area && self.index == index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(area: FocusArea, index: usize) -> Focus {
        Focus { area, index }
    }

    #[test]
    fn up_clamps_into_placed() {
        let f = at(FocusArea::Available, 4).to_placed(2);
        assert_eq!(f, at(FocusArea::Placed, 1));
    }

    #[test]
    fn up_into_empty_placed_floors_at_zero() {
        let f = at(FocusArea::Available, 3).to_placed(0);
        assert_eq!(f, at(FocusArea::Placed, 0));
    }

    #[test]
    fn down_keeps_index_when_it_fits() {
        let f = at(FocusArea::Placed, 1).to_available(5);
        assert_eq!(f, at(FocusArea::Available, 1));
    }

    #[test]
    fn left_stops_at_zero() {
        let f = at(FocusArea::Available, 0).left(3, 0);
        assert_eq!(f.index, 0);
        let f = at(FocusArea::Available, 2).left(3, 0);
        assert_eq!(f.index, 1);
    }

    #[test]
    fn right_stops_at_last() {
        let f = at(FocusArea::Placed, 1).right(6, 2);
        assert_eq!(f.index, 1);
        let f = at(FocusArea::Available, 1).right(6, 2);
        assert_eq!(f.index, 2);
    }

    #[test]
    fn right_on_empty_list_stays_zero() {
        let f = at(FocusArea::Placed, 0).right(4, 0);
        assert_eq!(f.index, 0);
    }

    #[test]
    fn reconcile_after_removing_last_item() {
        // Three available, focus on the last, one gets placed.
        let f = at(FocusArea::Available, 2).reconcile(2, 1);
        assert_eq!(f.index, 1);
        // The only remaining item gets placed.
        let f = at(FocusArea::Available, 0).reconcile(0, 3);
        assert_eq!(f.index, 0);
    }

    #[test]
    fn reconcile_uses_active_list_only() {
        let f = at(FocusArea::Placed, 3).reconcile(0, 4);
        assert_eq!(f, at(FocusArea::Placed, 3));
    }

    #[test]
    fn bounds_hold_for_all_small_shapes() {
        for available in 0..4 {
            for placed in 0..4 {
                for index in 0..6 {
                    for area in [FocusArea::Available, FocusArea::Placed] {
                        let start = at(area, index);
                        for f in [
                            start.to_placed(placed),
                            start.to_available(available),
                            start.left(available, placed),
                            start.right(available, placed),
                            start.reconcile(available, placed),
                        ] {
                            let len = f.active_len(available, placed);
                            if len == 0 {
                                assert_eq!(f.index, 0);
                            } else {
                                assert!(f.index < len);
                            }
                        }
                    }
                }
            }
        }
    }
}
