//! Single-selection paging over the current match list.

/// Tracks which match of the list is on screen.
///
/// The list length is passed in rather than stored so the index can never
/// drift from the list it points into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CarouselState {
    current_index: usize,
}

impl CarouselState {
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Move to the next match; no-op at the last index.
    pub fn next(&mut self, len: usize) {
        if self.can_go_next(len) {
            self.current_index += 1;
        }
    }

    /// Move to the previous match; no-op at index 0.
    pub fn previous(&mut self) {
        self.current_index = self.current_index.saturating_sub(1);
    }

    pub fn can_go_previous(&self, len: usize) -> bool {
        len > 1 && self.current_index > 0
    }

    pub fn can_go_next(&self, len: usize) -> bool {
        len > 1 && self.current_index < len - 1
    }

    /// Keep the index inside `[0, len - 1]` after the list changed size.
    pub fn clamp(&mut self, len: usize) {
        self.current_index = self.current_index.min(len.saturating_sub(1));
    }

    /// The selected item, or `None` for an empty list.
    pub fn current<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        items.get(self.current_index)
    }

    /// `"2 / 5"`, shown only when there is more than one match.
    pub fn position_label(&self, len: usize) -> Option<String> {
        (len > 1).then(|| format!("{} / {}", self.current_index + 1, len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_stops_at_last_index() {
        let mut carousel = CarouselState::default();
        carousel.next(3);
        carousel.next(3);
        assert_eq!(carousel.current_index(), 2);

        carousel.next(3);
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn test_previous_is_noop_at_zero() {
        let mut carousel = CarouselState::default();
        carousel.previous();
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_navigation_flags() {
        let mut carousel = CarouselState::default();
        assert!(!carousel.can_go_previous(0));
        assert!(!carousel.can_go_next(0));
        assert!(!carousel.can_go_previous(1));
        assert!(!carousel.can_go_next(1));

        assert!(!carousel.can_go_previous(3));
        assert!(carousel.can_go_next(3));

        carousel.next(3);
        carousel.next(3);
        assert!(carousel.can_go_previous(3));
        assert!(!carousel.can_go_next(3));
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut carousel = CarouselState::default();
        for _ in 0..4 {
            carousel.next(5);
        }
        assert_eq!(carousel.current_index(), 4);

        carousel.clamp(2);
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_clamp_to_empty_floors_at_zero() {
        let mut carousel = CarouselState::default();
        carousel.next(2);
        carousel.clamp(0);
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.current::<u8>(&[]), None);
    }

    #[test]
    fn test_clamp_never_moves_a_valid_index() {
        let mut carousel = CarouselState::default();
        carousel.next(5);
        carousel.clamp(10);
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_index_stays_in_range_for_any_length() {
        for n in 0..8usize {
            let mut carousel = CarouselState::default();
            for _ in 0..10 {
                carousel.next(9);
            }
            carousel.clamp(n);
            assert!(carousel.current_index() <= n.saturating_sub(1));
        }
    }

    #[test]
    fn test_position_label() {
        let mut carousel = CarouselState::default();
        assert_eq!(carousel.position_label(1), None);
        carousel.next(5);
        assert_eq!(carousel.position_label(5).as_deref(), Some("2 / 5"));
    }
}
