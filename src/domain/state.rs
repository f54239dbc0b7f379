/// Per-post comment-section visibility, one boolean per post in feed order.
///
/// Transitions are pure: [`toggled`](ToggleState::toggled) produces the next
/// state from the previous one instead of mutating in place, so the view
/// always holds a value that was published whole.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToggleState(Vec<bool>);

impl ToggleState {
    /// A fresh state with every comment section collapsed.
    pub fn new(len: usize) -> Self {
        Self(vec![false; len])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.0.get(index).copied().unwrap_or(false)
    }

    /// Next state with exactly the slot at `index` flipped. An out-of-range
    /// index yields an unchanged copy.
    pub fn toggled(&self, index: usize) -> Self {
        let mut next = self.0.clone();
        if let Some(slot) = next.get_mut(index) {
            *slot = !*slot;
        }
        Self(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_all_collapsed() {
        let state = ToggleState::new(4);
        assert_eq!(state.len(), 4);
        for i in 0..4 {
            assert!(!state.is_expanded(i));
        }
    }

    #[test]
    fn test_toggled_flips_exactly_one_slot() {
        let state = ToggleState::new(3);
        let next = state.toggled(1);
        assert!(!next.is_expanded(0));
        assert!(next.is_expanded(1));
        assert!(!next.is_expanded(2));
        // previous state untouched
        assert!(!state.is_expanded(1));
    }

    #[test]
    fn test_toggled_twice_is_identity() {
        let state = ToggleState::new(3);
        let round_trip = state.toggled(2).toggled(2);
        assert_eq!(round_trip, state);
    }

    #[test]
    fn test_toggled_out_of_range_is_unchanged() {
        let state = ToggleState::new(2);
        assert_eq!(state.toggled(5), state);
    }

    #[test]
    fn test_is_expanded_out_of_range_is_false() {
        let state = ToggleState::new(1);
        assert!(!state.is_expanded(9));
    }
}
