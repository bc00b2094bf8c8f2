// src/app/navigation_helpers.rs
use ratatui::widgets::ListState;

pub fn list_next(state: &mut ListState, list_len: usize) {
    if list_len == 0 {
        return;
    }
    let i = match state.selected() {
        Some(i) if i >= list_len - 1 => 0,
        Some(i) => i + 1,
        None => 0,
    };
    state.select(Some(i));
}

pub fn list_previous(state: &mut ListState, list_len: usize) {
    if list_len == 0 {
        return;
    }
    let i = match state.selected() {
        Some(0) => list_len - 1,
        Some(i) => i - 1,
        None => list_len.saturating_sub(1),
    };
    state.select(Some(i));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_to_top() {
        let mut state = ListState::default();
        state.select(Some(3));
        list_next(&mut state, 4);
        assert_eq!(state.selected(), Some(0));
        list_next(&mut state, 4);
        assert_eq!(state.selected(), Some(1));
    }

    #[test]
    fn previous_wraps_to_bottom() {
        let mut state = ListState::default();
        state.select(Some(0));
        list_previous(&mut state, 4);
        assert_eq!(state.selected(), Some(3));

        let mut empty = ListState::default();
        list_previous(&mut empty, 0);
        assert_eq!(empty.selected(), None);
    }
}
