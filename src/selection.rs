/// Which skill, if any, has its description expanded.
///
/// The only assignment path copies a name out of the skill table, so a set
/// value always names an existing entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<&'static str>,
}

impl SelectionState {
    /// Toggle on re-click, otherwise supersede whatever was selected before.
    #[must_use]
    pub fn select(self, name: &'static str) -> Self {
        if self.selected == Some(name) {
            Self { selected: None }
        } else {
            Self {
                selected: Some(name),
            }
        }
    }

    pub fn is_expanded(&self, name: &str) -> bool {
        self.selected == Some(name)
    }

    pub fn selected(&self) -> Option<&'static str> {
        self.selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_nothing_selected() {
        let state = SelectionState::default();
        assert_eq!(state.selected(), None);
        assert!(!state.is_expanded("HTML"));
    }

    #[test]
    fn reselecting_the_same_name_collapses() {
        let state = SelectionState::default().select("HTML");
        assert_eq!(state.selected(), Some("HTML"));
        assert!(state.is_expanded("HTML"));

        let state = state.select("HTML");
        assert_eq!(state, SelectionState::default());
    }

    #[test]
    fn selecting_another_name_supersedes() {
        let state = SelectionState::default().select("HTML").select("CSS");
        assert_eq!(state.selected(), Some("CSS"));
        assert!(!state.is_expanded("HTML"));
        assert!(state.is_expanded("CSS"));
    }
}
