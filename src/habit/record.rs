use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HabitId(pub String);

impl HabitId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HabitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Habit {
    pub id: HabitId,
    pub title: String,
    pub description: String,
    pub is_done: bool,
    pub is_missed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Done,
    Missed,
}

impl StatusKind {
    pub const ALL: [StatusKind; 2] = [StatusKind::Done, StatusKind::Missed];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HabitStatus {
    Pending,
    Done,
    Missed,
}

impl Habit {
    pub fn new(id: HabitId, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            is_done: false,
            is_missed: false,
        }
    }

    pub fn flag(&self, kind: StatusKind) -> bool {
        match kind {
            StatusKind::Done => self.is_done,
            StatusKind::Missed => self.is_missed,
        }
    }

    pub fn status(&self) -> HabitStatus {
        if self.is_done {
            HabitStatus::Done
        } else if self.is_missed {
            HabitStatus::Missed
        } else {
            HabitStatus::Pending
        }
    }

    pub fn with_status(mut self, status: HabitStatus) -> Self {
        self.is_done = status == HabitStatus::Done;
        self.is_missed = status == HabitStatus::Missed;
        self
    }

    /// Returns a copy with both flags cleared and the pressed flag set to the
    /// negation of its previous value. `self` is left untouched.
    pub fn toggled(&self, kind: StatusKind) -> Habit {
        let mut next = self.clone();
        next.is_done = false;
        next.is_missed = false;
        match kind {
            StatusKind::Done => next.is_done = !self.is_done,
            StatusKind::Missed => next.is_missed = !self.is_missed,
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn habit(is_done: bool, is_missed: bool) -> Habit {
        Habit {
            id: HabitId::new("1"),
            title: "Read".to_string(),
            description: "20 pages".to_string(),
            is_done,
            is_missed,
        }
    }

    #[test]
    fn new_habit_is_pending() {
        let h = Habit::new(HabitId::new("h"), "Walk", "");
        assert_eq!(h.status(), HabitStatus::Pending);
    }

    #[test]
    fn pressing_done_on_missed_habit_marks_it_done() {
        let h = habit(false, true);

        let next = h.toggled(StatusKind::Done);

        assert!(next.is_done);
        assert!(!next.is_missed);
        assert_eq!(next.id, HabitId::new("1"));
    }

    #[test]
    fn pressing_done_again_clears_both_flags() {
        let next = habit(true, false).toggled(StatusKind::Done);

        assert!(!next.is_done);
        assert!(!next.is_missed);
    }

    #[test]
    fn pressing_missed_on_done_habit_marks_it_missed() {
        let next = habit(true, false).toggled(StatusKind::Missed);

        assert_eq!(next.status(), HabitStatus::Missed);
    }

    #[test]
    fn toggle_leaves_source_untouched() {
        let h = habit(false, true);
        let before = h.clone();

        let _ = h.toggled(StatusKind::Done);

        assert_eq!(h, before);
    }

    #[test]
    fn with_status_sets_matching_flag() {
        let h = habit(false, false).with_status(HabitStatus::Missed);
        assert!(h.is_missed);
        assert!(!h.is_done);
    }

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(HabitId::generate(), HabitId::generate());
    }

    fn any_kind() -> impl Strategy<Value = StatusKind> {
        prop_oneof![Just(StatusKind::Done), Just(StatusKind::Missed)]
    }

    proptest! {
        #[test]
        fn toggle_never_sets_both_flags(is_done in any::<bool>(), is_missed in any::<bool>(), kind in any_kind()) {
            let next = habit(is_done, is_missed).toggled(kind);
            prop_assert!(!(next.is_done && next.is_missed));
        }

        #[test]
        fn toggle_negates_pressed_flag(is_done in any::<bool>(), kind in any_kind()) {
            let h = habit(is_done, false);
            let next = h.toggled(kind);
            prop_assert_eq!(next.flag(kind), !h.flag(kind));
        }

        #[test]
        fn toggle_preserves_title_and_description(kind in any_kind(), title in ".{0,24}") {
            let mut h = habit(false, false);
            h.title = title.clone();
            let next = h.toggled(kind);
            prop_assert_eq!(next.title, title);
            prop_assert_eq!(next.description, h.description);
        }
    }
}
