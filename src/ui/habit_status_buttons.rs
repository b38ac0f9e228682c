use crate::habit::{Habit, StatusKind};

#[derive(Debug, Clone, PartialEq)]
pub struct StatusButton {
    pub kind: StatusKind,
    pub icon: &'static str,
    pub is_active: bool,
}

pub fn icon_for(kind: StatusKind) -> &'static str {
    match kind {
        StatusKind::Done => "✓",
        StatusKind::Missed => "✗",
    }
}

pub fn buttons_for(habit: &Habit) -> [StatusButton; 2] {
    StatusKind::ALL.map(|kind| StatusButton {
        kind,
        icon: icon_for(kind),
        is_active: habit.flag(kind),
    })
}

pub fn press(habit: &Habit, kind: StatusKind) -> Habit {
    habit.toggled(kind)
}
