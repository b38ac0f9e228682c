#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    AddHabit,
    ShowStats,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActionButton {
    pub kind: ActionKind,
    pub icon: &'static str,
    pub key_hint: &'static str,
}

pub fn buttons() -> [ActionButton; 2] {
    [
        ActionButton { kind: ActionKind::AddHabit, icon: "+", key_hint: "a" },
        ActionButton { kind: ActionKind::ShowStats, icon: "▤", key_hint: "s" },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_button_is_on_top() {
        let [first, second] = buttons();
        assert_eq!(first.kind, ActionKind::AddHabit);
        assert_eq!(second.kind, ActionKind::ShowStats);
    }
}
