use crate::habit::{Habit, HabitId};
use crate::ui::habit_status_buttons::{self, StatusButton};

pub const EMPTY_MESSAGE: &str = "No habit has been created";

#[derive(Debug, Clone, PartialEq)]
pub enum HabitListLayout {
    Empty { message: &'static str },
    Rows(Vec<ListRow>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListRow {
    Habit(HabitElement),
    Separator,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HabitElement {
    pub id: HabitId,
    pub index: usize,
    pub title: String,
    pub description: String,
    pub buttons: [StatusButton; 2],
    pub is_selected: bool,
}

impl HabitElement {
    pub fn new(habit: &Habit, index: usize) -> Self {
        Self {
            id: habit.id.clone(),
            index,
            title: habit.title.clone(),
            description: habit.description.clone(),
            buttons: habit_status_buttons::buttons_for(habit),
            is_selected: false,
        }
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.is_selected = selected;
        self
    }
}

impl HabitListLayout {
    pub fn elements(&self) -> Vec<&HabitElement> {
        match self {
            HabitListLayout::Empty { .. } => Vec::new(),
            HabitListLayout::Rows(rows) => rows
                .iter()
                .filter_map(|row| match row {
                    ListRow::Habit(element) => Some(element),
                    ListRow::Separator => None,
                })
                .collect(),
        }
    }

    pub fn separator_count(&self) -> usize {
        match self {
            HabitListLayout::Empty { .. } => 0,
            HabitListLayout::Rows(rows) => rows
                .iter()
                .filter(|row| matches!(row, ListRow::Separator))
                .count(),
        }
    }
}

pub fn calculate_layout(habits: &[Habit], selected: Option<usize>) -> HabitListLayout {
    if habits.is_empty() {
        return HabitListLayout::Empty { message: EMPTY_MESSAGE };
    }

    let mut rows = Vec::with_capacity(habits.len() * 2);
    for (index, habit) in habits.iter().enumerate() {
        rows.push(ListRow::Habit(
            HabitElement::new(habit, index).with_selected(selected == Some(index)),
        ));
        rows.push(ListRow::Separator);
    }

    HabitListLayout::Rows(rows)
}
