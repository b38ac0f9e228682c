use super::{Habit, HabitId};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum HabitCollection {
    #[default]
    Loading,
    Loaded(Vec<Habit>),
}

impl HabitCollection {
    pub fn is_loading(&self) -> bool {
        matches!(self, HabitCollection::Loading)
    }

    pub fn habits(&self) -> &[Habit] {
        match self {
            HabitCollection::Loading => &[],
            HabitCollection::Loaded(habits) => habits,
        }
    }

    pub fn len(&self) -> usize {
        self.habits().len()
    }

    pub fn is_empty(&self) -> bool {
        self.habits().is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Habit> {
        self.habits().get(index)
    }

    pub fn find(&self, id: &HabitId) -> Option<&Habit> {
        self.habits().iter().find(|h| &h.id == id)
    }

    pub fn replace(&mut self, habit: Habit) -> bool {
        let HabitCollection::Loaded(habits) = self else {
            return false;
        };

        match habits.iter_mut().find(|h| h.id == habit.id) {
            Some(slot) => {
                *slot = habit;
                true
            }
            None => false,
        }
    }
}
