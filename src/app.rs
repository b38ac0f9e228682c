use chrono::{DateTime, NaiveDate, Utc};
use std::collections::HashMap;

use crate::habit::{Habit, HabitCollection, HabitId, HabitStatus};
use crate::ui::main_view::{MainView, MainViewCallbacks, MainViewProps};
use crate::ui::theme::Theme;

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Main,
    NewHabit,
    EditHabit(HabitId),
    Stats,
}

pub struct AppState {
    pub date: DateTime<Utc>,
    pub habits: HabitCollection,
    pub main_view: MainView,
    pub screen: Screen,
    pub theme: Theme,
    pub show_help: bool,
    pub help_scroll: usize,
    roster: Option<Vec<Habit>>,
    marks: HashMap<NaiveDate, HashMap<HabitId, HabitStatus>>,
}

impl AppState {
    pub fn new(date: DateTime<Utc>) -> Self {
        Self {
            date,
            habits: HabitCollection::Loading,
            main_view: MainView::new(),
            screen: Screen::Main,
            theme: Theme::default(),
            show_help: false,
            help_scroll: 0,
            roster: None,
            marks: HashMap::new(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn props(&self) -> MainViewProps<'_> {
        MainViewProps {
            habits: &self.habits,
            date: self.date,
        }
    }

    pub fn selected_day(&self) -> NaiveDate {
        self.date.date_naive()
    }

    pub fn load_habits(&mut self, roster: Vec<Habit>) {
        tracing::info!("Loaded {} habits", roster.len());
        self.roster = Some(roster);
        self.refresh_habits();
    }

    pub fn status_on(&self, day: NaiveDate, id: &HabitId) -> HabitStatus {
        self.marks
            .get(&day)
            .and_then(|day_marks| day_marks.get(id))
            .copied()
            .unwrap_or(HabitStatus::Pending)
    }

    pub fn habits_for_day(&self, day: NaiveDate) -> Option<Vec<Habit>> {
        self.roster.as_ref().map(|roster| {
            roster
                .iter()
                .map(|habit| habit.clone().with_status(self.status_on(day, &habit.id)))
                .collect()
        })
    }

    pub fn close_screen(&mut self) {
        self.screen = Screen::Main;
    }

    fn refresh_habits(&mut self) {
        self.habits = match self.habits_for_day(self.selected_day()) {
            Some(habits) => HabitCollection::Loaded(habits),
            None => HabitCollection::Loading,
        };
        let props = MainViewProps {
            habits: &self.habits,
            date: self.date,
        };
        self.main_view.clamp_selection(&props);
    }
}

impl MainViewCallbacks for AppState {
    fn add_habit(&mut self) {
        tracing::info!("Habit creation requested");
        self.screen = Screen::NewHabit;
    }

    fn enter_edit_view(&mut self, id: HabitId) {
        tracing::info!("Edit view requested for habit {}", id);
        self.screen = Screen::EditHabit(id);
    }

    fn enter_stat_view(&mut self) {
        tracing::info!("Statistics view requested");
        self.screen = Screen::Stats;
    }

    fn edit_habit_status(&mut self, habit: Habit) {
        let day = self.selected_day();
        tracing::info!("Habit {} on {} is now {:?}", habit.id, day, habit.status());
        self.marks
            .entry(day)
            .or_default()
            .insert(habit.id.clone(), habit.status());
        if !self.habits.replace(habit) {
            tracing::warn!("Status edit for a habit that is not listed");
        }
    }

    fn set_date(&mut self, date: DateTime<Utc>) {
        tracing::debug!("Selected date changed to {}", date);
        self.date = date;
        self.refresh_habits();
    }
}
