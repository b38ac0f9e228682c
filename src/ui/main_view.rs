use chrono::{DateTime, NaiveDate, Utc};

use crate::habit::{Habit, HabitCollection, HabitId, StatusKind};
use crate::ui::action_buttons::{self, ActionButton, ActionKind};
use crate::ui::date_picker::{self, DatePicker, MonthLayout};
use crate::ui::day_selector::{self, DaySelectorLayout, StepDirection};
use crate::ui::habit_list::{self, HabitListLayout};
use crate::ui::habit_status_buttons;

pub const LOADING_MESSAGE: &str = "Loading...";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MainViewProps<'a> {
    pub habits: &'a HabitCollection,
    pub date: DateTime<Utc>,
}

#[cfg_attr(test, mockall::automock)]
pub trait MainViewCallbacks {
    fn add_habit(&mut self);
    fn enter_edit_view(&mut self, id: HabitId);
    fn enter_stat_view(&mut self);
    fn edit_habit_status(&mut self, habit: Habit);
    fn set_date(&mut self, date: DateTime<Utc>);
}

#[derive(Debug, Clone, PartialEq)]
pub enum MainViewEvent {
    AddHabit,
    EnterEditView(HabitId),
    EnterStatView,
    EditHabitStatus(Habit),
    SetDate(DateTime<Utc>),
}

impl MainViewEvent {
    pub fn dispatch(self, callbacks: &mut dyn MainViewCallbacks) {
        match self {
            MainViewEvent::AddHabit => callbacks.add_habit(),
            MainViewEvent::EnterEditView(id) => callbacks.enter_edit_view(id),
            MainViewEvent::EnterStatView => callbacks.enter_stat_view(),
            MainViewEvent::EditHabitStatus(habit) => callbacks.edit_habit_status(habit),
            MainViewEvent::SetDate(date) => callbacks.set_date(date),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CalendarModal {
    Closed,
    Open(DatePicker),
}

#[derive(Debug, Clone, PartialEq)]
pub enum MainBody {
    Loading { message: &'static str },
    List(HabitListLayout),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MainLayout {
    pub day_selector: DaySelectorLayout,
    pub body: MainBody,
    pub actions: [ActionButton; 2],
    pub calendar: Option<MonthLayout>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MainView {
    pub calendar: CalendarModal,
    pub selected_index: usize,
}

impl MainView {
    pub fn new() -> Self {
        Self {
            calendar: CalendarModal::Closed,
            selected_index: 0,
        }
    }

    pub fn is_calendar_visible(&self) -> bool {
        matches!(self.calendar, CalendarModal::Open(_))
    }

    pub fn picker_mut(&mut self) -> Option<&mut DatePicker> {
        match &mut self.calendar {
            CalendarModal::Open(picker) => Some(picker),
            CalendarModal::Closed => None,
        }
    }

    pub fn open_calendar(&mut self, props: &MainViewProps) {
        self.calendar = CalendarModal::Open(DatePicker::new(props.date.date_naive()));
    }

    pub fn close_calendar(&mut self) {
        self.calendar = CalendarModal::Closed;
    }

    pub fn confirm_date(&mut self, props: &MainViewProps) -> Option<MainViewEvent> {
        let CalendarModal::Open(picker) = std::mem::replace(&mut self.calendar, CalendarModal::Closed) else {
            return None;
        };
        Some(MainViewEvent::SetDate(picker.confirmed(props.date)))
    }

    pub fn step_day(&self, props: &MainViewProps, direction: StepDirection) -> Option<MainViewEvent> {
        day_selector::step_day(props.date, direction).map(MainViewEvent::SetDate)
    }

    pub fn selected_habit<'a>(&self, props: &MainViewProps<'a>) -> Option<&'a Habit> {
        props.habits.get(self.selected_index)
    }

    pub fn select_next(&mut self, props: &MainViewProps) {
        let count = props.habits.len();
        if count > 0 && self.selected_index < count - 1 {
            self.selected_index += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn clamp_selection(&mut self, props: &MainViewProps) {
        let count = props.habits.len();
        self.selected_index = self.selected_index.min(count.saturating_sub(1));
    }

    pub fn press_status(&self, props: &MainViewProps, kind: StatusKind) -> Option<MainViewEvent> {
        self.selected_habit(props)
            .map(|habit| MainViewEvent::EditHabitStatus(habit_status_buttons::press(habit, kind)))
    }

    pub fn press_habit(&self, props: &MainViewProps) -> Option<MainViewEvent> {
        self.selected_habit(props)
            .map(|habit| MainViewEvent::EnterEditView(habit.id.clone()))
    }

    pub fn press_action(&self, kind: ActionKind) -> MainViewEvent {
        match kind {
            ActionKind::AddHabit => MainViewEvent::AddHabit,
            ActionKind::ShowStats => MainViewEvent::EnterStatView,
        }
    }

    pub fn body(&self, props: &MainViewProps) -> MainBody {
        match props.habits {
            HabitCollection::Loading => MainBody::Loading { message: LOADING_MESSAGE },
            HabitCollection::Loaded(habits) => {
                MainBody::List(habit_list::calculate_layout(habits, Some(self.selected_index)))
            }
        }
    }

    pub fn calculate_layout(&self, props: &MainViewProps, today: NaiveDate) -> MainLayout {
        let calendar = match &self.calendar {
            CalendarModal::Open(picker) => {
                Some(date_picker::calculate_layout(picker, props.date.date_naive(), today))
            }
            CalendarModal::Closed => None,
        };

        MainLayout {
            day_selector: day_selector::calculate_layout(props.date),
            body: self.body(props),
            actions: action_buttons::buttons(),
            calendar,
        }
    }
}

impl Default for MainView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
    }

    fn habit(id: &str, is_done: bool, is_missed: bool) -> Habit {
        Habit {
            id: HabitId::new(id),
            title: format!("Habit {}", id),
            description: String::new(),
            is_done,
            is_missed,
        }
    }

    fn loaded(habits: Vec<Habit>) -> HabitCollection {
        HabitCollection::Loaded(habits)
    }

    #[test]
    fn new_view_has_calendar_closed() {
        let view = MainView::new();
        assert!(!view.is_calendar_visible());
        assert_eq!(view.calendar, CalendarModal::Closed);
    }

    #[test]
    fn opening_calendar_seeds_cursor_with_current_day() {
        let habits = loaded(vec![]);
        let props = MainViewProps { habits: &habits, date: at(2025, 4, 9) };
        let mut view = MainView::new();

        view.open_calendar(&props);

        assert!(view.is_calendar_visible());
        assert_eq!(view.picker_mut().map(|p| p.cursor), Some(at(2025, 4, 9).date_naive()));
    }

    #[test]
    fn confirming_date_closes_modal_and_emits_set_date() {
        let habits = loaded(vec![]);
        let props = MainViewProps { habits: &habits, date: at(2025, 4, 9) };
        let mut view = MainView::new();
        view.open_calendar(&props);
        if let Some(picker) = view.picker_mut() {
            picker.move_days(3);
        }

        let event = view.confirm_date(&props);

        assert!(!view.is_calendar_visible());
        assert_eq!(event, Some(MainViewEvent::SetDate(at(2025, 4, 12))));
    }

    #[test]
    fn confirming_while_closed_emits_nothing() {
        let habits = loaded(vec![]);
        let props = MainViewProps { habits: &habits, date: at(2025, 4, 9) };
        let mut view = MainView::new();

        assert_eq!(view.confirm_date(&props), None);
    }

    #[test]
    fn close_request_hides_modal_without_event() {
        let habits = loaded(vec![]);
        let props = MainViewProps { habits: &habits, date: at(2025, 4, 9) };
        let mut view = MainView::new();
        view.open_calendar(&props);

        view.close_calendar();

        assert!(!view.is_calendar_visible());
    }

    #[test]
    fn step_day_emits_neighbouring_dates() {
        let habits = loaded(vec![]);
        let props = MainViewProps { habits: &habits, date: at(2024, 3, 1) };
        let view = MainView::new();

        assert_eq!(
            view.step_day(&props, StepDirection::Next),
            Some(MainViewEvent::SetDate(at(2024, 3, 2)))
        );
        assert_eq!(
            view.step_day(&props, StepDirection::Previous),
            Some(MainViewEvent::SetDate(at(2024, 2, 29)))
        );
    }

    #[test]
    fn pressing_done_on_missed_habit_emits_done_copy() {
        let habits = loaded(vec![habit("1", false, true)]);
        let props = MainViewProps { habits: &habits, date: at(2025, 1, 1) };
        let view = MainView::new();

        let event = view.press_status(&props, StatusKind::Done);

        assert_eq!(event, Some(MainViewEvent::EditHabitStatus(habit("1", true, false))));
        assert_eq!(habits.habits()[0], habit("1", false, true));
    }

    #[test]
    fn pressing_status_targets_selected_row() {
        let habits = loaded(vec![habit("1", false, false), habit("2", false, false)]);
        let props = MainViewProps { habits: &habits, date: at(2025, 1, 1) };
        let mut view = MainView::new();
        view.select_next(&props);

        let event = view.press_status(&props, StatusKind::Missed);

        assert_eq!(event, Some(MainViewEvent::EditHabitStatus(habit("2", false, true))));
    }

    #[test]
    fn pressing_status_while_loading_emits_nothing() {
        let habits = HabitCollection::Loading;
        let props = MainViewProps { habits: &habits, date: at(2025, 1, 1) };
        let view = MainView::new();

        assert_eq!(view.press_status(&props, StatusKind::Done), None);
        assert_eq!(view.press_habit(&props), None);
    }

    #[test]
    fn pressing_habit_enters_edit_view_with_id() {
        let habits = loaded(vec![habit("abc", false, false)]);
        let props = MainViewProps { habits: &habits, date: at(2025, 1, 1) };
        let view = MainView::new();

        assert_eq!(view.press_habit(&props), Some(MainViewEvent::EnterEditView(HabitId::new("abc"))));
    }

    #[test]
    fn selection_stays_within_list() {
        let habits = loaded(vec![habit("1", false, false), habit("2", false, false)]);
        let props = MainViewProps { habits: &habits, date: at(2025, 1, 1) };
        let mut view = MainView::new();

        view.select_next(&props);
        view.select_next(&props);
        assert_eq!(view.selected_index, 1);

        view.select_previous();
        view.select_previous();
        assert_eq!(view.selected_index, 0);
    }

    #[test]
    fn clamp_selection_after_list_shrinks() {
        let habits = loaded(vec![habit("1", false, false)]);
        let props = MainViewProps { habits: &habits, date: at(2025, 1, 1) };
        let mut view = MainView { calendar: CalendarModal::Closed, selected_index: 5 };

        view.clamp_selection(&props);

        assert_eq!(view.selected_index, 0);
    }

    #[test]
    fn action_buttons_map_to_events() {
        let view = MainView::new();
        assert_eq!(view.press_action(ActionKind::AddHabit), MainViewEvent::AddHabit);
        assert_eq!(view.press_action(ActionKind::ShowStats), MainViewEvent::EnterStatView);
    }

    #[test]
    fn loading_collection_renders_loading_placeholder() {
        let habits = HabitCollection::Loading;
        let props = MainViewProps { habits: &habits, date: at(2025, 1, 1) };

        assert_eq!(MainView::new().body(&props), MainBody::Loading { message: "Loading..." });
    }

    #[test]
    fn empty_collection_renders_empty_message_not_loading() {
        let habits = loaded(vec![]);
        let props = MainViewProps { habits: &habits, date: at(2025, 1, 1) };

        assert_eq!(
            MainView::new().body(&props),
            MainBody::List(HabitListLayout::Empty { message: habit_list::EMPTY_MESSAGE })
        );
    }

    #[test]
    fn layout_always_has_action_buttons_and_day_label() {
        let habits = HabitCollection::Loading;
        let props = MainViewProps { habits: &habits, date: at(2024, 3, 1) };

        let layout = MainView::new().calculate_layout(&props, at(2024, 3, 1).date_naive());

        assert_eq!(layout.day_selector.label, "Fri, 01 Mar");
        assert_eq!(layout.actions.len(), 2);
        assert_eq!(layout.calendar, None);
    }

    #[test]
    fn layout_includes_calendar_when_open() {
        let habits = loaded(vec![]);
        let props = MainViewProps { habits: &habits, date: at(2024, 3, 1) };
        let mut view = MainView::new();
        view.open_calendar(&props);

        let layout = view.calculate_layout(&props, at(2024, 3, 1).date_naive());

        assert_eq!(layout.calendar.map(|c| c.month), Some(3));
    }

    #[test]
    fn dispatch_routes_status_edit_to_callbacks() {
        let mut callbacks = MockMainViewCallbacks::new();
        callbacks
            .expect_edit_habit_status()
            .withf(|h: &Habit| h.id == HabitId::new("1") && h.is_done && !h.is_missed)
            .times(1)
            .return_const(());

        MainViewEvent::EditHabitStatus(habit("1", true, false)).dispatch(&mut callbacks);
    }

    #[test]
    fn dispatch_routes_each_event_once() {
        let mut callbacks = MockMainViewCallbacks::new();
        callbacks.expect_add_habit().times(1).return_const(());
        callbacks.expect_enter_stat_view().times(1).return_const(());
        callbacks
            .expect_enter_edit_view()
            .withf(|id: &HabitId| id.as_str() == "x")
            .times(1)
            .return_const(());
        callbacks
            .expect_set_date()
            .withf(|d: &DateTime<Utc>| *d == at(2024, 3, 2))
            .times(1)
            .return_const(());
        callbacks.expect_edit_habit_status().never();

        MainViewEvent::AddHabit.dispatch(&mut callbacks);
        MainViewEvent::EnterStatView.dispatch(&mut callbacks);
        MainViewEvent::EnterEditView(HabitId::new("x")).dispatch(&mut callbacks);
        MainViewEvent::SetDate(at(2024, 3, 2)).dispatch(&mut callbacks);
    }

    #[test]
    fn date_picker_flow_reaches_set_date_callback() {
        let habits = loaded(vec![]);
        let props = MainViewProps { habits: &habits, date: at(2025, 4, 9) };
        let mut view = MainView::new();
        let mut callbacks = MockMainViewCallbacks::new();
        callbacks
            .expect_set_date()
            .withf(|d: &DateTime<Utc>| *d == at(2025, 5, 9))
            .times(1)
            .return_const(());

        view.open_calendar(&props);
        if let Some(picker) = view.picker_mut() {
            picker.move_months(1);
        }
        if let Some(event) = view.confirm_date(&props) {
            event.dispatch(&mut callbacks);
        }

        assert!(!view.is_calendar_visible());
    }
}
