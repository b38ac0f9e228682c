use chrono::{DateTime, Datelike, Days, Months, NaiveDate, Utc, Weekday};

#[derive(Debug, Clone, PartialEq)]
pub struct DatePicker {
    pub cursor: NaiveDate,
}

impl DatePicker {
    pub fn new(cursor: NaiveDate) -> Self {
        Self { cursor }
    }

    pub fn move_days(&mut self, days: i64) {
        let moved = if days >= 0 {
            self.cursor.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            self.cursor.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        if let Some(date) = moved {
            self.cursor = date;
        }
    }

    pub fn move_months(&mut self, months: i32) {
        let moved = if months >= 0 {
            self.cursor.checked_add_months(Months::new(months.unsigned_abs()))
        } else {
            self.cursor.checked_sub_months(Months::new(months.unsigned_abs()))
        };
        if let Some(date) = moved {
            self.cursor = date;
        }
    }

    pub fn jump_to(&mut self, date: NaiveDate) {
        self.cursor = date;
    }

    pub fn confirmed(&self, current: DateTime<Utc>) -> DateTime<Utc> {
        self.cursor.and_time(current.time()).and_utc()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthLayout {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<Week>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Week {
    pub days: Vec<DayCell>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub is_cursor: bool,
    pub is_current: bool,
    pub is_today: bool,
    pub is_current_month: bool,
}

impl DayCell {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            is_cursor: false,
            is_current: false,
            is_today: false,
            is_current_month: true,
        }
    }

    pub fn with_cursor(mut self, cursor: bool) -> Self {
        self.is_cursor = cursor;
        self
    }

    pub fn with_current(mut self, current: bool) -> Self {
        self.is_current = current;
        self
    }

    pub fn with_today(mut self, today: bool) -> Self {
        self.is_today = today;
        self
    }

    pub fn with_current_month(mut self, current_month: bool) -> Self {
        self.is_current_month = current_month;
        self
    }
}

pub fn calculate_layout(picker: &DatePicker, current: NaiveDate, today: NaiveDate) -> MonthLayout {
    let year = picker.cursor.year();
    let month = picker.cursor.month();

    let Some(first_day) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return MonthLayout { year, month, weeks: Vec::new() };
    };

    let days_before = first_day.weekday().num_days_from_monday() as u64;
    let Some(mut day) = first_day.checked_sub_days(Days::new(days_before)) else {
        return MonthLayout { year, month, weeks: Vec::new() };
    };

    let mut weeks = Vec::new();
    let mut current_week = Week { days: Vec::new() };

    loop {
        let in_month = day.month() == month && day.year() == year;
        current_week.days.push(
            DayCell::new(day)
                .with_cursor(day == picker.cursor)
                .with_current(day == current)
                .with_today(day == today)
                .with_current_month(in_month),
        );

        if day.weekday() == Weekday::Sun {
            weeks.push(current_week);
            current_week = Week { days: Vec::new() };
            let Some(next) = day.succ_opt() else { break };
            if next.month() != month {
                break;
            }
            day = next;
        } else {
            let Some(next) = day.succ_opt() else { break };
            day = next;
        }
    }

    if !current_week.days.is_empty() {
        weeks.push(current_week);
    }

    MonthLayout { year, month, weeks }
}
