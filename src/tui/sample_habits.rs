use habit_day::{Habit, HabitId};

pub fn sample_habits() -> Vec<Habit> {
    let habits = vec![
        ("Morning stretch", "10 minutes before breakfast"),
        ("Read", "At least 20 pages"),
        ("Drink water", "Eight glasses"),
        ("No sugar", "Skip desserts and soda"),
        ("Evening walk", "30 minutes outside"),
        ("Journal", "Three lines before bed"),
    ];

    habits
        .into_iter()
        .map(|(title, description)| Habit::new(HabitId::generate(), title, description))
        .collect()
}
