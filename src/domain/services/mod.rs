pub mod working_days_calendar;
