// Company calendar.

pub mod handlers;

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::filter::{DateRange, Pipeline};
use crate::models::operations::{CalendarEvent, EventType};

pub fn events_on(events: &[CalendarEvent], day: NaiveDate) -> Vec<CalendarEvent> {
    Pipeline::<CalendarEvent>::new()
        .within(DateRange::new(Some(day), None), |e: &CalendarEvent| e.date)
        .run(events)
}

/// Events from the first of `day`'s month up to, not including, the first of the next.
pub fn events_in_month(events: &[CalendarEvent], day: NaiveDate) -> Vec<CalendarEvent> {
    let month_start = NaiveDate::from_ymd_opt(day.year(), day.month(), 1).unwrap_or(day);
    let Some(next_month) = month_start.checked_add_months(Months::new(1)) else {
        return Vec::new();
    };
    Pipeline::<CalendarEvent>::new()
        .filter(move |e: &CalendarEvent| month_start <= e.date && e.date < next_month)
        .run(events)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarView {
    pub date: NaiveDate,
    pub on_day: Vec<CalendarEvent>,
    pub in_month: Vec<CalendarEvent>,
}

pub fn calendar_view(events: &[CalendarEvent], date: NaiveDate) -> CalendarView {
    CalendarView {
        date,
        on_day: events_on(events, date),
        in_month: events_in_month(events, date),
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewEvent {
    pub title: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub event_type: EventType,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewEvent {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.title.trim().is_empty() {
            return Err(AppError::Validation("title is required".to_string()));
        }
        Ok(())
    }

    pub fn into_record(self, id: String) -> CalendarEvent {
        CalendarEvent {
            id,
            title: self.title.trim().to_string(),
            date: self.date,
            event_type: self.event_type,
            description: self
                .description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::SeedData;
    use chrono::Duration;

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_events_on_same_day() {
        let seed = SeedData::build(anchor());
        let day = anchor() + Duration::days(3);
        let titles: Vec<_> = events_on(&seed.events, day)
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(titles, vec!["Q3 All-Hands Town Hall", "React Best Practices"]);
    }

    #[test]
    fn test_month_window_is_half_open() {
        let seed = SeedData::build(anchor());
        // June holds days 3, 7 and 10 after the anchor; Labor Day is in September.
        let june = events_in_month(&seed.events, anchor());
        assert_eq!(june.len(), 4);
        assert!(june.iter().all(|e| e.date.month() == 6));

        let september = events_in_month(&seed.events, NaiveDate::from_ymd_opt(2024, 9, 30).unwrap());
        assert_eq!(september.len(), 1);
        assert_eq!(september[0].title, "Labor Day");

        let july = events_in_month(&seed.events, NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
        assert!(july.is_empty());
    }

    #[test]
    fn test_new_event_requires_title() {
        let event = NewEvent {
            title: " ".to_string(),
            date: anchor(),
            event_type: EventType::Other,
            description: None,
        };
        assert!(event.validate().is_err());
    }

    #[test]
    fn test_new_event_wire_type_field() {
        let event: NewEvent = serde_json::from_str(
            r#"{"title": "Offsite", "date": "2024-06-20", "type": "Town Hall"}"#,
        )
        .unwrap();
        assert_eq!(event.event_type, EventType::TownHall);
        let record = event.into_record("EVT006".to_string());
        assert_eq!(record.description, None);
    }
}
