//! Filter Pipeline: narrows a store's records by independent predicates combined with AND.
//!
//! Every predicate is optional: an empty search query, a `Choice::All`, or an unset
//! `DateRange` contributes nothing. Output preserves source order.

pub mod cascade;

use chrono::NaiveDate;
use serde::de::{value::StringDeserializer, DeserializeOwned, Error as _, IntoDeserializer};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::AppError;

// ────────────────────────────────────────────────────────────────────────────
// Choice: equality target with an "all" sentinel
// ────────────────────────────────────────────────────────────────────────────

/// An equality filter value. `All` means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Choice<T> {
    #[default]
    All,
    Only(T),
}

impl<T> Choice<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Choice::All)
    }

    pub fn as_only(&self) -> Option<&T> {
        match self {
            Choice::All => None,
            Choice::Only(value) => Some(value),
        }
    }
}

impl<T: PartialEq> Choice<T> {
    /// True when unconstrained or when `value` equals the chosen one.
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(chosen) => chosen == value,
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Choice<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        let raw = raw.as_deref().map(str::trim).unwrap_or_default();
        if raw.is_empty() || raw.eq_ignore_ascii_case("all") {
            return Ok(Choice::All);
        }
        let inner: StringDeserializer<serde::de::value::Error> = raw.to_string().into_deserializer();
        T::deserialize(inner)
            .map(Choice::Only)
            .map_err(D::Error::custom)
    }
}

impl<T: Serialize> Serialize for Choice<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Choice::All => serializer.serialize_str("all"),
            Choice::Only(value) => value.serialize(serializer),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Text search
// ────────────────────────────────────────────────────────────────────────────

/// Case-insensitive substring match. An empty query matches everything.
pub fn matches_text(field: &str, query: &str) -> bool {
    query.is_empty() || field.to_lowercase().contains(&query.to_lowercase())
}

/// Lowercases and drops whitespace and commas, so "New York, NY" compares equal to "newyorkny".
pub fn normalize_token(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .flat_map(char::to_lowercase)
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Date ranges
// ────────────────────────────────────────────────────────────────────────────

/// Inclusive whole-day range. Without `from` the range is unconstrained; without `to` it
/// covers the single day `from`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    pub fn between(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    /// Builds a range from query parameters, rejecting `to` before `from`.
    pub fn checked(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<Self, AppError> {
        let range = Self::new(from, to);
        if range.is_inverted() {
            return Err(AppError::Validation(
                "'to' must not be earlier than 'from'".to_string(),
            ));
        }
        Ok(range)
    }

    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let from = self.from?;
        Some((from, self.to.unwrap_or(from)))
    }

    pub fn is_unconstrained(&self) -> bool {
        self.from.is_none()
    }

    /// `to` earlier than `from`; such a range admits nothing and callers reject it.
    pub fn is_inverted(&self) -> bool {
        matches!(self.bounds(), Some((from, to)) if to < from)
    }

    /// Point containment: `date` falls inside the range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match self.bounds() {
            None => true,
            Some((from, to)) => from <= date && date <= to,
        }
    }

    /// Interval overlap: `[start, end]` shares at least one day with the range.
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        match self.bounds() {
            None => true,
            Some((from, to)) => start <= to && end >= from,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Response envelope shared by list endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct Listing<T> {
    pub total: usize,
    pub items: Vec<T>,
}

impl<T> Listing<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            total: items.len(),
            items,
        }
    }
}

type Predicate<'a, T> = Box<dyn Fn(&T) -> bool + 'a>;

/// Collects the active predicates of one listing and applies them in order.
pub struct Pipeline<'a, T> {
    predicates: Vec<Predicate<'a, T>>,
}

impl<'a, T> Default for Pipeline<'a, T> {
    fn default() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }
}

impl<'a, T: Clone> Pipeline<'a, T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps records where any of `fields` contains `query`, ignoring case.
    pub fn search<F>(mut self, query: &str, fields: F) -> Self
    where
        F: for<'r> Fn(&'r T) -> Vec<&'r str> + 'a,
    {
        let query = query.trim().to_string();
        if !query.is_empty() {
            self.predicates.push(Box::new(move |record: &T| {
                fields(record)
                    .into_iter()
                    .any(|field| matches_text(field, &query))
            }));
        }
        self
    }

    /// Keeps records for which `matches(record, chosen)` holds; skipped for `Choice::All`.
    pub fn matching<V, F>(mut self, choice: &'a Choice<V>, matches: F) -> Self
    where
        F: Fn(&T, &V) -> bool + 'a,
    {
        if let Choice::Only(chosen) = choice {
            self.predicates
                .push(Box::new(move |record: &T| matches(record, chosen)));
        }
        self
    }

    /// Keeps records whose date lies inside `range`.
    pub fn within<F>(mut self, range: DateRange, date_of: F) -> Self
    where
        F: Fn(&T) -> NaiveDate + 'a,
    {
        if !range.is_unconstrained() {
            self.predicates
                .push(Box::new(move |record: &T| range.contains(date_of(record))));
        }
        self
    }

    /// Keeps records whose `[start, end]` interval overlaps `range`.
    pub fn overlapping<F>(mut self, range: DateRange, interval_of: F) -> Self
    where
        F: Fn(&T) -> (NaiveDate, NaiveDate) + 'a,
    {
        if !range.is_unconstrained() {
            self.predicates.push(Box::new(move |record: &T| {
                let (start, end) = interval_of(record);
                range.overlaps(start, end)
            }));
        }
        self
    }

    /// An always-active predicate.
    pub fn filter<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + 'a,
    {
        self.predicates.push(Box::new(predicate));
        self
    }

    pub fn active_predicates(&self) -> usize {
        self.predicates.len()
    }

    pub fn run(&self, records: &[T]) -> Vec<T> {
        records
            .iter()
            .filter(|record| self.predicates.iter().all(|p| p(record)))
            .cloned()
            .collect()
    }
}
