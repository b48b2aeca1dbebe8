use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::SortDirection;

/// A typed value read from one field of a record.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Timestamp(DateTime<Utc>),
    /// Foreign reference. Matched by id, searched and sorted by display value.
    Reference { id: Uuid, display: String },
    Null,
}

impl FieldValue {
    pub fn reference(id: Uuid, display: impl Into<String>) -> Self {
        Self::Reference {
            id,
            display: display.into(),
        }
    }

    /// Textual form used by substring matching.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(value) => Cow::Borrowed(value),
            Self::Integer(value) => Cow::Owned(value.to_string()),
            Self::Timestamp(value) => Cow::Owned(value.to_rfc3339()),
            Self::Reference { display, .. } => Cow::Borrowed(display),
            Self::Null => Cow::Borrowed(""),
        }
    }

    pub fn matches_exact(&self, needle: &FieldValue) -> bool {
        match (self, needle) {
            (Self::Reference { id, .. }, Self::Reference { id: other, .. }) => id == other,
            (value, needle) => value == needle,
        }
    }

    /// Comparison between values of the same kind, `None` otherwise.
    pub fn compare(&self, other: &FieldValue) -> Option<Ordering> {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => Some(a.cmp(b)),
            (Self::Integer(a), Self::Integer(b)) => Some(a.cmp(b)),
            (Self::Timestamp(a), Self::Timestamp(b)) => Some(a.cmp(b)),
            (Self::Reference { display: a, .. }, Self::Reference { display: b, .. }) => {
                Some(a.cmp(b))
            }
            (Self::Null, Self::Null) => Some(Ordering::Equal),
            _ => None,
        }
    }

    /// Total order used for sorting: nulls first, mixed kinds by kind.
    pub fn sort_cmp(&self, other: &FieldValue) -> Ordering {
        self.compare(other)
            .unwrap_or_else(|| self.rank().cmp(&other.rank()))
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Integer(_) => 1,
            Self::Timestamp(_) => 2,
            Self::Text(_) => 3,
            Self::Reference { .. } => 4,
        }
    }
}

/// Semantic type of a field, drives coercion of raw parameter strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Timestamp,
    Reference,
}

impl FieldKind {
    /// Coerce a raw parameter value. Blank or malformed input yields `None`.
    pub fn coerce(self, raw: &str) -> Option<FieldValue> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        match self {
            Self::Text => Some(FieldValue::Text(raw.to_string())),
            Self::Integer => raw.parse::<i64>().ok().map(FieldValue::Integer),
            Self::Timestamp => parse_timestamp(raw).map(FieldValue::Timestamp),
            Self::Reference => Uuid::parse_str(raw)
                .ok()
                .map(|id| FieldValue::reference(id, String::new())),
        }
    }
}

/// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates (midnight UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|datetime| datetime.and_utc())
}

/// A named field of `R` read through an explicit accessor.
pub struct Field<R> {
    pub name: &'static str,
    pub kind: FieldKind,
    accessor: fn(&R) -> FieldValue,
}

impl<R> Field<R> {
    pub const fn new(name: &'static str, kind: FieldKind, accessor: fn(&R) -> FieldValue) -> Self {
        Self {
            name,
            kind,
            accessor,
        }
    }

    pub fn read(&self, record: &R) -> FieldValue {
        (self.accessor)(record)
    }
}

impl<R> Clone for Field<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Field<R> {}

impl<R> fmt::Debug for Field<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}

/// Comparison applied by a filter entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Exact,
    ContainsIgnoreCase,
    GreaterEq,
    LessEq,
}

impl Lookup {
    pub fn is_range(self) -> bool {
        matches!(self, Self::GreaterEq | Self::LessEq)
    }
}

/// One recognized filter parameter.
pub struct FilterEntry<R> {
    pub param: &'static str,
    pub field: Field<R>,
    pub lookup: Lookup,
    pub help_text: &'static str,
}

impl<R> fmt::Debug for FilterEntry<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterEntry")
            .field("param", &self.param)
            .field("field", &self.field)
            .field("lookup", &self.lookup)
            .finish()
    }
}

/// Which parameters filter a record type and how.
pub struct FilterSpec<R> {
    entries: Vec<FilterEntry<R>>,
}

impl<R> Default for FilterSpec<R> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<R> FilterSpec<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(
        mut self,
        param: &'static str,
        field: Field<R>,
        lookup: Lookup,
        help_text: &'static str,
    ) -> Self {
        self.entries.push(FilterEntry {
            param,
            field,
            lookup,
            help_text,
        });
        self
    }

    pub fn exact(self, param: &'static str, field: Field<R>, help_text: &'static str) -> Self {
        self.entry(param, field, Lookup::Exact, help_text)
    }

    pub fn contains(self, param: &'static str, field: Field<R>, help_text: &'static str) -> Self {
        self.entry(param, field, Lookup::ContainsIgnoreCase, help_text)
    }

    pub fn gte(self, param: &'static str, field: Field<R>, help_text: &'static str) -> Self {
        self.entry(param, field, Lookup::GreaterEq, help_text)
    }

    pub fn lte(self, param: &'static str, field: Field<R>, help_text: &'static str) -> Self {
        self.entry(param, field, Lookup::LessEq, help_text)
    }

    pub fn entries(&self) -> &[FilterEntry<R>] {
        &self.entries
    }

    pub fn get(&self, param: &str) -> Option<&FilterEntry<R>> {
        self.entries.iter().find(|entry| entry.param == param)
    }
}

/// Fields unioned by the free-text search.
pub struct SearchSpec<R> {
    fields: Vec<Field<R>>,
}

impl<R> SearchSpec<R> {
    pub fn new(fields: Vec<Field<R>>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[Field<R>] {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A resolved sort key.
pub struct OrderKey<R> {
    pub field: Field<R>,
    pub direction: SortDirection,
}

impl<R> OrderKey<R> {
    pub fn asc(field: Field<R>) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: Field<R>) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }
}

impl<R> Clone for OrderKey<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for OrderKey<R> {}

impl<R> fmt::Debug for OrderKey<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderKey")
            .field("field", &self.field.name)
            .field("direction", &self.direction)
            .finish()
    }
}

/// Sortable fields and the ordering used when the caller names none.
pub struct OrderSpec<R> {
    allowed: Vec<Field<R>>,
    default: Vec<OrderKey<R>>,
}

impl<R> OrderSpec<R> {
    pub fn new(allowed: Vec<Field<R>>) -> Self {
        Self {
            allowed,
            default: Vec::new(),
        }
    }

    pub fn with_default(mut self, default: Vec<OrderKey<R>>) -> Self {
        self.default = default;
        self
    }

    pub fn allowed(&self) -> &[Field<R>] {
        &self.allowed
    }

    pub fn default_order(&self) -> &[OrderKey<R>] {
        &self.default
    }

    pub fn field(&self, name: &str) -> Option<Field<R>> {
        self.allowed.iter().find(|field| field.name == name).copied()
    }
}

/// Everything the query builder needs to know about one record type.
pub struct QuerySchema<R> {
    pub filter: FilterSpec<R>,
    pub search: SearchSpec<R>,
    pub order: OrderSpec<R>,
}

/// A bounded slice of ordered, filtered results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: usize,
    pub page: usize,
    pub page_size: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> Page<T> {
    /// At least one page, even when nothing matched.
    pub fn num_pages(&self) -> usize {
        self.total_count.div_ceil(self.page_size.max(1)).max(1)
    }

    pub fn next_page(&self) -> Option<usize> {
        self.has_next.then(|| self.page + 1)
    }

    /// Points back into range when the requested page was past the end.
    pub fn previous_page(&self) -> Option<usize> {
        self.has_previous.then(|| (self.page - 1).min(self.num_pages()))
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            page: self.page,
            page_size: self.page_size,
            has_next: self.has_next,
            has_previous: self.has_previous,
        }
    }
}
