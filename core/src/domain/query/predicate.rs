use tracing::debug;

use super::entities::{Field, FieldValue, FilterEntry, FilterSpec, Lookup, SearchSpec};
use super::value_objects::QueryParams;

/// A composable condition over records of type `R`.
///
/// `And(vec![])` accepts everything and `Or(vec![])` accepts nothing.
#[derive(Debug, Clone)]
pub enum Predicate<R> {
    ExactMatch { field: Field<R>, value: FieldValue },
    /// `needle` is stored lowercased.
    ContainsIgnoreCase { field: Field<R>, needle: String },
    GreaterEq { field: Field<R>, value: FieldValue },
    LessEq { field: Field<R>, value: FieldValue },
    Or(Vec<Predicate<R>>),
    And(Vec<Predicate<R>>),
}

impl<R> Predicate<R> {
    /// The identity filter.
    pub fn all() -> Self {
        Self::And(Vec::new())
    }

    pub fn contains_ignore_case(field: Field<R>, needle: &str) -> Self {
        Self::ContainsIgnoreCase {
            field,
            needle: needle.to_lowercase(),
        }
    }

    pub fn and(self, other: Predicate<R>) -> Self {
        match (self, other) {
            (Self::And(mut left), Self::And(right)) => {
                left.extend(right);
                Self::And(left)
            }
            (Self::And(mut left), other) => {
                left.push(other);
                Self::And(left)
            }
            (this, other) => Self::And(vec![this, other]),
        }
    }

    pub fn or(self, other: Predicate<R>) -> Self {
        match (self, other) {
            (Self::Or(mut left), Self::Or(right)) => {
                left.extend(right);
                Self::Or(left)
            }
            (Self::Or(mut left), other) => {
                left.push(other);
                Self::Or(left)
            }
            (this, other) => Self::Or(vec![this, other]),
        }
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, Self::And(clauses) if clauses.is_empty())
    }

    pub fn matches(&self, record: &R) -> bool {
        match self {
            Self::ExactMatch { field, value } => field.read(record).matches_exact(value),
            Self::ContainsIgnoreCase { field, needle } => field
                .read(record)
                .as_text()
                .to_lowercase()
                .contains(needle.as_str()),
            Self::GreaterEq { field, value } => field
                .read(record)
                .compare(value)
                .is_some_and(|ordering| ordering.is_ge()),
            Self::LessEq { field, value } => field
                .read(record)
                .compare(value)
                .is_some_and(|ordering| ordering.is_le()),
            Self::Or(clauses) => clauses.iter().any(|clause| clause.matches(record)),
            Self::And(clauses) => clauses.iter().all(|clause| clause.matches(record)),
        }
    }

    pub fn into_fn(self) -> impl Fn(&R) -> bool {
        move |record| self.matches(record)
    }
}

impl<R> FilterEntry<R> {
    /// Builds the clause for a raw parameter value, `None` if it does not coerce.
    pub fn clause(&self, raw: &str) -> Option<Predicate<R>> {
        let field = self.field;
        match self.lookup {
            Lookup::ContainsIgnoreCase => {
                let needle = raw.trim();
                (!needle.is_empty()).then(|| Predicate::contains_ignore_case(field, needle))
            }
            Lookup::Exact => field
                .kind
                .coerce(raw)
                .map(|value| Predicate::ExactMatch { field, value }),
            Lookup::GreaterEq => field
                .kind
                .coerce(raw)
                .map(|value| Predicate::GreaterEq { field, value }),
            Lookup::LessEq => field
                .kind
                .coerce(raw)
                .map(|value| Predicate::LessEq { field, value }),
        }
    }
}

impl<R> SearchSpec<R> {
    /// One disjunction of case-insensitive substring matches over every field.
    pub fn clause(&self, term: &str) -> Predicate<R> {
        let needle = term.to_lowercase();
        Predicate::Or(
            self.fields()
                .iter()
                .map(|field| Predicate::ContainsIgnoreCase {
                    field: *field,
                    needle: needle.clone(),
                })
                .collect(),
        )
    }
}

/// Translate raw parameters into a predicate.
///
/// Clauses are conjoined in this order: plain field filters, the free-text
/// search, then range filters. Blank values, unknown keys and values that do
/// not coerce to the field's type are ignored.
pub fn build_predicate<R>(
    params: &QueryParams,
    filter_spec: &FilterSpec<R>,
    search_spec: &SearchSpec<R>,
) -> Predicate<R> {
    let mut clauses = Vec::new();

    let (ranges, filters): (Vec<&FilterEntry<R>>, Vec<&FilterEntry<R>>) = filter_spec
        .entries()
        .iter()
        .partition(|entry| entry.lookup.is_range());

    push_filter_clauses(&mut clauses, params, &filters);

    if let Some(term) = params.search_term()
        && !search_spec.is_empty()
    {
        clauses.push(search_spec.clause(term));
    }

    push_filter_clauses(&mut clauses, params, &ranges);

    Predicate::And(clauses)
}

fn push_filter_clauses<R>(
    clauses: &mut Vec<Predicate<R>>,
    params: &QueryParams,
    entries: &[&FilterEntry<R>],
) {
    for entry in entries {
        let Some(raw) = params.get(entry.param) else {
            continue;
        };

        if raw.trim().is_empty() {
            continue;
        }

        match entry.clause(raw) {
            Some(clause) => clauses.push(clause),
            None => debug!(
                param = entry.param,
                value = raw,
                "ignoring filter value that does not match the field type"
            ),
        }
    }
}
