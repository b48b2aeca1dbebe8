use std::cmp::Ordering;

use tracing::debug;

use super::entities::{FieldValue, OrderKey, OrderSpec};
use super::value_objects::{SortDirection, SortSpec};

/// Resolve caller-supplied sort keys against the allowed fields.
///
/// Unknown names are dropped, repeated names keep their first position.
pub fn resolve_order_keys<R>(
    order_params: &[SortSpec],
    order_spec: &OrderSpec<R>,
) -> Vec<OrderKey<R>> {
    let mut keys: Vec<OrderKey<R>> = Vec::with_capacity(order_params.len());

    for spec in order_params {
        let Some(field) = order_spec.field(&spec.field) else {
            debug!(field = %spec.field, "ignoring unknown ordering field");
            continue;
        };

        if keys.iter().any(|key| key.field.name == field.name) {
            continue;
        }

        keys.push(OrderKey {
            field,
            direction: spec.direction,
        });
    }

    keys
}

/// Stable multi-key sort of `records`.
///
/// The default ordering of `order_spec` is used only when none of
/// `order_params` names an allowed field. Records that compare equal on every key keep their input
/// order.
pub fn apply_ordering<R>(
    records: Vec<R>,
    order_params: &[SortSpec],
    order_spec: &OrderSpec<R>,
) -> Vec<R> {
    let mut keys = resolve_order_keys(order_params, order_spec);
    if keys.is_empty() {
        keys = order_spec.default_order().to_vec();
    }

    if keys.is_empty() || records.len() < 2 {
        return records;
    }

    let mut decorated: Vec<(Vec<FieldValue>, R)> = records
        .into_iter()
        .map(|record| {
            let values = keys.iter().map(|key| key.field.read(&record)).collect();
            (values, record)
        })
        .collect();

    decorated.sort_by(|(left, _), (right, _)| compare_keys(&keys, left, right));

    decorated.into_iter().map(|(_, record)| record).collect()
}

fn compare_keys<R>(keys: &[OrderKey<R>], left: &[FieldValue], right: &[FieldValue]) -> Ordering {
    keys.iter()
        .zip(left.iter().zip(right))
        .map(|(key, (left, right))| match key.direction {
            SortDirection::Asc => left.sort_cmp(right),
            SortDirection::Desc => right.sort_cmp(left),
        })
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::query::testing::{TestBook, test_books};
    use crate::domain::query::{Queryable, SortParams};
    use uuid::Uuid;

    fn order(records: Vec<TestBook>, ordering: &str) -> Vec<TestBook> {
        apply_ordering(
            records,
            &SortParams::from_string(ordering).sorts,
            &TestBook::schema().order,
        )
    }

    fn titles(records: &[TestBook]) -> Vec<&'static str> {
        records.iter().map(|book| book.title).collect()
    }

    fn book(title: &'static str, year: i64) -> TestBook {
        TestBook {
            title,
            year,
            author_id: Uuid::nil(),
            author: "Anonymous",
        }
    }

    #[test]
    fn test_descending_year_then_title() {
        let records = vec![book("B", 2019), book("A", 2020), book("C", 2020)];
        let ordered = order(records, "-year,title");
        assert_eq!(titles(&ordered), vec!["A", "C", "B"]);
        assert_eq!(
            ordered.iter().map(|book| book.year).collect::<Vec<_>>(),
            vec![2020, 2020, 2019]
        );
    }

    #[test]
    fn test_ordering_is_idempotent() {
        let once = order(test_books(), "title");
        let twice = order(once.clone(), "title");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_unknown_fields_fall_back_to_default() {
        let explicit = order(test_books(), "-year,title");
        let fallback = order(test_books(), "price,-rating");
        assert_eq!(explicit, fallback);
        assert_eq!(titles(&fallback)[0], "Book Two");
    }

    #[test]
    fn test_unknown_fields_are_dropped_not_fatal() {
        let ordered = order(test_books(), "price,title");
        assert_eq!(
            titles(&ordered),
            vec!["Book One", "Book Two", "Book Zero", "Dune", "Harry Potter"]
        );
    }

    #[test]
    fn test_reference_sorts_by_display_value() {
        let ordered = order(test_books(), "author,title");
        assert_eq!(
            ordered.iter().map(|book| book.author).collect::<Vec<_>>(),
            vec!["Author A", "Author A", "Author B", "Frank Herbert", "J.K. Rowling"]
        );
        assert_eq!(titles(&ordered)[..2], ["Book One", "Book Zero"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let records = vec![book("First", 2000), book("Second", 2000), book("Third", 1999)];
        let ordered = order(records, "-year");
        assert_eq!(titles(&ordered), vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_repeated_fields_keep_first_direction() {
        let keys = resolve_order_keys(
            &SortParams::from_string("-title,title,year").sorts,
            &TestBook::schema().order,
        );
        assert_eq!(keys.len(), 2);
        assert_eq!(keys[0].direction, SortDirection::Desc);
        assert_eq!(keys[1].field.name, "year");
    }
}
