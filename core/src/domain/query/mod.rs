//! Dynamic query building over in-memory record snapshots.
//!
//! Raw string parameters are turned into a [`Predicate`], the matching records
//! are ordered with [`apply_ordering`] and sliced with [`paginate`]. Malformed
//! or unknown parameters never fail a query, they are ignored.

pub mod entities;
pub mod ordering;
pub mod pagination;
pub mod ports;
pub mod predicate;
pub mod services;
pub mod value_objects;

#[cfg(test)]
pub(crate) mod testing;

pub use entities::{
    Field, FieldKind, FieldValue, FilterEntry, FilterSpec, Lookup, OrderKey, OrderSpec, Page,
    QuerySchema, SearchSpec,
};
pub use ordering::apply_ordering;
pub use pagination::paginate;
pub use ports::Queryable;
pub use predicate::{Predicate, build_predicate};
pub use services::{run_query, select};
pub use value_objects::{
    PageRequest, PaginationParams, QueryParams, SortDirection, SortParams, SortSpec,
};
