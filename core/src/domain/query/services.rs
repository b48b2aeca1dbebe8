use tracing::{debug, instrument};

use crate::domain::common::PaginationConfig;

use super::entities::Page;
use super::ordering::apply_ordering;
use super::pagination::paginate;
use super::ports::Queryable;
use super::predicate::build_predicate;
use super::value_objects::QueryParams;

/// Filter, search and order `records` with the schema of `R`.
#[instrument(skip_all, fields(record_count = records.len()))]
pub fn select<R: Queryable>(records: Vec<R>, params: &QueryParams) -> Vec<R> {
    let schema = R::schema();
    let predicate = build_predicate(params, &schema.filter, &schema.search);

    let matching: Vec<R> = if predicate.is_identity() {
        records
    } else {
        records
            .into_iter()
            .filter(|record| predicate.matches(record))
            .collect()
    };

    debug!(matching = matching.len(), "records selected");

    apply_ordering(matching, &params.ordering.sorts, &schema.order)
}

/// `select` followed by pagination.
#[instrument(skip_all, fields(record_count = records.len()))]
pub fn run_query<R: Queryable>(
    records: Vec<R>,
    params: &QueryParams,
    config: &PaginationConfig,
) -> Page<R> {
    let request = params.pagination.resolve(config);
    let page = paginate(select(records, params), request);

    debug!(
        total_count = page.total_count,
        page = page.page,
        page_size = page.page_size,
        "query page built"
    );

    page
}
