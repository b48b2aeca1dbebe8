use super::entities::QuerySchema;

/// A record type the query builder can filter, search, order and paginate.
///
/// The schema is built once per type and shared by every request.
pub trait Queryable: Sized + 'static {
    fn schema() -> &'static QuerySchema<Self>;
}
