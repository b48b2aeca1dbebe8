use super::entities::Page;
use super::value_objects::PageRequest;

/// Cut one page out of an ordered record stream.
///
/// The stream is consumed once; only the records of the requested window are
/// kept, the rest are counted.
pub fn paginate<R, I>(records: I, request: PageRequest) -> Page<R>
where
    I: IntoIterator<Item = R>,
{
    let start = request.offset();
    let end = start.saturating_add(request.page_size());

    let mut items = Vec::with_capacity(request.page_size().min(64));
    let mut total_count = 0usize;

    for record in records {
        if (start..end).contains(&total_count) {
            items.push(record);
        }
        total_count += 1;
    }

    Page {
        items,
        total_count,
        page: request.page(),
        page_size: request.page_size(),
        has_next: end < total_count,
        has_previous: request.page() > 1,
    }
}
