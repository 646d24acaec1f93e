//! Sort and pagination primitives
//!
//! Pure functions applied after filtering and before response shaping.
//! `limit`/`offset` are taken as signed integers to mirror the wire types
//! of the API being mocked; negative values are a caller contract violation
//! and fail fast with `InvalidArgument` instead of being clamped.

use crate::core::error::{MockError, MockResult};
use crate::core::record::{Record, compare_values, field};

/// A bounded slice of a filtered collection plus its pagination metadata.
///
/// Invariants: `has_more == offset + limit < total` and
/// `items.len() == min(limit, max(0, total - offset))`.
#[derive(Debug, Clone)]
pub struct Page {
    pub items: Vec<Record>,
    pub total: usize,
    pub limit: i64,
    pub offset: i64,
    pub has_more: bool,
}

/// Stable sort by a field, missing values sorting lowest.
///
/// The sort expression on the wire is `Field` or `Field:desc`; callers
/// split it before getting here.
pub fn sort_records(mut records: Vec<Record>, sort_field: &str, descending: bool) -> Vec<Record> {
    records.sort_by(|a, b| {
        let ord = compare_values(field(a, sort_field), field(b, sort_field));
        if descending { ord.reverse() } else { ord }
    });
    records
}

/// Parse a `Field` / `Field:desc` sort expression and apply it.
///
/// An absent expression leaves the records in source order.
pub fn apply_order_by(records: Vec<Record>, order_by: Option<&str>) -> Vec<Record> {
    let Some(order_by) = order_by else {
        return records;
    };
    let mut parts = order_by.splitn(2, ':');
    let sort_field = parts.next().unwrap_or(order_by);
    let descending = parts
        .next()
        .is_some_and(|dir| dir.eq_ignore_ascii_case("desc"));
    sort_records(records, sort_field, descending)
}

/// Slice `[offset, offset + limit)` out of a record list.
///
/// An out-of-range offset yields an empty item list with the correct
/// `total`; `limit = 0` yields an empty page.
pub fn paginate(records: Vec<Record>, limit: i64, offset: i64) -> MockResult<Page> {
    if limit < 0 || offset < 0 {
        return Err(MockError::InvalidArgument {
            message: format!("limit and offset must be non-negative (limit={limit}, offset={offset})"),
        });
    }

    let total = records.len();
    let start = (offset as usize).min(total);
    let end = start.saturating_add(limit as usize).min(total);
    let items = records[start..end].to_vec();
    let has_more = offset.saturating_add(limit) < total as i64;

    Ok(Page {
        items,
        total,
        limit,
        offset,
        has_more,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(n: usize) -> Vec<Record> {
        (0..n).map(|i| json!({"OrderNumber": i})).collect()
    }

    #[test]
    fn test_two_page_walk() {
        let first = paginate(records(6), 3, 0).unwrap();
        assert_eq!(first.items.len(), 3);
        assert_eq!(first.total, 6);
        assert!(first.has_more);

        let second = paginate(records(6), 3, 3).unwrap();
        assert_eq!(second.items.len(), 3);
        assert_eq!(second.items[0]["OrderNumber"], json!(3));
        assert!(!second.has_more);
    }

    #[test]
    fn test_pagination_invariant() {
        for total in [0usize, 1, 5, 6, 25] {
            for limit in [0i64, 1, 3, 25] {
                for offset in [0i64, 2, 6, 100] {
                    let page = paginate(records(total), limit, offset).unwrap();
                    let expected =
                        (limit as usize).min((total as i64 - offset).max(0) as usize);
                    assert_eq!(page.items.len(), expected);
                    assert_eq!(page.has_more, offset + limit < total as i64);
                    assert_eq!(page.total, total);
                }
            }
        }
    }

    #[test]
    fn test_out_of_range_offset_is_empty_not_an_error() {
        let page = paginate(records(4), 10, 99).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total, 4);
        assert!(!page.has_more);
    }

    #[test]
    fn test_huge_limit_does_not_overflow() {
        let page = paginate(records(2), i64::MAX, 1).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total, 2);
        assert!(!page.has_more);
    }

    #[test]
    fn test_negative_input_is_invalid_argument() {
        assert!(matches!(
            paginate(records(4), -1, 0),
            Err(MockError::InvalidArgument { .. })
        ));
        assert!(matches!(
            paginate(records(4), 10, -3),
            Err(MockError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_sort_is_stable_and_missing_sorts_lowest() {
        let input = vec![
            json!({"Name": "b", "Tag": 1}),
            json!({"Tag": 2}),
            json!({"Name": "a", "Tag": 3}),
            json!({"Tag": 4}),
        ];
        let sorted = sort_records(input, "Name", false);
        // The two records without Name keep their relative order, first.
        assert_eq!(sorted[0]["Tag"], json!(2));
        assert_eq!(sorted[1]["Tag"], json!(4));
        assert_eq!(sorted[2]["Name"], json!("a"));
        assert_eq!(sorted[3]["Name"], json!("b"));
    }

    #[test]
    fn test_order_by_expression() {
        let input = vec![
            json!({"CreationDate": "2024-02-01"}),
            json!({"CreationDate": "2024-03-01"}),
            json!({"CreationDate": "2024-01-01"}),
        ];
        let sorted = apply_order_by(input.clone(), Some("CreationDate:desc"));
        assert_eq!(sorted[0]["CreationDate"], json!("2024-03-01"));

        let untouched = apply_order_by(input.clone(), None);
        assert_eq!(untouched, input);
    }
}
