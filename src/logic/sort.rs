use std::cmp::Ordering;

use crate::state::{ListingItem, SortOrder, SortSpec};

/// What: Order two optional sort keys.
///
/// Inputs:
/// - `a`, `b`: Keys of two rows (`None` when the row lacks the field)
/// - `order`: Requested direction
///
/// Output:
/// - Ordering for a stable sort.
///
/// Details:
/// - Missing and NaN keys always come after defined keys, in either direction,
///   and compare equal to each other so fetch order is kept among them.
fn compare_keys(a: Option<f64>, b: Option<f64>, order: SortOrder) -> Ordering {
    let a = a.filter(|v| !v.is_nan());
    let b = b.filter(|v| !v.is_nan());
    match (a, b) {
        (Some(x), Some(y)) => {
            let ord = x.partial_cmp(&y).unwrap_or(Ordering::Equal);
            match order {
                SortOrder::Asc => ord,
                SortOrder::Desc => ord.reverse(),
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// What: Apply the client-side sort to fetched rows.
///
/// Inputs:
/// - `items`: Rows in catalog order
/// - `sort`: Active sort selection
///
/// Output:
/// - `items` unchanged when no field is active; otherwise stably sorted by the
///   field's numeric key, ties kept in catalog order.
#[must_use]
pub fn present(mut items: Vec<ListingItem>, sort: &SortSpec) -> Vec<ListingItem> {
    let Some(field) = sort.field else {
        return items;
    };
    items.sort_by(|a, b| compare_keys(a.sort_key(field), b.sort_key(field), sort.order));
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{SortField, SortOrder};
    use crate::test_utils::{artist, event, ids};

    #[test]
    /// What: Budget sort example in both directions
    ///
    /// - Input: [1:150, 2:100, 3:130]
    /// - Output: asc [2,3,1]; desc [1,3,2]
    fn budget_sort_both_directions() {
        let items = vec![
            artist(1, "Dancer", Some(4.0), Some(150.0)),
            artist(2, "Dancer", Some(4.0), Some(100.0)),
            artist(3, "Dancer", Some(4.0), Some(130.0)),
        ];
        let asc = present(items.clone(), &SortSpec::by(SortField::Budget));
        assert_eq!(ids(&asc), vec![2, 3, 1]);
        let desc = present(
            items,
            &SortSpec {
                field: Some(SortField::Budget),
                order: SortOrder::Desc,
            },
        );
        assert_eq!(ids(&desc), vec![1, 3, 2]);
    }

    #[test]
    /// What: No active field is the identity
    fn unsorted_is_identity() {
        let items = vec![
            event(3, "Concert", Some(90.0), Some(700.0)),
            event(1, "Workshop", Some(10.0), Some(300.0)),
            event(2, "Concert", None, None),
        ];
        let out = present(items.clone(), &SortSpec::default());
        assert_eq!(out, items);
    }

    #[test]
    /// What: Ties keep catalog order in both directions
    fn ties_keep_fetch_order() {
        let items = vec![
            artist(5, "Singer", Some(4.5), Some(100.0)),
            artist(6, "Singer", Some(4.9), Some(100.0)),
            artist(7, "Singer", Some(4.5), Some(100.0)),
        ];
        let asc = present(items.clone(), &SortSpec::by(SortField::Budget));
        assert_eq!(ids(&asc), vec![5, 6, 7]);
        let desc = present(
            items,
            &SortSpec {
                field: Some(SortField::Rating),
                order: SortOrder::Desc,
            },
        );
        assert_eq!(ids(&desc), vec![6, 5, 7]);
    }

    #[test]
    /// What: Missing and NaN keys sort last in both directions, in fetch order
    fn missing_keys_sort_last() {
        let items = vec![
            event(1, "Concert", None, Some(1.0)),
            event(2, "Concert", Some(50.0), Some(1.0)),
            event(3, "Concert", Some(f64::NAN), Some(1.0)),
            event(4, "Concert", Some(80.0), Some(1.0)),
        ];
        let asc = present(items.clone(), &SortSpec::by(SortField::Popularity));
        assert_eq!(ids(&asc), vec![2, 4, 1, 3]);
        let desc = present(
            items,
            &SortSpec {
                field: Some(SortField::Popularity),
                order: SortOrder::Desc,
            },
        );
        assert_eq!(ids(&desc), vec![4, 2, 1, 3]);
    }

    #[test]
    /// What: Sorting artists by a field they lack keeps catalog order
    fn foreign_field_keeps_order() {
        let items = vec![
            artist(9, "Drummer", Some(4.1), Some(110.0)),
            artist(8, "Dancer", Some(4.2), Some(120.0)),
        ];
        let out = present(items, &SortSpec::by(SortField::Popularity));
        assert_eq!(ids(&out), vec![9, 8]);
    }
}
