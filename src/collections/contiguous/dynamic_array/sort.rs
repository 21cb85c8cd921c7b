use std::cmp::Ordering;
use std::mem;

/// Sorts `items` in place with a quicksort using the Lomuto partition scheme, where the pivot of
/// every range is its last element. Not stable.
///
/// Recursion only descends into the smaller partition, the larger one is handled by the loop, so
/// the stack depth stays logarithmic even when the partitions are as uneven as they get.
pub(crate) fn quicksort<T, F>(mut items: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    while items.len() > 1 {
        let pivot = partition(items, compare);

        let (low, rest) = mem::take(&mut items).split_at_mut(pivot);
        let (_, high) = rest.split_at_mut(1);

        if low.len() < high.len() {
            quicksort(low, &mut *compare);
            items = high;
        } else {
            quicksort(high, &mut *compare);
            items = low;
        }
    }
}

/// Partitions `items` around its last element and returns the pivot's final index. Everything
/// before it compares less than or equal to the pivot, everything after it compares greater.
fn partition<T, F>(items: &mut [T], compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let high = items.len() - 1;
    let mut store = 0;

    for scan in 0..high {
        if compare(&items[scan], &items[high]) != Ordering::Greater {
            items.swap(store, scan);
            store += 1;
        }
    }

    items.swap(store, high);
    store
}
