use std::cmp::Ordering;

/// Returns the position of `probe` in the ascending slice `items`.
///
/// The result is the unique index `i` such that every element before `i`
/// compares less than `probe`. When `probe` is present, `items[i] == probe`;
/// otherwise `i` is the insertion point that keeps the slice ascending
/// (possibly `items.len()`).
///
/// `items` must already be ascending — this is the caller's invariant, not
/// checked here. O(log n).
pub fn insertion_point<T: Ord>(items: &[T], probe: &T) -> usize {
    let mut a = 0;
    let mut z = items.len();

    while a < z {
        let m = (a + z) / 2;
        match items[m].cmp(probe) {
            Ordering::Equal => return m,
            Ordering::Less => a = m + 1,
            Ordering::Greater => z = m,
        }
    }

    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_slice() {
        assert_eq!(insertion_point::<i32>(&[], &5), 0);
    }

    #[test]
    fn present_value_returns_its_index() {
        let s = [10, 20, 30, 40];
        assert_eq!(insertion_point(&s, &10), 0);
        assert_eq!(insertion_point(&s, &30), 2);
        assert_eq!(insertion_point(&s, &40), 3);
    }

    #[test]
    fn absent_value_returns_insertion_point() {
        let s = [10, 20, 30, 40];
        assert_eq!(insertion_point(&s, &5), 0);
        assert_eq!(insertion_point(&s, &25), 2);
        assert_eq!(insertion_point(&s, &99), 4);
    }

    #[test]
    fn single_element() {
        assert_eq!(insertion_point(&[7], &3), 0);
        assert_eq!(insertion_point(&[7], &7), 0);
        assert_eq!(insertion_point(&[7], &9), 1);
    }

    #[test]
    fn partition_property_holds_for_every_probe() {
        // Everything before the result is < probe; the result slot, when it
        // exists, is >= probe.
        let s = [2, 4, 6, 8, 10, 12];
        for v in -1..15 {
            let i = insertion_point(&s, &v);
            assert!(s[..i].iter().all(|x| *x < v), "probe {v}");
            if i < s.len() {
                assert!(s[i] >= v, "probe {v}");
            }
        }
    }

    #[test]
    fn works_for_non_integer_keys() {
        let s = ["alpha", "beta", "delta"];
        assert_eq!(insertion_point(&s, &"beta"), 1);
        // "charlie" sorts between "beta" and "delta"; "gamma" after all three.
        assert_eq!(insertion_point(&s, &"charlie"), 2);
        assert_eq!(insertion_point(&s, &"gamma"), 3);
    }
}
