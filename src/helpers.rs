//! General-purpose helpers over iterators.

use std::{collections::HashMap, hash::Hash, iter::Product};

/// Iterator over chunks of `length` items, the last chunk may be shorter.
pub struct Chunked<I: Iterator> {
    inner: I,
    length: usize,
}

impl<I: Iterator> Iterator for Chunked<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let chunk = self.inner.by_ref().take(self.length).collect::<Vec<_>>();
        if chunk.is_empty() {
            None
        } else {
            Some(chunk)
        }
    }
}

/// Splits `iter` into chunks of `length` items, a `length` of 0 yields no chunks.
pub fn chunked<I: IntoIterator>(iter: I, length: usize) -> Chunked<I::IntoIter> {
    Chunked {
        inner: iter.into_iter(),
        length,
    }
}

/// Groups the values of `(key, value)` pairs by key, keeping their order.
pub fn grouped<K, V, I>(pairs: I) -> HashMap<K, Vec<V>>
where
    K: Eq + Hash,
    I: IntoIterator<Item = (K, V)>,
{
    let mut groups: HashMap<K, Vec<V>> = HashMap::new();
    for (key, value) in pairs {
        groups.entry(key).or_default().push(value);
    }

    groups
}

pub fn last<I: IntoIterator>(iter: I) -> Option<I::Item> {
    iter.into_iter().last()
}

/// Product of all items, 1 for no items.
pub fn product<T, I>(iter: I) -> T
where
    T: Product<T>,
    I: IntoIterator<Item = T>,
{
    iter.into_iter().product()
}

/// Transposes rows of possibly different lengths, gaps become `None`.
pub fn transpose<T, R, I>(rows: I) -> Vec<Vec<Option<T>>>
where
    T: Clone,
    R: AsRef<[T]>,
    I: IntoIterator<Item = R>,
{
    let mut columns: Vec<Vec<Option<T>>> = Vec::new();
    for (row_ind, row) in rows.into_iter().enumerate() {
        let cells = row.as_ref();
        while columns.len() < cells.len() {
            columns.push(vec![None; row_ind]);
        }
        for (col_ind, column) in columns.iter_mut().enumerate() {
            column.push(cells.get(col_ind).cloned());
        }
    }

    columns
}

#[test]
fn test_chunked() {
    let chunks = chunked(0..5, 2).collect::<Vec<_>>();
    assert_eq!(chunks, vec![vec![0, 1], vec![2, 3], vec![4]]);
    assert_eq!(chunked(Vec::<u8>::new(), 3).count(), 0);
}

#[test]
fn test_chunked_zero_length() {
    assert_eq!(chunked(0..5, 0).count(), 0);
    assert_eq!(chunked(Vec::<i32>::new(), 3).count(), 0);
}

#[test]
fn test_grouped() {
    let groups = grouped([("A", 1), ("B", 5), ("A", 5)]);
    assert_eq!(groups["A"], vec![1, 5]);
    assert_eq!(groups["B"], vec![5]);
    assert!(!groups.contains_key("C"));
}

#[test]
fn test_last_and_product() {
    assert_eq!(last(1..=4), Some(4));
    assert_eq!(last(Vec::<i32>::new()), None);
    assert_eq!(product([1, 2, 3, 4]), 24);
    assert_eq!(product(Vec::<u64>::new()), 1);
}

#[test]
fn test_transpose() {
    let rows = [vec!['A', 'B'], vec!['C', 'D', 'E']];
    assert_eq!(
        transpose(&rows),
        vec![
            vec![Some('A'), Some('C')],
            vec![Some('B'), Some('D')],
            vec![None, Some('E')]
        ]
    );
}
