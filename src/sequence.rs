//! Comparing insertion sequences without building trees from them.

/// Whether inserting `a` and inserting `b`, each in order into an empty
/// [`OrderedTree`][crate::OrderedTree], would produce identical trees.
///
/// The first key of a sequence becomes the root. The keys after it split, in order, into those
/// smaller than the root (the left subtree's insertion sequence) and the rest (the right
/// subtree's, since equal keys go right). Two sequences give the same tree when their roots match
/// and both pairs of partitions give the same trees in turn.
///
/// # Examples
///
/// ```
/// use ordered_tree::sequence::same_bst;
///
/// assert!(same_bst(&[5, 3, 7, 1, 4], &[5, 3, 1, 4, 7]));
/// assert!(same_bst(&[5, 3, 7], &[5, 7, 3]));
///
/// // 1 then 4 versus 4 then 1 under the 3.
/// assert!(!same_bst(&[5, 3, 1, 4], &[5, 4, 3, 1]));
/// // Different roots.
/// assert!(!same_bst(&[5, 3], &[3, 5]));
/// ```
pub fn same_bst<T>(a: &[T], b: &[T]) -> bool
where
    T: Ord,
{
    let a: Vec<&T> = a.iter().collect();
    let b: Vec<&T> = b.iter().collect();
    same_shape(&a, &b)
}

fn same_shape<T>(a: &[&T], b: &[&T]) -> bool
where
    T: Ord,
{
    if a.len() != b.len() {
        return false;
    }
    let (Some((root_a, rest_a)), Some((root_b, rest_b))) = (a.split_first(), b.split_first())
    else {
        // Both empty.
        return true;
    };
    if root_a != root_b {
        return false;
    }

    let (smaller_a, larger_a): (Vec<&T>, Vec<&T>) =
        rest_a.iter().copied().partition(|key| *key < *root_a);
    let (smaller_b, larger_b): (Vec<&T>, Vec<&T>) =
        rest_b.iter().copied().partition(|key| *key < *root_b);

    same_shape(&smaller_a, &smaller_b) && same_shape(&larger_a, &larger_b)
}
