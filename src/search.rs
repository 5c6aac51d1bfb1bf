//! Searching and scanning plain slices. Nothing here touches a tree; these are the baselines the
//! tree's `O(height)` lookups are measured against.

use std::cmp::Ordering;
use std::fmt;

/// How a search went: whether the sought item turned up and how many comparisons it took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome<'a, T> {
    /// The item searched for.
    pub sought: &'a T,
    /// Whether it was found.
    pub found: bool,
    /// Comparisons made before stopping.
    pub attempts: usize,
}

impl<T> fmt::Display for SearchOutcome<'_, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.found {
            write!(f, "Found '{}' after {} attempts", self.sought, self.attempts)
        } else {
            write!(f, "'{}' not found after {} attempts", self.sought, self.attempts)
        }
    }
}

/// Compares `sought` against each item from the front until one matches.
///
/// # Examples
///
/// ```
/// use ordered_tree::search::linear_search;
///
/// let outcome = linear_search(&7, &[3, 9, 7, 1]);
/// assert_eq!(outcome.to_string(), "Found '7' after 3 attempts");
///
/// let outcome = linear_search(&4, &[3, 9, 7, 1]);
/// assert_eq!(outcome.to_string(), "'4' not found after 4 attempts");
/// ```
pub fn linear_search<'a, T>(sought: &'a T, items: &[T]) -> SearchOutcome<'a, T>
where
    T: PartialEq,
{
    let position = items.iter().position(|item| item == sought);
    SearchOutcome {
        sought,
        found: position.is_some(),
        attempts: position.map_or(items.len(), |i| i + 1),
    }
}

/// Sorts a copy of `items` and halves it around its middle until `sought` is hit or nothing is
/// left.
///
/// # Examples
///
/// ```
/// use ordered_tree::search::binary_search;
///
/// let outcome = binary_search(&4, &[7, 1, 4, 9, 3]);
/// assert!(outcome.found);
/// assert_eq!(outcome.attempts, 1);
///
/// assert!(!binary_search(&5, &[7, 1, 4, 9, 3]).found);
/// ```
pub fn binary_search<'a, T>(sought: &'a T, items: &[T]) -> SearchOutcome<'a, T>
where
    T: Ord,
{
    let mut sorted: Vec<&T> = items.iter().collect();
    sorted.sort();

    let mut window = &sorted[..];
    let mut attempts = 0;
    while !window.is_empty() {
        attempts += 1;
        let mid = window.len() / 2;
        match window[mid].cmp(sought) {
            Ordering::Equal => {
                return SearchOutcome {
                    sought,
                    found: true,
                    attempts,
                }
            }
            Ordering::Greater => window = &window[..mid],
            Ordering::Less => window = &window[mid + 1..],
        }
    }
    SearchOutcome {
        sought,
        found: false,
        attempts,
    }
}

/// The best gain from buying at one price and selling at the next. `None` with fewer than two
/// prices. The result is negative when prices only fall. Gains are computed in `i128` so that
/// any pair of `i64` prices fits.
///
/// # Examples
///
/// ```
/// use ordered_tree::search::max_profit;
///
/// assert_eq!(max_profit(&[128, 97, 121, 123, 98, 97, 105]), Some(24));
/// assert_eq!(max_profit(&[5, 3]), Some(-2));
/// assert_eq!(max_profit(&[5]), None);
/// ```
pub fn max_profit(prices: &[i64]) -> Option<i128> {
    prices
        .windows(2)
        .map(|pair| i128::from(pair[1]) - i128::from(pair[0]))
        .max()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_search_empty() {
        let outcome = linear_search(&1, &[]);
        assert!(!outcome.found);
        assert_eq!(outcome.attempts, 0);
    }

    #[test]
    fn binary_search_takes_logarithmic_attempts() {
        let items: Vec<u32> = (0..1024).rev().collect();
        for sought in [0, 1, 511, 512, 1023] {
            let outcome = binary_search(&sought, &items);
            assert!(outcome.found, "{sought}");
            assert!(outcome.attempts <= 11, "{sought} took {}", outcome.attempts);
        }
        let outcome = binary_search(&2048, &items);
        assert!(!outcome.found);
        assert!(outcome.attempts <= 11);
    }

    #[test]
    fn binary_search_single_item() {
        assert!(binary_search(&3, &[3]).found);
        assert_eq!(
            binary_search(&2, &[3]).to_string(),
            "'2' not found after 1 attempts"
        );
    }

    #[test]
    fn max_profit_zero_gain() {
        assert_eq!(max_profit(&[4, 4, 2]), Some(0));
        assert_eq!(max_profit(&[]), None);
    }

    #[test]
    fn max_profit_at_the_extremes() {
        let span = i128::from(i64::MAX) - i128::from(i64::MIN);
        assert_eq!(max_profit(&[i64::MIN, i64::MAX]), Some(span));
        assert_eq!(max_profit(&[i64::MAX, i64::MIN]), Some(-span));
        assert_eq!(max_profit(&[i64::MAX, i64::MIN, 0]), Some(-i128::from(i64::MIN)));
    }

    quickcheck::quickcheck! {
        fn searches_agree_with_contains(xs: Vec<i8>, sought: i8) -> bool {
            let expected = xs.contains(&sought);
            linear_search(&sought, &xs).found == expected
                && binary_search(&sought, &xs).found == expected
        }
    }
}
