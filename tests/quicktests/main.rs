use ordered_tree::{shape, traversal, KeyError, OrderedTree};

use std::collections::HashSet;

fn build(xs: &[i8]) -> OrderedTree<i8, i8> {
    let mut tree = OrderedTree::new();
    for x in xs {
        tree.insert(*x, *x);
    }
    tree
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let tree = build(&xs);

        xs.iter().all(|x| tree.find(x) == Ok(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree = build(&xs);
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.find(x) == Err(KeyError))
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = build(&xs);
        for delete in &deletes {
            // We may have inserted the same value multiple times - delete each one.
            while tree.remove(delete).is_ok() {}
        }

        let mut still_present = xs;
        still_present.retain(|x| !deletes.contains(x));

        deletes.iter().all(|x| tree.find(x) == Err(KeyError))
            && still_present.iter().all(|x| tree.find(x).is_ok())
            && tree.len() == still_present.len()
    }
}

quickcheck::quickcheck! {
    fn removal_drops_one_occurrence(xs: Vec<i8>, pick: usize) -> bool {
        if xs.is_empty() {
            return true;
        }
        let mut tree = build(&xs);
        let before: Vec<i8> = traversal::in_order(tree.root()).into_iter().copied().collect();
        let key = xs[pick % xs.len()];

        let removed = tree.remove(&key);
        let after: Vec<i8> = traversal::in_order(tree.root()).into_iter().copied().collect();

        let mut expected = before;
        let at = expected.iter().position(|x| *x == key).unwrap();
        expected.remove(at);

        removed == Ok(key) && after == expected && shape::is_valid_bst(tree.root())
    }
}

quickcheck::quickcheck! {
    fn unique_removal_makes_key_unreachable(xs: Vec<i8>, pick: usize) -> bool {
        let unique: Vec<i8> = {
            let mut seen = HashSet::new();
            xs.into_iter().filter(|x| seen.insert(*x)).collect()
        };
        if unique.is_empty() {
            return true;
        }
        let mut tree = build(&unique);
        let key = unique[pick % unique.len()];

        tree.remove(&key).is_ok() && tree.find(&key) == Err(KeyError) && {
            tree.insert(key, key);
            tree.find(&key) == Ok(&key)
        }
    }
}

quickcheck::quickcheck! {
    fn increasing_keys_build_a_chain(n: u8) -> bool {
        let n = usize::from(n % 64);
        let mut tree = OrderedTree::new();
        for key in 0..n {
            tree.insert(key, ());
        }

        shape::height(tree.root()) == n && (n < 3 || !shape::is_balanced(tree.root()))
    }
}
