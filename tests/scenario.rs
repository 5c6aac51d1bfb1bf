use ordered_tree::sequence::same_bst;
use ordered_tree::shape::{self, OrderStatistic};
use ordered_tree::{traversal, KeyError, OrderedTree};

fn seven_node_tree() -> OrderedTree<i32, i32> {
    let _ = pretty_env_logger::try_init();

    let mut tree = OrderedTree::new();
    for key in [25, 15, 50, 10, 24, 35, 70] {
        tree.insert(key, key);
    }
    tree
}

fn owned(values: Vec<&i32>) -> Vec<i32> {
    values.into_iter().copied().collect()
}

#[test]
fn seven_node_walks() {
    let tree = seven_node_tree();

    assert_eq!(owned(traversal::pre_order(tree.root())), [25, 15, 10, 24, 50, 35, 70]);
    assert_eq!(owned(traversal::in_order(tree.root())), [10, 15, 24, 25, 35, 50, 70]);
    assert_eq!(owned(traversal::post_order(tree.root())), [10, 24, 15, 35, 70, 50, 25]);
    assert_eq!(owned(traversal::level_order(tree.root())), [25, 15, 50, 10, 24, 35, 70]);
}

#[test]
fn seven_node_shape() {
    let tree = seven_node_tree();

    assert_eq!(shape::height(tree.root()), 3);
    assert!(shape::is_balanced(tree.root()));
    assert!(shape::is_valid_bst(tree.root()));
    match shape::third_largest(tree.root()) {
        OrderStatistic::Found(node) => assert_eq!(node.key(), Some(&35)),
        outcome => panic!("unexpected {outcome}"),
    }
}

#[test]
fn tearing_down_the_seven_node_tree() {
    let mut tree = seven_node_tree();

    for key in [25, 10, 70, 15, 50, 24, 35] {
        let before = owned(traversal::in_order(tree.root()));
        assert_eq!(tree.remove(&key), Ok(key));
        assert_eq!(tree.find(&key), Err(KeyError));

        let mut expected = before;
        expected.retain(|k| *k != key);
        assert_eq!(owned(traversal::in_order(tree.root())), expected);
        assert!(shape::is_valid_bst(tree.root()));
    }

    assert!(tree.is_empty());
    assert_eq!(shape::height(tree.root()), 0);
    assert!(traversal::pre_order(tree.root()).is_empty());
    assert_eq!(
        shape::third_largest(tree.root()).to_string(),
        "fewer than 3 nodes (tree has 0)"
    );
}

#[test]
fn key_error_reads_well() {
    let tree = OrderedTree::<&str, u8>::new();
    let err = tree.find(&"missing").unwrap_err();

    assert_eq!(err.to_string(), "key not present in tree");
}

#[test]
fn balanced_versus_sorted_insertion() {
    let mut balanced = OrderedTree::new();
    for key in [4, 2, 6, 1, 3, 5, 7] {
        balanced.insert(key, ());
    }
    let mut sorted = OrderedTree::new();
    for key in 1..=7 {
        sorted.insert(key, ());
    }

    assert!(shape::is_balanced(balanced.root()));
    assert!(!shape::is_balanced(sorted.root()));
    assert_eq!(shape::height(sorted.root()), 7);
}

#[test]
fn insertion_orders() {
    assert!(same_bst(&[5, 3, 7, 1, 4], &[5, 3, 1, 4, 7]));
    assert!(same_bst(&[5, 3, 7], &[5, 7, 3]));
    assert!(!same_bst(&[5, 3, 7], &[5, 3]));
    assert!(!same_bst(&[5, 3, 7], &[3, 5, 7]));
}

#[test]
fn parents_lead_back_to_the_root() {
    let tree = seven_node_tree();
    let mut node = tree
        .root()
        .right()
        .and_then(|fifty| fifty.left())
        .expect("35 hangs left of 50");
    assert_eq!(node.key(), Some(&35));

    let mut climbed = Vec::new();
    while let Some(parent) = node.parent() {
        climbed.extend(parent.key().copied());
        node = parent;
    }
    assert!(node.is_root());
    assert_eq!(climbed, [50, 25]);
}
