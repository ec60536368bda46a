use dsa_tour::bst::{in_order, Node};

use quickcheck_macros::quickcheck;

/// Builds a tree rooted at the first value, or nothing at all.
fn build(xs: &[i16]) -> Option<Node<i16>> {
    let (first, rest) = xs.split_first()?;
    let mut root = Node::new(*first);
    for x in rest {
        root.insert(*x);
    }

    Some(root)
}

#[test]
fn scenario_ten_five_fifteen_twelve() {
    let root = build(&[10, 5, 15, 12]).unwrap();

    assert_eq!(root.iter().copied().collect::<Vec<_>>(), [5, 10, 12, 15]);
}

#[quickcheck]
fn traversal_is_sorted_multiset(xs: Vec<i16>) -> bool {
    let tree = build(&xs);
    let mut sorted = xs;
    sorted.sort();

    in_order(tree.as_ref()).copied().collect::<Vec<_>>() == sorted
}

#[quickcheck]
fn traversal_restarts(xs: Vec<i16>) -> bool {
    match build(&xs) {
        Some(tree) => tree.iter().eq(tree.iter()),
        None => true,
    }
}

#[quickcheck]
fn visiting_matches_iterating(xs: Vec<i16>) -> bool {
    match build(&xs) {
        Some(tree) => {
            let mut visited = Vec::new();
            tree.for_each_in_order(|x| visited.push(*x));
            visited.iter().eq(tree.iter())
        }
        None => true,
    }
}

#[quickcheck]
fn duplicates_never_go_left(x: i16, copies: u8) -> bool {
    let mut root = Node::new(x);
    for _ in 0..copies % 32 {
        root.insert(x);
    }

    root.left().is_none() && root.height() == root.len() && root.len() == (copies % 32) as usize + 1
}
