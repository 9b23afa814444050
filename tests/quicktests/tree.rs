use ordered_tree::OrderedTree;

use quickcheck_macros::quickcheck;
use std::collections::{BTreeSet, HashSet};

/// Builds a tree by inserting `xs` in order.
fn build(xs: &[i8]) -> OrderedTree<i8> {
    xs.iter().copied().collect()
}

#[quickcheck]
fn in_order_is_sorted_and_deduplicated(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let expected: BTreeSet<_> = xs.into_iter().collect();

    tree.in_order().copied().eq(expected)
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = build(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn reinserting_changes_nothing(xs: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    let before: Vec<_> = tree.in_order().copied().collect();
    let depth = tree.depth();

    for x in &xs {
        tree.insert(*x);
    }

    tree.in_order().copied().eq(before) && tree.depth() == depth
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !tree.contains(x))
        && still_present.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn delete_changes_count_by_at_most_one(xs: Vec<i8>, x: i8) -> bool {
    let mut tree = build(&xs);
    let before = tree.in_order().count();
    let present = tree.contains(&x);

    let deleted = tree.delete(&x);
    let after = tree.in_order().count();

    match deleted {
        Some(v) => present && v == x && after == before - 1,
        None => !present && after == before,
    }
}

#[quickcheck]
fn depth_bounds(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let n = tree.len();

    if n == 0 {
        tree.depth() == 0
    } else {
        1 <= tree.depth() && tree.depth() <= n
    }
}

#[quickcheck]
fn min_and_max_match_traversal(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    tree.min() == tree.in_order().next() && tree.max() == tree.in_order().last()
}
