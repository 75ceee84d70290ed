use linked_bst::{OrderedTree, TreeError};

use std::collections::{BTreeSet, HashSet};

/// Adds every value in `xs` and then tries to remove every value in
/// `removes`, returning the tree and how many removals succeeded.
fn build_then_remove(xs: &[i8], removes: &[i8]) -> (OrderedTree<i8>, usize) {
    let mut tree: OrderedTree<i8> = xs.iter().copied().collect();
    let mut removed = 0;
    for remove in removes {
        let len = tree.len();
        match tree.remove(remove) {
            Ok(value) => {
                assert_eq!(value, *remove);
                removed += 1;
            }
            Err(TreeError::NotFound) => assert_eq!(tree.len(), len),
        }
    }

    (tree, removed)
}

fn sorted_values<'a>(iter: impl Iterator<Item = &'a i8>) -> Vec<i8> {
    let mut values: Vec<i8> = iter.copied().collect();
    values.sort_unstable();
    values
}

fn is_sorted<T: Ord>(xs: &[T]) -> bool {
    xs.windows(2).all(|pair| pair[0] <= pair[1])
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<i8> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.find(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: OrderedTree<i8> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, removes: Vec<i8>) -> bool {
    let (tree, removed) = build_then_remove(&xs, &removes);

    let mut still_present = xs.clone();
    for remove in &removes {
        // Each successful removal takes out a single copy.
        if let Some(pos) = still_present.iter().position(|x| x == remove) {
            still_present.swap_remove(pos);
        }
    }
    still_present.sort_unstable();

    tree.len() == xs.len() - removed
        && tree.inorder().copied().collect::<Vec<_>>() == still_present
}

#[quickcheck]
fn inorder_stays_sorted(xs: Vec<i8>, removes: Vec<i8>) -> bool {
    let (tree, _) = build_then_remove(&xs, &removes);
    let values: Vec<_> = tree.inorder().collect();

    is_sorted(&values)
}

#[quickcheck]
fn rebalance_sorts_and_balances(xs: Vec<i16>) -> bool {
    let mut tree: OrderedTree<i16> = xs.iter().copied().collect();
    tree.rebalance();

    let mut sorted = xs.clone();
    sorted.sort_unstable();

    tree.is_balanced()
        && tree.len() == xs.len()
        && tree.inorder().copied().collect::<Vec<_>>() == sorted
}

#[quickcheck]
fn traversals_agree_on_contents(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<i8> = xs.iter().copied().collect();

    let expected = sorted_values(tree.inorder());
    expected == sorted_values(tree.preorder())
        && expected == sorted_values(tree.postorder())
        && expected == sorted_values(tree.levelorder())
}

#[quickcheck]
fn neighbours_step_through_sorted_values(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<i8> = xs.iter().copied().collect();
    let distinct: Vec<i8> = xs.into_iter().collect::<BTreeSet<_>>().into_iter().collect();

    distinct.iter().enumerate().all(|(i, x)| {
        let successor = distinct.get(i + 1);
        let predecessor = i.checked_sub(1).and_then(|i| distinct.get(i));
        tree.successor(x) == successor && tree.predecessor(x) == predecessor
    })
}

#[quickcheck]
fn range_find_matches_filter(xs: Vec<i8>, low: i8, high: i8) -> bool {
    let tree: OrderedTree<i8> = xs.iter().copied().collect();
    let mut expected: Vec<i8> = xs
        .into_iter()
        .filter(|x| low <= *x && *x <= high)
        .collect();
    expected.sort_unstable();

    tree.range_find(&low, &high).into_iter().copied().collect::<Vec<_>>() == expected
}
