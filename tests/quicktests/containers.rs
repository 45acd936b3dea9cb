use dsa::{BinarySearchTree, LinkedList, Queue, Stack};

use std::collections::{BTreeMap, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a count map.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same multiset of elements in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut BinarySearchTree<T>, counts: &mut BTreeMap<T, usize>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                bst.insert(x.clone());
                *counts.entry(x.clone()).or_default() += 1;
            }
            Op::Remove(x) => {
                let deleted = bst.delete(x);
                match counts.get_mut(x) {
                    Some(count) => {
                        assert!(deleted.as_ref() == Some(x));
                        *count -= 1;
                        if *count == 0 {
                            counts.remove(x);
                        }
                    }
                    None => assert!(deleted.is_none()),
                }
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = BinarySearchTree::new();
    let mut counts = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut counts);
    let expected = counts
        .iter()
        .flat_map(|(x, count)| std::iter::repeat(x).take(*count));
    tree.inorder().eq(expected) && counts.keys().all(|x| tree.contains(x))
}

#[quickcheck]
fn inorder_sorts(xs: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.iter().copied().collect();
    let mut sorted = xs;
    sorted.sort();

    tree.inorder().eq(sorted.iter()) && tree.len() == sorted.len()
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn list_with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut list: LinkedList<_> = xs.iter().copied().collect();
    for delete in &deletes {
        list.delete_node(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // Each delete removes at most the first remaining occurrence.
        if let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.remove(pos);
        }
    }

    list.iter().eq(still_present.iter()) && list.len() == still_present.len()
}

#[quickcheck]
fn list_insert_after_every_node(xs: Vec<i8>) -> bool {
    let mut list: LinkedList<_> = xs.iter().copied().collect();

    // Double every element by splicing a copy in right after it.
    let mut current = list.head();
    while let Some(id) = current {
        let copy = list.get(id).copied();
        current = copy
            .and_then(|x| list.insert(Some(id), x))
            .and_then(|inserted| list.next(inserted));
    }

    let doubled: Vec<_> = xs.iter().flat_map(|x| [*x, *x]).collect();
    list.iter().eq(doubled.iter())
}

#[quickcheck]
fn stack_is_lifo(xs: Vec<i8>) -> bool {
    let mut stack: Stack<_> = xs.iter().copied().collect();
    let popped: Vec<_> = std::iter::from_fn(|| stack.pop()).collect();

    popped.into_iter().eq(xs.into_iter().rev()) && stack.is_empty()
}

#[quickcheck]
fn queue_is_fifo(xs: Vec<i8>) -> bool {
    let mut queue: Queue<_> = xs.iter().copied().collect();
    let dequeued: Vec<_> = std::iter::from_fn(|| queue.dequeue()).collect();

    dequeued == xs && queue.is_empty()
}
