use dsa::search::{binary_search, interpolation_search, linear_search};

#[quickcheck]
fn linear_returns_lowest_index(xs: Vec<i8>, target: i8) -> bool {
    match linear_search(&xs, &target) {
        Some(i) => xs[i] == target && !xs[..i].contains(&target),
        None => !xs.contains(&target),
    }
}

#[quickcheck]
fn binary_finds_present_targets(xs: Vec<i32>) -> bool {
    let mut xs = xs;
    xs.sort();

    xs.iter()
        .all(|x| binary_search(&xs, x).map(|i| xs[i]) == Some(*x))
}

#[quickcheck]
fn interpolation_finds_present_targets(xs: Vec<u16>) -> bool {
    let mut xs = xs;
    xs.sort();

    xs.iter()
        .all(|x| interpolation_search(&xs, x).map(|i| xs[i]) == Some(*x))
}

#[quickcheck]
fn absent_targets_are_not_found(xs: Vec<i16>, target: i16) -> bool {
    let mut xs: Vec<_> = xs.into_iter().filter(|x| *x != target).collect();
    xs.sort();

    linear_search(&xs, &target).is_none()
        && binary_search(&xs, &target).is_none()
        && interpolation_search(&xs, &target).is_none()
}
