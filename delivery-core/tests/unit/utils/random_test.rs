use super::*;

#[test]
fn can_reproduce_values_with_same_seed() {
    let first = DefaultRandom::new_with_seed(42);
    let second = DefaultRandom::new_with_seed(42);

    assert_eq!(first.sample_indices(100, 5), second.sample_indices(100, 5));
    assert_eq!(first.uniform_real(0., 1.), second.uniform_real(0., 1.));
    assert_eq!(first.shuffled_indices(10), second.shuffled_indices(10));
}

parameterized_test! {can_sample_distinct_indices, (length, amount, expected), {
    let random = DefaultRandom::new_with_seed(7);

    let mut indices = random.sample_indices(length, amount);
    assert_eq!(indices.len(), expected);
    assert!(indices.iter().all(|&idx| idx < length));

    indices.sort();
    indices.dedup();
    assert_eq!(indices.len(), expected);
}}

can_sample_distinct_indices! {
    case01_some: (10, 3, 3),
    case02_all: (5, 5, 5),
    case03_more_than_length: (3, 5, 3),
    case04_none: (3, 0, 0),
}

#[test]
fn can_shuffle_indices() {
    let random = DefaultRandom::new_with_seed(1);

    let mut indices = random.shuffled_indices(20);
    indices.sort();

    assert_eq!(indices, (0..20).collect::<Vec<_>>());
}

#[test]
fn can_produce_values_within_range() {
    let random = DefaultRandom::new_with_seed(3);

    (0..100).for_each(|_| {
        let real = random.uniform_real(0.4, 0.7);
        assert!((0.4..0.7).contains(&real));
    });

    assert_eq!(random.uniform_real(1., 1.), 1.);
}
