use std::collections::BTreeSet;

use graphgen::{generate, GenerateError, GenerationParameters};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rstest::rstest;

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[rstest]
#[case(2, 3)]
#[case(3, 2)]
#[case(17, 3)]
#[case(100, 3)]
#[case(200, 3)]
fn node_count_matches_num_records(#[case] num_records: usize, #[case] max: usize) {
    let params = GenerationParameters::new()
        .with_num_records(num_records)
        .with_connections(2, max);
    let g = generate(&params, &mut rng(num_records as u64)).expect("valid parameters");
    assert_eq!(g.node_count(), num_records);
    assert_eq!(g.nodes().count(), num_records);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(201)]
#[case(10_000)]
fn num_records_out_of_range_is_rejected(#[case] num_records: usize) {
    let params = GenerationParameters::new().with_num_records(num_records);
    let err = generate(&params, &mut rng(0)).expect_err("out of range");
    assert!(matches!(
        err,
        GenerateError::ParameterRange {
            parameter: "num_records",
            ..
        }
    ));
    assert!(err.to_string().contains("must be between 2 and 200"));
}

#[test]
fn min_above_max_is_rejected() {
    let params = GenerationParameters::new().with_connections(4, 3);
    let err = generate(&params, &mut rng(0)).expect_err("min > max");
    assert!(matches!(err, GenerateError::ParameterRange { .. }));
}

#[test]
fn more_targets_than_nodes_is_impossible() {
    let params = GenerationParameters::new()
        .with_num_records(5)
        .with_connections(2, 10);
    let err = generate(&params, &mut rng(0)).expect_err("10 > 4 targets");
    assert_eq!(
        err,
        GenerateError::ImpossibleConstraint {
            max_connections: 10,
            available: 4
        }
    );
}

#[test]
fn max_connections_equal_to_other_nodes_is_allowed() {
    let params = GenerationParameters::new()
        .with_num_records(5)
        .with_multi_connection_ratio(1.0)
        .with_connections(4, 4);
    let g = generate(&params, &mut rng(1)).expect("4 targets exist");
    assert!(g.nodes().all(|n| g.out_degree(n) == 4));
}

#[rstest]
#[case(2, 3)]
#[case(1, 5)]
#[case(2, 4)]
fn multi_nodes_respect_degree_bounds(#[case] min: usize, #[case] max: usize) {
    let params = GenerationParameters::new()
        .with_num_records(100)
        .with_multi_connection_ratio(0.8)
        .with_connections(min, max);
    let g = generate(&params, &mut rng(42)).expect("valid");

    assert_eq!(g.multi_nodes().count(), 80);
    for node in g.nodes() {
        let degree = g.out_degree(node);
        if g.is_multi(node) {
            assert!((min..=max).contains(&degree), "node {node} has {degree}");
            assert!(degree > 1);
        } else {
            assert_eq!(degree, 1);
        }
    }
    let with_many = g.nodes().filter(|&n| g.out_degree(n) > 1).count();
    assert_eq!(with_many, 80);
}

#[test]
fn no_self_loops_or_duplicate_targets() {
    let params = GenerationParameters::new()
        .with_num_records(60)
        .with_connections(3, 7);
    for seed in 0..20 {
        let g = generate(&params, &mut rng(seed)).expect("valid");
        for node in g.nodes() {
            let targets: Vec<_> = g.targets(node).collect();
            assert!(!targets.contains(&node));
            let unique: BTreeSet<_> = targets.iter().collect();
            assert_eq!(unique.len(), targets.len());
        }
    }
}

#[test]
fn two_nodes_yield_a_mutual_pair() {
    let g = generate(&GenerationParameters::new().with_num_records(2), &mut rng(8))
        .expect("two nodes are valid");
    assert_eq!(g.node_count(), 2);
    assert_eq!(g.connections()[&0], vec![1]);
    assert_eq!(g.connections()[&1], vec![0]);
    assert!(g.nodes().all(|n| g.out_degree(n) <= 3));
}

#[test]
fn full_ratio_with_fixed_degree_gives_exact_edge_count() {
    let params = GenerationParameters::new()
        .with_num_records(10)
        .with_multi_connection_ratio(1.0)
        .with_connections(2, 2);
    let g = generate(&params, &mut rng(3)).expect("valid");
    assert!(g.nodes().all(|n| g.out_degree(n) == 2));
    assert_eq!(g.edge_count(), 20);
}

#[test]
fn same_seed_same_graph() {
    let params = GenerationParameters::default();
    let a = generate(&params, &mut rng(2024)).expect("valid");
    let b = generate(&params, &mut rng(2024)).expect("valid");
    assert_eq!(a, b);
}

#[test]
fn three_nodes_with_default_ratio() {
    let params = GenerationParameters::new()
        .with_num_records(3)
        .with_connections(2, 2);
    let g = generate(&params, &mut rng(5)).expect("valid");
    assert_eq!(g.node_count(), 3);
    assert_eq!(g.multi_nodes().count(), 2);
}

#[test]
fn three_nodes_with_default_bounds_is_impossible() {
    let params = GenerationParameters::new().with_num_records(3);
    let err = generate(&params, &mut rng(5)).expect_err("max_connections 3 > 2 other nodes");
    assert_eq!(
        err,
        GenerateError::ImpossibleConstraint {
            max_connections: 3,
            available: 2,
        }
    );
}

#[test]
fn bounds_are_ignored_without_multi_nodes() {
    // floor(5 * 0.1) == 0 multi nodes, so max 10 > 4 other nodes is fine
    let params = GenerationParameters::new()
        .with_num_records(5)
        .with_multi_connection_ratio(0.1)
        .with_connections(2, 10);
    let g = generate(&params, &mut rng(9)).expect("no multi nodes requested");
    assert_eq!(g.multi_nodes().count(), 0);
    assert!(g.nodes().all(|n| g.out_degree(n) == 1));

    let params = GenerationParameters::new()
        .with_num_records(5)
        .with_multi_connection_ratio(0.0)
        .with_connections(1, 1);
    let g = generate(&params, &mut rng(9)).expect("no multi nodes requested");
    assert_eq!(g.edge_count(), 5);
}

#[test]
fn bounds_apply_once_a_multi_node_is_requested() {
    let params = GenerationParameters::new()
        .with_num_records(5)
        .with_multi_connection_ratio(0.4)
        .with_connections(1, 1);
    let err = generate(&params, &mut rng(9)).expect_err("max_connections below 2");
    assert_eq!(err.parameter(), "max_connections");

    let params = GenerationParameters::new()
        .with_num_records(5)
        .with_multi_connection_ratio(0.4)
        .with_connections(2, 10);
    let err = generate(&params, &mut rng(9)).expect_err("max_connections above 4");
    assert!(matches!(err, GenerateError::ImpossibleConstraint { available: 4, .. }));
}
