use std::collections::BTreeSet;

use log::debug;
use rand::seq::index;
use rand::Rng;

use crate::error::GenerateError;
use crate::graph::{DiGraph, Edge, NodeId};
use crate::params::{GenerationParameters, MIN_RECORDS};

/// Fewest outgoing edges a multi-connection node may have.
const MULTI_MIN_DEGREE: usize = 2;

/// Builds a random directed graph shaped by `params`.
///
/// `floor(num_records * multi_connection_ratio)` nodes, sampled uniformly,
/// receive between `max(min_connections, 2)` and `max_connections` distinct
/// targets; every other node receives exactly one. Targets never include the
/// source itself. A two-node request short-circuits to the pair `0 <-> 1`.
///
/// # Errors
/// [`GenerateError::ParameterRange`] when a parameter is out of range, and
/// [`GenerateError::ImpossibleConstraint`] when multi-connection nodes would
/// need more distinct targets than `num_records - 1`.
pub fn generate<R: Rng>(
    params: &GenerationParameters,
    rng: &mut R,
) -> Result<DiGraph, GenerateError> {
    params.validate()?;

    let n = params.num_records;
    if n == MIN_RECORDS {
        debug!("only two nodes, connecting them to each other");
        return Ok(DiGraph::from_parts(
            n,
            vec![Edge::new(0, 1), Edge::new(1, 0)],
            BTreeSet::new(),
        ));
    }

    let multi_count = params.multi_connection_count();
    if multi_count > 0 {
        check_multi_bounds(params)?;
    }

    let multi: BTreeSet<NodeId> = index::sample(rng, n, multi_count).into_iter().collect();
    let lower = params.min_connections.max(MULTI_MIN_DEGREE);

    let mut edges = Vec::with_capacity(n - multi_count + multi_count * params.max_connections);
    for source in 0..n {
        let degree = if multi.contains(&source) {
            rng.random_range(lower..=params.max_connections)
        } else {
            1
        };
        edges.extend(sample_targets(rng, n, source, degree).map(|t| Edge::new(source, t)));
    }

    debug!(
        "generated {} nodes ({} multi-connection) with {} edges",
        n,
        multi.len(),
        edges.len()
    );
    Ok(DiGraph::from_parts(n, edges, multi))
}

fn check_multi_bounds(params: &GenerationParameters) -> Result<(), GenerateError> {
    if params.max_connections < MULTI_MIN_DEGREE {
        return Err(GenerateError::range(
            "max_connections",
            format!(
                "must be at least {MULTI_MIN_DEGREE} when multi-connection nodes are requested (got {})",
                params.max_connections
            ),
        ));
    }
    let available = params.num_records - 1;
    if params.max_connections > available {
        return Err(GenerateError::ImpossibleConstraint {
            max_connections: params.max_connections,
            available,
        });
    }
    Ok(())
}

/// Draws `amount` distinct nodes from `0..n` other than `source`.
fn sample_targets<R: Rng>(
    rng: &mut R,
    n: usize,
    source: NodeId,
    amount: usize,
) -> impl Iterator<Item = NodeId> {
    // sample the n - 1 slots that skip `source`, then shift back into 0..n
    index::sample(rng, n - 1, amount)
        .into_iter()
        .map(move |slot| if slot >= source { slot + 1 } else { slot })
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn sampled_targets_skip_source() {
        let mut rng = StdRng::seed_from_u64(3);
        for source in 0..6 {
            let targets: Vec<_> = sample_targets(&mut rng, 6, source, 5).collect();
            assert_eq!(targets.len(), 5);
            assert!(!targets.contains(&source));
            let unique: BTreeSet<_> = targets.iter().copied().collect();
            assert_eq!(unique.len(), 5);
            assert!(unique.iter().all(|&t| t < 6));
        }
    }

    #[test]
    fn two_nodes_connect_to_each_other() {
        let mut rng = StdRng::seed_from_u64(0);
        let g = generate(&GenerationParameters::new().with_num_records(2), &mut rng)
            .expect("two nodes are valid");
        assert_eq!(g.edges(), &[Edge::new(0, 1), Edge::new(1, 0)]);
        assert_eq!(g.multi_nodes().count(), 0);
    }

    #[test]
    fn single_connection_graph_has_one_edge_per_node() {
        let mut rng = StdRng::seed_from_u64(11);
        let params = GenerationParameters::new()
            .with_num_records(30)
            .with_multi_connection_ratio(0.0);
        let g = generate(&params, &mut rng).expect("valid");
        assert_eq!(g.edge_count(), 30);
        assert!(g.nodes().all(|n| g.out_degree(n) == 1));
    }

    #[test]
    fn max_connections_of_one_is_rejected_for_multi_nodes() {
        let mut rng = StdRng::seed_from_u64(0);
        let params = GenerationParameters::new()
            .with_num_records(10)
            .with_connections(1, 1);
        let err = generate(&params, &mut rng).expect_err("multi nodes need two edges");
        assert_eq!(err.parameter(), "max_connections");
    }

    #[test]
    fn min_connections_of_one_still_yields_multi_degree() {
        let mut rng = StdRng::seed_from_u64(5);
        let params = GenerationParameters::new()
            .with_num_records(50)
            .with_connections(1, 4);
        let g = generate(&params, &mut rng).expect("valid");
        assert!(g.multi_nodes().all(|n| (2..=4).contains(&g.out_degree(n))));
    }
}
