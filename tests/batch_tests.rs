use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shortest_route::algorithm::batch::shortest_paths_batch;
use shortest_route::graph::generators::{random_graph, reference_graph};
use shortest_route::{Error, PathEngine};

#[test]
fn test_batch_matches_sequential_queries() {
    let mut rng = StdRng::seed_from_u64(31);
    let graph = random_graph(300, 3.0, 20, &mut rng);
    let queries: Vec<(usize, usize)> = (0..200)
        .map(|_| (rng.gen_range(0..300), rng.gen_range(0..300)))
        .collect();

    let engine = PathEngine::new();
    let parallel = shortest_paths_batch(&engine, &graph, &queries);
    assert_eq!(parallel.len(), queries.len());

    for (&(source, sink), result) in queries.iter().zip(parallel) {
        let sequential = engine.shortest_path(&graph, source, sink).unwrap();
        assert_eq!(result.unwrap(), sequential);
    }
}

#[test]
fn test_batch_keeps_failures_per_query() {
    let graph = reference_graph();
    let results = shortest_paths_batch(&PathEngine::new(), &graph, &[(0, 7), (0, 99), (7, 0)]);

    assert_eq!(results[0].as_ref().unwrap(), &vec![0, 1, 4, 2, 7]);
    assert!(matches!(results[1], Err(Error::InvalidVertex(99))));
    assert!(results[2].as_ref().unwrap().is_empty());
}
