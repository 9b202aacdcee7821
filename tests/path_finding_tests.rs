use shortest_route::graph::generators::grid_graph;
use shortest_route::graph::MAX_VERTICES;
use shortest_route::{DirectedGraph, Edge, Error, PathEngine, ShortestPathAlgorithm, WeightedGraph};
use ordered_float::OrderedFloat;
use std::collections::HashMap;

// Test helper function to create an 8-connected grid with diagonal cost 1.4
fn create_test_grid(width: usize, height: usize, blocked: &[(usize, usize)]) -> DirectedGraph<OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_vertices(width * height);

    for y in 0..height {
        for x in 0..width {
            if blocked.contains(&(x, y)) {
                continue;
            }
            let vertex = y * width + x;

            // Define possible moves (8 directions)
            let directions = [
                // Cardinal directions (N, E, S, W)
                (0, -1, 1.0), (1, 0, 1.0), (0, 1, 1.0), (-1, 0, 1.0),
                // Diagonal directions (NE, SE, SW, NW)
                (1, -1, 1.4), (1, 1, 1.4), (-1, 1, 1.4), (-1, -1, 1.4),
            ];

            for (dx, dy, cost) in directions {
                let nx = x as i32 + dx;
                let ny = y as i32 + dy;

                if nx >= 0 && ny >= 0 && nx < width as i32 && ny < height as i32 {
                    let (nx, ny) = (nx as usize, ny as usize);
                    if !blocked.contains(&(nx, ny)) {
                        graph.add_edge(vertex, ny * width + nx, OrderedFloat(cost)).unwrap();
                    }
                }
            }
        }
    }

    graph
}

fn assert_continuous(graph: &DirectedGraph<OrderedFloat<f64>>, path: &[usize]) {
    for hop in path.windows(2) {
        assert!(graph.has_edge(hop[0], hop[1]), "Path should only use existing edges");
    }
}

// Test that paths can be found in a simple grid
#[test]
fn test_path_finding_simple_grid() {
    let graph = create_test_grid(10, 10, &[]);
    let (source, target) = (0, 99);

    let route = PathEngine::new().route(&graph, source, target).unwrap();
    let route = route.expect("a path across an open grid");

    // Nine diagonal steps
    assert_eq!(route.path.len(), 10);
    assert!((route.cost.into_inner() - 9.0 * 1.4).abs() < 1e-9);
    assert_eq!(route.path[0], source, "Path should start at source");
    assert_eq!(route.path[route.path.len() - 1], target, "Path should end at target");
    assert_continuous(&graph, &route.path);
}

// Test path finding with obstacles
#[test]
fn test_path_finding_with_obstacles() {
    // A wall in column 5, open only in the bottom two rows
    let wall: Vec<(usize, usize)> = (0..8).map(|y| (5, y)).collect();
    let graph = create_test_grid(10, 10, &wall);

    let engine = PathEngine::new();
    let result = engine.compute_shortest_paths(&graph, 0).unwrap();
    assert!(result.distance_to(99).is_some(), "Should find a path around obstacles");

    let path = <PathEngine as ShortestPathAlgorithm<OrderedFloat<f64>, DirectedGraph<OrderedFloat<f64>>>>::get_path(&engine, &result, 99);
    assert!(!path.is_empty(), "Should construct a path around obstacles");
    assert!(path.iter().all(|&v| !wall.contains(&(v % 10, v / 10))));
    assert!(path.iter().any(|&v| v / 10 >= 8), "Path must pass below the wall");
    assert_continuous(&graph, &path);
}

// Test the city pathfinding scenario
#[test]
fn test_city_pathfinding() {
    let width = 25;
    let height = 18;

    let mut buildings = Vec::new();
    for (bx, by) in [(3, 3), (10, 10)] {
        for dy in 0..3 {
            for dx in 0..3 {
                buildings.push((bx + dx, by + dy));
            }
        }
    }
    let graph = create_test_grid(width, height, &buildings);

    // Define some key locations
    let locations = HashMap::from([
        ("home", (0, 0)),
        ("work", (20, 15)),
        ("gym", (15, 8)),
        ("park", (8, 12)),
    ]);

    let engine = PathEngine::new();
    for (from_name, &(fx, fy)) in &locations {
        for (to_name, &(tx, ty)) in &locations {
            if from_name == to_name {
                continue;
            }
            let source = fy * width + fx;
            let target = ty * width + tx;

            let route = engine.route(&graph, source, target).unwrap();
            let route = route.unwrap_or_else(|| panic!("Should find a path from {} to {}", from_name, to_name));

            assert_eq!(route.path[0], source, "Path should start at source");
            assert_eq!(*route.path.last().unwrap(), target, "Path should end at target");
            assert_continuous(&graph, &route.path);
        }
    }
}

// Walled-off corner cell cannot be reached
#[test]
fn test_enclosed_cell_is_unreachable() {
    let graph = create_test_grid(6, 6, &[(4, 5), (4, 4), (5, 4)]);
    assert!(PathEngine::new().shortest_path(&graph, 0, 35).unwrap().is_empty());
}

// Unit grid: cost equals Manhattan distance
#[test]
fn test_unit_grid_manhattan_distance() {
    let graph = grid_graph(7, 5).unwrap();
    let tree = PathEngine::new().compute_shortest_paths(&graph, 0).unwrap();
    for y in 0..5 {
        for x in 0..7 {
            assert_eq!(tree.distance_to(y * 7 + x), Some((x + y) as u32));
        }
    }

    // Equal-cost routes resolve to the lowest-index one: along the top row first.
    assert_eq!(tree.path_to(8), vec![0, 1, 8]);
}

// Float and integer weights give the same answers
#[test]
fn test_float_and_integer_weights_agree() {
    let ints = grid_graph(4, 4).unwrap();
    let floats = DirectedGraph::from_adjacency(
        (0..ints.vertex_count())
            .map(|v| {
                ints.edges(v)
                    .unwrap()
                    .iter()
                    .map(|e| Edge::new(e.to, OrderedFloat(f64::from(e.weight))))
                    .collect()
            })
            .collect(),
    );

    let engine = PathEngine::new();
    for target in 0..16 {
        assert_eq!(
            engine.shortest_path(&ints, 0, target).unwrap(),
            engine.shortest_path(&floats, 0, target).unwrap()
        );
    }
}

// Grid dimensions are checked before anything is allocated
#[test]
fn test_grid_dimensions_are_bounded() {
    assert!(matches!(
        grid_graph(usize::MAX, 2),
        Err(Error::TooManyVertices { limit, .. }) if limit == MAX_VERTICES
    ));
    assert!(matches!(
        grid_graph(1 << 13, 1 << 14),
        Err(Error::TooManyVertices { requested, .. }) if requested == 1 << 27
    ));
    assert_eq!(grid_graph(0, 5).unwrap().vertex_count(), 0);
}
