use shortest_route::data_structures::{
    FrontierQueue, IndexedFrontier, LazyFrontier, LinearScanFrontier,
};
use shortest_route::Error;

type BoxedQueue = Box<dyn FrontierQueue<u32>>;

fn queues(capacity: usize) -> Vec<(&'static str, BoxedQueue)> {
    let indexed: BoxedQueue = Box::new(IndexedFrontier::<u32>::with_capacity(capacity));
    let lazy: BoxedQueue = Box::new(LazyFrontier::<u32>::with_capacity(capacity));
    let linear: BoxedQueue = Box::new(LinearScanFrontier::<u32>::with_capacity(capacity));
    vec![("indexed", indexed), ("lazy", lazy), ("linear-scan", linear)]
}

fn drain(queue: &mut dyn FrontierQueue<u32>) -> Vec<(usize, u32)> {
    let mut order = Vec::new();
    while !queue.is_empty() {
        order.push(queue.extract_min().unwrap());
    }
    order
}

#[test]
fn test_extracts_in_distance_order() {
    for (name, mut queue) in queues(10) {
        for (vertex, distance) in [(4, 9), (1, 3), (7, 12), (2, 1), (9, 5)] {
            queue.insert(vertex, distance).unwrap();
        }
        assert_eq!(queue.len(), 5, "{}", name);
        assert_eq!(
            drain(queue.as_mut()),
            vec![(2, 1), (1, 3), (9, 5), (4, 9), (7, 12)],
            "{}",
            name
        );
    }
}

#[test]
fn test_equal_distances_break_ties_by_lowest_vertex() {
    let insertion_orders: [[usize; 4]; 3] = [[0, 3, 5, 8], [8, 5, 3, 0], [5, 0, 8, 3]];

    for order in insertion_orders {
        for (name, mut queue) in queues(10) {
            for vertex in order {
                queue.insert(vertex, 7).unwrap();
            }
            let extracted: Vec<usize> = drain(queue.as_mut()).into_iter().map(|(v, _)| v).collect();
            assert_eq!(extracted, vec![0, 3, 5, 8], "{} with order {:?}", name, order);
        }
    }
}

#[test]
fn test_decrease_moves_vertex_forward() {
    for (name, mut queue) in queues(6) {
        queue.insert(0, 10).unwrap();
        queue.insert(1, 20).unwrap();
        queue.insert(2, 30).unwrap();

        queue.decrease(2, 5).unwrap();
        assert_eq!(queue.len(), 3, "{}", name);
        assert_eq!(queue.extract_min().unwrap(), (2, 5), "{}", name);

        // A tie created by a decrease still goes to the lower index.
        queue.decrease(1, 10).unwrap();
        assert_eq!(queue.extract_min().unwrap(), (0, 10), "{}", name);
        assert_eq!(queue.extract_min().unwrap(), (1, 10), "{}", name);
        assert!(queue.is_empty(), "{}", name);
    }
}

#[test]
fn test_decrease_must_improve() {
    for (name, mut queue) in queues(4) {
        queue.insert(3, 8).unwrap();
        assert!(matches!(queue.decrease(3, 8), Err(Error::KeyNotDecreased(3))), "{}", name);
        assert!(matches!(queue.decrease(3, 9), Err(Error::KeyNotDecreased(3))), "{}", name);
        assert_eq!(queue.extract_min().unwrap(), (3, 8), "{}", name);
    }
}

#[test]
fn test_contract_violations_are_reported() {
    for (name, mut queue) in queues(4) {
        assert!(matches!(queue.extract_min(), Err(Error::QueueEmpty)), "{}", name);
        assert!(matches!(queue.decrease(1, 0), Err(Error::MissingEntry(1))), "{}", name);
        assert!(matches!(queue.insert(4, 0), Err(Error::InvalidVertex(4))), "{}", name);

        queue.insert(1, 2).unwrap();
        assert!(matches!(queue.insert(1, 1), Err(Error::DuplicateEntry(1))), "{}", name);

        queue.extract_min().unwrap();
        assert!(matches!(queue.decrease(1, 0), Err(Error::MissingEntry(1))), "{}", name);
        assert!(matches!(queue.extract_min(), Err(Error::QueueEmpty)), "{}", name);
    }
}

#[test]
fn test_lazy_queue_discards_superseded_entries() {
    let mut queue = LazyFrontier::with_capacity(3);
    queue.insert(0, 50u32).unwrap();
    queue.insert(1, 60).unwrap();
    queue.decrease(0, 40).unwrap();
    queue.decrease(0, 30).unwrap();

    assert_eq!(queue.len(), 2);
    assert_eq!(queue.physical_len(), 4);

    assert_eq!(queue.extract_min().unwrap(), (0, 30));
    assert_eq!(queue.extract_min().unwrap(), (1, 60));
    assert_eq!(queue.stale_discarded(), 2);
    assert!(queue.is_empty());
    assert!(matches!(queue.extract_min(), Err(Error::QueueEmpty)));
}

#[test]
fn test_indexed_queue_peek_and_priority() {
    let mut queue = IndexedFrontier::with_capacity(5);
    assert_eq!(queue.peek_min(), None);

    queue.insert(4, 9u32).unwrap();
    queue.insert(2, 6).unwrap();
    assert_eq!(queue.peek_min(), Some((2, 6)));
    assert_eq!(queue.priority(4), Some(9));
    assert_eq!(queue.priority(3), None);

    queue.decrease(4, 1).unwrap();
    assert_eq!(queue.peek_min(), Some((4, 1)));
    assert!(queue.contains(2));
    assert_eq!(queue.len(), 2);
}

#[test]
fn test_interleaved_operations_match_linear_scan() {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(17);
    let capacity = 40;
    let mut indexed = IndexedFrontier::with_capacity(capacity);
    let mut lazy = LazyFrontier::with_capacity(capacity);
    let mut oracle = LinearScanFrontier::with_capacity(capacity);
    let mut queued: Vec<Option<u32>> = vec![None; capacity];

    for _ in 0..2_000 {
        let vertex = rng.gen_range(0..capacity);
        match (rng.gen_range(0..3), queued[vertex]) {
            (0, None) => {
                let distance = rng.gen_range(0..100);
                indexed.insert(vertex, distance).unwrap();
                lazy.insert(vertex, distance).unwrap();
                oracle.insert(vertex, distance).unwrap();
                queued[vertex] = Some(distance);
            }
            (1, Some(current)) if current > 0 => {
                let distance = rng.gen_range(0..current);
                indexed.decrease(vertex, distance).unwrap();
                lazy.decrease(vertex, distance).unwrap();
                oracle.decrease(vertex, distance).unwrap();
                queued[vertex] = Some(distance);
            }
            (2, _) if !oracle.is_empty() => {
                let expected = oracle.extract_min().unwrap();
                assert_eq!(indexed.extract_min().unwrap(), expected);
                assert_eq!(lazy.extract_min().unwrap(), expected);
                queued[expected.0] = None;
            }
            _ => {}
        }
        assert_eq!(indexed.len(), oracle.len());
        assert_eq!(lazy.len(), oracle.len());
    }
}
