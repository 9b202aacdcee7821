pub mod frontier;
pub mod indexed_heap;
pub mod lazy_heap;
pub mod linear_scan;

pub use frontier::FrontierQueue;
pub use indexed_heap::IndexedFrontier;
pub use lazy_heap::LazyFrontier;
pub use linear_scan::LinearScanFrontier;
