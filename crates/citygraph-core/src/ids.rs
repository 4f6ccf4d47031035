//! Monotonic id allocation.
//!
//! One counter per entity kind, strictly increasing for the process
//! lifetime, never reused or decremented. The allocator is passed
//! explicitly into every generation call rather than living behind a
//! global singleton, so tests and callers control its scope.

/// The entity kinds that receive independent id counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Cell,
    Node,
    Edge,
    Region,
    Layer,
    NodeType,
    EdgeType,
}

const KIND_COUNT: usize = 7;

/// Per-kind monotonic counters. Ids start at 1; 0 is never allocated and
/// can serve as an "unassigned" sentinel.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    counters: [u32; KIND_COUNT],
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id for `kind`.
    pub fn next(&mut self, kind: EntityKind) -> u32 {
        let counter = &mut self.counters[kind as usize];
        *counter += 1;
        *counter
    }
}
