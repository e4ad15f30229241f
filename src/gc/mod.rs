pub mod semispace;

pub use semispace::Heap;

pub const DEFAULT_NURSERY_WORDS: usize = 64 * 1024;
pub const DEFAULT_ROOT_SLOTS: usize = 1024;

/// Tunable constants of the allocation protocol.
///
/// Generated code is compiled against a slot count and can assume an
/// initial nursery, but neither is baked into the runtime: the harness
/// picks them when it constructs a context.
#[derive(Clone, Debug)]
pub struct HeapConfig {
    /// Initial size of each semispace, in words. The heap grows past this
    /// when live data plus a pending request outruns it.
    pub nursery_words: usize,
    /// Number of GC-visible root slots in each execution context.
    pub root_slots: usize,
}

impl Default for HeapConfig {
    fn default() -> Self {
        Self {
            nursery_words: DEFAULT_NURSERY_WORDS,
            root_slots: DEFAULT_ROOT_SLOTS,
        }
    }
}
