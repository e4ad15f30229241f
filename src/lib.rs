//! Runtime kernel for functions compiled ahead-of-time from a functional
//! language into a garbage-collected calling convention: one-word tagged
//! values, a per-invocation execution context carrying the allocation
//! frontier and the GC root slots, a semispace collector behind the
//! allocation interface, and the trampoline that drives compiled entry
//! points. A small benchmark harness sits on top.

pub mod gc;
pub mod harness;
pub mod runtime;
pub mod workload;

pub mod prelude {
    pub use crate::gc::{Heap, HeapConfig};
    pub use crate::runtime::context::Context;
    pub use crate::runtime::trampoline::{run_entry, EntryFn, Step};
    pub use crate::runtime::value::{BlockRef, Header, RawWord, Tag, Value, ValueKind};
    pub use crate::runtime::{SLOT_ARG0, SLOT_CONTINUATION, SLOT_RESULT};
}
