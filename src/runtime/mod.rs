pub mod context;
pub mod trampoline;
pub mod value;

/*
 * Root-slot conventions shared by the harness and generated code. Slots
 * are not generic storage: slot 0 is reserved for the continuation of
 * the current call chain, slot 1 receives the final result, arguments
 * start at slot 2.
 */

pub const SLOT_CONTINUATION: usize = 0;
pub const SLOT_RESULT: usize = 1;
pub const SLOT_ARG0: usize = 2;
