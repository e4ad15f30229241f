use crate::runtime::context::Context;

/// A compiled entry point.
///
/// The contract an entry point must satisfy:
///
/// - inputs arrive pre-placed in the agreed argument slots
///   ([`crate::runtime::SLOT_ARG0`] and up);
/// - before any call that may allocate, every live block value is spilled
///   to a root slot and re-read afterwards; a value held only in a local
///   is not traced and does not survive a collection;
/// - a tail call is made by returning [`Step::Continue`] with the callee,
///   reusing the same context instead of growing the host stack;
/// - the final result is written to [`crate::runtime::SLOT_RESULT`]
///   before the chain returns [`Step::Done`].
///
/// There is no error channel: an entry point either terminates normally
/// or the process dies (non-termination, host memory exhaustion).
pub type EntryFn = fn(&mut Context) -> Step;

/// Continuation value driving the trampoline.
#[derive(Clone, Copy)]
pub enum Step {
    /// Tail-call the given entry point with the same context.
    Continue(EntryFn),
    /// The call chain has terminated; the result slot is final.
    Done,
}

/// Drives an entry point to completion.
///
/// Tail calls are an explicit loop over the continuation value, so call
/// depth never touches the host stack and deep recursion cannot overflow
/// it.
pub fn run_entry(ctx: &mut Context, entry: EntryFn) {
    let mut next = entry;
    loop {
        match next(ctx) {
            Step::Continue(f) => next = f,
            Step::Done => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gc::HeapConfig;
    use crate::runtime::value::Value;
    use crate::runtime::{SLOT_ARG0, SLOT_RESULT};

    fn step_down(ctx: &mut Context) -> Step {
        let n = ctx.read_slot(SLOT_ARG0).as_immediate();
        if n == 0 {
            ctx.write_slot(SLOT_RESULT, Value::immediate(0));
            return Step::Done;
        }
        ctx.write_slot(SLOT_ARG0, Value::immediate(n - 1));
        Step::Continue(step_down)
    }

    #[test]
    fn deep_tail_recursion_stays_off_the_host_stack() {
        let mut ctx = Context::new(&HeapConfig::default());
        ctx.write_slot(SLOT_ARG0, Value::immediate(1_000_000));
        run_entry(&mut ctx, step_down);
        assert_eq!(ctx.read_slot(SLOT_RESULT).as_immediate(), 0);
    }
}
