//! Hand-written entry points obeying the generated-code contract.
//!
//! These stand in for compiler output: the harness and the tests need
//! real entry points to drive, and each of these exercises one part of
//! the convention (pure slot traffic, allocation with spilling, deep
//! tail calls).

use std::str::FromStr;

use crate::runtime::context::Context;
use crate::runtime::trampoline::{EntryFn, Step};
use crate::runtime::value::{Tag, Value};
use crate::runtime::{SLOT_ARG0, SLOT_RESULT};

/// Constructor tag of a list cell. Empty list is the 0th constant
/// constructor, encoded as immediate 0.
pub const CONS_TAG: Tag = 0;

const SUCCESSOR_INPUT: i64 = 41;
const LIST_LENGTH: i64 = 10_000;
const COUNTDOWN_START: i64 = 1_000_000;

/// Reads the argument slot and writes its successor to the result slot.
/// No allocation, single step.
pub fn successor(ctx: &mut Context) -> Step {
    let n = ctx.read_slot(SLOT_ARG0).as_immediate();
    ctx.write_slot(SLOT_RESULT, Value::immediate(n + 1));
    Step::Done
}

/// Prepends one list cell per step until the counter runs out, leaving
/// the list in the result slot. Expects the counter in the argument slot
/// and the empty list in the result slot.
pub fn build_list(ctx: &mut Context) -> Step {
    let n = ctx.read_slot(SLOT_ARG0).as_immediate();
    if n == 0 {
        return Step::Done;
    }

    // The accumulated list stays in the result slot across the
    // allocation, and is re-read only afterwards, so a collection is
    // free to relocate it mid-call.
    let cell = ctx.alloc_block(CONS_TAG, 2);
    ctx.set_block_field(cell, 0, Value::immediate(n));
    let tail = ctx.read_slot(SLOT_RESULT);
    ctx.set_block_field(cell, 1, tail);

    ctx.write_slot(SLOT_RESULT, cell.value());
    ctx.write_slot(SLOT_ARG0, Value::immediate(n - 1));
    Step::Continue(build_list)
}

/// Immediate-only tail-call loop; one trampoline bounce per count.
pub fn countdown(ctx: &mut Context) -> Step {
    let n = ctx.read_slot(SLOT_ARG0).as_immediate();
    if n == 0 {
        ctx.write_slot(SLOT_RESULT, Value::immediate(0));
        return Step::Done;
    }
    ctx.write_slot(SLOT_ARG0, Value::immediate(n - 1));
    Step::Continue(countdown)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Workload {
    Successor,
    BuildList,
    Countdown,
}

impl Workload {
    pub fn entry(self) -> EntryFn {
        match self {
            Workload::Successor => successor,
            Workload::BuildList => build_list,
            Workload::Countdown => countdown,
        }
    }

    /// Places the workload's default inputs in the agreed slots.
    pub fn seed(self, ctx: &mut Context) {
        match self {
            Workload::Successor => {
                ctx.write_slot(SLOT_ARG0, Value::immediate(SUCCESSOR_INPUT));
            }
            Workload::BuildList => {
                ctx.write_slot(SLOT_ARG0, Value::immediate(LIST_LENGTH));
                ctx.write_slot(SLOT_RESULT, Value::immediate(0));
            }
            Workload::Countdown => {
                ctx.write_slot(SLOT_ARG0, Value::immediate(COUNTDOWN_START));
            }
        }
    }
}

impl AsRef<str> for Workload {
    fn as_ref(&self) -> &str {
        match self {
            Workload::Successor => "successor",
            Workload::BuildList => "build-list",
            Workload::Countdown => "countdown",
        }
    }
}

impl FromStr for Workload {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.to_lowercase();
        let s: &str = &s;

        match s {
            "successor" => Ok(Workload::Successor),
            "build-list" => Ok(Workload::BuildList),
            "countdown" => Ok(Workload::Countdown),
            _ => Err("Unknown workload"),
        }
    }
}
