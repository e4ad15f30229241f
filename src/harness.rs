//! Benchmark harness: repeated invocation of an entry point, each against
//! a fresh execution context, with wall-clock timing and a decoded
//! snapshot of the final result slot.

use std::fmt;
use std::time::{Duration, Instant};

use crate::gc::HeapConfig;
use crate::runtime::context::Context;
use crate::runtime::trampoline::run_entry;
use crate::runtime::value::{Tag, ValueKind};
use crate::runtime::SLOT_RESULT;
use crate::workload::Workload;

pub struct BenchOptions {
    pub repetitions: u64,
    pub workload: Workload,
    pub heap: HeapConfig,
}

impl BenchOptions {
    pub fn parse() -> Result<Self, String> {
        parse()
    }
}

/// Parses a word count with an optional k/m/g suffix, as in `64k`.
fn read_words_from_str(s: &str) -> Option<usize> {
    let s = s.trim();
    let (digits, factor) = match *s.as_bytes().last()? {
        b'k' | b'K' => (&s[..s.len() - 1], 1024),
        b'm' | b'M' => (&s[..s.len() - 1], 1024 * 1024),
        b'g' | b'G' => (&s[..s.len() - 1], 1024 * 1024 * 1024),
        _ => (s, 1),
    };
    digits.parse::<usize>().ok().map(|n| n * factor)
}

fn parse() -> Result<BenchOptions, String> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        println!("Usage: quokka-bench [options] [repetitions]");
        println!("Options:");
        println!("  -h, --help: Print this help message");
        println!("  --workload <name>: Entry point to drive: successor, build-list, countdown (default: build-list)");
        println!("  --nursery-words <size>: Initial semispace size in words (default: 64k)");
        println!("  --root-slots <count>: Root slots per execution context (default: 1024)");
        std::process::exit(0);
    }

    let workload = match args.opt_value_from_str::<_, Workload>("--workload") {
        Ok(Some(w)) => w,
        Ok(None) => Workload::BuildList,
        Err(e) => return Err(e.to_string()),
    };

    let nursery_words = match args.opt_value_from_str::<_, String>("--nursery-words") {
        Ok(Some(size)) => read_words_from_str(&size).unwrap_or(crate::gc::DEFAULT_NURSERY_WORDS),
        Ok(None) => crate::gc::DEFAULT_NURSERY_WORDS,
        Err(e) => return Err(e.to_string()),
    };

    let root_slots = match args.opt_value_from_str::<_, String>("--root-slots") {
        Ok(Some(count)) => read_words_from_str(&count).unwrap_or(crate::gc::DEFAULT_ROOT_SLOTS),
        Ok(None) => crate::gc::DEFAULT_ROOT_SLOTS,
        Err(e) => return Err(e.to_string()),
    };

    // The repetition count falls back silently: 1 when absent, 0 on
    // unparsable input. Callers should not lean on the latter.
    let repetitions = match args.opt_free_from_str::<String>() {
        Ok(Some(s)) => s.parse().unwrap_or(0),
        Ok(None) => 1,
        Err(e) => return Err(e.to_string()),
    };

    Ok(BenchOptions {
        repetitions,
        workload,
        heap: HeapConfig {
            nursery_words,
            root_slots,
        },
    })
}

/// Result-slot snapshot that outlives the context it was read from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodedResult {
    Immediate(i64),
    Block { tag: Tag, arity: usize },
}

impl fmt::Display for DecodedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodedResult::Immediate(n) => write!(f, "{}", n),
            DecodedResult::Block { tag, arity } => {
                write!(f, "<block tag {} arity {}>", tag, arity)
            }
        }
    }
}

pub struct BenchReport {
    pub elapsed: Duration,
    pub repetitions: u64,
    /// Decoded result slot of the last iteration; `None` when no
    /// iteration ran or the entry point published nothing.
    pub result: Option<DecodedResult>,
}

impl BenchReport {
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    pub fn milliseconds(&self) -> f64 {
        self.seconds() * 1000.0
    }
}

/// Invokes the workload `repetitions` times, building a brand-new context
/// for every iteration; nothing is re-threaded between calls.
pub fn run_repeated(config: &HeapConfig, workload: Workload, repetitions: u64) -> BenchReport {
    log::debug!(
        target: "bench",
        "{} repetitions of {}",
        repetitions,
        workload.as_ref()
    );

    let start = Instant::now();
    let mut result = None;
    for _ in 0..repetitions {
        let mut ctx = Context::new(config);
        workload.seed(&mut ctx);
        run_entry(&mut ctx, workload.entry());
        result = decode_result(&ctx);
    }
    let elapsed = start.elapsed();

    BenchReport {
        elapsed,
        repetitions,
        result,
    }
}

fn decode_result(ctx: &Context) -> Option<DecodedResult> {
    let v = ctx.read_slot(SLOT_RESULT);
    if v.is_empty() {
        return None;
    }
    Some(match ctx.kind(v) {
        ValueKind::Immediate(n) => DecodedResult::Immediate(n),
        ValueKind::Block(r) => DecodedResult::Block {
            tag: ctx.block_tag(r),
            arity: ctx.block_arity(r),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_counts_accept_size_suffixes() {
        assert_eq!(read_words_from_str("4096"), Some(4096));
        assert_eq!(read_words_from_str("64k"), Some(64 * 1024));
        assert_eq!(read_words_from_str("2M"), Some(2 * 1024 * 1024));
        assert_eq!(read_words_from_str("1g"), Some(1024 * 1024 * 1024));
        assert_eq!(read_words_from_str(""), None);
        assert_eq!(read_words_from_str("lots"), None);
        assert_eq!(read_words_from_str("k"), None);
    }
}
