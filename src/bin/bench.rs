use quokka::harness::{run_repeated, BenchOptions};

fn main() {
    env_logger::init();

    let opts = match BenchOptions::parse() {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    let report = run_repeated(&opts.heap, opts.workload, opts.repetitions);

    println!(
        "Time taken {:.6} seconds {:.6} milliseconds",
        report.seconds(),
        report.milliseconds()
    );
    if let Some(result) = report.result {
        println!("Result: {}", result);
    }
}
