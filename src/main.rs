//! Ringkit demo - latency benchmark untuk ketiga varian ring buffer
//!
//! Usage:
//!   cargo run --release -- [OPTIONS]

use std::time::{Duration, Instant};

use ringkit::core::{FixedRingBuffer, GrowableRingBuffer, OverwritingRingBuffer};
use tracing_subscriber::EnvFilter;

/// Demo configuration
#[derive(Debug)]
struct DemoConfig {
    capacity: usize,
    iterations: usize,
    verbose: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            capacity: 1024,
            iterations: 1_000_000,
            verbose: false,
        }
    }
}

fn parse_args() -> DemoConfig {
    let args: Vec<String> = std::env::args().collect();
    let mut config = DemoConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--capacity" | "-c" => {
                if i + 1 < args.len() {
                    config.capacity = args[i + 1].parse().unwrap_or(1024);
                    i += 1;
                }
            }
            "--iterations" | "-n" => {
                if i + 1 < args.len() {
                    config.iterations = args[i + 1].parse().unwrap_or(1_000_000);
                    i += 1;
                }
            }
            "--verbose" | "-v" => {
                config.verbose = true;
            }
            "--help" | "-h" => {
                println!("Ringkit - Ring Buffer Latency Demo\n");
                println!("Usage: ringkit [OPTIONS]\n");
                println!("Options:");
                println!("  -c, --capacity <N>    Buffer capacity (default: 1024)");
                println!("  -n, --iterations <N>  Operations per benchmark (default: 1000000)");
                println!("  -v, --verbose         Debug logging");
                println!("  -h, --help            Show this help");
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() {
    let mut config = parse_args();
    init_tracing(config.verbose);

    if config.capacity == 0 {
        tracing::warn!("capacity 0 is not allowed, falling back to 1");
        config.capacity = 1;
    }
    tracing::info!(?config, "starting ring buffer demo");

    println!("🔁 Ringkit - Ring Buffer Latency Demo");
    println!("=====================================\n");

    benchmark_fixed(&config);
    benchmark_growable(&config);
    benchmark_overwriting(&config);

    println!("✅ All benchmarks complete!");
}

fn report(
    name: &str,
    iterations: usize,
    enqueue: Duration,
    dequeued: usize,
    dequeue: Duration,
) {
    let enqueue_ns = enqueue.as_nanos() as f64 / iterations as f64;
    let dequeue_ns = dequeue.as_nanos() as f64 / dequeued.max(1) as f64;

    println!("📊 {}", name);
    println!("  Operations: {} enqueue, {} dequeue", iterations, dequeued);
    println!("  Enqueue latency: {:.2} ns/op", enqueue_ns);
    println!("  Dequeue latency: {:.2} ns/op", dequeue_ns);
    println!(
        "  Throughput:      {:.2} M ops/sec\n",
        iterations as f64 / enqueue.as_secs_f64() / 1_000_000.0
    );
}

fn benchmark_fixed(config: &DemoConfig) {
    let mut rb = FixedRingBuffer::new(config.capacity);
    let mut enqueue = Duration::ZERO;
    let mut dequeue = Duration::ZERO;

    let mut done = 0;
    while done < config.iterations {
        let batch = config.capacity.min(config.iterations - done);

        let start = Instant::now();
        for i in 0..batch {
            if rb.enqueue(i as u64).is_err() {
                break;
            }
        }
        enqueue += start.elapsed();

        let start = Instant::now();
        while rb.dequeue().is_ok() {}
        dequeue += start.elapsed();

        done += batch;
    }

    report("Fixed Ring Buffer", config.iterations, enqueue, config.iterations, dequeue);
}

fn benchmark_growable(config: &DemoConfig) {
    let mut rb = GrowableRingBuffer::new(config.capacity);
    let mut enqueue = Duration::ZERO;
    let mut dequeue = Duration::ZERO;

    let mut done = 0;
    while done < config.iterations {
        let batch = config.capacity.min(config.iterations - done);

        let start = Instant::now();
        for i in 0..batch {
            if rb.enqueue(i as u64).is_err() {
                break;
            }
        }
        enqueue += start.elapsed();

        let start = Instant::now();
        while rb.dequeue().is_ok() {}
        dequeue += start.elapsed();

        done += batch;
    }

    report("Growable Ring Buffer", config.iterations, enqueue, config.iterations, dequeue);
    tracing::debug!(allocated = rb.allocated(), "growable storage after benchmark");
}

fn benchmark_overwriting(config: &DemoConfig) {
    let mut rb = OverwritingRingBuffer::new(config.capacity);

    // Semua enqueue di sini melewati kapasitas, jadi sebagian besar evict
    let start = Instant::now();
    let mut evicted = 0usize;
    for i in 0..config.iterations {
        if rb.enqueue(i as u64).is_some() {
            evicted += 1;
        }
    }
    let enqueue = start.elapsed();

    let start = Instant::now();
    let survivors = rb.drain().count();
    let dequeue = start.elapsed();

    report("Overwriting Ring Buffer", config.iterations, enqueue, survivors, dequeue);
    tracing::debug!(evicted, survivors, "overwriting buffer drained");
}
