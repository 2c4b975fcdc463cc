//! Throughput check: N threads each hash an M-KiB buffer R times.
//!
//! Usage: bench [threads] [kib] [rounds]

use sha256_core::{digest, hex, Digest, HashError};
use std::env;
use std::process;
use std::thread;
use std::time::{Duration, Instant};

fn arg_or(args: &[String], idx: usize, default: usize) -> usize {
    match args.get(idx) {
        Some(v) => v.parse().unwrap_or_else(|_| {
            eprintln!("bench: '{v}' is not a number");
            process::exit(2);
        }),
        None => default,
    }
}

/// Outcome of one worker thread.
type WorkerResult = thread::Result<Result<Digest, HashError>>;

/// Completed workers, the last digest seen, and a description of each failure.
struct Summary {
    completed: usize,
    last: Option<Digest>,
    failures: Vec<String>,
}

fn summarize(results: Vec<WorkerResult>) -> Summary {
    let mut summary = Summary { completed: 0, last: None, failures: Vec::new() };
    for (i, r) in results.into_iter().enumerate() {
        match r {
            Ok(Ok(d)) => {
                summary.completed += 1;
                summary.last = Some(d);
            }
            Ok(Err(e)) => summary.failures.push(format!("worker {i}: {e}")),
            Err(_) => summary.failures.push(format!("worker {i}: panicked")),
        }
    }
    summary
}

/// MiB hashed by `completed` workers and the resulting MiB/s.
fn throughput(completed: usize, rounds: usize, buf_len: usize, dur: Duration) -> (f64, f64) {
    let mib = (completed * rounds * buf_len) as f64 / (1024.0 * 1024.0);
    let secs = dur.as_secs_f64();
    (mib, if secs > 0.0 { mib / secs } else { 0.0 })
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let threads = arg_or(&args, 1, thread::available_parallelism().map(|n| n.get()).unwrap_or(1));
    let kib = arg_or(&args, 2, 1024);
    let rounds = arg_or(&args, 3, 16).max(1);

    let buf: Vec<u8> = (0..kib * 1024).map(|i| (i % 251) as u8).collect();
    let data = &buf;
    let start = Instant::now();
    let results: Vec<WorkerResult> = thread::scope(|s| {
        let handles: Vec<_> = (0..threads)
            .map(|_| {
                s.spawn(move || -> Result<Digest, HashError> {
                    let mut d = digest(data)?;
                    for _ in 1..rounds {
                        d = digest(data)?;
                    }
                    Ok(d)
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join()).collect()
    });
    let dur = start.elapsed();

    let summary = summarize(results);
    let (mib, rate) = throughput(summary.completed, rounds, buf.len(), dur);
    println!(
        "{}/{threads} threads x {rounds} x {kib} KiB = {mib:.1} MiB in {dur:.2?} => {rate:.1} MiB/s",
        summary.completed
    );
    if let Some(d) = summary.last {
        println!("digest {}", hex(&d));
    }
    if !summary.failures.is_empty() {
        for f in &summary.failures {
            eprintln!("bench: {f}");
        }
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_workers_are_not_counted() {
        let d = [7u8; 32];
        let results: Vec<WorkerResult> = vec![
            Ok(Ok(d)),
            Ok(Err(HashError::InputTooLarge { bits: 1 << 64 })),
            Err(Box::new("boom") as Box<dyn std::any::Any + Send>),
            Ok(Ok(d)),
        ];
        let summary = summarize(results);
        assert_eq!(summary.completed, 2);
        assert_eq!(summary.last, Some(d));
        assert_eq!(summary.failures.len(), 2);
        assert!(summary.failures[1].contains("panicked"));
    }

    #[test]
    fn rate_covers_only_completed_work() {
        let (mib, rate) = throughput(2, 4, 1024 * 1024, Duration::from_secs(2));
        assert_eq!(mib, 8.0);
        assert_eq!(rate, 4.0);
        assert_eq!(throughput(0, 4, 1024, Duration::from_secs(1)), (0.0, 0.0));
        assert_eq!(throughput(1, 1, 1024 * 1024, Duration::ZERO).1, 0.0);
    }
}
