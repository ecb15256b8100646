//! Contract-address vanity search CLI
//!
//! Usage:
//!   vanity-contract c0ffee              # contract address starting with c0ffee
//!   vanity-contract dead -s 100000      # plus a speed line every 100k iterations
//!   vanity-contract dead -f 8           # eight parallel workers

use std::process;

use clap::Parser;

use vanity_contract::{Config, MatchReport, Pattern, SpeedReport, WorkerEvent, WorkerPool};

fn main() {
    let config = match Config::try_parse() {
        Ok(config) => config,
        Err(e) => {
            // All usage errors exit with code 1, including clap's own
            let _ = e.print();
            process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        eprintln!("Usage error: {}", e);
        process::exit(1);
    }

    let pattern = match Pattern::parse(&config.pattern) {
        Ok(pattern) => pattern,
        Err(e) => {
            eprintln!("Usage error: {}", e);
            process::exit(1);
        }
    };

    // Startup summary on stderr; stdout carries only results and speed lines
    eprintln!("Searching for contract address prefix: {:?}", pattern.to_hex());
    eprintln!("Difficulty: {}", pattern.difficulty_description());
    eprintln!("Workers:    {}", config.workers);
    eprintln!("Press Ctrl+C to stop.");

    let pool = match WorkerPool::spawn(config.workers, &pattern, config.speed_interval) {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let stop_flag = pool.stop_flag_clone();
    ctrlc::set_handler(move || {
        stop_flag.store(true, std::sync::atomic::Ordering::Relaxed);
    })
    .expect("Error setting Ctrl-C handler");

    // Blocks forever in normal operation; ends once the stop flag is set
    // and every worker has exited.
    for event in pool.events() {
        match event {
            WorkerEvent::Match(report) => print_match(&report),
            WorkerEvent::Speed(report) => print_speed(&report),
        }
    }

    eprintln!("Stopped.");
    pool.join();
}

fn print_match(report: &MatchReport) {
    println!("Private Key: {}", report.private_key.to_hex_prefixed());
    println!("EOA Address: {}", report.eoa.to_hex_prefixed());
    println!("Contract Address: {}", report.contract.to_hex_prefixed());
    println!();
}

fn print_speed(report: &SpeedReport) {
    println!(
        "[worker {}] Tried={} Speed={:.2} addr/s",
        report.worker_id, report.iterations, report.rate
    );
}
