//! Headless driver: steps the engine on a timer and prints each generation.

use std::process;
use std::thread;
use std::time::Duration;

use log::info;
use toroidal_life::config::{DEFAULT_COLUMNS, DEFAULT_ROWS, STEP_INTERVAL_MS};
use toroidal_life::{EngineConfig, GridEngine};

struct DemoArgs {
    rows: i32,
    columns: i32,
    generations: u64,
    interval: Duration,
}

fn next_arg<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, String> {
    args.get(i)
        .map(String::as_str)
        .ok_or_else(|| format!("{flag} requires a value"))
}

fn parse_args() -> Result<DemoArgs, String> {
    let args: Vec<String> = std::env::args().collect();
    let mut parsed = DemoArgs {
        rows: DEFAULT_ROWS,
        columns: DEFAULT_COLUMNS,
        generations: 100,
        interval: Duration::from_millis(STEP_INTERVAL_MS),
    };
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--rows" => {
                i += 1;
                parsed.rows = next_arg(&args, i, "--rows")?
                    .parse()
                    .map_err(|_| "--rows requires an integer".to_string())?;
            }
            "--columns" => {
                i += 1;
                parsed.columns = next_arg(&args, i, "--columns")?
                    .parse()
                    .map_err(|_| "--columns requires an integer".to_string())?;
            }
            "--generations" => {
                i += 1;
                parsed.generations = next_arg(&args, i, "--generations")?
                    .parse()
                    .map_err(|_| "--generations requires a non-negative integer".to_string())?;
            }
            "--interval-ms" => {
                i += 1;
                let ms: u64 = next_arg(&args, i, "--interval-ms")?
                    .parse()
                    .map_err(|_| "--interval-ms requires a non-negative integer".to_string())?;
                parsed.interval = Duration::from_millis(ms);
            }
            other => return Err(format!("unknown argument: {other}")),
        }
        i += 1;
    }
    Ok(parsed)
}

fn render(engine: &GridEngine) {
    println!("Generation Number: {}", engine.generation());
    print!("{}", engine.current_generation());
    println!();
}

fn main() {
    env_logger::init();

    let args = parse_args().unwrap_or_else(|err| {
        eprintln!("life_demo: {err}");
        process::exit(2);
    });
    let config = EngineConfig::new(args.rows, args.columns).unwrap_or_else(|err| {
        eprintln!("life_demo: {err}");
        process::exit(2);
    });

    let mut engine = GridEngine::from_config(&config);
    info!(
        "running {} generations on {}x{} every {:?}",
        args.generations,
        config.columns(),
        config.rows(),
        args.interval
    );

    render(&engine);
    for _ in 0..args.generations {
        thread::sleep(args.interval);
        engine.step();
        render(&engine);
    }

    info!(
        "stopped at generation {} with {} alive cells",
        engine.generation(),
        engine.population()
    );
}
