//! EvoNAS search space CLI - Print search-space graphs of a run as JSON.

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::path::PathBuf;

use search_space::{
    ResultsConfig, SearchSpace,
    schema::RESULTS_PATH_ENV,
};

/// What to print for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Output {
    Elements,
    Layers,
    Groups,
    GroupGraph,
    Reachable,
}

impl Output {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "elements" => Some(Output::Elements),
            "layers" => Some(Output::Layers),
            "groups" => Some(Output::Groups),
            "group-graph" => Some(Output::GroupGraph),
            "reachable" => Some(Output::Reachable),
            _ => None,
        }
    }
}

#[derive(Debug)]
struct Args {
    run: String,
    results_dir: Option<PathBuf>,
    config: Option<PathBuf>,
    start: Option<String>,
    output: Output,
}

fn main() {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && args[1] == "--example" {
        print_example_config();
        return;
    }

    let args = parse_args(&args).unwrap_or_else(|message| {
        if !message.is_empty() {
            eprintln!("Error: {}", message);
            eprintln!();
        }
        print_usage(args.first().map(String::as_str).unwrap_or("search-space"));
        std::process::exit(1);
    });

    let config = ResultsConfig::resolve(
        args.config.as_deref(),
        std::env::var_os(RESULTS_PATH_ENV),
        args.results_dir,
        args.start,
    )
    .unwrap_or_else(|e| fail(e));

    log::info!(
        "Run '{}' in {} (start layer '{}')",
        args.run,
        config.results_dir.display(),
        config.start_layer
    );

    let start_layer = config.start_layer.clone();
    let space = SearchSpace::new(config);
    let run = args.run.as_str();

    let json = match args.output {
        Output::Elements => space
            .elements(run)
            .map(|p| serde_json::to_string_pretty(&p.elements)),
        Output::Layers => space
            .layer_graph(run, true)
            .map(|g| serde_json::to_string_pretty(&g)),
        Output::Groups => space
            .groups(run)
            .map(|g| serde_json::to_string_pretty(&g)),
        Output::GroupGraph => space
            .group_graph(run)
            .map(|g| serde_json::to_string_pretty(&g)),
        Output::Reachable => space
            .connected_layers(run, &start_layer)
            .map(|layers| serde_json::to_string_pretty(&layers)),
    }
    .unwrap_or_else(|e| fail(e))
    .unwrap_or_else(|e| fail(e));

    println!("{}", json);
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut run = None;
    let mut results_dir = None;
    let mut config = None;
    let mut start = None;
    let mut output = Output::Elements;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        let arg = arg.as_str();
        let mut value = || {
            iter.next()
                .cloned()
                .ok_or_else(|| format!("{} requires a value", arg))
        };
        match arg {
            "-h" | "--help" => return Err(String::new()),
            "--results-dir" => results_dir = Some(PathBuf::from(value()?)),
            "--config" => config = Some(PathBuf::from(value()?)),
            "--start" => start = Some(value()?),
            "--output" => {
                let kind = value()?;
                output = Output::parse(&kind)
                    .ok_or_else(|| format!("Unknown output kind: {}", kind))?;
            }
            flag if flag.starts_with("--") => return Err(format!("Unknown option: {}", flag)),
            positional if run.is_none() => run = Some(positional.to_string()),
            extra => return Err(format!("Unexpected argument: {}", extra)),
        }
    }

    Ok(Args {
        run: run.ok_or_else(|| "Missing run id".to_string())?,
        results_dir,
        config,
        start,
        output,
    })
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <run> [options]", program);
    eprintln!();
    eprintln!("Print the search-space graph of an EvoNAS run as JSON.");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  run                  Run directory name below the results directory");
    eprintln!();
    eprintln!("Options:");
    eprintln!(
        "  --results-dir DIR    Run results directory (default: ${}, then ./data)",
        RESULTS_PATH_ENV
    );
    eprintln!("  --config FILE        Results configuration JSON");
    eprintln!("  --start LAYER        Layer to start reachability from (default: Start)");
    eprintln!("  --output KIND        elements | layers | groups | group-graph | reachable");
    eprintln!();
    eprintln!("Example configuration is printed with --example.");
}

fn print_example_config() {
    let config = ResultsConfig::default();

    println!("Example configuration (config.json):");
    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{}", json),
        Err(e) => fail(e),
    }
}

fn fail(error: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", error);
    std::process::exit(1);
}
