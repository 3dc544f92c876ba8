use clap::Parser;
use itertools::Itertools;
use statespace::{
    config::SolverConfig,
    domains::{Domain, DomainName, ParkingProblem, RouteMap},
    search::{
        search_engines::{SearchEngineName, SearchResult},
        validate, HeuristicName, Verbosity, ZeroHeuristic,
    },
    Error,
};
use std::{error::Error as StdError, fs, path::PathBuf, process::ExitCode};
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(version)]
/// Solve a search problem with one of the search engines.
struct Cli {
    #[arg(help = "The problem instance file")]
    problem: PathBuf,
    #[arg(
        value_enum,
        help = "The domain the problem file describes [default: parking]",
        short = 'd',
        long = "domain",
        id = "DOMAIN"
    )]
    domain: Option<DomainName>,
    #[arg(
        value_enum,
        help = "The search engine to use [default: astar]",
        short = 'e',
        long = "engine",
        id = "ENGINE"
    )]
    engine: Option<SearchEngineName>,
    #[arg(
        value_enum,
        help = "The heuristic for informed engines [default: domain]",
        long = "heuristic",
        id = "HEURISTIC"
    )]
    heuristic: Option<HeuristicName>,
    #[arg(help = "The output plan file", short = 'o', long = "output", id = "OUTPUT")]
    output: Option<PathBuf>,
    #[arg(
        help = "A TOML file with defaults for any of the options above",
        long = "config",
        id = "CONFIG"
    )]
    config: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "The verbosity level [default: normal]",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY"
    )]
    verbosity: Option<Verbosity>,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

/// The options in effect once the command line and config file are merged.
#[derive(Debug)]
struct Settings {
    problem: PathBuf,
    domain: DomainName,
    engine: SearchEngineName,
    heuristic: HeuristicName,
    output: Option<PathBuf>,
}

impl Settings {
    fn resolve(cli: Cli, config: SolverConfig) -> Self {
        Self {
            problem: cli.problem,
            domain: cli.domain.or(config.domain).unwrap_or_default(),
            engine: cli
                .engine
                .or(config.engine)
                .unwrap_or(SearchEngineName::AStar),
            heuristic: cli
                .heuristic
                .or(config.heuristic)
                .unwrap_or(HeuristicName::Domain),
            output: cli.output.or(config.output),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.config.as_deref().map(SolverConfig::from_path).transpose() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            eprintln!("error: {}: {}", e, e.source().map(|s| s.to_string()).unwrap_or_default());
            return ExitCode::FAILURE;
        }
    };

    let level: tracing::Level = cli.verbosity.or(config.verbosity).unwrap_or_default().into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let settings = Settings::resolve(cli, config);
    info!(?settings);

    match solve(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            let mut source = e.source();
            while let Some(cause) = source {
                error!("caused by: {}", cause);
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn solve(settings: &Settings) -> Result<(), Error> {
    match settings.domain {
        DomainName::Parking => run(&ParkingProblem::from_path(&settings.problem)?, settings),
        DomainName::Route => run(&RouteMap::from_path(&settings.problem)?, settings),
    }
}

fn run<D>(problem: &D, settings: &Settings) -> Result<(), Error>
where
    D: Domain,
    D::Action: PartialEq,
{
    let initial_state = problem.initial_state();
    if !settings.engine.is_informed() && settings.heuristic == HeuristicName::Domain {
        warn!(engine = %settings.engine, "uninformed engine, heuristic is ignored");
    }

    let (result, _statistics) = match settings.heuristic {
        HeuristicName::Zero => {
            settings
                .engine
                .search(problem, initial_state.clone(), &mut ZeroHeuristic::new())?
        }
        HeuristicName::Domain => {
            settings
                .engine
                .search(problem, initial_state.clone(), &mut problem.heuristic())?
        }
    };

    match result {
        SearchResult::Success(plan) => {
            info!("validating plan");
            validate(&plan, problem, &initial_state)?;
            info!("plan is valid");
            let cost = plan.cost(problem, &initial_state)?;
            info!(plan_length = plan.len(), plan_cost = cost);

            let text = plan
                .steps()
                .iter()
                .map(|action| problem.describe_action(action))
                .join("\n");
            println!("Plan found:");
            println!("{}", text);
            println!("Plan length: {}", plan.len());
            println!("Plan cost: {}", cost);

            if let Some(output) = &settings.output {
                fs::write(output, text)?;
                info!(output = %output.display(), "plan written");
            }
        }
        SearchResult::Unsolvable => {
            info!("no plan found");
            println!("No solution found");
        }
    }
    Ok(())
}
