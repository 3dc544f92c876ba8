//! Concrete problems that can be loaded from text files and handed to the
//! search engines.

pub mod parking;
mod point;
pub mod route;

pub use parking::{ParkingAction, ParkingHeuristic, ParkingProblem, ParkingState};
pub use point::{Direction, Point};
pub use route::{EstimateTable, RoadId, RouteMap};

use crate::search::{Heuristic, SearchProblem};
use serde::Deserialize;
use std::{fs, path::Path, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: unexpected tile {tile:?}")]
    UnknownTile { line: usize, tile: char },
    #[error("car {car} appears more than once")]
    DuplicateCar { car: char },
    #[error("slot {slot} appears more than once")]
    DuplicateSlot { slot: char },
    #[error("cars must be lettered from A without gaps, car {car} is missing")]
    MissingCar { car: char },
    #[error("line {line}: cannot parse {text:?}")]
    Syntax { line: u32, text: String },
    #[error("line {line}: {value} is not a valid cost, costs must be finite and non-negative")]
    InvalidCost { line: u32, value: f64 },
    #[error("line {line}: start node given twice")]
    DuplicateStart { line: u32 },
    #[error("no start node given")]
    MissingStart,
}

/// A problem that can be read from text and ships with its own heuristic.
pub trait Domain: SearchProblem + Sized {
    type DomainHeuristic: Heuristic<Self>;

    fn from_text(text: &str) -> Result<Self, ParseError>;

    fn from_path(path: &Path) -> Result<Self, ParseError> {
        let text = fs::read_to_string(path).map_err(|source| ParseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_text(&text)
    }

    fn heuristic(&self) -> Self::DomainHeuristic;

    /// A human readable rendering of an action.
    fn describe_action(&self, action: &Self::Action) -> String;
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum DomainName {
    #[default]
    #[clap(help = "A parking lot grid, cars A-J must reach slots 0-9.")]
    Parking,
    #[clap(help = "A weighted road map given as start/goal/edge lines.")]
    Route,
}
