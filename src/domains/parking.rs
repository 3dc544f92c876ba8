//! The parking lot puzzle. Cars have to be shuffled around a walled grid one
//! cell at a time until every car stands on its own slot.
//!
//! The text format is a grid of tiles: `#` is a wall, `.` an empty passage,
//! `A`..`J` a car and `0`..`9` a slot, where slot `i` belongs to the `i`-th car.
//! Every tile other than `#` is a passage.

use crate::domains::{Direction, Domain, ParseError, Point};
use crate::search::{Heuristic, HeuristicValue, SearchProblem};
use smallvec::SmallVec;
use std::collections::{HashMap, HashSet};
use std::fmt::{self, Display};
use strum::IntoEnumIterator;

const MAX_CARS: usize = 10;
/// Base cost of a move, the move of car `i` costs `CAR_RANK_BASE - i`.
const CAR_RANK_BASE: usize = 26;
/// Extra cost for driving onto a slot that belongs to another car.
const FOREIGN_SLOT_PENALTY: f64 = 100.;

/// Position of every car, indexed by car.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParkingState(SmallVec<[Point; MAX_CARS]>);

impl ParkingState {
    pub fn cars(&self) -> &[Point] {
        &self.0
    }

    fn is_occupied(&self, position: &Point) -> bool {
        self.0.contains(position)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParkingAction {
    pub car: usize,
    pub direction: Direction,
}

impl ParkingAction {
    pub fn new(car: usize, direction: Direction) -> Self {
        Self { car, direction }
    }
}

impl Display for ParkingAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", car_letter(self.car), self.direction)
    }
}

fn car_letter(car: usize) -> char {
    (b'A' + car as u8) as char
}

#[derive(Debug, Clone)]
pub struct ParkingProblem {
    /// Every position a car can be in, i.e. every tile except walls.
    passages: HashSet<Point>,
    cars: ParkingState,
    /// Slot owner for every position holding a slot.
    slots: HashMap<Point, usize>,
    width: usize,
    height: usize,
}

impl ParkingProblem {
    pub fn num_cars(&self) -> usize {
        self.cars.0.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Where the slot of `car` is, if it has one.
    pub fn slot_of(&self, car: usize) -> Option<Point> {
        self.slots
            .iter()
            .find(|(_, &owner)| owner == car)
            .map(|(&position, _)| position)
    }

    /// Draw `state` in the same format the problem was read from.
    pub fn render(&self, state: &ParkingState) -> String {
        let mut lines = Vec::with_capacity(self.height);
        for y in 0..self.height as i32 {
            let mut line = String::with_capacity(self.width);
            for x in 0..self.width as i32 {
                let position = Point::new(x, y);
                let tile = if let Some(car) = state.0.iter().position(|&p| p == position) {
                    car_letter(car)
                } else if let Some(&slot) = self.slots.get(&position) {
                    (b'0' + slot as u8) as char
                } else if self.passages.contains(&position) {
                    '.'
                } else {
                    '#'
                };
                line.push(tile);
            }
            lines.push(line);
        }
        lines.join("\n")
    }
}

impl SearchProblem for ParkingProblem {
    type State = ParkingState;
    type Action = ParkingAction;

    fn initial_state(&self) -> ParkingState {
        self.cars.clone()
    }

    fn is_goal(&self, state: &ParkingState) -> bool {
        state
            .0
            .iter()
            .enumerate()
            .all(|(car, position)| self.slots.get(position) == Some(&car))
    }

    fn actions(&self, state: &ParkingState) -> Vec<ParkingAction> {
        let mut actions = vec![];
        for (car, &position) in state.0.iter().enumerate() {
            for direction in Direction::iter() {
                let destination = position + direction.to_vector();
                if self.passages.contains(&destination) && !state.is_occupied(&destination) {
                    actions.push(ParkingAction::new(car, direction));
                }
            }
        }
        actions
    }

    fn successor(&self, state: &ParkingState, action: &ParkingAction) -> ParkingState {
        let mut next = state.clone();
        next.0[action.car] = state.0[action.car] + action.direction.to_vector();
        next
    }

    fn cost(&self, state: &ParkingState, action: &ParkingAction) -> f64 {
        let destination = state.0[action.car] + action.direction.to_vector();
        let mut cost = (CAR_RANK_BASE - action.car) as f64;
        if matches!(self.slots.get(&destination), Some(&owner) if owner != action.car) {
            cost += FOREIGN_SLOT_PENALTY;
        }
        cost
    }
}

impl Domain for ParkingProblem {
    type DomainHeuristic = ParkingHeuristic;

    fn from_text(text: &str) -> Result<Self, ParseError> {
        let mut passages = HashSet::new();
        let mut cars: [Option<Point>; MAX_CARS] = [None; MAX_CARS];
        let mut slots = HashMap::new();
        let mut seen_slots = HashSet::new();

        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
        let height = lines.len();

        for (y, line) in lines.iter().enumerate() {
            for (x, tile) in line.chars().enumerate() {
                let position = Point::new(x as i32, y as i32);
                match tile {
                    '#' => continue,
                    '.' => {}
                    'A'..='J' => {
                        let car = (tile as u8 - b'A') as usize;
                        if cars[car].replace(position).is_some() {
                            return Err(ParseError::DuplicateCar { car: tile });
                        }
                    }
                    '0'..='9' => {
                        if !seen_slots.insert(tile) {
                            return Err(ParseError::DuplicateSlot { slot: tile });
                        }
                        slots.insert(position, (tile as u8 - b'0') as usize);
                    }
                    _ => return Err(ParseError::UnknownTile { line: y + 1, tile }),
                }
                passages.insert(position);
            }
        }

        let num_cars = cars.iter().rposition(Option::is_some).map_or(0, |i| i + 1);
        let mut positions = SmallVec::new();
        for (car, position) in cars.iter().take(num_cars).enumerate() {
            match position {
                Some(position) => positions.push(*position),
                None => return Err(ParseError::MissingCar { car: car_letter(car) }),
            }
        }

        Ok(Self {
            passages,
            cars: ParkingState(positions),
            slots,
            width,
            height,
        })
    }

    fn heuristic(&self) -> ParkingHeuristic {
        ParkingHeuristic::new(self)
    }

    fn describe_action(&self, action: &ParkingAction) -> String {
        action.to_string()
    }
}

/// Every car still has to travel at least the manhattan distance to its slot,
/// and each step of car `i` costs at least `26 - i`. Cars without a slot add
/// nothing.
#[derive(Debug, Clone)]
pub struct ParkingHeuristic {
    slots: Vec<Option<Point>>,
}

impl ParkingHeuristic {
    pub fn new(problem: &ParkingProblem) -> Self {
        Self {
            slots: (0..problem.num_cars())
                .map(|car| problem.slot_of(car))
                .collect(),
        }
    }
}

impl Heuristic<ParkingProblem> for ParkingHeuristic {
    fn evaluate(&mut self, state: &ParkingState, _problem: &ParkingProblem) -> HeuristicValue {
        let estimate: f64 = state
            .cars()
            .iter()
            .zip(self.slots.iter())
            .enumerate()
            .filter_map(|(car, (position, slot))| slot.map(|slot| (car, position, slot)))
            .map(|(car, position, slot)| {
                (position.manhattan_distance(&slot) as usize * (CAR_RANK_BASE - car)) as f64
            })
            .sum();
        estimate.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::search_engines::{
        astar_search, breadth_first_search, uniform_cost_search, AStar, SearchEngine, UCS,
    };
    use crate::search::{validate, ZeroHeuristic};
    use crate::test_utils::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn from_text_reads_cars_and_slots() {
        let problem = ParkingProblem::from_text(PARKING_EASY_TEXT).unwrap();
        assert_eq!(problem.num_cars(), 2);
        assert_eq!(problem.width(), 7);
        assert_eq!(problem.height(), 4);
        assert_eq!(
            problem.initial_state().cars(),
            &[Point::new(1, 1), Point::new(1, 2)]
        );
        assert_eq!(problem.slot_of(0), Some(Point::new(5, 1)));
        assert_eq!(problem.slot_of(1), Some(Point::new(5, 2)));
        assert_eq!(problem.render(&problem.initial_state()), PARKING_EASY_TEXT.trim());
    }

    #[test]
    fn from_text_rejects_bad_grids() {
        assert!(matches!(
            ParkingProblem::from_text("#A?#"),
            Err(ParseError::UnknownTile { line: 1, tile: '?' })
        ));
        assert!(matches!(
            ParkingProblem::from_text("#AA#"),
            Err(ParseError::DuplicateCar { car: 'A' })
        ));
        assert!(matches!(
            ParkingProblem::from_text("#A.B#\n#0.1#"),
            Ok(_)
        ));
        assert!(matches!(
            ParkingProblem::from_text("#A.C#"),
            Err(ParseError::MissingCar { car: 'B' })
        ));
    }

    #[test]
    fn actions_skip_walls_and_other_cars() {
        let problem = ParkingProblem::from_text(PARKING_EASY_TEXT).unwrap();
        let actions = problem.actions(&problem.initial_state());
        assert_eq!(
            actions,
            vec![
                ParkingAction::new(0, Direction::Right),
                ParkingAction::new(1, Direction::Right),
            ]
        );
    }

    #[test]
    fn cost_ranks_cars_and_penalises_foreign_slots() {
        let problem = ParkingProblem::from_text("#A10#").unwrap();
        let state = problem.initial_state();
        // Car A drives onto the slot of car B.
        assert_approx_eq!(
            problem.cost(&state, &ParkingAction::new(0, Direction::Right)),
            126.
        );
        let state = problem.successor(&state, &ParkingAction::new(0, Direction::Right));
        assert_approx_eq!(
            problem.cost(&state, &ParkingAction::new(0, Direction::Right)),
            26.
        );
    }

    #[test]
    fn easy_instance_is_solved_optimally() {
        let problem = ParkingProblem::from_text(PARKING_EASY_TEXT).unwrap();
        let initial_state = problem.initial_state();

        let bfs = breadth_first_search(&problem, initial_state.clone())
            .unwrap()
            .unwrap();
        assert_eq!(bfs.len(), 8);
        validate(&bfs, &problem, &initial_state).unwrap();

        let ucs = uniform_cost_search(&problem, initial_state.clone())
            .unwrap()
            .unwrap();
        let astar = astar_search(&problem, initial_state.clone(), problem.heuristic())
            .unwrap()
            .unwrap();
        validate(&astar, &problem, &initial_state).unwrap();
        let ucs_cost = ucs.cost(&problem, &initial_state).unwrap();
        assert_approx_eq!(ucs_cost, 4. * 26. + 4. * 25.);
        assert_approx_eq!(astar.cost(&problem, &initial_state).unwrap(), ucs_cost);
    }

    #[test]
    fn astar_matches_uniform_cost_on_swap() {
        let problem = ParkingProblem::from_text(PARKING_SWAP_TEXT).unwrap();
        let initial_state = problem.initial_state();
        let (blind, _) = UCS::new()
            .search(&problem, initial_state.clone(), &mut ZeroHeuristic::new())
            .unwrap();
        let (informed, statistics) = AStar::new()
            .search(&problem, initial_state.clone(), &mut problem.heuristic())
            .unwrap();
        let blind = blind.into_plan().unwrap();
        let informed = informed.into_plan().unwrap();
        validate(&informed, &problem, &initial_state).unwrap();
        assert_approx_eq!(
            informed.cost(&problem, &initial_state).unwrap(),
            blind.cost(&problem, &initial_state).unwrap()
        );
        // A right twice, B up twice and left twice.
        assert_approx_eq!(blind.cost(&problem, &initial_state).unwrap(), 2. * 26. + 4. * 25.);
        assert!(statistics.evaluated_nodes() > 0);
    }

    #[test]
    fn heuristic_is_zero_at_goal() {
        let problem = ParkingProblem::from_text("#0A#\n#1B#").unwrap();
        let mut heuristic = problem.heuristic();
        let goal = problem.successor(
            &problem.successor(
                &problem.initial_state(),
                &ParkingAction::new(0, Direction::Left),
            ),
            &ParkingAction::new(1, Direction::Left),
        );
        assert!(problem.is_goal(&goal));
        assert_eq!(heuristic.evaluate(&goal, &problem), HeuristicValue::from(0.));
        assert_eq!(
            heuristic.evaluate(&problem.initial_state(), &problem),
            HeuristicValue::from(26. + 25.)
        );
    }

    #[test]
    fn blocked_instance_has_no_solution() {
        let problem = ParkingProblem::from_text(PARKING_BLOCKED_TEXT).unwrap();
        assert_eq!(
            breadth_first_search(&problem, problem.initial_state()).unwrap(),
            None
        );
    }
}
