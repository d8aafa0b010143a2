use std::collections::HashSet;
use std::path::Path;

use crate::map::{
    load_map_from_file, ChamberGraph, ChamberId, ChamberMap, MapError, NUM_NEIGHBORS,
};
use crate::stack::DLStack;
use crate::{verbose_eprintln, verbose_println};

use super::error::PathError;

/// How treasure chambers are counted toward the stop condition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GoalCounting {
    /// Each treasure chamber counts once per search.
    #[default]
    Distinct,
    /// Every loop iteration with a treasure chamber on top counts, so a
    /// treasure exposed again after a backtrack is counted again.
    PerVisit,
}

/// Outcome of one search run.
#[derive(Debug)]
pub struct SearchReport {
    /// Chambers on the route when the search stopped; the top is the frontier,
    /// the bottom is the entrance.
    pub path: DLStack<ChamberId>,
    /// Treasure count at the end of the run, per the counting policy.
    pub goals_counted: usize,
    /// Treasure chambers in the map.
    pub goals_total: usize,
    pub pushes: usize,
    pub backtracks: usize,
    /// `true` if the search stopped because the treasure count was reached.
    pub complete: bool,
}

impl SearchReport {
    /// Returns the route from the entrance to the frontier.
    pub fn route(&self) -> Vec<ChamberId> {
        self.path.bottom_up().into_iter().copied().collect()
    }
}

/// `PathFinder` searches a chamber map for a route from the entrance to the
/// treasure chambers.
///
/// The search is a depth-first walk with backtracking. The route held on the
/// stack is extended with the best unmarked, unsealed neighbour of the top
/// chamber, in this order of preference: a treasure chamber, a lit chamber,
/// a dim chamber.
/// Within a tier neighbours are tried by slot index 0..5. When nothing
/// qualifies the top chamber is popped and marked abandoned.
pub struct PathFinder<M: ChamberGraph = ChamberMap> {
    map: Option<M>,
    load_error: Option<MapError>,
    counting: GoalCounting,
    quiet: bool,
}

impl PathFinder<ChamberMap> {
    /// Loads a map from `file_path`. A map that fails to load leaves the
    /// finder without a map: `find_path` returns an empty path, `search`
    /// returns `PathError::MapNotLoaded` and `load_error` keeps the cause.
    pub fn from_file<P: AsRef<Path>>(file_path: P, quiet: bool) -> Self {
        match load_map_from_file(file_path) {
            Ok(map) => Self::new(map).quiet(quiet),
            Err(e) => {
                verbose_eprintln!(quiet, "Map not initialized: {}", e);
                let mut finder = Self::unavailable().quiet(quiet);
                finder.load_error = Some(e);
                finder
            }
        }
    }
}

impl<M: ChamberGraph> PathFinder<M> {
    pub fn new(map: M) -> Self {
        Self {
            map: Some(map),
            load_error: None,
            counting: GoalCounting::default(),
            quiet: false,
        }
    }

    /// A finder whose map failed to set up.
    pub fn unavailable() -> Self {
        Self {
            map: None,
            load_error: None,
            counting: GoalCounting::default(),
            quiet: false,
        }
    }

    pub fn with_goal_counting(mut self, counting: GoalCounting) -> Self {
        self.counting = counting;
        self
    }

    /// Suppresses verbose logging for this finder.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Returns the map being searched, if it was set up.
    pub fn map(&self) -> Option<&M> {
        self.map.as_ref()
    }

    pub fn map_mut(&mut self) -> Option<&mut M> {
        self.map.as_mut()
    }

    /// Returns why the map could not be loaded, if `from_file` failed.
    pub fn load_error(&self) -> Option<&MapError> {
        self.load_error.as_ref()
    }

    /// Runs the search and returns the final path stack.
    ///
    /// Returns an empty stack when the map is unavailable or when no treasure
    /// could be reached at all.
    pub fn find_path(&mut self) -> DLStack<ChamberId> {
        match self.search() {
            Ok(report) => report.path,
            Err(e) => {
                verbose_eprintln!(self.quiet, "{} Returning an empty path.", e);
                DLStack::new()
            }
        }
    }

    /// Runs the search and returns the path together with run statistics.
    ///
    /// # Errors
    /// Returns `PathError::MapNotLoaded` if the map failed to load, or
    /// `PathError::GraphUnavailable` if the finder has no map otherwise.
    pub fn search(&mut self) -> Result<SearchReport, PathError> {
        if let Some(e) = &self.load_error {
            return Err(PathError::MapNotLoaded(e.to_string()));
        }
        let quiet = self.quiet;
        let counting = self.counting;
        let map = self.map.as_mut().ok_or(PathError::GraphUnavailable)?;

        let goals_total = map.num_goals();
        let mut path: DLStack<ChamberId> = DLStack::new();
        let mut counted: HashSet<ChamberId> = HashSet::new();
        let mut goals_counted = 0;
        let mut pushes = 0;
        let mut backtracks = 0;
        let mut complete = false;

        let entrance = map.entrance();
        path.push(entrance);
        map.mark_on_path(entrance);
        verbose_println!(
            quiet,
            "Search started at chamber {} with {} treasure chamber(s) to find",
            entrance,
            goals_total
        );

        while !path.is_empty() {
            let current = *path.peek()?;

            if map.is_goal(current) {
                let counts = match counting {
                    GoalCounting::Distinct => counted.insert(current),
                    GoalCounting::PerVisit => true,
                };
                if counts {
                    goals_counted += 1;
                    verbose_println!(
                        quiet,
                        "   => Treasure chamber {} reached ({}/{})",
                        current,
                        goals_counted,
                        goals_total
                    );
                }
                if goals_counted == goals_total {
                    complete = true;
                    break;
                }
            }

            match best_chamber_in(&*map, current, quiet) {
                Some(next) => {
                    path.push(next);
                    map.mark_on_path(next);
                    pushes += 1;
                }
                None => {
                    let popped = path.pop()?;
                    map.mark_abandoned(popped);
                    backtracks += 1;
                }
            }
        }

        verbose_println!(
            quiet,
            "Search finished: path length {}, {} push(es), {} backtrack(s), complete: {}",
            path.len(),
            pushes,
            backtracks,
            complete
        );

        Ok(SearchReport {
            path,
            goals_counted,
            goals_total,
            pushes,
            backtracks,
            complete,
        })
    }

    /// Selects the neighbour of `current` the search would move to next.
    /// Returns `None` when the map is unavailable or no neighbour qualifies.
    pub fn best_chamber(&self, current: ChamberId) -> Option<ChamberId> {
        best_chamber_in(self.map.as_ref()?, current, self.quiet)
    }

    /// Returns `true` if `id` is an unsealed, unlit chamber next to a lit one.
    pub fn is_dim(&self, id: ChamberId) -> bool {
        self.map
            .as_ref()
            .is_some_and(|map| is_dim_in(map, id, self.quiet))
    }
}

/// Existing neighbours of `id` in slot order. A failing slot is logged and skipped.
fn neighbors_of<M: ChamberGraph>(
    map: &M,
    id: ChamberId,
    quiet: bool,
) -> impl Iterator<Item = ChamberId> + '_ {
    (0..NUM_NEIGHBORS).filter_map(move |index| match map.neighbor(id, index) {
        Ok(neighbor) => neighbor,
        Err(e) => {
            verbose_eprintln!(quiet, "Skipping slot {} of chamber {}: {}", index, id, e);
            None
        }
    })
}

fn best_chamber_in<M: ChamberGraph>(map: &M, current: ChamberId, quiet: bool) -> Option<ChamberId> {
    let candidates =
        || neighbors_of(map, current, quiet).filter(|&n| !map.is_marked(n) && !map.is_sealed(n));

    candidates()
        .find(|&n| map.is_goal(n))
        .or_else(|| candidates().find(|&n| map.is_lit(n)))
        .or_else(|| candidates().find(|&n| is_dim_in(map, n, quiet)))
}

fn is_dim_in<M: ChamberGraph>(map: &M, id: ChamberId, quiet: bool) -> bool {
    !map.is_sealed(id) && !map.is_lit(id) && neighbors_of(map, id, quiet).any(|n| map.is_lit(n))
}
