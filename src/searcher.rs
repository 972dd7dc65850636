//! Frontier strategies for state-space search.
//!
//! One `Searcher` type covers the whole family; the `Strategy` tag decides
//! which frontier member is expanded next. Admission is identical across
//! variants: a candidate must sit within the depth limit and must not repeat
//! a board along its own path to the root.

use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::Rng;

use crate::error::SearchError;
use crate::heuristic::Heuristic;
use crate::state::State;

/// Selection policy for the next frontier member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Uniform random choice among frontier members.
    Random,
    /// Earliest-inserted member first (FIFO).
    BreadthFirst,
    /// Most-recently-inserted member first (LIFO).
    DepthFirst,
    /// Lowest heuristic estimate first.
    Greedy,
    /// Lowest heuristic estimate plus path cost first.
    AStar,
}

impl Strategy {
    /// The name accepted by [`create_searcher`].
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Random => "random",
            Strategy::BreadthFirst => "breadth-first",
            Strategy::DepthFirst => "depth-first",
            Strategy::Greedy => "greedy",
            Strategy::AStar => "a-star",
        }
    }
}

/// Cooperative cancellation flag shared between a searcher and its caller.
///
/// Cancelling ends the run at the next selection checkpoint; a state that is
/// already being expanded is always finished first.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Terminal outcome of one search run.
#[derive(Debug, Clone)]
pub enum SearchOutcome {
    /// The goal state, with the full path available through predecessors.
    Solved(Rc<State>),
    /// The frontier drained without reaching the goal.
    Exhausted,
    /// A cancel token fired or the timeout elapsed before the frontier
    /// drained.
    Cancelled,
}

/// Outcome and statistics of one search run.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub outcome: SearchOutcome,
    /// States selected and goal-tested, including any cancelled run's
    /// partial progress.
    pub states_tested: usize,
    pub time_elapsed_ms: u64,
}

impl SearchResult {
    /// The goal state, if the run succeeded.
    pub fn solution(&self) -> Option<&Rc<State>> {
        match &self.outcome {
            SearchOutcome::Solved(state) => Some(state),
            _ => None,
        }
    }
}

/// A frontier entry: the state plus the ordering data recorded at admission.
///
/// `score` is the informed-variant priority (zero for uninformed variants);
/// `seq` is a monotonic insertion counter used as the deterministic
/// tie-break, earliest first.
#[derive(Debug)]
struct FrontierEntry {
    score: u32,
    seq: u64,
    state: Rc<State>,
}

/// A configured frontier strategy.
#[derive(Debug)]
pub struct Searcher {
    strategy: Strategy,
    frontier: VecDeque<FrontierEntry>,
    depth_limit: Option<u32>,
    heuristic: Option<Heuristic>,
    timeout: Option<Duration>,
    cancel: Option<CancelToken>,
    num_tested: usize,
    next_seq: u64,
}

impl Searcher {
    fn new(strategy: Strategy, depth_limit: Option<u32>, heuristic: Option<Heuristic>) -> Self {
        Self {
            strategy,
            frontier: VecDeque::new(),
            depth_limit,
            heuristic,
            timeout: None,
            cancel: None,
            num_tested: 0,
            next_seq: 0,
        }
    }

    /// Random search, optionally depth-limited.
    pub fn random(depth_limit: Option<u32>) -> Self {
        Self::new(Strategy::Random, depth_limit, None)
    }

    /// Breadth-first search, optionally depth-limited.
    pub fn breadth_first(depth_limit: Option<u32>) -> Self {
        Self::new(Strategy::BreadthFirst, depth_limit, None)
    }

    /// Depth-first search, optionally depth-limited.
    pub fn depth_first(depth_limit: Option<u32>) -> Self {
        Self::new(Strategy::DepthFirst, depth_limit, None)
    }

    /// Greedy best-first search ordered by `heuristic`. Always unbounded.
    pub fn greedy(heuristic: Heuristic) -> Self {
        Self::new(Strategy::Greedy, None, Some(heuristic))
    }

    /// A* search ordered by `heuristic` plus path cost. Always unbounded.
    pub fn a_star(heuristic: Heuristic) -> Self {
        Self::new(Strategy::AStar, None, Some(heuristic))
    }

    /// Give up after `timeout` of wall-clock time, reporting `Cancelled`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Attach a cancellation token the caller can fire mid-search.
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// States selected and goal-tested so far.
    pub fn states_tested(&self) -> usize {
        self.num_tested
    }

    /// Priority of a candidate under the current strategy. Uninformed
    /// variants ignore scores entirely.
    fn score(&self, state: &State) -> u32 {
        let estimate = self.heuristic.map_or(0, |h| h(state));
        match self.strategy {
            Strategy::Greedy => estimate,
            Strategy::AStar => estimate + state.num_moves,
            _ => 0,
        }
    }

    /// Admission predicate, identical across variants: inside the depth
    /// limit and no board repeated along the candidate's own path.
    fn should_add(&self, state: &State) -> bool {
        if let Some(limit) = self.depth_limit {
            if state.num_moves > limit {
                return false;
            }
        }
        !state.creates_cycle()
    }

    fn add_state(&mut self, state: Rc<State>) {
        let score = self.score(&state);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.frontier.push_back(FrontierEntry { score, seq, state });
    }

    /// Select and remove the next state per the strategy's policy.
    fn next_state(&mut self) -> Option<Rc<State>> {
        let index = match self.strategy {
            Strategy::BreadthFirst => 0,
            Strategy::DepthFirst => self.frontier.len().checked_sub(1)?,
            Strategy::Random => {
                if self.frontier.is_empty() {
                    return None;
                }
                rand::thread_rng().gen_range(0..self.frontier.len())
            }
            Strategy::Greedy | Strategy::AStar => self
                .frontier
                .iter()
                .enumerate()
                .min_by_key(|(_, entry)| (entry.score, entry.seq))
                .map(|(index, _)| index)?,
        };
        self.frontier.remove(index).map(|entry| entry.state)
    }

    /// Run one search from `root`.
    ///
    /// The frontier and counters are reset on entry, so every invocation
    /// owns its own statistics. Cancellation and the timeout are checked
    /// once per iteration, before selection; a selected state is always
    /// fully tested and expanded before the next checkpoint.
    pub fn find_solution(&mut self, root: Rc<State>) -> SearchResult {
        let start = Instant::now();
        self.frontier.clear();
        self.num_tested = 0;
        self.next_seq = 0;
        self.add_state(root);

        loop {
            let interrupted = self.cancel.as_ref().is_some_and(CancelToken::is_cancelled)
                || self.timeout.is_some_and(|t| start.elapsed() >= t);
            if interrupted {
                return self.finish(SearchOutcome::Cancelled, start);
            }

            let Some(state) = self.next_state() else {
                return self.finish(SearchOutcome::Exhausted, start);
            };
            self.num_tested += 1;
            if state.is_goal() {
                return self.finish(SearchOutcome::Solved(state), start);
            }
            for successor in state.generate_successors() {
                if self.should_add(&successor) {
                    self.add_state(successor);
                }
            }
        }
    }

    fn finish(&self, outcome: SearchOutcome, start: Instant) -> SearchResult {
        SearchResult {
            outcome,
            states_tested: self.num_tested,
            time_elapsed_ms: start.elapsed().as_millis() as u64,
        }
    }
}

impl fmt::Display for Searcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} untested, {} tested, ",
            self.strategy.name(),
            self.frontier.len(),
            self.num_tested
        )?;
        match self.depth_limit {
            Some(limit) => write!(f, "depth limit = {limit}"),
            None => write!(f, "no depth limit"),
        }
    }
}

/// Parameter for [`create_searcher`]: uninformed variants take an optional
/// depth limit, informed variants take a heuristic.
#[derive(Debug, Clone, Copy)]
pub enum SearcherParam {
    DepthLimit(Option<u32>),
    Heuristic(Heuristic),
}

/// Build a searcher from an algorithm name.
///
/// Accepted names: `random`, `breadth-first`, `depth-first`, `greedy`,
/// `a-star`. A name outside this set, or a parameter of the wrong kind for
/// the named algorithm, yields an error instead of a searcher.
pub fn create_searcher(algorithm: &str, param: SearcherParam) -> Result<Searcher, SearchError> {
    let strategy = match algorithm {
        "random" => Strategy::Random,
        "breadth-first" => Strategy::BreadthFirst,
        "depth-first" => Strategy::DepthFirst,
        "greedy" => Strategy::Greedy,
        "a-star" => Strategy::AStar,
        other => {
            return Err(SearchError::UnknownAlgorithm {
                name: other.to_string(),
            })
        }
    };

    match (strategy, param) {
        (Strategy::Random, SearcherParam::DepthLimit(limit)) => Ok(Searcher::random(limit)),
        (Strategy::BreadthFirst, SearcherParam::DepthLimit(limit)) => {
            Ok(Searcher::breadth_first(limit))
        }
        (Strategy::DepthFirst, SearcherParam::DepthLimit(limit)) => {
            Ok(Searcher::depth_first(limit))
        }
        (Strategy::Greedy, SearcherParam::Heuristic(heuristic)) => Ok(Searcher::greedy(heuristic)),
        (Strategy::AStar, SearcherParam::Heuristic(heuristic)) => Ok(Searcher::a_star(heuristic)),
        (informed, SearcherParam::DepthLimit(_)) => Err(SearchError::MissingHeuristic {
            algorithm: informed.name().to_string(),
        }),
        (uninformed, SearcherParam::Heuristic(_)) => Err(SearchError::UnexpectedHeuristic {
            algorithm: uninformed.name().to_string(),
        }),
    }
}
