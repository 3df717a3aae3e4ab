//! Solver registry: maps puzzles to factories that parse input into solvers

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;
use std::collections::BTreeMap;
use std::fmt;

/// First Advent of Code year
pub const FIRST_YEAR: u16 = 2015;
/// Last year the registry accepts
pub const LAST_YEAR: u16 = 2034;
/// Puzzle days per event
pub const DAYS_PER_YEAR: u8 = 25;

/// A validated `(year, day)` pair. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PuzzleId {
    year: u16,
    day: u8,
}

impl PuzzleId {
    /// Returns `None` unless `year` is in `FIRST_YEAR..=LAST_YEAR` and `day`
    /// in `1..=DAYS_PER_YEAR`.
    pub fn new(year: u16, day: u8) -> Option<Self> {
        let valid = (FIRST_YEAR..=LAST_YEAR).contains(&year) && (1..=DAYS_PER_YEAR).contains(&day);
        valid.then_some(Self { year, day })
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn day(&self) -> u8 {
        self.day
    }
}

impl fmt::Display for PuzzleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{:02}", self.year, self.day)
    }
}

/// Creates a parsed solver from raw input
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// Metadata about a registered solver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactoryInfo {
    pub year: u16,
    pub day: u8,
    /// Number of parts the solver supports
    pub parts: u8,
    /// Tags supplied by the plugin, empty for manual registrations
    pub tags: &'static [&'static str],
}

struct FactoryEntry {
    factory: SolverFactory,
    parts: u8,
    tags: &'static [&'static str],
}

/// Collects solver factories, rejecting duplicates and invalid puzzles.
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver, SolverRegistryBuilder};
///
/// struct Echo;
///
/// impl AocParser for Echo {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input)
///     }
/// }
///
/// impl Solver for Echo {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, _part: u8) -> Result<String, SolveError> {
///         Ok(shared.to_string())
///     }
/// }
///
/// let registry = SolverRegistryBuilder::new()
///     .register_solver::<Echo>(2023, 1, &[])
///     .unwrap()
///     .build();
/// let mut solver = registry.create_solver(2023, 1, "hi").unwrap();
/// assert_eq!(solver.solve(1).unwrap().answer, "hi");
/// ```
#[derive(Default)]
pub struct SolverRegistryBuilder {
    entries: BTreeMap<PuzzleId, FactoryEntry>,
}

impl SolverRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory for `year`/`day` with an explicit part count
    pub fn register<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        tags: &'static [&'static str],
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        let id = PuzzleId::new(year, day).ok_or(RegistrationError::InvalidPuzzle(year, day))?;
        if self.entries.contains_key(&id) {
            return Err(RegistrationError::Duplicate(year, day));
        }

        tracing::debug!(puzzle = %id, parts, "registering solver");
        self.entries.insert(
            id,
            FactoryEntry {
                factory: Box::new(factory),
                parts,
                tags,
            },
        );
        Ok(self)
    }

    /// Register the [`Solver`] type `S` for `year`/`day`
    pub fn register_solver<S>(
        self,
        year: u16,
        day: u8,
        tags: &'static [&'static str],
    ) -> Result<Self, RegistrationError>
    where
        S: Solver + 'static,
    {
        self.register(year, day, S::PARTS, tags, move |input: &str| {
            let instance = SolverInstance::<S>::new(year, day, input)?;
            Ok(Box::new(instance))
        })
    }

    /// Register every plugin submitted through `inventory`
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_plugins(|_| true)
    }

    /// Register the plugins for which `filter` returns `true`.
    ///
    /// ```no_run
    /// # use aoc_solver::SolverRegistryBuilder;
    /// let registry = SolverRegistryBuilder::new()
    ///     .register_plugins(|plugin| plugin.year == 2023 && plugin.tags.contains(&"grid"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin
                    .solver
                    .register_with(self, plugin.year, plugin.day, plugin.tags)?;
            }
        }
        Ok(self)
    }

    /// Freeze the builder into an immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

/// Immutable lookup of registered solvers
pub struct SolverRegistry {
    entries: BTreeMap<PuzzleId, FactoryEntry>,
}

impl SolverRegistry {
    /// Parse `input` with the solver registered for `year`/`day`
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let id = PuzzleId::new(year, day).ok_or(SolverError::InvalidPuzzle(year, day))?;
        let entry = self
            .entries
            .get(&id)
            .ok_or(SolverError::NotFound(year, day))?;

        (entry.factory)(input).map_err(SolverError::ParseError)
    }

    /// Metadata for every registered solver in chronological order
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.entries.iter().map(|(id, entry)| info(id, entry))
    }

    /// Metadata for a single solver
    pub fn get_info(&self, year: u16, day: u8) -> Option<FactoryInfo> {
        let id = PuzzleId::new(year, day)?;
        self.entries.get(&id).map(|entry| info(&id, entry))
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.get_info(year, day).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn info(id: &PuzzleId, entry: &FactoryEntry) -> FactoryInfo {
    FactoryInfo {
        year: id.year(),
        day: id.day(),
        parts: entry.parts,
        tags: entry.tags,
    }
}

/// Object-safe registration hook, so plugins of different solver types can
/// live in one `inventory` collection.
///
/// Every `Solver + Sync + 'static` type implements it.
pub trait RegisterableSolver: Sync {
    /// Register this solver with `builder` for `year`/`day`
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        year: u16,
        day: u8,
        tags: &'static [&'static str],
    ) -> Result<SolverRegistryBuilder, RegistrationError>;

    /// Number of parts the solver supports
    fn parts(&self) -> u8;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        year: u16,
        day: u8,
        tags: &'static [&'static str],
    ) -> Result<SolverRegistryBuilder, RegistrationError> {
        builder.register_solver::<S>(year, day, tags)
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

/// A solver submitted for automatic registration.
///
/// Usually produced by `#[derive(AutoRegisterSolver)]`; written by hand it
/// looks like this:
///
/// ```ignore
/// aoc_solver::inventory::submit! {
///     aoc_solver::SolverPlugin {
///         year: 2023,
///         day: 17,
///         solver: &Day17,
///         tags: &["grid", "dijkstra"],
///     }
/// }
/// ```
pub struct SolverPlugin {
    pub year: u16,
    pub day: u8,
    /// The solver, type-erased
    pub solver: &'static dyn RegisterableSolver,
    /// Free-form labels used for filtering
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);
