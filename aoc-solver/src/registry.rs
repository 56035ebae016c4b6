//! Year/day keyed registry of solver factories

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;

const FIRST_YEAR: u16 = 2015;
const YEARS: u16 = 20;
const DAYS: u8 = 25;
const SLOTS: usize = YEARS as usize * DAYS as usize;

/// Position of a puzzle in the flat slot table.
///
/// Years `2015..2035` and days `1..=25` are addressable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Slot(usize);

impl Slot {
    fn of(year: u16, day: u8) -> Option<Self> {
        let year_offset = year.checked_sub(FIRST_YEAR).filter(|&y| y < YEARS)?;
        let day_offset = day.checked_sub(1).filter(|&d| d < DAYS)?;
        Some(Self(
            usize::from(year_offset) * usize::from(DAYS) + usize::from(day_offset),
        ))
    }

    fn year_day(self) -> (u16, u8) {
        let days = usize::from(DAYS);
        // Both quotients are bounded by the table size
        let year = FIRST_YEAR + (self.0 / days) as u16;
        let day = (self.0 % days) as u8 + 1;
        (year, day)
    }
}

/// Parses an input into a solver instance that borrows from it.
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// What the registry knows about a puzzle without parsing anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    pub year: u16,
    pub day: u8,
    pub parts: u8,
}

struct Registration {
    parts: u8,
    factory: SolverFactory,
}

/// Object-safe registration hook so plugins of different solver types fit
/// in one `inventory` collection.
///
/// Every [`Solver`] that is `Sync + 'static` gets it for free.
pub trait RegisterableSolver: Sync {
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<SolverRegistryBuilder, RegistrationError>;

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
    ) -> Result<SolverRegistryBuilder, RegistrationError> {
        builder.register_factory(year, day, S::PARTS, move |input: &str| {
            let instance = SolverInstance::<S>::new(year, day, input)?;
            Ok(Box::new(instance))
        })
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

/// A solver announced at link time.
///
/// `#[derive(AutoRegisterSolver)]` submits one of these. A manual
/// submission looks like:
///
/// ```no_run
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver, SolverPlugin};
///
/// struct TrebuchetLength;
///
/// impl AocParser for TrebuchetLength {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input)
///     }
/// }
///
/// impl Solver for TrebuchetLength {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, _: u8) -> Result<String, SolveError> {
///         Ok(shared.lines().count().to_string())
///     }
/// }
///
/// aoc_solver::inventory::submit! {
///     SolverPlugin {
///         year: 2023,
///         day: 1,
///         solver: &TrebuchetLength,
///         tags: &["2023", "parsing"],
///     }
/// }
/// ```
pub struct SolverPlugin {
    pub year: u16,
    pub day: u8,
    pub solver: &'static dyn RegisterableSolver,
    /// Free-form labels the CLI filters on, e.g. `"2023"` or `"ranges"`
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);

/// Collects factories, then freezes them into a [`SolverRegistry`].
///
/// ```no_run
/// # use aoc_solver::SolverRegistryBuilder;
/// let registry = SolverRegistryBuilder::new()
///     .register_solver_plugins(|plugin| plugin.tags.contains(&"ranges"))
///     .unwrap()
///     .build();
/// ```
pub struct SolverRegistryBuilder {
    slots: Vec<Option<Registration>>,
}

impl SolverRegistryBuilder {
    pub fn new() -> Self {
        let mut slots = Vec::with_capacity(SLOTS);
        slots.resize_with(SLOTS, || None);
        Self { slots }
    }

    /// Fails with [`RegistrationError::InvalidYearDay`] outside the
    /// addressable range and [`RegistrationError::DuplicateSolver`] when the
    /// slot is taken.
    pub fn register_factory<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        let Slot(index) = Slot::of(year, day).ok_or(RegistrationError::InvalidYearDay(year, day))?;
        let slot = &mut self.slots[index];
        if slot.is_some() {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }
        *slot = Some(Registration {
            parts,
            factory: Box::new(factory),
        });
        Ok(self)
    }

    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Registers every submitted plugin accepted by `filter`.
    pub fn register_solver_plugins<F>(self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        inventory::iter::<SolverPlugin>()
            .into_iter()
            .filter(|plugin| filter(plugin))
            .try_fold(self, |builder, plugin| {
                plugin.solver.register_with(builder, plugin.year, plugin.day)
            })
    }

    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            storage: SolverFactoryStorage { slots: self.slots },
        }
    }
}

impl Default for SolverRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Frozen factory table with constant-time year/day lookup.
pub struct SolverFactoryStorage {
    slots: Vec<Option<Registration>>,
}

impl SolverFactoryStorage {
    fn registration(&self, year: u16, day: u8) -> Option<&Registration> {
        let Slot(index) = Slot::of(year, day)?;
        self.slots[index].as_ref()
    }

    /// Registered puzzles in year, then day order.
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| {
                let parts = slot.as_ref()?.parts;
                let (year, day) = Slot(index).year_day();
                Some(FactoryInfo { year, day, parts })
            })
    }

    pub fn get_info(&self, year: u16, day: u8) -> Option<FactoryInfo> {
        self.registration(year, day).map(|registration| FactoryInfo {
            year,
            day,
            parts: registration.parts,
        })
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.registration(year, day).is_some()
    }

    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub struct SolverRegistry {
    storage: SolverFactoryStorage,
}

impl SolverRegistry {
    pub fn storage(&self) -> &SolverFactoryStorage {
        &self.storage
    }

    /// Parse `input` with the factory registered for `year`/`day`.
    ///
    /// The returned instance borrows `input` and is ready to solve any of
    /// its parts.
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        if Slot::of(year, day).is_none() {
            return Err(SolverError::InvalidYearDay(year, day));
        }
        let registration = self
            .storage
            .registration(year, day)
            .ok_or(SolverError::NotFound(year, day))?;
        (registration.factory)(input).map_err(SolverError::ParseError)
    }
}
