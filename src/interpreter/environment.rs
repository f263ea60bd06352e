use std::collections::HashMap;

/// Variable bindings that persist across evaluations in one session.
///
/// Assignment inserts or overwrites a binding. Bindings are only removed by
/// [`remove`](Self::remove) or [`reset`](Self::reset), never by evaluation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    variables: HashMap<String, f64>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value bound to `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn set(&mut self, name: impl Into<String>, value: f64) {
        self.variables.insert(name.into(), value);
    }

    /// Removes the binding for `name` and returns its value.
    pub fn remove(&mut self, name: &str) -> Option<f64> {
        self.variables.remove(name)
    }

    /// Removes every binding.
    pub fn reset(&mut self) {
        self.variables.clear();
    }

    /// Number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` when no variable is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Returns all bindings ordered by name.
    #[must_use]
    pub fn iter_sorted(&self) -> Vec<(&str, f64)> {
        let mut bindings: Vec<(&str, f64)> = self.variables
                                                 .iter()
                                                 .map(|(name, value)| (name.as_str(), *value))
                                                 .collect();
        bindings.sort_unstable_by(|a, b| a.0.cmp(b.0));
        bindings
    }
}

/// Read-only named constants.
///
/// Constants are consulted only when a name is not bound in the
/// [`Environment`], so a variable can shadow a constant of the same name.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantTable {
    constants: HashMap<String, f64>,
}

/// Golden ratio, `(1 + sqrt(5)) / 2`.
pub const PHI: f64 = 1.618_033_988_749_895;
/// Speed of light in vacuum, m/s.
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;
/// Newtonian constant of gravitation, m^3 kg^-1 s^-2.
pub const GRAVITATIONAL_CONSTANT: f64 = 6.674_30e-11;
/// Planck constant, J s.
pub const PLANCK_CONSTANT: f64 = 6.626_070_15e-34;

impl ConstantTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self { constants: HashMap::new() }
    }

    /// Adds or replaces a constant.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        self.constants.insert(name.into(), value);
    }

    /// Returns the value of the constant `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.constants.get(name).copied()
    }

    /// Number of constants in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.constants.len()
    }

    /// Returns `true` when the table holds no constants.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }

    /// Returns all constants ordered by name.
    #[must_use]
    pub fn iter_sorted(&self) -> Vec<(&str, f64)> {
        let mut constants: Vec<(&str, f64)> = self.constants
                                                  .iter()
                                                  .map(|(name, value)| (name.as_str(), *value))
                                                  .collect();
        constants.sort_unstable_by(|a, b| a.0.cmp(b.0));
        constants
    }
}

/// The built-in constants: `pi`, `e`, `phi`, `tau`, `c`, `G` and `h`.
impl Default for ConstantTable {
    fn default() -> Self {
        [("pi", std::f64::consts::PI),
         ("e", std::f64::consts::E),
         ("phi", PHI),
         ("tau", std::f64::consts::TAU),
         ("c", SPEED_OF_LIGHT),
         ("G", GRAVITATIONAL_CONSTANT),
         ("h", PLANCK_CONSTANT)].into_iter()
                                .collect()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for ConstantTable {
    fn from_iter<T: IntoIterator<Item = (S, f64)>>(iter: T) -> Self {
        Self { constants: iter.into_iter()
                              .map(|(name, value)| (name.into(), value))
                              .collect(), }
    }
}
