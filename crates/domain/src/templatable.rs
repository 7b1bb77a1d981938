//! Templatable values — a constant, or a function of an action's runtime
//! arguments.
//!
//! Actions store their parameter as a [`Templatable`] and call
//! [`value`](Templatable::value) when they play, so a lambda sees the
//! arguments of that particular invocation.

use std::fmt;

/// Boxed function computing a value from runtime arguments.
pub type ValueFn<T, Args> = Box<dyn Fn(&Args) -> T + Send + Sync>;

/// A configuration value that is either fixed up front or computed from the
/// runtime arguments every time it is resolved.
///
/// `Args` is the runtime argument type of the owning action: `()` when the
/// trigger carries nothing, a tuple when it carries several values.
pub enum Templatable<T, Args> {
    /// A constant, cloned on every resolution.
    Static(T),
    /// Evaluated against the runtime arguments on every resolution.
    Lambda(ValueFn<T, Args>),
}

impl<T, Args> Templatable<T, Args> {
    /// Build a computed value from a closure.
    #[must_use]
    pub fn lambda<F>(f: F) -> Self
    where
        F: Fn(&Args) -> T + Send + Sync + 'static,
    {
        Self::Lambda(Box::new(f))
    }

    /// Whether this value is a constant.
    #[must_use]
    pub fn is_static(&self) -> bool {
        matches!(self, Self::Static(_))
    }
}

impl<T: Clone, Args> Templatable<T, Args> {
    /// Resolve the value for one invocation.
    pub fn value(&self, args: &Args) -> T {
        match self {
            Self::Static(value) => value.clone(),
            Self::Lambda(f) => f(args),
        }
    }
}

impl<T: Default, Args> Default for Templatable<T, Args> {
    fn default() -> Self {
        Self::Static(T::default())
    }
}

impl<T, Args> From<T> for Templatable<T, Args> {
    fn from(value: T) -> Self {
        Self::Static(value)
    }
}

impl<T: fmt::Debug, Args> fmt::Debug for Templatable<T, Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(value) => f.debug_tuple("Static").field(value).finish(),
            Self::Lambda(_) => f.write_str("Lambda(..)"),
        }
    }
}
