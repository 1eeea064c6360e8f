//! Capability Traits
use tracing::trace;

/// Anything that can produce a `T` on request.
///
/// Implementations are expected to be side-effect free: two calls against the
/// same unmodified state return equal values.
pub trait ValueProvider<T> {
    fn value(&self) -> T;
}

/// Additive combination, returning the receiver for chaining.
pub trait Addable<T> {
    fn add(&mut self, value: T) -> &mut Self;
}

/// Multiplicative combination, returning the receiver for chaining.
pub trait Multipliable<T> {
    fn multiply(&mut self, value: T) -> &mut Self;
}

/// Read a value through the provider capability
pub fn read_value<T, P>(provider: &P) -> T
where
    P: ValueProvider<T> + ?Sized,
{
    trace!(provider = std::any::type_name::<P>(), "Reading provider value");
    provider.value()
}

/// Read every provider in order
pub fn read_all<T>(providers: &[&dyn ValueProvider<T>]) -> Vec<T> {
    providers.iter().map(|provider| read_value(*provider)).collect()
}
