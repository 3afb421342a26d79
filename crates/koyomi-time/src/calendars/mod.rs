//! Concrete holiday calendars.

/// Japanese national holidays since 1868.
pub mod japan;
