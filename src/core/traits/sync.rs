//! Interrupt-shared state abstraction.
//!
//! The calibration engine shares a small amount of state between interrupt
//! handlers (PPS edge, counter overflow) and the foreground controller: the
//! completion flag, the pulse index, the overflow tally, and the peripherals
//! those handlers drive. The whole concurrency contract reduces to "mask the
//! interrupt sources around any multi-word access" — never a lock, because
//! locks cannot be taken inside interrupt handlers on this class of
//! hardware.
//!
//! [`SharedState`] expresses that contract as closure-scoped access so the
//! masked region cannot leak: every exit path out of the closure restores
//! the interrupt state.

/// Closure-scoped access to state shared with interrupt context.
///
/// Implementations:
/// - [`IrqState`] for embedded targets, masking interrupts for the duration
///   of the closure (feature `embassy`)
/// - [`MockState`] for single-threaded host tests
pub trait SharedState<T> {
    /// Access state immutably.
    fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R;

    /// Access state mutably.
    fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R;
}

// ============================================================================
// Critical-section implementation (embedded targets)
// ============================================================================

#[cfg(feature = "embassy")]
use embassy_sync::blocking_mutex::{raw::CriticalSectionRawMutex, Mutex};

/// Interrupt-masked shared state for embedded targets.
///
/// Backed by Embassy's blocking mutex over a critical section: while the
/// closure runs, the interrupt sources that mutate this state cannot fire,
/// so reads across the counter value and the overflow tally cannot tear.
///
/// `new` is const so the cell can live in a `static` that both the
/// interrupt handlers and the foreground reference.
#[cfg(feature = "embassy")]
pub struct IrqState<T> {
    inner: Mutex<CriticalSectionRawMutex, core::cell::RefCell<T>>,
}

#[cfg(feature = "embassy")]
impl<T> IrqState<T> {
    /// Creates a new `IrqState` wrapping the given value.
    pub const fn new(value: T) -> Self {
        Self {
            inner: Mutex::new(core::cell::RefCell::new(value)),
        }
    }
}

#[cfg(feature = "embassy")]
impl<T> SharedState<T> for IrqState<T> {
    fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        self.inner.lock(|cell| f(&cell.borrow()))
    }

    fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        self.inner.lock(|cell| f(&mut cell.borrow_mut()))
    }
}

// ============================================================================
// Mock implementation (always available for testing)
// ============================================================================

/// Mock shared state using `RefCell` for single-threaded testing.
///
/// # Panics
///
/// Panics if borrowing rules are violated, which indicates a bug in the
/// test code (nested `with` calls on the same cell).
pub struct MockState<T> {
    inner: core::cell::RefCell<T>,
}

impl<T> MockState<T> {
    /// Creates a new `MockState` wrapping the given value.
    pub fn new(value: T) -> Self {
        Self {
            inner: core::cell::RefCell::new(value),
        }
    }
}

impl<T> SharedState<T> for MockState<T> {
    fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.inner.borrow())
    }

    fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        f(&mut self.inner.borrow_mut())
    }
}
