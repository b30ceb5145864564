use std::ops::{Deref, DerefMut};

use crate::host::SimulationControl;

/// Scoped exclusive access to a host.
///
/// Creating the guard suspends the host's stepping; dropping it resumes it,
/// whichever way the enclosing scope is left. All mutation should go through
/// the guard's `DerefMut`.
pub struct Suspension<'a, H: SimulationControl + ?Sized> {
    host: &'a mut H,
}

impl<'a, H: SimulationControl + ?Sized> Suspension<'a, H> {
    pub fn acquire(host: &'a mut H) -> Self {
        host.suspend();
        tracing::trace!("host suspended");
        Self { host }
    }
}

impl<H: SimulationControl + ?Sized> Deref for Suspension<'_, H> {
    type Target = H;

    fn deref(&self) -> &H {
        self.host
    }
}

impl<H: SimulationControl + ?Sized> DerefMut for Suspension<'_, H> {
    fn deref_mut(&mut self) -> &mut H {
        self.host
    }
}

impl<H: SimulationControl + ?Sized> Drop for Suspension<'_, H> {
    fn drop(&mut self) {
        self.host.resume();
        tracing::trace!("host resumed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        depth: i32,
        calls: Vec<&'static str>,
    }

    impl SimulationControl for Counter {
        fn suspend(&mut self) {
            self.depth += 1;
            self.calls.push("suspend");
        }

        fn resume(&mut self) {
            self.depth -= 1;
            self.calls.push("resume");
        }
    }

    fn fails_early(host: &mut Counter) -> Result<(), &'static str> {
        let guard = Suspension::acquire(host);
        if guard.depth == 1 {
            return Err("bail");
        }
        Ok(())
    }

    #[test]
    fn resumes_on_scope_exit() {
        let mut host = Counter::default();
        {
            let mut guard = Suspension::acquire(&mut host);
            guard.calls.push("work");
        }
        assert_eq!(host.depth, 0);
        assert_eq!(host.calls, vec!["suspend", "work", "resume"]);
    }

    #[test]
    fn resumes_on_early_error_return() {
        let mut host = Counter::default();
        assert!(fails_early(&mut host).is_err());
        assert_eq!(host.depth, 0);
        assert_eq!(host.calls, vec!["suspend", "resume"]);
    }
}
