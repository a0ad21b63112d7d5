use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use log::info;
use log::warn;

/// Keeps track of the time spent in the named phases of an algorithm, for
/// example the refinement and quotient phases of minimization.
#[derive(Default)]
pub struct Timing {
    results: Rc<RefCell<Vec<(String, f32)>>>,
}

/// Measures the time between its creation and the call to `finish()`. Finish
/// should be called explicitly, a timer that is dropped without finishing is
/// not registered.
pub struct Timer {
    name: String,
    start: Instant,
    results: Rc<RefCell<Vec<(String, f32)>>>,
    registered: bool,
}

impl Timing {
    /// Creates a new timing object to track timers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new timer with the given name.
    pub fn start(&self, name: &str) -> Timer {
        Timer {
            name: name.to_string(),
            start: Instant::now(),
            results: self.results.clone(),
            registered: false,
        }
    }

    /// Returns the names of the finished timers, in the order in which they finished.
    pub fn names(&self) -> Vec<String> {
        self.results.borrow().iter().map(|(name, _)| name.clone()).collect()
    }

    /// Returns the total time in seconds registered under the given name.
    pub fn total(&self, name: &str) -> f32 {
        self.results
            .borrow()
            .iter()
            .filter(|(other, _)| other == name)
            .map(|(_, time)| time)
            .sum()
    }
}

impl Timer {
    /// Finishes the timer and registers the result.
    pub fn finish(&mut self) {
        let time = self.start.elapsed().as_secs_f64();
        info!("Time {}: {:.3}s", self.name, time);

        self.results.borrow_mut().push((self.name.clone(), time as f32));
        self.registered = true
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        if !self.registered {
            warn!("Timer {} was dropped before 'finish()'", self.name);
        }
    }
}
