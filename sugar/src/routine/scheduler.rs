//! Per-frame driver for routines and deferred actions

use super::RoutineExt;
use tracing::trace;

type BoxedRoutine = Box<dyn Iterator<Item = ()>>;

/// Advances a set of routines by one step each frame
#[derive(Default)]
pub struct FrameScheduler {
    routines: Vec<BoxedRoutine>,
    frame: u64,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start driving a routine; its first step happens on the next tick
    pub fn start<R>(&mut self, routine: R)
    where
        R: IntoIterator<Item = ()>,
        R::IntoIter: 'static,
    {
        self.routines.push(Box::new(routine.into_iter()));
        trace!(pending = self.routines.len(), "Routine started");
    }

    /// Run `action` on the next tick
    pub fn invoke_next_frame<F>(&mut self, action: F)
    where
        F: FnOnce() + 'static,
    {
        self.start(std::iter::empty::<()>().then(action));
    }

    /// Check `condition` once per tick and run `action` on the first tick it
    /// holds
    pub fn invoke_when<C, F>(&mut self, mut condition: C, action: F)
    where
        C: FnMut() -> bool + 'static,
        F: FnOnce() + 'static,
    {
        let waiting = std::iter::from_fn(move || if condition() { None } else { Some(()) });
        self.start(waiting.then(action));
    }

    /// Advance every routine by one step. Returns how many finished.
    pub fn tick(&mut self) -> usize {
        self.frame += 1;
        let before = self.routines.len();
        self.routines.retain_mut(|routine| routine.next().is_some());
        let finished = before - self.routines.len();
        trace!(
            frame = self.frame,
            finished = finished,
            pending = self.routines.len(),
            "Scheduler tick"
        );
        finished
    }

    /// Routines still running
    pub fn pending(&self) -> usize {
        self.routines.len()
    }

    /// Number of ticks so far
    pub fn frame(&self) -> u64 {
        self.frame
    }
}
