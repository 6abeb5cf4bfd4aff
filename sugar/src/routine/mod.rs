//! Frame-stepped routines
//!
//! A routine is any iterator of `()`: each `next()` call is one frame of
//! work, and `None` means it has finished. [`RoutineExt`] chains follow-up
//! work onto a routine and [`FrameScheduler`] drives many of them, one step
//! per frame.

pub mod scheduler;

pub use scheduler::FrameScheduler;

/// Chaining sugar for routines
pub trait RoutineExt: Iterator<Item = ()> + Sized {
    /// Run `action` once, on the frame this routine finishes
    fn then<F: FnOnce()>(self, action: F) -> Then<Self, F> {
        Then {
            routine: self,
            action: Some(action),
        }
    }

    /// Continue with `next` once this routine finishes
    fn then_run<N>(self, next: N) -> std::iter::Chain<Self, N::IntoIter>
    where
        N: IntoIterator<Item = ()>,
    {
        self.chain(next)
    }
}

impl<I: Iterator<Item = ()>> RoutineExt for I {}

/// Routine returned by [`RoutineExt::then`]
pub struct Then<I, F> {
    routine: I,
    action: Option<F>,
}

impl<I, F> Iterator for Then<I, F>
where
    I: Iterator<Item = ()>,
    F: FnOnce(),
{
    type Item = ();

    fn next(&mut self) -> Option<()> {
        if self.routine.next().is_some() {
            return Some(());
        }
        if let Some(action) = self.action.take() {
            action();
        }
        None
    }
}

/// A routine that idles for `frames` frames
pub fn wait_frames(frames: usize) -> impl Iterator<Item = ()> {
    std::iter::repeat(()).take(frames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_then_runs_after_routine() {
        let done = Cell::new(false);
        let mut routine = wait_frames(2).then(|| done.set(true));

        assert_eq!(routine.next(), Some(()));
        assert_eq!(routine.next(), Some(()));
        assert!(!done.get());
        assert_eq!(routine.next(), None);
        assert!(done.get());
    }

    #[test]
    fn test_then_action_runs_once() {
        let runs = Cell::new(0);
        let mut routine = std::iter::empty::<()>().then(|| runs.set(runs.get() + 1));

        assert_eq!(routine.next(), None);
        assert_eq!(routine.next(), None);
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn test_then_run_chains_routines() {
        let steps = wait_frames(1).then_run(wait_frames(2)).count();
        assert_eq!(steps, 3);
    }
}
