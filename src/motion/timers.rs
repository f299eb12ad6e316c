use gloo_timers::callback::{Interval, Timeout};

/// A handle to a scheduled timer. Dropping the handle cancels the timer.
pub trait TimerHandle: 'static {
    fn cancel(self);
}

/// Source of one-shot and repeating timers for the hero animations.
pub trait Timers: Clone + 'static {
    type Handle: TimerHandle;

    fn timeout<F>(&self, millis: u32, callback: F) -> Self::Handle
    where
        F: FnOnce() + 'static;

    fn interval<F>(&self, millis: u32, callback: F) -> Self::Handle
    where
        F: FnMut() + 'static;
}

/// Browser timers backed by `setTimeout` / `setInterval`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GlooTimers;

pub enum GlooHandle {
    Timeout(Timeout),
    Interval(Interval),
}

impl TimerHandle for GlooHandle {
    fn cancel(self) {
        match self {
            GlooHandle::Timeout(timeout) => {
                let _ = timeout.cancel();
            }
            GlooHandle::Interval(interval) => {
                let _ = interval.cancel();
            }
        }
    }
}

impl Timers for GlooTimers {
    type Handle = GlooHandle;

    fn timeout<F>(&self, millis: u32, callback: F) -> GlooHandle
    where
        F: FnOnce() + 'static,
    {
        GlooHandle::Timeout(Timeout::new(millis, callback))
    }

    fn interval<F>(&self, millis: u32, callback: F) -> GlooHandle
    where
        F: FnMut() + 'static,
    {
        GlooHandle::Interval(Interval::new(millis, callback))
    }
}

#[cfg(test)]
pub mod fake {
    //! Deterministic virtual clock for exercising timer-driven code in unit tests.

    use super::{TimerHandle, Timers};
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::{Rc, Weak};

    enum Job {
        Once(Box<dyn FnOnce()>),
        Repeat(Box<dyn FnMut()>),
    }

    struct Task {
        id: u64,
        due: u64,
        period: Option<u32>,
        job: Job,
    }

    #[derive(Default)]
    struct Clock {
        now: u64,
        next_id: u64,
        tasks: Vec<Task>,
        cancelled: HashSet<u64>,
    }

    #[derive(Clone, Default)]
    pub struct FakeTimers {
        clock: Rc<RefCell<Clock>>,
    }

    pub struct FakeHandle {
        id: u64,
        clock: Weak<RefCell<Clock>>,
    }

    impl Drop for FakeHandle {
        fn drop(&mut self) {
            if let Some(clock) = self.clock.upgrade() {
                let mut clock = clock.borrow_mut();
                clock.tasks.retain(|task| task.id != self.id);
                clock.cancelled.insert(self.id);
            }
        }
    }

    impl TimerHandle for FakeHandle {
        fn cancel(self) {}
    }

    impl FakeTimers {
        pub fn now(&self) -> u64 {
            self.clock.borrow().now
        }

        pub fn pending(&self) -> usize {
            self.clock.borrow().tasks.len()
        }

        /// Moves the clock forward, firing every task that falls due in order.
        pub fn advance(&self, millis: u64) {
            let target = self.now() + millis;
            loop {
                let task = {
                    let mut clock = self.clock.borrow_mut();
                    let next = clock
                        .tasks
                        .iter()
                        .enumerate()
                        .filter(|(_, task)| task.due <= target)
                        .min_by_key(|(_, task)| (task.due, task.id))
                        .map(|(pos, _)| pos);
                    match next {
                        Some(pos) => {
                            let task = clock.tasks.remove(pos);
                            clock.now = task.due;
                            task
                        }
                        None => break,
                    }
                };

                match task.job {
                    Job::Once(job) => job(),
                    Job::Repeat(mut job) => {
                        job();
                        let mut clock = self.clock.borrow_mut();
                        if !clock.cancelled.contains(&task.id) {
                            let period = u64::from(task.period.unwrap_or(0).max(1));
                            clock.tasks.push(Task {
                                id: task.id,
                                due: task.due + period,
                                period: task.period,
                                job: Job::Repeat(job),
                            });
                        }
                    }
                }
            }
            self.clock.borrow_mut().now = target;
        }

        fn push(&self, millis: u32, period: Option<u32>, job: Job) -> FakeHandle {
            let mut clock = self.clock.borrow_mut();
            let id = clock.next_id;
            clock.next_id += 1;
            let due = clock.now + u64::from(millis);
            clock.tasks.push(Task { id, due, period, job });
            FakeHandle {
                id,
                clock: Rc::downgrade(&self.clock),
            }
        }
    }

    impl Timers for FakeTimers {
        type Handle = FakeHandle;

        fn timeout<F>(&self, millis: u32, callback: F) -> FakeHandle
        where
            F: FnOnce() + 'static,
        {
            self.push(millis, None, Job::Once(Box::new(callback)))
        }

        fn interval<F>(&self, millis: u32, callback: F) -> FakeHandle
        where
            F: FnMut() + 'static,
        {
            self.push(millis, Some(millis), Job::Repeat(Box::new(callback)))
        }
    }

    mod tests {
        use super::*;
        use std::cell::Cell;

        #[test]
        fn fires_in_schedule_order() {
            let timers = FakeTimers::default();
            let log = Rc::new(RefCell::new(Vec::new()));
            let (a, b) = (log.clone(), log.clone());
            let _late = timers.timeout(200, move || a.borrow_mut().push("late"));
            let _early = timers.timeout(100, move || b.borrow_mut().push("early"));
            timers.advance(250);
            assert_eq!(*log.borrow(), vec!["early", "late"]);
        }

        #[test]
        fn dropped_handle_never_fires() {
            let timers = FakeTimers::default();
            let fired = Rc::new(Cell::new(false));
            let flag = fired.clone();
            let handle = timers.timeout(10, move || flag.set(true));
            drop(handle);
            timers.advance(100);
            assert!(!fired.get());
            assert_eq!(timers.pending(), 0);
        }

        #[test]
        fn interval_repeats_until_dropped() {
            let timers = FakeTimers::default();
            let count = Rc::new(Cell::new(0));
            let counter = count.clone();
            let handle = timers.interval(50, move || counter.set(counter.get() + 1));
            timers.advance(175);
            assert_eq!(count.get(), 3);
            drop(handle);
            timers.advance(500);
            assert_eq!(count.get(), 3);
        }
    }
}
