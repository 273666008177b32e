//! Deferred work requested by the controller.
//!
//! The controller never touches timers itself. It returns [`Task`]s and the
//! host turns them into browser callbacks (see `web::schedule`) or, natively,
//! into entries of a [`TaskQueue`] driven by virtual time.

use std::time::Duration;

/// A message to deliver later.
#[derive(Debug, Clone, PartialEq)]
pub enum Task<M> {
    /// Deliver on the next animation frame
    NextFrame(M),
    /// Deliver once the delay has elapsed
    Delay(Duration, M),
}

#[derive(Debug)]
struct Timer<M> {
    due: Duration,
    seq: u64,
    message: M,
}

/// Virtual-time task queue.
///
/// Frames are delivered by [`TaskQueue::run_frame`]; timers by
/// [`TaskQueue::advance`] in due order, ties broken by scheduling order.
#[derive(Debug)]
pub struct TaskQueue<M> {
    now: Duration,
    seq: u64,
    frames: Vec<M>,
    timers: Vec<Timer<M>>,
}

impl<M> TaskQueue<M> {
    /// Create an empty queue at time zero.
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            seq: 0,
            frames: Vec::new(),
            timers: Vec::new(),
        }
    }

    /// Elapsed virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Queue a task relative to the current virtual time.
    pub fn push(&mut self, task: Task<M>) {
        match task {
            Task::NextFrame(message) => self.frames.push(message),
            Task::Delay(delay, message) => {
                self.seq += 1;
                self.timers.push(Timer {
                    due: self.now + delay,
                    seq: self.seq,
                    message,
                });
            }
        }
    }

    /// Queue several tasks.
    pub fn extend(&mut self, tasks: impl IntoIterator<Item = Task<M>>) {
        for task in tasks {
            self.push(task);
        }
    }

    /// Take every pending frame message.
    pub fn run_frame(&mut self) -> Vec<M> {
        std::mem::take(&mut self.frames)
    }

    /// Move virtual time forward by `by` and take the timers now due.
    pub fn advance(&mut self, by: Duration) -> Vec<M> {
        self.now += by;
        let now = self.now;

        let (mut due, pending): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.timers)
                .into_iter()
                .partition(|timer| timer.due <= now);
        self.timers = pending;

        due.sort_by_key(|timer| (timer.due, timer.seq));
        due.into_iter().map(|timer| timer.message).collect()
    }

    /// Number of frames and timers not yet delivered.
    pub fn pending(&self) -> usize {
        self.frames.len() + self.timers.len()
    }

    /// Whether nothing is waiting.
    pub fn is_idle(&self) -> bool {
        self.pending() == 0
    }
}

impl<M> Default for TaskQueue<M> {
    fn default() -> Self {
        Self::new()
    }
}
