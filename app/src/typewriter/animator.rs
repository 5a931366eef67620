use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use super::machine::Typewriter;

/// A source of one-shot timers.
pub trait Scheduler {
    type Handle: TimerHandle;

    /// Run `callback` once after `delay`. The callback must not run
    /// synchronously from within `schedule`.
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

pub trait TimerHandle {
    /// Make sure the callback never runs. Calling this after the timer fired
    /// is harmless.
    fn cancel(self);
}

/// Drives a [`Typewriter`] with a [`Scheduler`].
///
/// An animator owns at most one pending timer. Every timer is tagged with the
/// generation it was scheduled in, and [`cancel`](Self::cancel) bumps the
/// generation, so a callback that slips through after a cancel or a
/// [`reconfigure`](Self::reconfigure) finds itself stale and does nothing.
///
/// The displayed text is pushed to the `on_change` callback given to
/// [`new`](Self::new); it is called once on [`start`](Self::start) and then
/// every time the text changes. Dropping the animator cancels it.
pub struct Animator<S: Scheduler + 'static> {
    shared: Rc<Shared<S>>,
}

struct Shared<S: Scheduler> {
    scheduler: S,
    on_change: Box<dyn Fn(&str)>,
    state: RefCell<State<S::Handle>>,
}

struct State<H> {
    machine: Typewriter,
    pending: Option<H>,
    running: bool,
    generation: u64,
}

impl<S: Scheduler + 'static> Animator<S> {
    pub fn new(machine: Typewriter, scheduler: S, on_change: impl Fn(&str) + 'static) -> Self {
        Self {
            shared: Rc::new(Shared {
                scheduler,
                on_change: Box::new(on_change),
                state: RefCell::new(State {
                    machine,
                    pending: None,
                    running: false,
                    generation: 0,
                }),
            }),
        }
    }

    pub fn start(&self) {
        let displayed = {
            let mut state = self.shared.state.borrow_mut();
            if state.running || state.machine.is_idle() {
                return;
            }
            state.running = true;
            state.machine.displayed().to_owned()
        };
        schedule_next(&self.shared);
        (self.shared.on_change)(&displayed);
    }

    pub fn cancel(&self) {
        let pending = {
            let mut state = self.shared.state.borrow_mut();
            state.running = false;
            state.generation += 1;
            state.pending.take()
        };
        if let Some(handle) = pending {
            handle.cancel();
        }
    }

    /// Swap in a new machine, e.g. after the texts or the timing changed.
    pub fn reconfigure(&self, machine: Typewriter) {
        self.cancel();
        self.shared.state.borrow_mut().machine = machine;
        self.start();
    }

    pub fn is_running(&self) -> bool {
        self.shared.state.borrow().running
    }

    pub fn displayed(&self) -> String {
        self.shared.state.borrow().machine.displayed().to_owned()
    }

    pub fn with_machine<T>(&self, f: impl FnOnce(&Typewriter) -> T) -> T {
        f(&self.shared.state.borrow().machine)
    }
}

impl<S: Scheduler + 'static> Drop for Animator<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn schedule_next<S: Scheduler + 'static>(shared: &Rc<Shared<S>>) {
    let mut state = shared.state.borrow_mut();
    if !state.running {
        return;
    }
    let Some(delay) = state.machine.next_delay() else {
        return;
    };
    let generation = state.generation;
    let weak: Weak<Shared<S>> = Rc::downgrade(shared);
    let handle = shared.scheduler.schedule(
        delay,
        Box::new(move || {
            if let Some(shared) = weak.upgrade() {
                fire(&shared, generation);
            }
        }),
    );
    if let Some(previous) = state.pending.replace(handle) {
        previous.cancel();
    }
}

fn fire<S: Scheduler + 'static>(shared: &Rc<Shared<S>>, generation: u64) {
    let changed = {
        let mut state = shared.state.borrow_mut();
        if !state.running || state.generation != generation {
            log::trace!("dropping stale typewriter tick from generation {generation}");
            return;
        }
        // This is the timer that just fired.
        state.pending = None;
        let tick = state.machine.tick();
        log::trace!(
            "typewriter tick {tick:?}: {:?} {:?}",
            state.machine.phase(),
            state.machine.displayed()
        );
        tick.changes_text()
            .then(|| state.machine.displayed().to_owned())
    };
    schedule_next(shared);
    if let Some(displayed) = changed {
        (shared.on_change)(&displayed);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use super::*;
    use crate::typewriter::{ManualScheduler, Phase, Timing};

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn animator(
        texts: &[&str],
        scheduler: &ManualScheduler,
    ) -> (Animator<ManualScheduler>, Rc<RefCell<Vec<String>>>) {
        let seen = Rc::new(RefCell::new(vec![]));
        let sink = seen.clone();
        let machine = Typewriter::new(texts.iter().copied(), Timing::from_millis(100, 10, 1000));
        let animator = Animator::new(machine, scheduler.clone(), move |text: &str| {
            sink.borrow_mut().push(text.to_owned())
        });
        (animator, seen)
    }

    #[test]
    fn start_publishes_and_schedules_once() {
        let scheduler = ManualScheduler::new();
        let (animator, seen) = animator(&["hi"], &scheduler);
        animator.start();
        animator.start();
        assert!(animator.is_running());
        assert_eq!(scheduler.pending(), 1);
        assert_eq!(*seen.borrow(), vec![String::new()]);
    }

    #[test]
    fn types_one_char_per_typing_interval() {
        let scheduler = ManualScheduler::new();
        let (animator, seen) = animator(&["hey"], &scheduler);
        animator.start();
        scheduler.advance(ms(99));
        assert_eq!(animator.displayed(), "");
        scheduler.advance(ms(1));
        assert_eq!(animator.displayed(), "h");
        scheduler.advance(ms(200));
        assert_eq!(animator.displayed(), "hey");
        assert_eq!(*seen.borrow(), vec!["", "h", "he", "hey"]);
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn waits_then_deletes_then_advances() {
        let scheduler = ManualScheduler::new();
        let (animator, seen) = animator(&["ab", "c"], &scheduler);
        animator.start();
        scheduler.advance(ms(200));
        assert_eq!(animator.with_machine(|m| m.phase()), Phase::Waiting);
        scheduler.advance(ms(999));
        assert_eq!(animator.with_machine(|m| m.phase()), Phase::Waiting);
        scheduler.advance(ms(1));
        assert_eq!(animator.with_machine(|m| m.phase()), Phase::Deleting);
        scheduler.advance(ms(20));
        assert_eq!(animator.displayed(), "");
        assert_eq!(animator.with_machine(|m| (m.phase(), m.text_index())), (Phase::Typing, 1));
        scheduler.advance(ms(100));
        assert_eq!(
            *seen.borrow(),
            vec!["", "a", "ab", "a", "", "c"]
        );
    }

    #[test]
    fn cancel_stops_all_mutation() {
        let scheduler = ManualScheduler::new();
        let (animator, seen) = animator(&["abc"], &scheduler);
        animator.start();
        scheduler.advance(ms(100));
        animator.cancel();
        animator.cancel();
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(scheduler.advance(ms(60_000)), 0);
        assert_eq!(animator.displayed(), "a");
        assert_eq!(*seen.borrow(), vec!["", "a"]);
    }

    #[test]
    fn drop_cancels_the_pending_timer() {
        let scheduler = ManualScheduler::new();
        let (animator, seen) = animator(&["abc"], &scheduler);
        animator.start();
        drop(animator);
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(scheduler.advance(ms(1_000)), 0);
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn reconfigure_keeps_a_single_timer() {
        let scheduler = ManualScheduler::new();
        let (animator, seen) = animator(&["abc"], &scheduler);
        animator.start();
        scheduler.advance(ms(100));
        animator.reconfigure(Typewriter::new(["xy"], Timing::from_millis(5, 5, 5)));
        assert_eq!(scheduler.pending(), 1);
        scheduler.advance(ms(10));
        assert_eq!(animator.displayed(), "xy");
        assert_eq!(*seen.borrow(), vec!["", "a", "", "x", "xy"]);
    }

    #[test]
    fn idle_machine_never_schedules() {
        let scheduler = ManualScheduler::new();
        let (animator, seen) = animator(&[], &scheduler);
        animator.start();
        assert!(!animator.is_running());
        assert_eq!(scheduler.pending(), 0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn on_change_may_cancel_the_animator() {
        let scheduler = ManualScheduler::new();
        let slot: Rc<RefCell<Option<Animator<ManualScheduler>>>> = Rc::new(RefCell::new(None));
        let machine = Typewriter::new(["abc"], Timing::from_millis(1, 1, 1));
        let weak_slot = Rc::downgrade(&slot);
        let animator = Animator::new(machine, scheduler.clone(), move |text: &str| {
            if text == "ab" {
                if let Some(slot) = weak_slot.upgrade() {
                    if let Some(animator) = slot.borrow().as_ref() {
                        animator.cancel();
                    }
                }
            }
        });
        animator.start();
        *slot.borrow_mut() = Some(animator);
        scheduler.advance(ms(50));
        let slot = slot.borrow();
        let animator = slot.as_ref().unwrap();
        assert!(!animator.is_running());
        assert_eq!(animator.displayed(), "ab");
        assert_eq!(scheduler.pending(), 0);
    }
}
