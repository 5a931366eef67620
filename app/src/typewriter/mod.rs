//! Typewriter text effect.
//!
//! A [`Typewriter`] cycles over a list of texts: type the current text one
//! character at a time, pause, delete it one character at a time, move on to
//! the next text, forever. An [`Animator`] drives it from timers, keeping a
//! single pending timer per animation.

mod animator;
mod machine;
mod scheduler;

pub use animator::{Animator, Scheduler, TimerHandle};
pub use machine::{
    Phase, Tick, Timing, Typewriter, DEFAULT_DELAY_BETWEEN_TEXTS, DEFAULT_DELETING_SPEED,
    DEFAULT_TYPING_SPEED,
};
pub use scheduler::{BrowserScheduler, ManualHandle, ManualScheduler};
