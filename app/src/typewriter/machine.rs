use std::time::Duration;

pub const DEFAULT_TYPING_SPEED: Duration = Duration::from_millis(150);
pub const DEFAULT_DELETING_SPEED: Duration = Duration::from_millis(50);
pub const DEFAULT_DELAY_BETWEEN_TEXTS: Duration = Duration::from_millis(1000);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    pub typing_speed: Duration,
    pub deleting_speed: Duration,
    /// How long a fully typed text stays on screen before deletion starts.
    pub delay_between_texts: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            typing_speed: DEFAULT_TYPING_SPEED,
            deleting_speed: DEFAULT_DELETING_SPEED,
            delay_between_texts: DEFAULT_DELAY_BETWEEN_TEXTS,
        }
    }
}

impl Timing {
    /// Build a timing from millisecond values as they come from component
    /// props. Negative values are clamped to zero.
    pub fn from_millis(typing_speed: i64, deleting_speed: i64, delay_between_texts: i64) -> Self {
        let clamp = |ms: i64| Duration::from_millis(u64::try_from(ms).unwrap_or(0));
        Self {
            typing_speed: clamp(typing_speed),
            deleting_speed: clamp(deleting_speed),
            delay_between_texts: clamp(delay_between_texts),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    #[default]
    Typing,
    Waiting,
    Deleting,
}

/// What a single [`Typewriter::tick`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// One more character of the current text is displayed.
    Typed,
    /// One trailing character was removed.
    Deleted,
    /// The current text is complete, the pause starts.
    StartedWaiting,
    /// The pause is over, deletion starts.
    StartedDeleting,
    /// The display is empty, moved on to the next text.
    Advanced,
    /// There is nothing to animate.
    Idle,
}

impl Tick {
    pub fn changes_text(self) -> bool {
        matches!(self, Tick::Typed | Tick::Deleted)
    }
}

/// The type/pause/delete/advance cycle over a list of texts.
///
/// This is only the state machine: it does not know about time beyond telling
/// how long to wait before the next [`tick`](Self::tick). Driving it is the
/// job of an [`Animator`](super::Animator).
#[derive(Clone, Debug)]
pub struct Typewriter {
    texts: Vec<String>,
    text_index: usize,
    // Always a prefix of `texts[text_index]`, cut on a char boundary.
    displayed: String,
    phase: Phase,
    timing: Timing,
}

impl Typewriter {
    pub fn new<I, T>(texts: I, timing: Timing) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            texts: texts.into_iter().map(Into::into).collect(),
            text_index: 0,
            displayed: String::new(),
            phase: Phase::default(),
            timing,
        }
    }

    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    pub fn text_index(&self) -> usize {
        self.text_index
    }

    pub fn displayed(&self) -> &str {
        &self.displayed
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    pub fn is_idle(&self) -> bool {
        self.texts.is_empty()
    }

    pub fn current_text(&self) -> Option<&str> {
        self.texts.get(self.text_index).map(String::as_str)
    }

    fn is_complete(&self) -> bool {
        self.current_text() == Some(self.displayed.as_str())
    }

    /// How long to wait before the next tick, `None` when idle.
    ///
    /// Transitions that do not change the text happen right away, so they get
    /// a zero delay.
    pub fn next_delay(&self) -> Option<Duration> {
        if self.is_idle() {
            return None;
        }
        let delay = match self.phase {
            Phase::Typing if self.is_complete() => Duration::ZERO,
            Phase::Typing => self.timing.typing_speed,
            Phase::Waiting => self.timing.delay_between_texts,
            Phase::Deleting if self.displayed.is_empty() => Duration::ZERO,
            Phase::Deleting => self.timing.deleting_speed,
        };
        Some(delay)
    }

    pub fn tick(&mut self) -> Tick {
        let Some(current) = self.texts.get(self.text_index) else {
            return Tick::Idle;
        };
        match self.phase {
            Phase::Typing => match current[self.displayed.len()..].chars().next() {
                Some(c) => {
                    self.displayed.push(c);
                    Tick::Typed
                }
                None => {
                    self.phase = Phase::Waiting;
                    Tick::StartedWaiting
                }
            },
            Phase::Waiting => {
                self.phase = Phase::Deleting;
                Tick::StartedDeleting
            }
            Phase::Deleting => {
                if self.displayed.pop().is_some() {
                    Tick::Deleted
                } else {
                    self.text_index = (self.text_index + 1) % self.texts.len();
                    self.phase = Phase::Typing;
                    Tick::Advanced
                }
            }
        }
    }
}
