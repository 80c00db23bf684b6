//! Typewriter animator for the chat input placeholder.
//!
//! The animator is a small state machine cycling a fixed list of example
//! prompts: type one character per tick, pause on the full prompt, delete one
//! character per tick, then move on to the next prompt. It is purely cosmetic
//! and shares no state with the chat transcript.
//!
//! [`PlaceholderAnimator::frames`] drives the machine on the tokio timer and
//! yields each visible text. Dropping the stream stops the loop; a new stream
//! always starts again from the first prompt.

use std::time::Duration;

use futures::Stream;

/// Delays between animator ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderTiming {
    /// Delay after revealing a character.
    pub type_delay: Duration,
    /// Delay after removing a character.
    pub delete_delay: Duration,
    /// Delay while the full prompt is shown.
    pub pause: Duration,
    /// Delay between clearing one prompt and typing the next.
    pub switch: Duration,
}

impl Default for PlaceholderTiming {
    fn default() -> Self {
        Self {
            type_delay: Duration::from_millis(120),
            delete_delay: Duration::from_millis(80),
            pause: Duration::from_millis(1500),
            switch: Duration::from_millis(400),
        }
    }
}

/// Current phase of the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Revealing characters of the current prompt.
    Typing,
    /// Holding the full prompt.
    Pausing,
    /// Removing characters of the current prompt.
    Deleting,
}

/// Placeholder typewriter state.
#[derive(Debug, Clone)]
pub struct PlaceholderAnimator {
    prompts: Vec<String>,
    index: usize,
    /// Visible length in characters, not bytes.
    shown: usize,
    phase: Phase,
    timing: PlaceholderTiming,
}

impl PlaceholderAnimator {
    /// Create an animator over `prompts`, starting at the first one.
    #[must_use]
    pub fn new(prompts: Vec<String>, timing: PlaceholderTiming) -> Self {
        Self {
            prompts,
            index: 0,
            shown: 0,
            phase: Phase::Typing,
            timing,
        }
    }

    /// Index of the prompt being animated.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Configured timing.
    #[must_use]
    pub fn timing(&self) -> PlaceholderTiming {
        self.timing
    }

    /// Visible placeholder text.
    #[must_use]
    pub fn text(&self) -> &str {
        let target = self.target();
        let end = target
            .char_indices()
            .nth(self.shown)
            .map_or(target.len(), |(i, _)| i);
        &target[..end]
    }

    /// Return to the first prompt with nothing typed.
    pub fn reset(&mut self) {
        self.index = 0;
        self.shown = 0;
        self.phase = Phase::Typing;
    }

    /// Advance one step and return the delay before the next tick.
    pub fn tick(&mut self) -> Duration {
        if self.prompts.is_empty() {
            return self.timing.pause;
        }

        let full = self.target().chars().count();
        match self.phase {
            Phase::Typing => {
                self.shown = (self.shown + 1).min(full);
                if self.shown == full {
                    self.phase = Phase::Pausing;
                    self.timing.pause
                } else {
                    self.timing.type_delay
                }
            }
            Phase::Pausing => {
                self.phase = Phase::Deleting;
                self.delete_one()
            }
            Phase::Deleting => self.delete_one(),
        }
    }

    /// Drive the animator on the tokio timer, yielding each visible text.
    pub fn frames(mut self) -> impl Stream<Item = String> + Send + 'static {
        async_stream::stream! {
            loop {
                let delay = self.tick();
                yield self.text().to_owned();
                tokio::time::sleep(delay).await;
            }
        }
    }

    fn delete_one(&mut self) -> Duration {
        self.shown = self.shown.saturating_sub(1);
        if self.shown == 0 {
            self.index = (self.index + 1) % self.prompts.len();
            self.phase = Phase::Typing;
            self.timing.switch
        } else {
            self.timing.delete_delay
        }
    }

    fn target(&self) -> &str {
        self.prompts.get(self.index).map_or("", String::as_str)
    }
}
