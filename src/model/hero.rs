//! Hero Model
//!
//! The typewriter effect: reveal each phrase one character per tick, hold
//! it, clear it, move on to the next phrase, forever.
//!
//! All timing goes through a single [`Timer`] handle. `unmount` and
//! `set_phrase_index` cancel it, so no step can run for a cycle that no
//! longer exists.

use anyhow::Result;
use std::time::Instant;

use super::timer::Timer;
use crate::logic::typewriter::{next_index, phrase_len, reveal_prefix, PHRASE_PAUSE, TYPE_TICK};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypewriterPhase {
    /// Not mounted; no timer pending
    Idle,
    /// Revealing characters every tick
    Typing,
    /// Full phrase shown, waiting to advance
    Paused,
}

#[derive(Clone, Debug)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase_index: usize,
    revealed: usize,
    current_text: String,
    phase: TypewriterPhase,
    timer: Timer,
}

impl Typewriter {
    /// Create an unmounted typewriter. The phrase list must not be empty.
    pub fn new(phrases: Vec<String>) -> Result<Self> {
        if phrases.is_empty() {
            anyhow::bail!("typewriter needs at least one phrase");
        }
        Ok(Self {
            phrases,
            phrase_index: 0,
            revealed: 0,
            current_text: String::new(),
            phase: TypewriterPhase::Idle,
            timer: Timer::new(),
        })
    }

    /// Start from the first phrase with an empty line
    pub fn mount(&mut self, now: Instant) {
        self.enter_phrase(0, now);
    }

    /// Stop the loop and drop the pending timer
    pub fn unmount(&mut self) {
        self.timer.cancel();
        self.phase = TypewriterPhase::Idle;
    }

    pub fn is_mounted(&self) -> bool {
        self.phase != TypewriterPhase::Idle
    }

    /// Jump to another phrase, cancelling whatever was pending for the old one
    pub fn set_phrase_index(&mut self, index: usize, now: Instant) {
        if !self.is_mounted() {
            return;
        }
        self.timer.cancel();
        self.enter_phrase(index % self.phrases.len(), now);
    }

    /// Run every step whose deadline has passed. Returns whether the text changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.is_mounted() {
            return false;
        }

        let mut changed = false;
        while let Some(deadline) = self.timer.fire(now) {
            changed |= self.step(deadline);
        }
        changed
    }

    fn step(&mut self, at: Instant) -> bool {
        match self.phase {
            TypewriterPhase::Typing => {
                let phrase = &self.phrases[self.phrase_index];
                if self.revealed < phrase_len(phrase) {
                    self.revealed += 1;
                    self.current_text = reveal_prefix(phrase, self.revealed).to_string();
                    self.timer.arm_at(at + TYPE_TICK);
                    true
                } else {
                    self.phase = TypewriterPhase::Paused;
                    self.timer.arm_at(at + PHRASE_PAUSE);
                    false
                }
            }
            TypewriterPhase::Paused => {
                let next = next_index(self.phrase_index, self.phrases.len());
                self.enter_phrase(next, at);
                true
            }
            TypewriterPhase::Idle => false,
        }
    }

    fn enter_phrase(&mut self, index: usize, now: Instant) {
        self.phrase_index = index;
        self.revealed = 0;
        self.current_text.clear();
        self.phase = TypewriterPhase::Typing;
        self.timer.arm(now, TYPE_TICK);
    }

    pub fn current_text(&self) -> &str {
        &self.current_text
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn phase(&self) -> TypewriterPhase {
        self.phase
    }

    /// Deadline of the pending step, if mounted
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }
}
