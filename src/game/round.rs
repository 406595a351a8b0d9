//! Round state machine
//!
//! One play-through over a shuffled sequence of selected flags: collects
//! guesses, scores them, and records misses for the end-of-round review.
//!
//! After every submission the round holds its feedback on screen until the
//! app's deferred advance fires; input in that window is ignored so the
//! sequence can never skip an entry.

use crate::catalog::{Catalog, FlagEntry};
use crate::game::PracticeSet;
use crate::util::answers_match;
use crate::{QuizError, Result};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Record of an incorrect or blank guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissRecord {
    /// Flag code of the missed entry
    pub code: String,
    /// The correct country name
    pub correct: String,
    /// The trimmed guess text; empty when left blank
    pub guess: String,
}

/// Feedback shown after a submission
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Feedback {
    /// No submission pending
    #[default]
    None,
    Correct,
    Incorrect {
        answer: String,
    },
}

impl Feedback {
    /// User-facing feedback line, empty when there is nothing to show
    pub fn text(&self) -> String {
        match self {
            Feedback::None => String::new(),
            Feedback::Correct => "Correct!".to_string(),
            Feedback::Incorrect { answer } => format!("Incorrect. It was {}.", answer),
        }
    }
}

/// Outcome of a single submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Correct,
    Incorrect,
}

/// State for one shuffled play-through
#[derive(Debug)]
pub struct GameRound {
    sequence: Vec<FlagEntry>,
    current_index: usize,
    score: usize,
    guess: String,
    feedback: Feedback,
    misses: Vec<MissRecord>,
    awaiting_advance: bool,
}

impl GameRound {
    /// Start a round over the selected flags, shuffled once.
    ///
    /// A seed makes the shuffle deterministic; otherwise entropy is used.
    /// Fails when the practice set selects nothing.
    pub fn new(catalog: &Catalog, practice: &PracticeSet, seed: Option<u64>) -> Result<Self> {
        let mut sequence: Vec<FlagEntry> = catalog
            .entries()
            .iter()
            .filter(|entry| practice.contains(&entry.code))
            .cloned()
            .collect();

        if sequence.is_empty() {
            return Err(QuizError::GameError(
                "Select at least one flag to begin".to_string(),
            ));
        }

        let mut rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        sequence.shuffle(&mut rng);

        Ok(Self {
            sequence,
            current_index: 0,
            score: 0,
            guess: String::new(),
            feedback: Feedback::None,
            misses: Vec::new(),
            awaiting_advance: false,
        })
    }

    /// The shuffled sequence for this round
    pub fn sequence(&self) -> &[FlagEntry] {
        &self.sequence
    }

    /// Total number of flags in this round
    pub fn total(&self) -> usize {
        self.sequence.len()
    }

    /// Zero-based position in the sequence
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The flag currently being guessed, `None` once the round is finished
    pub fn current_entry(&self) -> Option<&FlagEntry> {
        self.sequence.get(self.current_index)
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn guess(&self) -> &str {
        &self.guess
    }

    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// Misses in the order they were encountered
    pub fn misses(&self) -> &[MissRecord] {
        &self.misses
    }

    /// Whether every entry has been played
    pub fn is_finished(&self) -> bool {
        self.current_index >= self.sequence.len()
    }

    /// Whether a submission is waiting for the deferred advance
    pub fn is_awaiting_advance(&self) -> bool {
        self.awaiting_advance
    }

    /// Append a character to the pending guess. Ignored while feedback is
    /// showing or after the round finished.
    pub fn push_char(&mut self, c: char) {
        if !self.awaiting_advance && !self.is_finished() {
            self.guess.push(c);
        }
    }

    /// Delete the last character of the pending guess
    pub fn pop_char(&mut self) {
        if !self.awaiting_advance && !self.is_finished() {
            self.guess.pop();
        }
    }

    /// Replace the pending guess verbatim (no trimming at input time)
    pub fn set_guess(&mut self, text: &str) {
        if !self.awaiting_advance && !self.is_finished() {
            self.guess = text.to_string();
        }
    }

    /// Score the pending guess against the current flag.
    ///
    /// Comparison is case-insensitive and ignores surrounding whitespace.
    /// A mismatch records a miss with the trimmed guess (empty = blank).
    /// Returns `None` when there is nothing to submit: the round is
    /// finished or a previous submission is still showing feedback.
    pub fn submit_guess(&mut self) -> Option<SubmitOutcome> {
        if self.awaiting_advance {
            return None;
        }
        let entry = self.sequence.get(self.current_index)?.clone();

        let outcome = if answers_match(&self.guess, &entry.country) {
            self.score += 1;
            self.feedback = Feedback::Correct;
            SubmitOutcome::Correct
        } else {
            self.feedback = Feedback::Incorrect {
                answer: entry.country.clone(),
            };
            self.misses.push(MissRecord {
                code: entry.code.clone(),
                correct: entry.country.clone(),
                guess: self.guess.trim().to_string(),
            });
            SubmitOutcome::Incorrect
        };

        self.awaiting_advance = true;
        Some(outcome)
    }

    /// Clear feedback and move to the next flag, but only if `index` still
    /// names the entry the advance was scheduled for. A stale index from a
    /// superseded timer is ignored. Returns whether the round advanced.
    pub fn advance_from(&mut self, index: usize) -> bool {
        if !self.awaiting_advance || index != self.current_index {
            return false;
        }
        self.guess.clear();
        self.feedback = Feedback::None;
        self.awaiting_advance = false;
        self.current_index += 1;
        true
    }
}
