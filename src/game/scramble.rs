//! The word-scramble game.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::{letter_count, normalize, RoundRng, ScrambleConfig, Session};
use crate::dictionary::{SpellChecker, WordList, WordSet};
use crate::error::{Result, ScrambleError};
use crate::rules::{Alert, Validator, WordError};

/// Result of one submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The word passed every check and was added to the round.
    Accepted(String),
    /// The word failed a check; an alert is pending.
    Rejected(WordError),
    /// Nothing left after trimming. No state change, no alert.
    Ignored,
}

impl SubmitOutcome {
    /// Front ends clear their text input after an accepted word.
    #[must_use]
    pub fn clears_input(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }
}

/// An accepted word as shown to the player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptedWord {
    pub word: String,
    /// Shown as a badge next to the word.
    pub letter_count: usize,
}

/// Everything a front end needs to draw the round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundView {
    pub root_word: String,
    /// Newest first.
    pub accepted: Vec<AcceptedWord>,
    pub score: u32,
    pub alert: Option<Alert>,
}

/// A running game: one round at a time over a fixed word list.
pub struct WordScramble<S: SpellChecker = WordSet> {
    config: ScrambleConfig,
    word_list: WordList,
    checker: S,
    rng: RoundRng,
    session: Session,
    alert: Option<Alert>,
}

impl<S: SpellChecker> WordScramble<S> {
    /// Replace the round: new root word, no accepted words, score 0.
    ///
    /// Fails only if the word list is empty.
    pub fn start_round(&mut self) -> Result<()> {
        self.session.start_round(self.word_list.words(), &mut self.rng)?;
        self.alert = None;
        info!("Started round with root word '{}'", self.session.root_word());
        Ok(())
    }

    /// Normalize, validate and, if valid, accept a raw submission.
    pub fn submit(&mut self, raw: &str) -> SubmitOutcome {
        let word = normalize(raw);
        if word.is_empty() {
            debug!("Ignoring empty submission");
            return SubmitOutcome::Ignored;
        }

        let validator = Validator::new(&self.session, &self.checker, &self.config.language);
        match validator.validate(&word) {
            Ok(()) => {
                self.session.accept_word(word.clone());
                self.alert = None;
                info!("Accepted '{}', score is now {}", word, self.session.score());
                SubmitOutcome::Accepted(word)
            }
            Err(error) => {
                debug!("Rejected '{}': {:?}", word, error);
                self.alert = Some(error.alert());
                SubmitOutcome::Rejected(error)
            }
        }
    }

    /// Clear the pending alert once the player has seen it.
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Snapshot of the round for the front end.
    #[must_use]
    pub fn view(&self) -> RoundView {
        RoundView {
            root_word: self.session.root_word().to_string(),
            accepted: self
                .session
                .accepted_words()
                .iter()
                .map(|word| AcceptedWord {
                    word: word.clone(),
                    letter_count: letter_count(word),
                })
                .collect(),
            score: self.session.score(),
            alert: self.alert.clone(),
        }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    #[must_use]
    pub fn config(&self) -> &ScrambleConfig {
        &self.config
    }

    #[must_use]
    pub fn word_list(&self) -> &WordList {
        &self.word_list
    }

    #[must_use]
    pub fn spell_checker(&self) -> &S {
        &self.checker
    }

    /// Seed of the root-word RNG. Building again with this seed replays
    /// the same rounds.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

/// Builder for creating a `WordScramble`.
///
/// Defaults to the bundled start words and English dictionary.
pub struct WordScrambleBuilder<S: SpellChecker = WordSet> {
    config: ScrambleConfig,
    word_list: WordList,
    checker: S,
}

impl Default for WordScrambleBuilder<WordSet> {
    fn default() -> Self {
        Self {
            config: ScrambleConfig::default(),
            word_list: WordList::bundled(),
            checker: WordSet::english(),
        }
    }
}

impl WordScrambleBuilder<WordSet> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: SpellChecker> WordScrambleBuilder<S> {
    pub fn config(mut self, config: ScrambleConfig) -> Self {
        self.config = config;
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.config.language = language.into();
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn word_list(mut self, word_list: WordList) -> Self {
        self.word_list = word_list;
        self
    }

    /// Swap the dictionary for any other spell checker.
    pub fn spell_checker<T: SpellChecker>(self, checker: T) -> WordScrambleBuilder<T> {
        WordScrambleBuilder {
            config: self.config,
            word_list: self.word_list,
            checker,
        }
    }

    /// Build the game and start its first round.
    ///
    /// Fails if the spell checker doesn't support the configured language
    /// or the word list is empty.
    pub fn build(self) -> Result<WordScramble<S>> {
        if !self.checker.supports_language(&self.config.language) {
            return Err(ScrambleError::UnsupportedLanguage {
                language: self.config.language,
            });
        }

        let rng = match self.config.seed {
            Some(seed) => RoundRng::new(seed),
            None => RoundRng::from_entropy(),
        };
        debug!(
            "Building game: {} start words, language '{}', seed {}",
            self.word_list.len(),
            self.config.language,
            rng.seed()
        );

        let mut game = WordScramble {
            config: self.config,
            word_list: self.word_list,
            checker: self.checker,
            rng,
            session: Session::default(),
            alert: None,
        };
        game.start_round()?;
        Ok(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn silkworm_game() -> WordScramble {
        WordScrambleBuilder::new()
            .word_list(WordList::from_words(["silkworm"]))
            .spell_checker(WordSet::from_words("en", ["silk", "worm", "milk", "silkworm"]))
            .seed(42)
            .build()
            .unwrap()
    }

    #[test]
    fn test_build_starts_round() {
        let game = silkworm_game();

        assert_eq!(game.session().root_word(), "silkworm");
        assert_eq!(game.session().score(), 0);
        assert!(game.alert().is_none());
    }

    #[test]
    fn test_build_with_empty_word_list() {
        let result = WordScrambleBuilder::new()
            .word_list(WordList::parse("\n"))
            .build();

        assert!(matches!(result, Err(ScrambleError::EmptyWordList)));
    }

    #[test]
    fn test_submit_accepts_and_normalizes() {
        let mut game = silkworm_game();

        let outcome = game.submit("  SILK\n");

        assert_eq!(outcome, SubmitOutcome::Accepted("silk".to_string()));
        assert!(outcome.clears_input());
        assert_eq!(game.session().score(), 1);
    }

    #[test]
    fn test_submit_rejection_sets_alert() {
        let mut game = silkworm_game();

        let outcome = game.submit("silkworm");

        assert_eq!(outcome, SubmitOutcome::Rejected(WordError::IsRootWord));
        assert!(!outcome.clears_input());
        assert_eq!(game.alert(), Some(&WordError::IsRootWord.alert()));
        assert_eq!(game.session().score(), 0);

        game.dismiss_alert();
        assert!(game.alert().is_none());
    }

    #[test]
    fn test_submit_empty_is_ignored() {
        let mut game = silkworm_game();

        assert_eq!(game.submit("   "), SubmitOutcome::Ignored);
        assert!(game.alert().is_none());
        assert_eq!(game.session().score(), 0);
    }

    #[test]
    fn test_accept_clears_previous_alert() {
        let mut game = silkworm_game();

        game.submit("xyz");
        assert!(game.alert().is_some());

        game.submit("worm");
        assert!(game.alert().is_none());
    }

    #[test]
    fn test_view() {
        let mut game = silkworm_game();
        game.submit("silk");
        game.submit("worm");
        game.submit("silk");

        let view = game.view();

        assert_eq!(view.root_word, "silkworm");
        assert_eq!(view.score, 2);
        assert_eq!(
            view.accepted,
            vec![
                AcceptedWord { word: "worm".to_string(), letter_count: 4 },
                AcceptedWord { word: "silk".to_string(), letter_count: 4 },
            ]
        );
        assert_eq!(view.alert, Some(WordError::DuplicateWord.alert()));
    }

    #[test]
    fn test_start_round_resets_game() {
        let mut game = silkworm_game();
        game.submit("silk");
        game.submit("nope");

        game.start_round().unwrap();

        assert_eq!(game.session().score(), 0);
        assert!(game.session().accepted_words().is_empty());
        assert!(game.alert().is_none());
    }

    #[test]
    fn test_same_seed_same_rounds() {
        let roots = |seed| {
            let mut game = WordScrambleBuilder::new().seed(seed).build().unwrap();
            let mut roots = vec![game.session().root_word().to_string()];
            for _ in 0..5 {
                game.start_round().unwrap();
                roots.push(game.session().root_word().to_string());
            }
            roots
        };

        assert_eq!(roots(9), roots(9));
    }

    #[test]
    fn test_seed_replays_unseeded_game() {
        let roots = |mut game: WordScramble| {
            let mut roots = vec![game.session().root_word().to_string()];
            for _ in 0..5 {
                game.start_round().unwrap();
                roots.push(game.session().root_word().to_string());
            }
            roots
        };

        let game = WordScrambleBuilder::new().build().unwrap();
        let seed = game.seed();
        let replay = WordScrambleBuilder::new().seed(seed).build().unwrap();

        assert_eq!(replay.seed(), seed);
        assert_eq!(roots(game), roots(replay));
    }

    #[test]
    fn test_regional_language_uses_bundled_dictionary() {
        let mut game = WordScrambleBuilder::new()
            .word_list(WordList::from_words(["silkworm"]))
            .language("en-US")
            .seed(1)
            .build()
            .unwrap();

        assert_eq!(game.submit("silk"), SubmitOutcome::Accepted("silk".to_string()));
    }

    #[test]
    fn test_unsupported_language_fails_build() {
        let result = WordScrambleBuilder::new().language("fr").build();

        assert!(matches!(
            result,
            Err(ScrambleError::UnsupportedLanguage { language }) if language == "fr"
        ));

        let result = WordScrambleBuilder::new()
            .spell_checker(WordSet::from_words("fr", ["soie"]))
            .language("fr")
            .build();
        assert!(result.is_ok());
    }
}
