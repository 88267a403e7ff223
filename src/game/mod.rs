//! The hangman game: word state, guess bookkeeping and screen assembly.

mod art;
mod rng;
mod words;

pub use art::{picture_for, stage_for, Stage};
pub use words::load as load_words;

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;
use std::rc::Rc;

use anyhow::Result;

use crate::app::{shared, Application};
use crate::geom::{Point, Rect, Size};
use crate::term::{ACell, AString, Attr, KeyboardSource, TerminalSurface};
use crate::views::{Frame, Picture, Text, TextAlign, View};

use rng::SimpleRng;

pub const SCREEN_COLS: i32 = 80;
pub const SCREEN_ROWS: i32 = 25;

/// Upper bound on the guess count; the artwork has exactly this many
/// reveal steps.
pub const MAX_GUESSES: usize = 16;

/// Pure game state: the word list, the chosen word and the guess
/// bookkeeping. No terminal involvement, so the rules are testable on
/// their own.
struct GameState {
    total_guesses: usize,
    lives_left: usize,
    words: Vec<String>,
    used_guesses: HashMap<char, usize>,
    word_map: Vec<bool>,
    chosen: usize,
    guessed_it: bool,
    rng: SimpleRng,
}

impl GameState {
    fn new(words: Vec<String>, total_guesses: usize, rng: SimpleRng) -> Self {
        Self {
            total_guesses,
            lives_left: total_guesses,
            words,
            used_guesses: HashMap::new(),
            word_map: Vec::new(),
            chosen: 0,
            guessed_it: false,
            rng,
        }
    }

    fn word(&self) -> &str {
        &self.words[self.chosen]
    }

    fn reset_guesses(&mut self) {
        self.used_guesses.clear();
        self.lives_left = self.total_guesses;
        self.guessed_it = false;
    }

    fn choose_word(&mut self) {
        self.chosen = self.rng.next_range(self.words.len() as u32) as usize;
        self.word_map = vec![false; self.word().chars().count()];
    }

    fn times_guessed(&self, guess: char) -> usize {
        self.used_guesses.get(&guess).copied().unwrap_or(0)
    }

    fn record_guess(&mut self, guess: char) {
        *self.used_guesses.entry(guess).or_insert(0) += 1;
    }

    /// Mark every position of `guess` in the word. Returns whether the
    /// letter occurs at all; sets `guessed_it` once the word is fully
    /// uncovered.
    fn locate_characters(&mut self, guess: char) -> bool {
        let mut valid = false;
        let letters: Vec<char> = self.word().chars().collect();
        for (i, letter) in letters.into_iter().enumerate() {
            if letter == guess {
                valid = true;
                self.word_map[i] = true;
            }
        }
        if self.word_map.iter().all(|&hit| hit) {
            self.guessed_it = true;
        }
        valid
    }

    fn remaining_message(&self) -> String {
        if self.lives_left == 0 {
            "You have used up all your guesses.".to_string()
        } else {
            format!(
                "{} incorrect {} remaining.",
                self.lives_left,
                if self.lives_left == 1 {
                    "guess"
                } else {
                    "guesses"
                }
            )
        }
    }

    /// Word row for display: one cell per letter with a blank between
    /// each pair, guessed letters shown, the rest as underscores.
    fn word_display(&self) -> AString {
        let letters: Vec<char> = self.word().chars().collect();
        let mut run = AString::filled(
            letters.len() * 2 - 1,
            ACell::blank(Attr::FG_WHITE | Attr::BG_BLUE),
        );
        for i in (0..run.len()).step_by(2) {
            let glyph = if self.word_map[i / 2] {
                letters[i / 2]
            } else {
                '_'
            };
            run[i] = ACell::new(glyph, Attr::FG_WHITE | Attr::FG_INTENSE | Attr::BG_BLUE);
        }
        run
    }
}

/// The views the key callback mutates, shared with the application's
/// render list.
#[derive(Clone)]
struct Ui {
    frame: Rc<RefCell<Frame>>,
    message: Rc<RefCell<Text>>,
    guesses: Rc<RefCell<Text>>,
    remaining: Rc<RefCell<Text>>,
    word: Rc<RefCell<Text>>,
    graphic: Rc<RefCell<Picture>>,
}

/// Process one letter guess: update the state, then the message,
/// guess-history, remaining and word views, and finally the win/lose
/// dialogue when the round is over.
fn apply_guess(st: &mut GameState, ui: &Ui, guess: char) {
    ui.message.borrow_mut().set_text("");

    if st.times_guessed(guess) > 0 {
        // A repeated guess costs a life.
        st.record_guess(guess);
        st.lives_left -= 1;
        ui.graphic
            .borrow_mut()
            .set_picmap(art::picture_for(st.lives_left, st.total_guesses));

        let mut message = ui.message.borrow_mut();
        message.set_attribute(Attr::FG_RED | Attr::FG_INTENSE | Attr::BG_BLUE);
        message.set_text("Uh oh, you have already tried that letter!");
    } else if st.locate_characters(guess) {
        st.record_guess(guess);

        let mut message = ui.message.borrow_mut();
        message.set_attribute(Attr::FG_GREEN | Attr::FG_INTENSE | Attr::BG_BLUE);
        message.set_text("You have found one!");
        ui.guesses
            .borrow_mut()
            .append_attr(guess, Attr::FG_GREEN | Attr::FG_INTENSE);
    } else {
        st.record_guess(guess);
        st.lives_left -= 1;
        ui.graphic
            .borrow_mut()
            .set_picmap(art::picture_for(st.lives_left, st.total_guesses));

        let mut message = ui.message.borrow_mut();
        message.set_attribute(Attr::FG_RED | Attr::FG_INTENSE | Attr::BG_BLUE);
        message.set_text("Sorry, that was an incorrect guess!");
        ui.guesses
            .borrow_mut()
            .append_attr(guess, Attr::FG_RED | Attr::FG_INTENSE);
    }

    ui.remaining.borrow_mut().set_text(&st.remaining_message());
    ui.word.borrow_mut().set_astring(st.word_display());

    if st.lives_left == 0 {
        let over = Attr::FG_WHITE | Attr::FG_INTENSE | Attr::BG_RED;
        {
            let mut frame = ui.frame.borrow_mut();
            frame.set_client_attribute(over);
            frame.set_inner_attribute(over);
        }
        {
            let mut word = ui.word.borrow_mut();
            word.set_attribute(Attr::FG_YELLOW | Attr::FG_INTENSE | Attr::BG_RED);
            word.set_text(&format!("The word was: {}", st.word()));
        }
        ui.graphic
            .borrow_mut()
            .set_picmap(art::picture_for(0, st.total_guesses));

        let mut message = ui.message.borrow_mut();
        message.set_attribute(Attr::FG_YELLOW | Attr::FG_INTENSE | Attr::BG_RED);
        message.set_text("HARD LUCK - GAME OVER!  New game? (Y/N)");
    } else if st.guessed_it {
        let mut message = ui.message.borrow_mut();
        message.set_attribute(Attr::FG_GREEN | Attr::FG_INTENSE | Attr::BG_BLUE);
        message.set_text("WELL DONE - You got it right!  New game? (Y/N)");
    }
}

/// Reset for a new round: fresh word, restored colors, gallows-only
/// picture.
fn start_new_round(st: &mut GameState, ui: &Ui) {
    st.reset_guesses();
    st.choose_word();

    let fresh = Attr::FG_WHITE | Attr::FG_INTENSE | Attr::BG_BLUE;
    {
        let mut frame = ui.frame.borrow_mut();
        frame.set_client_attribute(fresh);
        frame.set_inner_attribute(fresh);
    }
    {
        let mut guesses = ui.guesses.borrow_mut();
        guesses.set_attribute(Attr::FG_GREY);
        guesses.set_text("Guesses: ");
    }
    {
        let mut message = ui.message.borrow_mut();
        message.set_attribute(Attr::FG_YELLOW | Attr::FG_INTENSE | Attr::BG_BLUE);
        message.set_text("A new word has been chosen, start guessing!");
    }
    ui.graphic
        .borrow_mut()
        .set_picmap(art::picture_for(st.total_guesses, st.total_guesses));
    ui.remaining.borrow_mut().set_text(&st.remaining_message());
    ui.word.borrow_mut().set_astring(st.word_display());
}

/// The assembled game: an application with the hangman screen and the
/// guess callback wired up.
pub struct Game {
    app: Application,
}

impl Game {
    pub fn new(
        surface: Box<dyn TerminalSurface>,
        keyboard: Box<dyn KeyboardSource>,
        word_file: &Path,
        total_guesses: usize,
    ) -> Result<Self> {
        let word_list = words::load(word_file)?;

        let mut app = Application::new(surface, keyboard)?;
        app.set_screen_size(Size::new(SCREEN_COLS, SCREEN_ROWS))?;
        let screen = app.screen_size()?;

        let mut frame = Frame::new(Rect::at(0, 0, screen.width, screen.height - 7));
        frame.set_title("Super Hangman : Intel 8086 Edition");

        let input = View::with_attrs(
            Rect::at(0, screen.height - 7, screen.width, 7),
            Attr::FG_WHITE | Attr::FG_INTENSE,
            Attr::FG_GREY,
        );

        let message = Text::aligned(
            "Welcome to HANGMAN.  Press CONTROL+C to quit.",
            Point::new(1, 16),
            (screen.width - 1) as usize,
            TextAlign::Center,
            Attr::FG_YELLOW | Attr::FG_INTENSE | Attr::BG_BLUE,
        );

        let guesses = Text::new("Guesses: ", Point::new(2, 20), Attr::FG_GREY);

        let mut word = Text::aligned(
            "",
            Point::new(28, 9),
            (screen.width - 31) as usize,
            TextAlign::Center,
            Attr::FG_GREEN | Attr::FG_INTENSE | Attr::BG_BLUE,
        );

        let remaining = Text::new("", Point::new(2, 22), Attr::FG_GREY);

        let mut graphic = Picture::new(Rect::at(5, 3, 24, 12));

        let status = Text::new(
            &format!(
                "{} word{} loaded, {} incorrect guesses per game.",
                word_list.len(),
                if word_list.len() == 1 { "" } else { "s" },
                total_guesses
            ),
            Point::new(2, 23),
            Attr::FG_GREY,
        );

        app.set_title("Hangman")?;
        app.disable_cursor()?;

        let mut state = GameState::new(word_list, total_guesses, SimpleRng::from_clock());
        state.reset_guesses();
        state.choose_word();

        graphic.set_picmap(art::picture_for(total_guesses, total_guesses));
        word.set_astring(state.word_display());

        let frame = shared(frame);
        let input = shared(input);
        let message = shared(message);
        let status = shared(status);
        let guesses = shared(guesses);
        let remaining = shared(remaining);
        let word = shared(word);
        let graphic = shared(graphic);

        app.add_view(frame.clone());
        app.add_view(input);
        app.add_view(message.clone());
        app.add_view(status);
        app.add_view(guesses.clone());
        app.add_view(remaining.clone());
        app.add_view(word.clone());
        app.add_view(graphic.clone());

        let ui = Ui {
            frame,
            message,
            guesses,
            remaining,
            word,
            graphic,
        };

        let state = Rc::new(RefCell::new(state));
        let handle = app.handle();
        app.add_key_callback(move |ch| {
            let mut st = state.borrow_mut();
            if st.lives_left > 0 && !st.guessed_it && ch.is_ascii_alphabetic() {
                apply_guess(&mut st, &ui, ch.to_ascii_uppercase());
            } else if ch.eq_ignore_ascii_case(&'y') {
                start_new_round(&mut st, &ui);
            } else if ch.eq_ignore_ascii_case(&'n') {
                handle.stop();
            }
        });

        Ok(Self { app })
    }

    /// Run the game loop to completion; returns the process exit code.
    pub fn run(&mut self) -> Result<i32> {
        self.app.start()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(word: &str, guesses: usize) -> GameState {
        let mut st = GameState::new(vec![word.to_string()], guesses, SimpleRng::new(1));
        st.reset_guesses();
        st.choose_word();
        st
    }

    #[test]
    fn correct_guess_uncovers_every_occurrence() {
        let mut st = state_with("BANANA", 16);
        assert!(st.locate_characters('A'));
        assert_eq!(st.word_map, vec![false, true, false, true, false, true]);
        assert!(!st.guessed_it);
    }

    #[test]
    fn wrong_guess_finds_nothing() {
        let mut st = state_with("BANANA", 16);
        assert!(!st.locate_characters('Z'));
        assert!(st.word_map.iter().all(|&hit| !hit));
    }

    #[test]
    fn word_is_guessed_when_all_letters_found() {
        let mut st = state_with("ABBA", 16);
        st.locate_characters('A');
        assert!(!st.guessed_it);
        st.locate_characters('B');
        assert!(st.guessed_it);
    }

    #[test]
    fn word_display_interleaves_blanks() {
        let mut st = state_with("CAB", 16);
        st.locate_characters('A');
        let run = st.word_display();
        assert_eq!(run.to_text(), "_ A _");
        assert_eq!(run[2].attr, Attr::FG_WHITE | Attr::FG_INTENSE | Attr::BG_BLUE);
        assert_eq!(run[1].attr, Attr::FG_WHITE | Attr::BG_BLUE);
    }

    #[test]
    fn remaining_message_handles_plural_and_exhaustion() {
        let mut st = state_with("CAB", 3);
        assert_eq!(st.remaining_message(), "3 incorrect guesses remaining.");
        st.lives_left = 1;
        assert_eq!(st.remaining_message(), "1 incorrect guess remaining.");
        st.lives_left = 0;
        assert_eq!(st.remaining_message(), "You have used up all your guesses.");
    }

    #[test]
    fn repeat_guesses_are_counted() {
        let mut st = state_with("CAB", 16);
        assert_eq!(st.times_guessed('Q'), 0);
        st.record_guess('Q');
        assert_eq!(st.times_guessed('Q'), 1);
        st.record_guess('Q');
        assert_eq!(st.times_guessed('Q'), 2);
    }

    #[test]
    fn reset_restores_lives_and_clears_history() {
        let mut st = state_with("CAB", 5);
        st.record_guess('Q');
        st.lives_left = 1;
        st.guessed_it = true;
        st.reset_guesses();
        assert_eq!(st.lives_left, 5);
        assert!(!st.guessed_it);
        assert_eq!(st.times_guessed('Q'), 0);
    }
}
