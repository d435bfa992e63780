//! Screen flow
//!
//! Title card, then the controls screen, then gameplay for the rest of the session.

use serde::{Deserialize, Serialize};

/// Screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    Title,
    Controls,
    Gameplay,
}

/// Signals that drive screen transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenSignal {
    /// The title card has been shown long enough
    TitleElapsed,
    Confirm,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: Screen,
    pub to_state: Screen,
}

/// Get next screen for a given signal (if valid)
pub fn next_screen(screen: Screen, signal: ScreenSignal) -> Option<Screen> {
    match (screen, signal) {
        (Screen::Title, ScreenSignal::TitleElapsed) => Some(Screen::Controls),
        (Screen::Controls, ScreenSignal::Confirm) => Some(Screen::Gameplay),
        _ => None,
    }
}

/// Screen state machine with the title timer
#[derive(Debug, Clone)]
pub struct ScreenFlow {
    screen: Screen,
    title_frames: u32,
    frame_counter: u32,
}

impl ScreenFlow {
    pub fn new(title_frames: u32) -> Self {
        Self {
            screen: Screen::Title,
            title_frames,
            frame_counter: 0,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn is_gameplay(&self) -> bool {
        self.screen == Screen::Gameplay
    }

    /// Attempt a transition
    pub fn transition(&mut self, signal: ScreenSignal) -> TransitionResult {
        let from_state = self.screen;
        match next_screen(from_state, signal) {
            Some(to_state) => {
                self.screen = to_state;
                TransitionResult {
                    success: true,
                    from_state,
                    to_state,
                }
            }
            None => TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
            },
        }
    }

    /// Run one frame of the flow. Returns the transition if the screen changed.
    pub fn frame(&mut self, confirm: bool) -> Option<TransitionResult> {
        let signal = match self.screen {
            Screen::Title => {
                self.frame_counter += 1;
                if self.frame_counter > self.title_frames {
                    ScreenSignal::TitleElapsed
                } else {
                    return None;
                }
            }
            Screen::Controls if confirm => ScreenSignal::Confirm,
            _ => return None,
        };

        let result = self.transition(signal);
        result.success.then_some(result)
    }
}
