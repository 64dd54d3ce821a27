use crossterm::event::{KeyCode, KeyEvent};

use atlas_lib::quiz::SessionView;

use super::app_state::{TuiState, View};

pub fn handle_key(state: &mut TuiState, key: KeyEvent) {
    // Clear flash message on any keypress
    state.flash_message = None;

    // Confirm dialog captures everything
    if state.view == View::ConfirmReset {
        handle_confirm_key(state, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') => {
            state.quit = true;
            return;
        }
        KeyCode::Tab => {
            state.next_view();
            return;
        }
        _ => {}
    }

    match state.view {
        View::Flashcards => handle_flashcards_key(state, key),
        View::Quiz => handle_quiz_key(state, key),
        View::Progress => handle_progress_key(state, key),
        View::ConfirmReset => {}
    }
}

fn handle_flashcards_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => state.flashcards.flip(),
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Char('n') => state.flashcards.next(),
        KeyCode::Char('h') | KeyCode::Left | KeyCode::Char('p') => state.flashcards.prev(),
        _ => {}
    }
}

enum QuizPhase {
    Presenting,
    Answered,
    Completed,
}

fn handle_quiz_key(state: &mut TuiState, key: KeyEvent) {
    let phase = match state.session.view() {
        SessionView::Presenting { .. } => QuizPhase::Presenting,
        SessionView::Answered { .. } => QuizPhase::Answered,
        SessionView::Completed => QuizPhase::Completed,
    };

    match phase {
        QuizPhase::Presenting => {
            if let KeyCode::Char(c @ '1'..='4') = key.code {
                let index = c as usize - '1' as usize;
                state.quiz_answer(index);
            }
        }
        QuizPhase::Answered => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('n')) {
                state.quiz_advance();
            }
        }
        QuizPhase::Completed => {
            if key.code == KeyCode::Char('r') {
                state.view = View::ConfirmReset;
            }
        }
    }
}

fn handle_progress_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => state.progress_scroll_down(),
        KeyCode::Char('k') | KeyCode::Up => state.progress_scroll_up(),
        KeyCode::Char('r') => state.view = View::ConfirmReset,
        _ => {}
    }
}

fn handle_confirm_key(state: &mut TuiState, key: KeyEvent) {
    if key.code == KeyCode::Char('y') {
        state.confirm_reset();
    } else {
        state.view = View::Progress;
    }
}
