//! Text rendering for the terminal front end.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::ai::StreamObserver;
use crate::domain::{GameOutcome, GameState, RoundOutcome};
use crate::services::RoundReport;

/// Scores, both hands and the table of past plays.
pub fn render_state(state: &GameState) -> String {
    let score = state.score();
    let mut out = String::new();
    out.push_str(&format!(
        "Score  you {} : {} opponent\n",
        score.human, score.agent
    ));
    out.push_str(&format!("Your hand:     {}\n", state.human_hand()));
    out.push_str(&format!("Opponent hand: {}\n", state.agent_hand()));
    if state.history().is_empty() {
        out.push_str("Table: (empty)\n");
    } else {
        out.push_str("Table:\n");
        for (i, record) in state.history().iter().enumerate() {
            out.push_str(&format!(
                "  round {}: you {} vs {} opponent\n",
                i + 1,
                record.human,
                record.agent
            ));
        }
    }
    out
}

pub fn render_round(report: &RoundReport) -> String {
    let result = &report.result;
    let verdict = match result.outcome {
        RoundOutcome::HumanWins => "you take the round",
        RoundOutcome::AgentWins => "opponent takes the round",
        RoundOutcome::Tie => "tie, no point",
    };
    format!(
        "Round {}: you played {}, opponent played {}; {}.",
        result.round_no,
        result.record.human,
        result.record.agent,
        verdict
    )
}

pub fn render_outcome(outcome: GameOutcome) -> &'static str {
    match outcome {
        GameOutcome::HumanWinsGame => "You win the game!",
        GameOutcome::AgentWinsGame => "The opponent wins the game.",
        GameOutcome::TieGame => "The game is a tie.",
    }
}

/// Echoes the opponent's reasoning to stdout while it streams.
#[derive(Default)]
pub struct ConsoleObserver {
    started: Mutex<bool>,
}

impl ConsoleObserver {
    /// End a line left open by an earlier, interrupted stream.
    fn close_line(&self) {
        if let Ok(mut started) = self.started.lock() {
            if *started {
                println!();
            }
            *started = false;
        }
    }

    #[cfg(test)]
    fn is_streaming(&self) -> bool {
        self.started.lock().map(|s| *s).unwrap_or(false)
    }
}

impl StreamObserver for ConsoleObserver {
    fn on_start(&self) {
        self.close_line();
    }

    fn on_token(&self, token: &str, _accumulated: &str) {
        let mut stdout = io::stdout().lock();
        if let Ok(mut started) = self.started.lock() {
            if !*started {
                let _ = write!(stdout, "Opponent is thinking: ");
                *started = true;
            }
        }
        let _ = write!(stdout, "{token}");
        let _ = stdout.flush();
    }

    fn on_complete(&self, _full: &str) {
        self.close_line();
    }
}
