use serde_json::{json, Value};
use crate::game_engine::models::{GameState, PlayerState, DICE_PER_ROLL, MAX_ROLLS};

/// One die slot; `kept` is only ever set on the human's row.
fn die_slot(index: usize, value: Option<u8>, kept: bool) -> Value {
    json!({
        "index": index,
        "value": value,
        "kept": kept
    })
}

/// A player's dice row. Before the first roll every slot has a null value.
fn dice_row(player: &PlayerState, kept: impl Fn(usize) -> bool) -> Value {
    let slots: Vec<Value> = (0..DICE_PER_ROLL)
        .map(|i| die_slot(i, player.roll.and_then(|r| r.get(i)), kept(i)))
        .collect();
    Value::Array(slots)
}

/// Build a player panel.
fn player_panel(label: &str, player: &PlayerState, dice: Value) -> Value {
    json!({
        "label": label,
        "score": player.score,
        "rolls_used": player.rolls_used,
        "rolls_label": format!("Rolls used: {}/{}", player.rolls_used, MAX_ROLLS),
        "roll_sum": player.roll_sum(),
        "dice": dice
    })
}

/// Map a [`GameState`] to the JSON a presentation layer renders from.
///
/// Carries everything a screen needs: the win tally, both dice rows, which
/// controls are enabled, and the terminal message once the game is over.
pub fn to_view_state(state: &GameState) -> Value {
    let human_dice = dice_row(&state.human, |i| state.kept.contains(&i));
    let computer_dice = dice_row(&state.computer, |_| false);
    let controls = state.controls();

    json!({
        "phase": state.phase(),
        "target_score": state.target_score,
        "tally": format!("H:{}/C:{}", state.human_wins, state.computer_wins),
        "score_line": format!("Score: {} - {}", state.human.score, state.computer.score),
        "wins": {
            "human": state.human_wins,
            "computer": state.computer_wins
        },
        "human": player_panel("Your Dice", &state.human, human_dice),
        "computer": player_panel("Computer's Dice", &state.computer, computer_dice),
        "controls": controls,
        "tie_breaker": state.tie_breaker,
        "game_over": state.game_over(),
        "result": {
            "message": state.result_message(),
            "human_won": state.result.map(|r| r.human_won())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_engine::models::{GameResult, Player, Roll};

    #[test]
    fn fresh_game_has_empty_dice() {
        let v = to_view_state(&GameState::default());
        assert_eq!(v["phase"], "AwaitingFirstRoll");
        assert_eq!(v["tally"], "H:0/C:0");
        assert_eq!(v["human"]["dice"].as_array().map(|d| d.len()), Some(5));
        assert!(v["human"]["dice"][0]["value"].is_null());
        assert_eq!(v["controls"]["can_throw"], true);
        assert_eq!(v["controls"]["can_score"], false);
        assert_eq!(v["result"]["message"], "");
    }

    #[test]
    fn kept_dice_and_result_are_rendered() {
        let mut s = GameState::new(101, 3, 2);
        s.human.roll = Some(Roll([6, 5, 4, 3, 2]));
        s.human.rolls_used = 2;
        s.human.score = 40;
        s.computer.roll = Some(Roll([1, 1, 1, 1, 1]));
        s.computer.rolls_used = 1;
        s.kept.insert(0);

        let v = to_view_state(&s);
        assert_eq!(v["human"]["dice"][0]["kept"], true);
        assert_eq!(v["human"]["dice"][1]["kept"], false);
        assert_eq!(v["human"]["dice"][0]["value"], 6);
        assert_eq!(v["human"]["rolls_label"], "Rolls used: 2/3");
        assert_eq!(v["computer"]["roll_sum"], 5);
        assert_eq!(v["score_line"], "Score: 40 - 0");
        assert_eq!(v["controls"]["can_select_dice"], true);

        s.kept.clear();
        s.result = Some(GameResult { winner: Player::Computer, by_tie_breaker: false });
        let v = to_view_state(&s);
        assert_eq!(v["game_over"], true);
        assert_eq!(v["result"]["message"], "You lose");
        assert_eq!(v["result"]["human_won"], false);
        assert_eq!(v["controls"]["can_throw"], false);
    }
}
