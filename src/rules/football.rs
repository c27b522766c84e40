//! Football drive rules: the game state machine.
//!
//! Transitions for a resolved player snap:
//! - Penalty or sack: ball moves back, the down is replayed with a longer
//!   distance
//! - Turnover: the other side takes over at centerfield
//! - Normal gain: touchdown, first down, turnover on downs, or next down
//! - Punt, field goal and conversions always end the drive
//!
//! Opponent snaps follow [`OpponentRules`].

use crate::core::config::{FieldGoalModel, GameConfig, OpponentRules};
use crate::core::error::{GameError, Result};
use crate::core::event::{EventList, GameEvent, PlayReport};
use crate::core::field::GOAL_LINE;
use crate::core::rng::PlayRandom;
use crate::core::side::Side;
use crate::core::state::{GameState, LegalPlays, Mode};
use crate::plays::{
    attempt_extra_point, attempt_field_goal, attempt_two_point, field_goal_probability,
    punt_narrative, resolve, KickAttempt, OutcomeCategory, PlayCall, PlayDefinition, PlayOutcome,
    Playbook,
};

use super::engine::RulesEngine;

/// Closest ball position (player-relative) where a field goal is offered.
pub const FIELD_GOAL_RANGE: i32 = 60;

/// Touchdown value before the conversion.
const TOUCHDOWN_POINTS: u32 = 6;

/// The standard drive rules.
#[derive(Clone, Debug)]
pub struct FootballRules {
    config: GameConfig,
    playbook: Playbook,
}

impl FootballRules {
    /// Create rules with the standard playbook.
    pub fn new(config: GameConfig) -> Result<Self> {
        Self::with_playbook(config, Playbook::standard()?)
    }

    /// Create rules with a custom playbook.
    ///
    /// A `Playbook` can only be built validated, so only the config is
    /// checked here.
    pub fn with_playbook(config: GameConfig, playbook: Playbook) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, playbook })
    }

    /// Get the playbook.
    pub fn playbook(&self) -> &Playbook {
        &self.playbook
    }

    fn definition(&self, call: PlayCall) -> Result<&PlayDefinition> {
        self.playbook
            .get(call)
            .ok_or_else(|| GameError::config(format!("{call} has no table entry")))
    }

    /// Why `call` is not legal in `state`.
    fn rejection_reason(&self, state: &GameState, call: PlayCall) -> &'static str {
        if state.possession() != Side::Player {
            return "the opponent has the ball";
        }
        match (state.mode(), call) {
            (Mode::ExtraPoint, _) => "only a conversion may follow a touchdown",
            (Mode::Normal, c) if c.is_conversion() => "conversions only follow a touchdown",
            (Mode::Normal, PlayCall::Punt) => "punts are only allowed on 4th down",
            (Mode::Normal, PlayCall::FieldGoal) => "the ball is out of field goal range",
            _ => "not available",
        }
    }

    fn field_goal_chance(&self, state: &GameState) -> f64 {
        match self.config.field_goal {
            FieldGoalModel::Flat(p) => p,
            FieldGoalModel::Distance => {
                field_goal_probability(state.field().distance_to_goal(Side::Player))
            }
        }
    }

    /// Resolve a table play for `side` and apply its transition.
    fn run_table_play(
        &self,
        state: &mut GameState,
        snap: &mut Snap,
        rng: &mut dyn PlayRandom,
        track_downs: bool,
    ) -> Result<()> {
        let side = snap.side;
        let def = self.definition(snap.call)?;
        let outcome = resolve(def, side, &mut *rng);

        log::debug!("{side} {}: {:?} {} yards", snap.call, outcome.category, outcome.yards);
        snap.events.push(GameEvent::PlayResolved {
            side,
            call: snap.call,
            category: outcome.category,
            yards: outcome.yards,
        });
        snap.narrate(state, outcome.narrative.clone());

        match outcome.category {
            OutcomeCategory::Turnover => {
                self.hand_over(state, snap, side.other());
            }
            OutcomeCategory::Penalty | OutcomeCategory::Sack => {
                let moved = state.field_mut().move_ball(side, outcome.yards);
                if track_downs {
                    state.field_mut().add_distance(-moved);
                }
            }
            OutcomeCategory::NormalGain if !track_downs => {
                state.field_mut().move_ball(side, outcome.yards);
            }
            OutcomeCategory::NormalGain => {
                self.advance_drive(state, snap, &outcome, rng);
            }
        }

        snap.outcome = Some(outcome);
        Ok(())
    }

    /// Down-and-distance bookkeeping after a normal gain.
    fn advance_drive(
        &self,
        state: &mut GameState,
        snap: &mut Snap,
        outcome: &PlayOutcome,
        rng: &mut dyn PlayRandom,
    ) {
        let side = snap.side;
        let gain = outcome.yards;
        let field = *state.field();
        state.field_mut().move_ball(side, gain);

        if field.progress(side) + gain >= GOAL_LINE {
            self.touchdown(state, snap, rng);
        } else if field.yards_to_first() - gain <= 0 {
            state.field_mut().first_down();
            snap.events.push(GameEvent::FirstDown { side });
            snap.narrate(state, "First down!");
        } else if field.is_final_down() {
            snap.events.push(GameEvent::TurnoverOnDowns { side });
            snap.narrate(state, "Turnover on downs!");
            self.hand_over(state, snap, side.other());
        } else {
            state.field_mut().next_down(gain);
        }
    }

    fn touchdown(&self, state: &mut GameState, snap: &mut Snap, rng: &mut dyn PlayRandom) {
        let side = snap.side;
        state.add_score(side, TOUCHDOWN_POINTS);
        snap.events.push(GameEvent::Touchdown { side });
        snap.narrate(state, "Touchdown!");
        log::info!("{side} touchdown, score {}-{}", state.score(Side::Player), state.score(Side::Opponent));

        match side {
            Side::Player => state.set_mode(Mode::ExtraPoint),
            Side::Opponent => {
                // The opponent always kicks.
                let kick = attempt_extra_point(&mut *rng);
                self.score_kick(state, snap, side, &kick);
                snap.kick = Some(kick);
                self.hand_over(state, snap, Side::Player);
            }
        }
    }

    fn score_kick(&self, state: &mut GameState, snap: &mut Snap, side: Side, kick: &KickAttempt) {
        let points = kick.points();
        state.add_score(side, points);
        snap.events.push(GameEvent::Kick {
            side,
            call: kick.call,
            good: kick.good,
            points,
        });
        snap.narrate(state, kick.narrative.clone());
        if points > 0 {
            log::info!("{side} {} good for {points}", kick.call);
        }
    }

    /// Give the ball to `to` at centerfield.
    fn hand_over(&self, state: &mut GameState, snap: &mut Snap, to: Side) {
        state.change_possession(to);
        snap.events.push(GameEvent::PossessionChanged { to });
        snap.events.push(GameEvent::DriveReset { field: *state.field() });
        log::info!("possession to {to}");
    }
}

impl RulesEngine for FootballRules {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn legal_plays(&self, state: &GameState) -> LegalPlays {
        let mut plays = LegalPlays::new();

        // The opponent's snaps are scripted
        if state.possession() != Side::Player {
            return plays;
        }

        match state.mode() {
            Mode::ExtraPoint => {
                plays.push(PlayCall::KickExtraPoint);
                plays.push(PlayCall::TwoPointTry);
            }
            Mode::Normal => {
                plays.extend(PlayCall::BASE);
                if state.field().is_final_down() {
                    plays.push(PlayCall::Punt);
                }
                if state.field().progress(Side::Player) >= FIELD_GOAL_RANGE {
                    plays.push(PlayCall::FieldGoal);
                }
            }
        }

        plays
    }

    fn apply_play(
        &self,
        state: &mut GameState,
        call: PlayCall,
        rng: &mut dyn PlayRandom,
    ) -> Result<PlayReport> {
        if !self.is_legal(state, call) {
            let reason = self.rejection_reason(state, call);
            log::warn!("rejected {call}: {reason}");
            return Err(GameError::illegal(call.name(), reason));
        }

        let mut snap = Snap::begin(state, Side::Player, call);

        match call {
            PlayCall::KickExtraPoint | PlayCall::TwoPointTry => {
                let kick = if call == PlayCall::KickExtraPoint {
                    attempt_extra_point(&mut *rng)
                } else {
                    attempt_two_point(&mut *rng)
                };
                self.score_kick(state, &mut snap, Side::Player, &kick);
                snap.kick = Some(kick);
                state.set_mode(Mode::Normal);
                self.hand_over(state, &mut snap, Side::Opponent);
            }
            PlayCall::Punt => {
                snap.events.push(GameEvent::Punt { side: Side::Player });
                snap.narrate(state, punt_narrative(Side::Player));
                self.hand_over(state, &mut snap, Side::Opponent);
            }
            PlayCall::FieldGoal => {
                let kick = attempt_field_goal(self.field_goal_chance(state), &mut *rng);
                self.score_kick(state, &mut snap, Side::Player, &kick);
                snap.kick = Some(kick);
                self.hand_over(state, &mut snap, Side::Opponent);
            }
            _ => self.run_table_play(state, &mut snap, rng, true)?,
        }

        Ok(snap.finish(state, self.legal_plays(state)))
    }

    fn play_opponent(
        &self,
        state: &mut GameState,
        rng: &mut dyn PlayRandom,
    ) -> Result<Option<PlayReport>> {
        if state.possession() != Side::Opponent || state.mode() != Mode::Normal {
            return Ok(None);
        }

        let call = PlayCall::BASE[rng.pick_index(PlayCall::BASE.len())];
        let mut snap = Snap::begin(state, Side::Opponent, call);
        let track_downs = self.config.opponent == OpponentRules::Symmetric;

        self.run_table_play(state, &mut snap, rng, track_downs)?;

        Ok(Some(snap.finish(state, self.legal_plays(state))))
    }
}

/// Accumulates the report of the snap being resolved.
struct Snap {
    side: Side,
    call: PlayCall,
    ball_before: i32,
    outcome: Option<PlayOutcome>,
    kick: Option<KickAttempt>,
    events: EventList,
    narratives: Vec<String>,
}

impl Snap {
    fn begin(state: &GameState, side: Side, call: PlayCall) -> Self {
        Self {
            side,
            call,
            ball_before: state.field().ball_position(),
            outcome: None,
            kick: None,
            events: EventList::new(),
            narratives: Vec::new(),
        }
    }

    /// Append a line to both the game log and this report.
    fn narrate(&mut self, state: &mut GameState, line: impl Into<String>) {
        let line = line.into();
        state.log(line.clone());
        self.narratives.push(line);
    }

    fn finish(self, state: &mut GameState, legal_plays: LegalPlays) -> PlayReport {
        state.count_play();
        PlayReport {
            side: self.side,
            call: self.call,
            outcome: self.outcome,
            kick: self.kick,
            ball_before: self.ball_before,
            ball_after: state.field().ball_position(),
            events: self.events,
            narratives: self.narratives,
            snapshot: state.snapshot(legal_plays),
        }
    }
}
