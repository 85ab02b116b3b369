//! Resolution of a single turn.
//!
//! A turn runs in a fixed order: the avatar plays a card, a defeated creep
//! ends the turn early with rewards, otherwise the creep answers (unless its
//! attack is suppressed), the stun counter decays, the avatar may fall, and a
//! successful retreat moves on to the next round. Whatever happens, the turn
//! closes with [`Action::Wait`].

use crate::action::{Action, ActionSink};
use crate::chooser::Chooser;
use crate::encounter::pick_creep;
use crate::env::RngOracle;
use crate::state::{CardType, Creep, CreepTrait, CreepType};

use super::{GameEngine, RunStatus};

/// Why a creep holds back its attack this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Suppression {
    /// The avatar fled before the creep could react.
    Escaped,
    /// A coward at full health does not attack.
    Cowardice,
    Stunned,
}

impl<R: RngOracle> GameEngine<R> {
    /// Plays one full turn; the caller has already run the safety checks.
    pub(super) fn play_turn<C, S>(&mut self, chooser: &mut C, sink: &mut S)
    where
        C: Chooser + ?Sized,
        S: ActionSink + ?Sized,
    {
        sink.record(Action::log(format!("--- Turn {} ---", self.state.turn)));
        self.resolve_turn(chooser, sink);

        self.state.turn += 1;
        self.state.round_turn += 1;
        sink.record(Action::Wait);
    }

    fn resolve_turn<C, S>(&mut self, chooser: &mut C, sink: &mut S)
    where
        C: Chooser + ?Sized,
        S: ActionSink + ?Sized,
    {
        let card = chooser.choose_card(&self.state);
        let played = self.avatar_action(card, sink);

        if self.state.creep.hp <= 0 {
            self.creep_defeated(sink);
            return;
        }

        let parried = played && card == CardType::Parry;
        let retreated = played && card == CardType::Retreat;

        match self.suppression(retreated) {
            None => {
                self.creep_action(parried, sink);
                if self.state.creep.hp <= 0 {
                    self.creep_defeated(sink);
                    return;
                }
            }
            Some(_) if parried => {
                sink.record(Action::log(
                    "Tried to parry, but the enemy was not attacking",
                ));
            }
            Some(_) => {}
        }

        if self.state.creep.stun > 0 {
            self.state.creep.stun -= 1;
        }

        if !self.state.avatar.is_alive() {
            sink.record(Action::Defeat);
            sink.record(Action::red_log("Game over: avatar has been defeated!"));
            self.status = RunStatus::Defeat;
            return;
        }

        if retreated {
            sink.record(Action::log(format!(
                "Retreated from {}!",
                self.state.creep.kind
            )));
            self.next_round(sink);
        }
    }

    /// Applies the chosen card. Returns whether the card was actually played.
    fn avatar_action<S>(&mut self, card: CardType, sink: &mut S) -> bool
    where
        S: ActionSink + ?Sized,
    {
        if !self.state.deck.count(card).is_available() {
            sink.record(Action::red_log(format!(
                "Tried to use unavailable card {card}"
            )));
            self.illegal_moves += 1;
            return false;
        }

        let stats = card.stats();
        let affordable = self.state.avatar.mp >= stats.mp;

        if (affordable || self.config.rules.spend_card_on_failed_cast)
            && self.state.deck.spend(card)
        {
            sink.record(Action::ChangeCardCount { card, delta: -1 });
        }

        if stats.mp != 0 {
            if !affordable {
                sink.record(Action::red_log(format!("Not enough mana to use {card}")));
                self.illegal_moves += 1;
                return false;
            }
            self.state.avatar.mp -= stats.mp;
            sink.record(Action::UpdateMp { delta: -stats.mp });
        }

        match card {
            CardType::Attack | CardType::PowerAttack => {
                let damage = self.dice.roll(stats.power);
                self.damage_creep(card, damage, sink);
            }
            CardType::MagicArrow | CardType::Firebolt => {
                if self.state.creep.has(CreepTrait::MagicImmunity) {
                    sink.record(Action::red_log(format!(
                        "{card} failed: {} is immune to magic",
                        self.state.creep.kind
                    )));
                } else {
                    let mut damage = self.dice.roll(stats.power);
                    if card == CardType::Firebolt && self.state.creep.has(CreepTrait::WeakToFire) {
                        damage *= 2;
                    }
                    self.damage_creep(card, damage, sink);
                }
            }
            CardType::Stun => {
                let turns = self.dice.roll(stats.power);
                self.state.creep.stun = turns.max(0) as u32;
                sink.record(Action::log(format!(
                    "{} is stunned for {turns} turns",
                    self.state.creep.kind
                )));
            }
            CardType::Rest | CardType::Heal => {
                let roll = self.dice.roll(stats.power);
                let healed = self.state.avatar.healed_amount(roll);
                self.state.avatar.hp += healed;
                sink.record(Action::UpdateHp { delta: healed });
                sink.record(Action::green_log(format!("Got {healed} HP from {card}")));
            }
            CardType::Retreat | CardType::Parry => {}
        }

        true
    }

    fn damage_creep<S>(&mut self, card: CardType, damage: i32, sink: &mut S)
    where
        S: ActionSink + ?Sized,
    {
        self.state.creep.hp -= damage;
        sink.record(Action::UpdateCreepHp { delta: -damage });
        sink.record(Action::log(format!("Your {card} deals {damage} damage")));
    }

    /// Checks, in order, whether the creep skips its attack this turn.
    fn suppression(&self, retreated: bool) -> Option<Suppression> {
        let creep = &self.state.creep;
        if retreated && (self.config.rules.free_retreat || creep.has(CreepTrait::Slow)) {
            return Some(Suppression::Escaped);
        }
        if creep.is_full() && creep.has(CreepTrait::Coward) {
            return Some(Suppression::Cowardice);
        }
        if creep.is_stunned() {
            return Some(Suppression::Stunned);
        }
        None
    }

    /// The creep attacks, or has its attack reflected by a parry.
    fn creep_action<S>(&mut self, parried: bool, sink: &mut S)
    where
        S: ActionSink + ?Sized,
    {
        let kind = self.state.creep.kind;
        let damage = self.dice.roll(kind.stats().damage);

        if parried {
            if !self.state.creep.has(CreepTrait::Ranged) {
                self.state.creep.hp -= damage;
                sink.record(Action::UpdateCreepHp { delta: -damage });
                sink.record(Action::log(format!(
                    "{damage} damage is reflected back to {kind}"
                )));
                return;
            }
            sink.record(Action::red_log("Failed to parry a ranged attack"));
        }

        self.state.avatar.hp -= damage;
        sink.record(Action::UpdateHp { delta: -damage });
        sink.record(Action::red_log(format!("{kind} deals {damage} damage")));
    }

    /// Scores the creep, hands out card rewards, and moves to the next round.
    fn creep_defeated<S>(&mut self, sink: &mut S)
    where
        S: ActionSink + ?Sized,
    {
        let kind = self.state.creep.kind;
        let stats = kind.stats();

        self.state.score += stats.score_reward;
        sink.record(Action::green_log(format!(
            "{kind} is defeated! {} score points received",
            stats.score_reward
        )));
        sink.record(Action::UpdateScore {
            delta: stats.score_reward,
        });

        for _ in 0..stats.cards_reward {
            let card = self.dice.pick(&CardType::COLLECTIBLE);
            sink.record(Action::green_log(format!("Collected {card} card")));
            sink.record(Action::ChangeCardCount { card, delta: 1 });
            self.state.deck.grant(card, 1);
        }

        self.next_round(sink);
    }

    /// Brings in the previewed creep and draws the preview after it.
    ///
    /// Past the final round there is no creep to bring in; the old one stays
    /// in place until the safety checks declare victory.
    fn next_round<S>(&mut self, sink: &mut S)
    where
        S: ActionSink + ?Sized,
    {
        self.state.round += 1;
        self.state.round_turn = 0;

        let arriving = self.state.next_creep;
        if let Some(kind) = arriving {
            self.state.creep = Creep::spawn(kind);
        }
        self.state.next_creep = pick_creep(
            self.state.round + 1,
            self.config.round_count,
            &mut self.dice,
        );

        sink.record(Action::SetCreep {
            creep: arriving,
            hp: full_hp(arriving),
        });
        sink.record(Action::SetNextCreep {
            creep: self.state.next_creep,
            hp: full_hp(self.state.next_creep),
        });
        sink.record(Action::NextRound);
    }
}

fn full_hp(creep: Option<CreepType>) -> i32 {
    creep.map_or(0, |kind| kind.stats().max_hp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{ActionLog, Tone};
    use crate::config::{RuleOptions, RunConfig};
    use crate::state::{CardCount, GameState};

    /// Oracle that always returns the same value, pinning every roll.
    #[derive(Clone, Copy, Debug)]
    struct Fixed(u32);

    impl RngOracle for Fixed {
        fn next_u32(&self, _seed: u64) -> u32 {
            self.0
        }
    }

    fn engine(config: RunConfig, roll: u32) -> GameEngine<Fixed> {
        GameEngine::with_oracle(config, Fixed(roll)).unwrap()
    }

    /// Engine in round 1 facing `creep`, with roll index 0 (every range
    /// rolls its low end).
    fn facing(creep: CreepType) -> GameEngine<Fixed> {
        let mut engine = engine(RunConfig::new(20, 5, 10, 1), 0);
        engine.state.creep = Creep::spawn(creep);
        engine
    }

    fn turn(engine: &mut GameEngine<Fixed>, card: CardType) -> ActionLog {
        let mut log = ActionLog::new();
        engine.play_turn(&mut |_: &GameState| card, &mut log);
        log
    }

    fn has_message(log: &ActionLog, text: &str) -> bool {
        log.messages().any(|m| m == text)
    }

    #[test]
    fn turn_is_framed_by_header_and_wait() {
        let mut engine = facing(CreepType::Lion);
        let log = turn(&mut engine, CardType::Attack);

        assert_eq!(log.as_slice()[0], Action::log("--- Turn 1 ---"));
        assert_eq!(log.last(), Some(&Action::Wait));
        assert_eq!(engine.state.turn, 2);
        assert_eq!(engine.state.round_turn, 1);
    }

    #[test]
    fn attack_then_counter_attack_in_order() {
        let mut engine = facing(CreepType::Lion);
        let log = turn(&mut engine, CardType::Attack);

        assert_eq!(
            log.as_slice(),
            &[
                Action::log("--- Turn 1 ---"),
                Action::UpdateCreepHp { delta: -2 },
                Action::log("Your Attack deals 2 damage"),
                Action::UpdateHp { delta: -2 },
                Action::red_log("Lion deals 2 damage"),
                Action::Wait,
            ]
        );
        assert_eq!(engine.state.creep.hp, 8);
        assert_eq!(engine.state.avatar.hp, 18);
    }

    #[test]
    fn unaffordable_card_is_an_illegal_move() {
        let mut engine = facing(CreepType::Lion);
        engine.state.avatar.mp = 2;
        engine.state.deck.grant(CardType::Heal, 1);

        let log = turn(&mut engine, CardType::Heal);

        assert_eq!(engine.illegal_moves, 1);
        assert_eq!(engine.state.avatar.mp, 2);
        assert_eq!(engine.state.deck.count(CardType::Heal), CardCount::Limited(0));
        assert_eq!(
            &log.as_slice()[1..3],
            &[
                Action::ChangeCardCount {
                    card: CardType::Heal,
                    delta: -1
                },
                Action::red_log("Not enough mana to use Heal"),
            ]
        );
        // The creep still acts.
        assert!(has_message(&log, "Lion deals 2 damage"));
    }

    #[test]
    fn failed_cast_can_keep_the_card() {
        let rules = RuleOptions {
            spend_card_on_failed_cast: false,
            ..RuleOptions::default()
        };
        let mut engine = engine(RunConfig::new(20, 2, 10, 1).with_rules(rules), 0);
        engine.state.deck.grant(CardType::Heal, 1);

        let log = turn(&mut engine, CardType::Heal);

        assert_eq!(engine.illegal_moves, 1);
        assert_eq!(engine.state.deck.count(CardType::Heal), CardCount::Limited(1));
        assert!(!log
            .iter()
            .any(|a| matches!(a, Action::ChangeCardCount { .. })));
    }

    #[test]
    fn unavailable_card_is_an_illegal_move() {
        let mut engine = facing(CreepType::Lion);
        let log = turn(&mut engine, CardType::Parry);

        assert_eq!(engine.illegal_moves, 1);
        assert_eq!(log.as_slice()[1], Action::red_log("Tried to use unavailable card Parry"));
        // An illegal parry blocks nothing.
        assert_eq!(engine.state.avatar.hp, 18);
        assert_eq!(engine.state.creep.hp, 10);
    }

    #[test]
    fn magic_immunity_negates_spells() {
        let mut engine = facing(CreepType::Dragon);
        let log = turn(&mut engine, CardType::MagicArrow);

        assert_eq!(engine.state.creep.hp, 30);
        assert_eq!(engine.state.avatar.mp, 4);
        assert!(has_message(&log, "MagicArrow failed: Dragon is immune to magic"));
    }

    #[test]
    fn firebolt_is_negated_by_magic_immunity() {
        let mut engine = facing(CreepType::Dragon);
        engine.state.deck.grant(CardType::Firebolt, 1);
        let log = turn(&mut engine, CardType::Firebolt);

        assert_eq!(engine.state.creep.hp, 30);
        assert_eq!(engine.state.avatar.mp, 2);
        assert!(has_message(&log, "Firebolt failed: Dragon is immune to magic"));
        assert!(!log
            .iter()
            .any(|a| matches!(a, Action::UpdateCreepHp { .. })));
    }

    #[test]
    fn physical_attacks_ignore_magic_immunity() {
        let mut engine = facing(CreepType::Dragon);
        let log = turn(&mut engine, CardType::Attack);
        assert_eq!(engine.state.creep.hp, 28);
        assert!(has_message(&log, "Your Attack deals 2 damage"));

        engine.state.deck.grant(CardType::PowerAttack, 1);
        let log = turn(&mut engine, CardType::PowerAttack);
        assert_eq!(engine.state.creep.hp, 24);
        assert!(has_message(&log, "Your PowerAttack deals 4 damage"));
    }

    #[test]
    fn firebolt_doubles_against_weak_to_fire() {
        let mut engine = facing(CreepType::Mummy);
        engine.state.deck.grant(CardType::Firebolt, 1);
        let log = turn(&mut engine, CardType::Firebolt);

        assert_eq!(engine.state.creep.hp, 18 - 8);
        assert!(has_message(&log, "Your Firebolt deals 8 damage"));
    }

    #[test]
    fn heal_never_exceeds_max_hp() {
        let mut engine = facing(CreepType::Cheepy);
        engine.state.avatar.hp = 19;
        let log = turn(&mut engine, CardType::Rest);

        assert_eq!(engine.state.avatar.hp, 20);
        assert!(log.iter().any(|a| *a == Action::UpdateHp { delta: 1 }));
        assert!(has_message(&log, "Got 1 HP from Rest"));
    }

    #[test]
    fn coward_at_full_health_does_not_attack() {
        let mut engine = facing(CreepType::Cheepy);
        turn(&mut engine, CardType::Rest);
        assert_eq!(engine.state.avatar.hp, 20);

        engine.state.creep.hp -= 1;
        turn(&mut engine, CardType::Rest);
        assert_eq!(engine.state.avatar.hp, 19);
    }

    #[test]
    fn stunned_creep_skips_attacks_until_stun_decays() {
        let mut engine = facing(CreepType::Lion);
        engine.state.deck.grant(CardType::Stun, 1);

        let log = turn(&mut engine, CardType::Stun);
        assert!(has_message(&log, "Lion is stunned for 2 turns"));
        assert_eq!(engine.state.creep.stun, 1);
        assert_eq!(engine.state.avatar.hp, 20);

        turn(&mut engine, CardType::Rest);
        assert_eq!(engine.state.creep.stun, 0);
        assert_eq!(engine.state.avatar.hp, 20);

        turn(&mut engine, CardType::Rest);
        assert_eq!(engine.state.avatar.hp, 18);
    }

    #[test]
    fn restun_overwrites_remaining_turns() {
        let mut engine = facing(CreepType::Lion);
        engine.state.creep.stun = 1;
        engine.state.deck.grant(CardType::Stun, 1);

        turn(&mut engine, CardType::Stun);
        // Set to 2, not 3, then one turn decays.
        assert_eq!(engine.state.creep.stun, 1);
        assert_eq!(engine.state.avatar.hp, 20);

        turn(&mut engine, CardType::Rest);
        assert_eq!(engine.state.creep.stun, 0);

        turn(&mut engine, CardType::Rest);
        assert_eq!(engine.state.avatar.hp, 18);
    }

    #[test]
    fn parry_against_stunned_creep_is_noted() {
        let mut engine = facing(CreepType::Lion);
        engine.state.creep.stun = 2;
        engine.state.deck.grant(CardType::Parry, 1);
        let log = turn(&mut engine, CardType::Parry);

        assert!(has_message(&log, "Tried to parry, but the enemy was not attacking"));
        assert_eq!(engine.state.avatar.hp, 20);
        assert_eq!(engine.state.creep.hp, 10);
        assert_eq!(engine.state.creep.stun, 1);
    }

    #[test]
    fn parry_reflects_melee_damage() {
        let mut engine = facing(CreepType::Lion);
        engine.state.deck.grant(CardType::Parry, 1);
        let log = turn(&mut engine, CardType::Parry);

        assert_eq!(engine.state.avatar.hp, 20);
        assert_eq!(engine.state.creep.hp, 8);
        assert!(has_message(&log, "2 damage is reflected back to Lion"));
    }

    #[test]
    fn parry_fails_against_ranged() {
        let mut engine = facing(CreepType::Fairy);
        engine.state.deck.grant(CardType::Parry, 1);
        let log = turn(&mut engine, CardType::Parry);

        assert_eq!(engine.state.creep.hp, 9);
        assert_eq!(engine.state.avatar.hp, 16);
        assert!(log.iter().any(|a| matches!(
            a,
            Action::Narrate { tone: Tone::Negative, message }
                if message == "Failed to parry a ranged attack"
        )));
    }

    #[test]
    fn parry_against_idle_creep_is_noted() {
        let mut engine = facing(CreepType::Cheepy);
        engine.state.deck.grant(CardType::Parry, 1);
        let log = turn(&mut engine, CardType::Parry);

        assert!(has_message(&log, "Tried to parry, but the enemy was not attacking"));
        assert_eq!(engine.state.avatar.hp, 20);
    }

    #[test]
    fn reflected_kill_ends_the_turn_with_rewards() {
        let mut engine = facing(CreepType::Lion);
        engine.state.creep.hp = 1;
        engine.state.deck.grant(CardType::Parry, 1);
        let log = turn(&mut engine, CardType::Parry);

        assert_eq!(engine.state.score, 6);
        assert_eq!(engine.state.round, 2);
        assert!(has_message(&log, "Lion is defeated! 6 score points received"));
        assert_eq!(log.last(), Some(&Action::Wait));
    }

    #[test]
    fn defeated_creep_grants_score_cards_and_next_round() {
        let mut engine = facing(CreepType::Lion);
        engine.state.creep.hp = 2;
        let previewed = engine.state.next_creep;
        let log = turn(&mut engine, CardType::Attack);

        // Roll index 0 always picks the first collectible card.
        assert_eq!(
            engine.state.deck.count(CardType::PowerAttack),
            CardCount::Limited(2)
        );
        assert_eq!(engine.state.score, 6);
        assert_eq!(engine.state.round, 2);
        assert_eq!(engine.state.round_turn, 1);
        assert_eq!(Some(engine.state.creep.kind), previewed);
        assert!(engine.state.creep.is_full());

        let tail = &log.as_slice()[log.len() - 4..];
        assert!(matches!(tail[0], Action::SetCreep { .. }));
        assert!(matches!(tail[1], Action::SetNextCreep { .. }));
        assert_eq!(tail[2], Action::NextRound);
        assert_eq!(tail[3], Action::Wait);
        // The dead creep never strikes back.
        assert_eq!(engine.state.avatar.hp, 20);
    }

    #[test]
    fn retreat_from_slow_creep_is_unpunished() {
        let mut engine = facing(CreepType::Mummy);
        let log = turn(&mut engine, CardType::Retreat);

        assert_eq!(engine.state.avatar.hp, 20);
        assert_eq!(engine.state.round, 2);
        assert_eq!(engine.state.score, 0);
        assert!(has_message(&log, "Retreated from Mummy!"));
    }

    #[test]
    fn retreat_from_fast_creep_takes_a_hit() {
        let mut engine = facing(CreepType::Lion);
        let log = turn(&mut engine, CardType::Retreat);

        assert_eq!(engine.state.avatar.hp, 18);
        assert_eq!(engine.state.round, 2);
        let hit = log.iter().position(|a| *a == Action::UpdateHp { delta: -2 });
        let fled = log
            .iter()
            .position(|a| a.message() == Some("Retreated from Lion!"));
        assert!(hit < fled);
    }

    #[test]
    fn free_retreat_escapes_any_creep() {
        let rules = RuleOptions {
            free_retreat: true,
            ..RuleOptions::default()
        };
        let mut engine = engine(RunConfig::new(20, 5, 10, 1).with_rules(rules), 0);
        engine.state.creep = Creep::spawn(CreepType::Lion);
        turn(&mut engine, CardType::Retreat);

        assert_eq!(engine.state.avatar.hp, 20);
        assert_eq!(engine.state.round, 2);
    }

    #[test]
    fn lethal_hit_defeats_the_avatar() {
        let mut engine = facing(CreepType::Lion);
        engine.state.avatar.hp = 2;
        let log = turn(&mut engine, CardType::Retreat);

        assert_eq!(engine.status, RunStatus::Defeat);
        // No retreat once defeated.
        assert_eq!(engine.state.round, 1);
        let tail = &log.as_slice()[log.len() - 3..];
        assert_eq!(
            tail,
            &[
                Action::Defeat,
                Action::red_log("Game over: avatar has been defeated!"),
                Action::Wait,
            ]
        );
    }

    #[test]
    fn final_round_has_no_next_creep() {
        let mut engine = engine(RunConfig::new(20, 5, 2, 1), 0);
        assert_eq!(engine.state.creep.kind, CreepType::Cheepy);
        assert_eq!(engine.state.next_creep, Some(CreepType::Dragon));

        engine.state.creep.hp = 2;
        let log = turn(&mut engine, CardType::Attack);
        assert_eq!(engine.state.creep.kind, CreepType::Dragon);
        assert_eq!(engine.state.next_creep, None);
        assert!(log.iter().any(|a| *a == Action::SetNextCreep { creep: None, hp: 0 }));

        engine.state.creep.hp = 2;
        let log = turn(&mut engine, CardType::Attack);
        assert!(log.iter().any(|a| *a == Action::SetCreep { creep: None, hp: 0 }));
        assert_eq!(engine.state.round, 3);
    }
}
