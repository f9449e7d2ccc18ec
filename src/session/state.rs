//! The combat session: one run from the first encounter to victory or defeat.
//!
//! `CombatSession` owns all mutable run state: the player, the current
//! monster, the owned deck, the piles, phase and turn, the pending reward
//! offer, damage flashes, and the command history. Catalogs are immutable
//! and shared through `Arc`, so many sessions can run from one catalog.
//!
//! Every inbound operation re-checks phase and turn before touching
//! anything. A rejected operation returns `ActionRejected` and leaves the
//! session exactly as it was, so double-fired UI events are harmless.
//!
//! ## Randomness
//!
//! Three independent streams derived from the run seed:
//! - `deck`: shuffles and reshuffles
//! - `encounter`: monster selection and intent rolls
//! - `rewards`: reward offers
//!
//! ## Phases
//!
//! ```text
//! Combat ──monster dies──▶ Victory ──select/skip/continue──▶ Combat
//!   │  └──level reaches win level──▶ GameWon ──continue──▶ Combat (new run)
//!   └──player dies──▶ Defeat ──continue──▶ Combat (new run)
//! ```

use std::sync::Arc;

use im::Vector;
use tracing::{debug, info};

use super::command::{Command, CommandRecord};
use super::phase::{GamePhase, Turn};
use super::snapshot::SessionSnapshot;
use crate::cards::{standard_cards, CardId, CardRegistry};
use crate::combat::{
    CardPlay, CombatResolver, DamageEvents, DamageFlashes, MonsterAction, Player, ResolverContext, Side,
};
use crate::core::{ActionRejected, ConfigError, GameRng, RunConfig};
use crate::monsters::{standard_monsters, Monster, MonsterCatalog};
use crate::zones::Piles;

/// Result of an accepted card play.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayOutcome {
    pub play: CardPlay,
    /// Phase after the play resolved.
    pub phase: GamePhase,
}

/// Result of an accepted end of turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Damage from cards left in hand.
    pub end_of_turn: DamageEvents,
    /// The monster's turn, unless the player died first.
    pub monster: Option<MonsterAction>,
    /// Cards drawn for the next player turn.
    pub drawn: usize,
    pub phase: GamePhase,
}

/// A single run.
///
/// ## Example
///
/// ```
/// use spire_engine::core::RunConfig;
/// use spire_engine::session::{CombatSession, GamePhase, Turn};
///
/// let mut session = CombatSession::new(RunConfig::default(), 42).unwrap();
/// assert_eq!(session.phase(), GamePhase::Combat);
/// assert_eq!(session.turn(), Turn::Player);
/// assert_eq!(session.piles().hand().len(), 5);
///
/// let outcome = session.end_turn().unwrap();
/// assert!(outcome.monster.is_some());
/// ```
#[derive(Clone, Debug)]
pub struct CombatSession {
    config: RunConfig,
    cards: Arc<CardRegistry>,
    monsters: Arc<MonsterCatalog>,
    seed: u64,

    // === Run state ===
    player: Player,
    /// Starter deck plus accepted rewards.
    deck: Vector<CardId>,
    starter: Vec<CardId>,
    rewards: Vec<CardId>,

    // === Encounter state ===
    /// Kept after the monster dies until the next encounter starts.
    monster: Option<Monster>,
    piles: Piles,
    phase: GamePhase,
    turn: Turn,
    encounter: u32,
    turn_number: u32,

    // === Outputs ===
    flashes: DamageFlashes,
    history: Vector<CommandRecord>,

    // === Randomness ===
    deck_rng: GameRng,
    encounter_rng: GameRng,
    reward_rng: GameRng,
}

impl CombatSession {
    /// Start a run with the standard catalogs.
    pub fn new(config: RunConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_catalogs(config, Arc::new(standard_cards()), Arc::new(standard_monsters()), seed)
    }

    /// Start a run with the given catalogs. The first encounter is ready
    /// when this returns.
    pub fn with_catalogs(
        config: RunConfig,
        cards: Arc<CardRegistry>,
        monsters: Arc<MonsterCatalog>,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        config.validate(&cards, &monsters)?;
        let starter = config.starter_cards(&cards)?;

        let rng = GameRng::new(seed);
        let player = Player::new(config.player_name.clone(), config.starting_health, config.max_energy);

        let mut session = Self {
            player,
            deck: starter.iter().copied().collect(),
            starter,
            rewards: Vec::new(),
            monster: None,
            piles: Piles::new(),
            phase: GamePhase::Combat,
            turn: Turn::Player,
            encounter: 0,
            turn_number: 0,
            flashes: DamageFlashes::default(),
            history: Vector::new(),
            deck_rng: rng.for_context("deck"),
            encounter_rng: rng.for_context("encounter"),
            reward_rng: rng.for_context("rewards"),
            config,
            cards,
            monsters,
            seed,
        };

        info!(seed, player = %session.player.name, "starting run");
        session.next_encounter();
        Ok(session)
    }

    /// Rebuild a session by replaying a command history.
    ///
    /// Panics if a replayed command is rejected, which means the history
    /// came from a different seed, config, or catalog.
    pub fn replay<'h>(
        config: RunConfig,
        cards: Arc<CardRegistry>,
        monsters: Arc<MonsterCatalog>,
        seed: u64,
        history: impl IntoIterator<Item = &'h CommandRecord>,
    ) -> Result<Self, ConfigError> {
        let mut session = Self::with_catalogs(config, cards, monsters, seed)?;
        for record in history {
            if let Err(err) = session.apply(record.command) {
                panic!("replayed command #{} {:?} was rejected: {}", record.sequence, record.command, err);
            }
        }
        Ok(session)
    }

    // === Inbound operations ===

    /// Apply a command. Returns the phase afterwards.
    pub fn apply(&mut self, command: Command) -> Result<GamePhase, ActionRejected> {
        match command {
            Command::PlayCard(index) => self.play_card(index).map(|outcome| outcome.phase),
            Command::EndTurn => self.end_turn().map(|outcome| outcome.phase),
            Command::SelectReward(card) => self.select_reward(card),
            Command::SkipReward => self.skip_reward(),
            Command::ContinueRun => self.continue_run(),
            Command::AbandonRun => Ok(self.abandon_run()),
        }
    }

    /// Play the card at a hand index.
    ///
    /// Panics if the index is out of range.
    pub fn play_card(&mut self, hand_index: usize) -> Result<PlayOutcome, ActionRejected> {
        self.require_player_turn()?;

        let play = CombatResolver::play_card(&mut self.resolver_context(), hand_index)?;
        self.record(Command::PlayCard(hand_index));
        self.record_flashes(&play.events);

        let monster_dead = self.monster.as_ref().is_some_and(Monster::is_dead);
        if self.player.is_dead() {
            self.set_phase(GamePhase::Defeat);
        } else if monster_dead {
            self.on_monster_defeated();
        }

        Ok(PlayOutcome {
            play,
            phase: self.phase,
        })
    }

    /// End the player's turn and run the monster's turn.
    pub fn end_turn(&mut self) -> Result<TurnOutcome, ActionRejected> {
        self.require_player_turn()?;
        self.record(Command::EndTurn);

        let end_of_turn = CombatResolver::end_player_turn(&mut self.resolver_context());
        self.record_flashes(&end_of_turn);

        if self.player.is_dead() {
            self.set_phase(GamePhase::Defeat);
            return Ok(TurnOutcome {
                end_of_turn,
                monster: None,
                drawn: 0,
                phase: self.phase,
            });
        }

        self.turn = Turn::Monster;
        let action = CombatResolver::monster_act(&mut self.resolver_context());
        self.record_flashes(&action.events);

        let mut drawn = 0;
        if self.player.is_dead() {
            self.set_phase(GamePhase::Defeat);
        } else if action.escaped {
            if let Some(monster) = self.monster.take() {
                info!(monster = %monster.name, "monster escaped");
            }
            self.rewards.clear();
            self.set_phase(GamePhase::Victory);
        } else {
            if let Some(monster) = self.monster.as_mut() {
                monster.roll_next_intent(&mut self.encounter_rng);
            }
            drawn = self.start_player_turn();
        }

        Ok(TurnOutcome {
            end_of_turn,
            monster: Some(action),
            drawn,
            phase: self.phase,
        })
    }

    /// Add an offered card to the deck and start the next encounter.
    pub fn select_reward(&mut self, card: CardId) -> Result<GamePhase, ActionRejected> {
        self.require_phase(GamePhase::Victory)?;
        if !self.rewards.contains(&card) {
            return Err(ActionRejected::NotOffered(card));
        }

        self.record(Command::SelectReward(card));
        self.deck.push_back(card);
        info!(card = %self.cards.lookup(card).name, deck_size = self.deck.len(), "added reward to deck");

        self.next_encounter();
        Ok(self.phase)
    }

    /// Decline the reward and start the next encounter.
    pub fn skip_reward(&mut self) -> Result<GamePhase, ActionRejected> {
        self.require_phase(GamePhase::Victory)?;
        self.record(Command::SkipReward);
        self.next_encounter();
        Ok(self.phase)
    }

    /// Leave a finished encounter or run.
    ///
    /// From victory this skips the reward; from defeat or a won game it
    /// starts a new run.
    pub fn continue_run(&mut self) -> Result<GamePhase, ActionRejected> {
        match self.phase {
            GamePhase::Combat => Err(ActionRejected::WrongPhase(GamePhase::Combat)),
            GamePhase::Victory => {
                self.record(Command::ContinueRun);
                self.next_encounter();
                Ok(self.phase)
            }
            GamePhase::Defeat | GamePhase::GameWon => {
                self.record(Command::ContinueRun);
                self.new_run();
                Ok(self.phase)
            }
        }
    }

    /// Throw away the run and start a new one. Allowed in any phase.
    pub fn abandon_run(&mut self) -> GamePhase {
        self.record(Command::AbandonRun);
        info!(level = self.player.level, phase = %self.phase, "abandoning run");
        self.new_run();
        self.phase
    }

    /// Replace the current encounter with a specific monster.
    ///
    /// A setup hook for scripted fights and tests. It is not recorded in
    /// the history, so sessions that use it cannot be replayed.
    pub fn start_encounter(&mut self, monster: Monster) {
        self.begin_encounter(monster);
    }

    // === Outbound ===

    /// Take the "just took damage" notification for a side.
    ///
    /// Returns the health lost since the last call, or `None` if the side
    /// has not lost health since.
    pub fn take_damage_flash(&mut self, side: Side) -> Option<i64> {
        self.flashes.take(side)
    }

    /// Render-ready view of the session.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(self)
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    #[must_use]
    pub fn cards(&self) -> &CardRegistry {
        &self.cards
    }

    #[must_use]
    pub fn monsters(&self) -> &MonsterCatalog {
        &self.monsters
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// The current monster. Still set after it dies, until the next
    /// encounter; `None` after it escapes.
    #[must_use]
    pub fn monster(&self) -> Option<&Monster> {
        self.monster.as_ref()
    }

    #[must_use]
    pub fn piles(&self) -> &Piles {
        &self.piles
    }

    /// The owned deck: starter cards plus accepted rewards.
    #[must_use]
    pub fn deck(&self) -> &Vector<CardId> {
        &self.deck
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Cards offered after the last victory.
    #[must_use]
    pub fn rewards(&self) -> &[CardId] {
        &self.rewards
    }

    /// Encounter number within the run (starts at 1).
    #[must_use]
    pub fn encounter(&self) -> u32 {
        self.encounter
    }

    /// Player turn number within the encounter (starts at 1).
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Accepted commands, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<CommandRecord> {
        &self.history
    }

    /// Can the card at a hand index be played right now?
    #[must_use]
    pub fn is_playable(&self, hand_index: usize) -> bool {
        self.require_player_turn().is_ok()
            && CombatResolver::check_play(&self.cards, &self.player, &self.piles, hand_index).is_ok()
    }

    // === Transitions ===

    fn require_phase(&self, phase: GamePhase) -> Result<(), ActionRejected> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(ActionRejected::WrongPhase(self.phase))
        }
    }

    fn require_player_turn(&self) -> Result<(), ActionRejected> {
        self.require_phase(GamePhase::Combat)?;
        match self.turn {
            Turn::Player => Ok(()),
            turn => Err(ActionRejected::WrongTurn(turn)),
        }
    }

    fn resolver_context(&mut self) -> ResolverContext<'_> {
        let monster = match self.monster.as_mut() {
            Some(monster) => monster,
            None => panic!("combat phase without a monster"),
        };
        ResolverContext {
            cards: &self.cards,
            player: &mut self.player,
            monster,
            piles: &mut self.piles,
            rng: &mut self.deck_rng,
        }
    }

    fn record(&mut self, command: Command) {
        let sequence = self.history.len() as u32;
        debug!(?command, sequence, "accepted command");
        self.history
            .push_back(CommandRecord::new(command, self.encounter, self.turn_number, sequence));
    }

    fn record_flashes(&mut self, events: &DamageEvents) {
        for event in events {
            self.flashes.record(event);
        }
    }

    fn set_phase(&mut self, phase: GamePhase) {
        if self.phase != phase {
            info!(from = %self.phase, to = %phase, level = self.player.level, "phase change");
            self.phase = phase;
        }
    }

    fn on_monster_defeated(&mut self) {
        self.player.level += 1;
        info!(level = self.player.level, "monster defeated");

        if self.player.level >= self.config.win_level {
            self.rewards.clear();
            self.set_phase(GamePhase::GameWon);
        } else {
            self.rewards = self.cards.reward_draw(
                self.config.reward_choices,
                &self.config.rarity_weights,
                &mut self.reward_rng,
            );
            self.set_phase(GamePhase::Victory);
        }
    }

    fn new_run(&mut self) {
        self.player = Player::new(
            self.config.player_name.clone(),
            self.config.starting_health,
            self.config.max_energy,
        );
        self.deck = self.starter.iter().copied().collect();
        self.rewards.clear();
        self.encounter = 0;
        self.next_encounter();
    }

    fn next_encounter(&mut self) {
        let monster = self
            .monsters
            .select_encounter(self.player.level, &self.config.tiers, &mut self.encounter_rng);
        self.begin_encounter(monster);
    }

    fn begin_encounter(&mut self, monster: Monster) {
        self.encounter += 1;
        self.turn_number = 0;
        self.rewards.clear();
        self.flashes.clear();
        self.player.statuses = Default::default();

        let deck: Vec<CardId> = self.deck.iter().copied().collect();
        self.piles.reset_from_deck(&deck, &mut self.deck_rng);

        info!(
            encounter = self.encounter,
            level = self.player.level,
            monster = %monster.name,
            health = monster.health,
            "encounter started"
        );
        self.monster = Some(monster);
        self.set_phase(GamePhase::Combat);
        self.start_player_turn();
    }

    fn start_player_turn(&mut self) -> usize {
        self.turn = Turn::Player;
        self.turn_number += 1;
        self.player.start_turn();
        let drawn = self.piles.draw(self.config.hand_size, &mut self.deck_rng);
        debug!(turn = self.turn_number, drawn, "player turn started");
        drawn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::ids;
    use crate::monsters::{Intent, MonsterId, MonsterTemplate};
    use crate::zones::Pile;

    fn dummy(health: i64, intent: Intent) -> Monster {
        let mut rng = GameRng::new(0);
        MonsterTemplate::new(MonsterId::new(900), "dummy", "Dummy", health)
            .with_intent(intent)
            .instantiate(&mut rng)
    }

    fn strikes_only() -> RunConfig {
        RunConfig::default().with_starter_deck(["strike"; 10])
    }

    #[test]
    fn test_new_session() {
        let session = CombatSession::new(RunConfig::default(), 1).unwrap();

        assert_eq!(session.phase(), GamePhase::Combat);
        assert_eq!(session.turn(), Turn::Player);
        assert_eq!(session.encounter(), 1);
        assert_eq!(session.turn_number(), 1);
        assert_eq!(session.player().energy, 3);
        assert_eq!(session.piles().len(Pile::Hand), 5);
        assert_eq!(session.piles().total(), 10);
        assert!(session.monster().is_some());
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_invalid_config() {
        let config = RunConfig::default().with_starter_deck(["nope"]);
        assert!(matches!(
            CombatSession::new(config, 1),
            Err(ConfigError::UnknownCard(_))
        ));
    }

    #[test]
    fn test_kill_offers_rewards() {
        let mut session = CombatSession::new(strikes_only(), 3).unwrap();
        session.start_encounter(dummy(6, Intent::buff("Idle", 1.0)));

        let outcome = session.play_card(0).unwrap();
        assert_eq!(outcome.phase, GamePhase::Victory);
        assert_eq!(session.player().level, 2);
        assert_eq!(session.rewards().len(), 3);
        assert!(session.monster().unwrap().is_dead());
        assert_eq!(session.take_damage_flash(Side::Monster), Some(6));
        assert_eq!(session.take_damage_flash(Side::Monster), None);

        assert_eq!(session.play_card(0).unwrap_err(), ActionRejected::WrongPhase(GamePhase::Victory));
        assert_eq!(session.end_turn().unwrap_err(), ActionRejected::WrongPhase(GamePhase::Victory));
    }

    #[test]
    fn test_select_reward_grows_deck() {
        let mut session = CombatSession::new(strikes_only(), 3).unwrap();
        session.start_encounter(dummy(6, Intent::buff("Idle", 1.0)));
        session.play_card(0).unwrap();

        let offered = session.rewards()[0];
        assert_eq!(session.select_reward(offered).unwrap(), GamePhase::Combat);
        assert_eq!(session.deck().len(), 11);
        assert_eq!(session.deck().last(), Some(&offered));
        assert_eq!(session.piles().total(), 11);
        assert_eq!(session.encounter(), 3);
        assert!(session.rewards().is_empty());
    }

    #[test]
    fn test_select_unoffered_reward() {
        let mut session = CombatSession::new(strikes_only(), 3).unwrap();
        session.start_encounter(dummy(6, Intent::buff("Idle", 1.0)));
        session.play_card(0).unwrap();

        let not_offered = session
            .cards()
            .iter()
            .map(|card| card.id)
            .find(|id| !session.rewards().contains(id))
            .unwrap();
        assert_eq!(
            session.select_reward(not_offered).unwrap_err(),
            ActionRejected::NotOffered(not_offered)
        );
        assert_eq!(session.phase(), GamePhase::Victory);
    }

    #[test]
    fn test_reward_actions_need_victory() {
        let mut session = CombatSession::new(RunConfig::default(), 3).unwrap();
        assert_eq!(
            session.skip_reward().unwrap_err(),
            ActionRejected::WrongPhase(GamePhase::Combat)
        );
        assert_eq!(
            session.continue_run().unwrap_err(),
            ActionRejected::WrongPhase(GamePhase::Combat)
        );
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_self_damage_defeat_beats_kill() {
        let config = RunConfig::default()
            .with_starting_health(2)
            .with_starter_deck(["hemokinesis"; 10]);
        let mut session = CombatSession::new(config, 9).unwrap();
        session.start_encounter(dummy(10, Intent::buff("Idle", 1.0)));

        let outcome = session.play_card(0).unwrap();
        assert_eq!(outcome.phase, GamePhase::Defeat);
        assert!(session.monster().unwrap().is_dead());
        assert_eq!(session.player().level, 1);
    }

    #[test]
    fn test_monster_escape() {
        let mut session = CombatSession::new(RunConfig::default(), 4).unwrap();
        session.start_encounter(dummy(
            40,
            Intent::special("Smoke Bomb", 1.0, crate::monsters::SpecialMove::Escape),
        ));

        let outcome = session.end_turn().unwrap();
        assert_eq!(outcome.phase, GamePhase::Victory);
        assert!(outcome.monster.unwrap().escaped);
        assert!(session.monster().is_none());
        assert!(session.rewards().is_empty());
        assert_eq!(session.player().level, 1);

        assert_eq!(session.skip_reward().unwrap(), GamePhase::Combat);
    }

    #[test]
    fn test_abandon_resets_run() {
        let mut session = CombatSession::new(strikes_only(), 5).unwrap();
        session.start_encounter(dummy(6, Intent::buff("Idle", 1.0)));
        session.play_card(0).unwrap();
        session.select_reward(session.rewards()[0]).unwrap();

        assert_eq!(session.abandon_run(), GamePhase::Combat);
        assert_eq!(session.player().level, 1);
        assert_eq!(session.player().health, 80);
        assert_eq!(session.deck().len(), 10);
        assert_eq!(session.encounter(), 1);
        assert_eq!(session.history().len(), 3);
    }

    #[test]
    fn test_continue_after_defeat() {
        let mut session = CombatSession::new(RunConfig::default(), 6).unwrap();
        session.start_encounter(dummy(40, Intent::attack("Crush", 1.0, 200)));
        assert_eq!(session.end_turn().unwrap().phase, GamePhase::Defeat);

        assert_eq!(session.continue_run().unwrap(), GamePhase::Combat);
        assert_eq!(session.player().health, 80);
        assert_eq!(session.turn(), Turn::Player);
    }

    #[test]
    fn test_statuses_reset_between_encounters() {
        let mut session = CombatSession::new(strikes_only(), 8).unwrap();
        session.start_encounter(dummy(
            40,
            Intent::debuff("Lick", 1.0).with_debuff(crate::combat::DebuffKind::DexterityDown, 2),
        ));
        session.end_turn().unwrap();
        assert_eq!(session.player().statuses.dexterity, -2);

        session.start_encounter(dummy(6, Intent::buff("Idle", 1.0)));
        assert_eq!(session.player().statuses.dexterity, 0);
    }

    #[test]
    fn test_apply_dispatches() {
        let mut session = CombatSession::new(RunConfig::default(), 2).unwrap();
        let phase = session.apply(Command::EndTurn).unwrap();

        assert_eq!(phase, session.phase());
        assert_eq!(session.turn_number(), 2);
        assert_eq!(
            session.apply(Command::SkipReward),
            Err(ActionRejected::WrongPhase(GamePhase::Combat))
        );
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].command, Command::EndTurn);
        assert_eq!(session.history()[0].turn, 1);
    }
}
