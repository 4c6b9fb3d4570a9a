//! The arena: terrain, fighters and turn orchestration.
//!
//! All validation happens against the current state at call time. A failed
//! operation leaves positions untouched, so the caller can simply retry with
//! another input.

use crate::actions::Direction;
use crate::components::Position;
use crate::config::ArenaConfig;
use crate::constants::ARENA_MAX_SIZE;
use crate::error::{ArenaError, Result};
use crate::events::{ArenaEvent, EventQueue, Mover};
use crate::fighter::{Fighter, Hero, Locomotion, Monster, MonsterId, Movable};
use crate::game_mode::GameMode;
use crate::grid::Grid;
use crate::systems::{fight, grant_xp, random_direction, touchable, validate_move};
use crate::tile::{Tile, TileType};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, info, trace};

/// Result of a successful [`Arena::battle`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    /// The monster died and was removed
    Slain { dealt: i32, experience: u32 },
    /// Both sides struck once
    Exchanged { dealt: i32, taken: i32 },
}

#[derive(Debug)]
pub struct Arena {
    grid: Grid,
    hero: Hero,
    monsters: BTreeMap<MonsterId, Monster>,
    mode: GameMode,
    turn: u32,
    rng: StdRng,
    events: EventQueue,
}

impl Arena {
    pub fn new(
        size: i32,
        hero: Hero,
        monsters: BTreeMap<MonsterId, Monster>,
        tiles: Vec<Tile>,
        mode: GameMode,
        seed: u64,
    ) -> Self {
        Self {
            grid: Grid::new(size, tiles),
            hero,
            monsters,
            mode,
            turn: 0,
            rng: StdRng::seed_from_u64(seed),
            events: EventQueue::new(),
        }
    }

    /// Build and validate an arena from its setup description
    pub fn from_config(config: &ArenaConfig) -> Result<Self> {
        if config.size <= 0 {
            return Err(ArenaError::InvalidConfig(format!(
                "arena size must be positive, got {}",
                config.size
            )));
        }
        if config.size > ARENA_MAX_SIZE {
            return Err(ArenaError::InvalidConfig(format!(
                "arena size {} exceeds the maximum of {ARENA_MAX_SIZE}",
                config.size
            )));
        }

        let tiles = config.layout();
        let mut seen_tiles = HashSet::new();
        for tile in &tiles {
            if !tile.position.in_bounds(config.size) {
                return Err(ArenaError::InvalidConfig(format!(
                    "tile {} lies outside the arena",
                    tile.position
                )));
            }
            if !seen_tiles.insert(tile.position) {
                return Err(ArenaError::InvalidConfig(format!(
                    "two tiles share {}",
                    tile.position
                )));
            }
        }
        let grid = Grid::new(config.size, tiles);

        let hero = config.hero.build();
        let monsters: BTreeMap<MonsterId, Monster> = config
            .monsters
            .iter()
            .zip(0..)
            .map(|(monster, id)| (id, monster.build()))
            .collect();

        let mut occupied = HashSet::new();
        let fighters = std::iter::once((hero.name(), &hero as &dyn Movable))
            .chain(monsters.values().map(|m| (m.name(), m as &dyn Movable)));
        for (name, fighter) in fighters {
            let pos = fighter.position();
            if !grid.contains(pos) {
                return Err(ArenaError::InvalidConfig(format!(
                    "{name} starts outside the arena at {pos}"
                )));
            }
            if !occupied.insert(pos) {
                return Err(ArenaError::InvalidConfig(format!(
                    "{name} starts on occupied tile {pos}"
                )));
            }
            let crossable = grid
                .get(pos.x, pos.y)
                .map_or(true, |t| t.is_crossable(fighter.locomotion()));
            if !crossable && fighter.locomotion() != Locomotion::Rooted {
                return Err(ArenaError::InvalidConfig(format!(
                    "{name} starts on uncrossable terrain at {pos}"
                )));
            }
        }

        info!(
            size = config.size,
            monsters = monsters.len(),
            mode = ?config.mode,
            "Arena ready"
        );

        Ok(Self {
            grid,
            hero,
            monsters,
            mode: config.mode,
            turn: 0,
            rng: StdRng::seed_from_u64(config.seed),
            events: EventQueue::new(),
        })
    }

    pub fn size(&self) -> i32 {
        self.grid.size
    }

    pub fn hero(&self) -> &Hero {
        &self.hero
    }

    pub fn hero_mut(&mut self) -> &mut Hero {
        &mut self.hero
    }

    pub fn hero_position(&self) -> Position {
        self.hero.position()
    }

    pub fn monsters(&self) -> &BTreeMap<MonsterId, Monster> {
        &self.monsters
    }

    pub fn monster(&self, id: MonsterId) -> Option<&Monster> {
        self.monsters.get(&id)
    }

    pub fn tiles(&self) -> &[Tile] {
        self.grid.tiles()
    }

    pub fn tile(&self, x: i32, y: i32) -> Option<&Tile> {
        self.grid.get(x, y)
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Completed hero turns
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Events of the latest turn. `arena_move`, `battle` and `dig` each
    /// start a new turn and discard whatever was not drained.
    pub fn events(&mut self) -> &mut EventQueue {
        &mut self.events
    }

    pub fn is_victory(&self) -> bool {
        self.mode.is_victory(self)
    }

    pub fn is_defeat(&self) -> bool {
        !self.hero.is_alive()
    }

    /// Euclidean distance between two fighters
    pub fn distance(&self, a: &impl Movable, b: &impl Movable) -> f32 {
        a.position().distance(&b.position())
    }

    /// Positions a mover may not step onto: every other fighter
    fn occupied_by_others(&self, mover: Mover) -> Vec<Position> {
        let monsters = self
            .monsters
            .iter()
            .filter(|(id, _)| mover != Mover::Monster(**id))
            .map(|(_, m)| m.position());
        match mover {
            Mover::Hero => monsters.collect(),
            Mover::Monster(_) => monsters.chain(std::iter::once(self.hero.position())).collect(),
        }
    }

    /// Move one fighter a single step. Fails if the destination is not
    /// crossable, out of the map, or occupied; the position is left unchanged
    /// on failure.
    ///
    /// A hole floods once a fighter that does not fly walks out of it.
    pub fn move_fighter(&mut self, mover: Mover, direction: Direction) -> Result<Position> {
        let occupied = self.occupied_by_others(mover);
        let (from, to, locomotion) = match mover {
            Mover::Hero => {
                let to = validate_move(&self.grid, &self.hero, direction, occupied)?;
                let from = self.hero.position();
                self.hero.set_position(to);
                (from, to, self.hero.locomotion())
            }
            Mover::Monster(id) => {
                let monster = self
                    .monsters
                    .get_mut(&id)
                    .ok_or(ArenaError::UnknownMonster(id))?;
                if !monster.is_movable() {
                    return Err(ArenaError::Immovable(monster.name().to_string()));
                }
                let to = validate_move(&self.grid, &*monster, direction, occupied)?;
                let from = monster.position();
                monster.set_position(to);
                (from, to, monster.locomotion())
            }
        };

        debug!(?mover, %direction, %from, %to, "Moved");
        self.events.push(ArenaEvent::Moved { mover, from, to });

        let left_hole = self.grid.get(from.x, from.y).is_some_and(|t| t.is_digged());
        if left_hole && locomotion != Locomotion::Fly {
            self.replace_tile(from.x, from.y);
        }
        Ok(to)
    }

    /// Move the hero, then let every movable monster wander one step in a
    /// random direction. Monster failures are ignored; a hero failure aborts
    /// the turn before any monster moves.
    pub fn arena_move(&mut self, direction: Direction) -> Result<Position> {
        self.events.clear();
        let destination = self.move_fighter(Mover::Hero, direction)?;

        let wanderers: Vec<MonsterId> = self
            .monsters
            .iter()
            .filter(|(_, m)| m.is_movable())
            .map(|(id, _)| *id)
            .collect();
        for id in wanderers {
            let direction = random_direction(&mut self.rng);
            if let Err(err) = self.move_fighter(Mover::Monster(id), direction) {
                trace!(id, %direction, %err, "Monster stays put");
            }
        }

        self.turn += 1;
        Ok(destination)
    }

    /// Resolve one exchange between the hero and monster `id`.
    ///
    /// The hero strikes first. A slain monster is removed and its experience
    /// goes to the hero. A survivor strikes back, or the call fails with
    /// [`ArenaError::HeroOutOfRange`] after the hero's blow has landed.
    pub fn battle(&mut self, id: MonsterId) -> Result<BattleOutcome> {
        self.events.clear();
        let monster = self
            .monsters
            .get_mut(&id)
            .ok_or(ArenaError::UnknownMonster(id))?;

        if !touchable(&self.hero, &*monster) {
            return Err(ArenaError::MonsterOutOfRange(id));
        }
        let dealt = fight(&self.hero, &mut *monster, &mut self.rng);
        debug!(id, dealt, life = monster.life(), "Hero strikes");
        self.events.push(ArenaEvent::AttackHit {
            attacker: Mover::Hero,
            target: Mover::Monster(id),
            damage: dealt,
        });

        if !monster.is_alive() {
            let experience = monster.experience();
            let name = monster.name().to_string();
            self.monsters.remove(&id);
            info!(id, %name, experience, "Monster slain");
            self.events.push(ArenaEvent::MonsterSlain { id, experience });

            if grant_xp(&mut self.hero.combatant.experience, experience) {
                let new_level = self.hero.level();
                info!(new_level, "Hero levels up");
                self.events.push(ArenaEvent::LevelUp { new_level });
            }
            return Ok(BattleOutcome::Slain { dealt, experience });
        }

        if !touchable(&*monster, &self.hero) {
            return Err(ArenaError::HeroOutOfRange(id));
        }
        let taken = fight(&*monster, &mut self.hero, &mut self.rng);
        debug!(id, taken, life = self.hero.life(), "Monster retaliates");
        self.events.push(ArenaEvent::AttackHit {
            attacker: Mover::Monster(id),
            target: Mover::Hero,
            damage: taken,
        });
        if !self.hero.is_alive() {
            info!(id, "Hero has fallen");
        }
        Ok(BattleOutcome::Exchanged { dealt, taken })
    }

    /// Append a Water tile at the coordinates of `tile`
    pub fn add_tile(&mut self, tile: &Tile) -> Position {
        self.grid.add_tile(tile)
    }

    pub fn remove_tile(&mut self, tile: &Tile) -> Option<Tile> {
        self.grid.remove_tile(tile)
    }

    /// Swap the tile at `(x, y)` for Water
    pub fn replace_tile(&mut self, x: i32, y: i32) -> Option<Tile> {
        let previous = self.grid.replace_tile(x, y)?;
        info!(position = %previous.position, previous = ?previous.tile_type, "Tile flooded");
        self.events.push(ArenaEvent::TileFlooded {
            position: previous.position,
            previous: previous.tile_type,
        });
        Some(previous)
    }

    /// Dig the grass under the hero. Digging an existing hole changes nothing.
    pub fn dig(&mut self) -> Result<Position> {
        self.events.clear();
        if !self.hero.can_dig() {
            return Err(ArenaError::NoShovel);
        }
        let position = self.hero.position();
        let tile = self
            .grid
            .get_mut(position.x, position.y)
            .ok_or(ArenaError::NotDiggable(position))?;

        match tile.tile_type {
            TileType::Grass { digged: false } => {
                tile.dig();
                info!(%position, "Hole dug");
                self.events.push(ArenaEvent::TileDug { position });
            }
            TileType::Grass { digged: true } => debug!(%position, "Already a hole"),
            _ => return Err(ArenaError::NotDiggable(position)),
        }
        Ok(position)
    }
}
