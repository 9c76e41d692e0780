//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. Mancala is strictly two-player, so only
//! `PlayerId(0)` and `PlayerId(1)` are valid; anything else is rejected by
//! the engine as a precondition violation.
//!
//! ## PlayerMap
//!
//! Fixed two-entry storage indexed by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of players at a Mancala board.
pub const PLAYER_COUNT: usize = 2;

/// Player identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The player who moves first.
    pub const FIRST: PlayerId = PlayerId(0);
    /// The player who moves second.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Is this one of the two seats at the board?
    #[must_use]
    pub const fn is_valid(self) -> bool {
        (self.0 as usize) < PLAYER_COUNT
    }

    /// The other player.
    ///
    /// ```
    /// use mancala_rules::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::FIRST.opponent(), PlayerId::SECOND);
    /// assert_eq!(PlayerId::SECOND.opponent(), PlayerId::FIRST);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - (self.0 & 1))
    }

    /// Iterate over both player IDs.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..PLAYER_COUNT as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with one entry per seat.
///
/// ## Example
///
/// ```
/// use mancala_rules::core::{PlayerId, PlayerMap};
///
/// let mut stores: PlayerMap<u32> = PlayerMap::with_value(0);
/// stores[PlayerId::SECOND] += 4;
///
/// assert_eq!(stores[PlayerId::FIRST], 0);
/// assert_eq!(stores[PlayerId::SECOND], 4);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::FIRST), factory(PlayerId::SECOND)],
        }
    }

    /// Create a map from both entries, first player first.
    pub const fn from_array(data: [T; PLAYER_COUNT]) -> Self {
        Self { data }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over the values, first player first.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Copy the entries out as a plain array.
    #[must_use]
    pub fn to_array(&self) -> [T; PLAYER_COUNT]
    where
        T: Copy,
    {
        self.data
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
        assert!(p0.is_valid());
        assert!(p1.is_valid());
        assert!(!PlayerId::new(2).is_valid());
    }

    #[test]
    fn test_player_id_opponent() {
        assert_eq!(PlayerId::FIRST.opponent(), PlayerId::SECOND);
        assert_eq!(PlayerId::SECOND.opponent(), PlayerId::FIRST);
        assert_eq!(PlayerId::FIRST.opponent().opponent(), PlayerId::FIRST);
    }

    #[test]
    fn test_player_id_all() {
        let players: Vec<_> = PlayerId::all().collect();
        assert_eq!(players, vec![PlayerId::FIRST, PlayerId::SECOND]);
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<i32> = PlayerMap::new(|p| p.index() as i32 * 10);

        assert_eq!(map[PlayerId::new(0)], 0);
        assert_eq!(map[PlayerId::new(1)], 10);
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<i32> = PlayerMap::with_value(0);

        map[PlayerId::new(0)] = 10;
        map[PlayerId::new(1)] += 20;

        assert_eq!(map.to_array(), [10, 20]);
    }

    #[test]
    fn test_player_map_iter() {
        let map = PlayerMap::from_array([3, 7]);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(PlayerId::new(0), &3), (PlayerId::new(1), &7)]);
        assert_eq!(map.values().sum::<i32>(), 10);
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<u32> = PlayerMap::from_array([1, 2]);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
