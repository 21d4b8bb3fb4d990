use bitflags::bitflags;

bitflags! {
    /// Allegiance flags carried by every entity in a world snapshot.
    ///
    /// An entity may carry several flags at once (e.g., a charmed enemy
    /// fighting for the player is `ENEMY | ALLY`).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct FactionSet: u8 {
        const PLAYER  = 1 << 0;
        const ALLY    = 1 << 1;
        const ENEMY   = 1 << 2;
        const NEUTRAL = 1 << 3;
    }
}

impl FactionSet {
    /// Returns `true` if an observer carrying `self` treats `other` as hostile.
    ///
    /// - `ENEMY` observers are hostile to anything flagged `PLAYER` or `ALLY`
    /// - `ALLY` observers are hostile to anything flagged `ENEMY`
    ///
    /// Both rules are checked independently.
    pub fn is_hostile_to(self, other: FactionSet) -> bool {
        let enemy_sees_target = self.contains(FactionSet::ENEMY)
            && other.intersects(FactionSet::PLAYER | FactionSet::ALLY);
        let ally_sees_target =
            self.contains(FactionSet::ALLY) && other.contains(FactionSet::ENEMY);
        enemy_sees_target || ally_sees_target
    }
}
