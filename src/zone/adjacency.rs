use super::Zone;

impl Zone {
    /// Zones that a pass originating in this zone may target for it to count towards zone-pair
    /// statistics. The table is asymmetric; zone 2 sits nearest the goal and has no onward targets.
    pub fn valid_targets(&self) -> &'static [Zone] {
        match self {
            Zone::One => &[Zone::Two, Zone::Four],
            Zone::Two => &[],
            Zone::Three => &[Zone::Two, Zone::Four],
            Zone::Four => &[Zone::One, Zone::Two, Zone::Three],
            Zone::Five => &[Zone::One, Zone::Two, Zone::Three, Zone::Four],
        }
    }

    pub fn is_valid_target(&self, target: Zone) -> bool {
        *self != target && self.valid_targets().contains(&target)
    }
}
