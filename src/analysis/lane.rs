use crate::error::AppError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lane {
    Top,
    Jungle,
    Mid,
    Adc,
    Support,
    Unknown,
}

/// Each lane's synergy partner. Directional: TOP points at JUNGLE but
/// JUNGLE points at MID.
const SYNERGY_PARTNERS: [(Lane, Lane); 5] = [
    (Lane::Adc, Lane::Support),
    (Lane::Support, Lane::Adc),
    (Lane::Mid, Lane::Jungle),
    (Lane::Jungle, Lane::Mid),
    (Lane::Top, Lane::Jungle),
];

impl Lane {
    pub fn synergy_partner(self) -> Option<Lane> {
        SYNERGY_PARTNERS
            .iter()
            .find(|(lane, _)| *lane == self)
            .map(|(_, partner)| *partner)
    }

    /// Maps a match-v5 `individualPosition` onto a lane.
    pub fn from_riot_position(position: &str) -> Lane {
        match position {
            "TOP" => Lane::Top,
            "JUNGLE" => Lane::Jungle,
            "MIDDLE" => Lane::Mid,
            "BOTTOM" => Lane::Adc,
            "UTILITY" => Lane::Support,
            _ => Lane::Unknown,
        }
    }

    pub fn is_known(self) -> bool {
        self != Lane::Unknown
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Lane::Top => "TOP",
            Lane::Jungle => "JUNGLE",
            Lane::Mid => "MID",
            Lane::Adc => "ADC",
            Lane::Support => "SUPPORT",
            Lane::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Lane {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TOP" => Ok(Lane::Top),
            "JUNGLE" | "JG" => Ok(Lane::Jungle),
            "MID" | "MIDDLE" => Ok(Lane::Mid),
            "ADC" | "BOTTOM" | "BOT" => Ok(Lane::Adc),
            "SUPPORT" | "SUP" | "UTILITY" => Ok(Lane::Support),
            "UNKNOWN" | "N/A" => Ok(Lane::Unknown),
            _ => Err(AppError::InvalidLane(s.to_string())),
        }
    }
}

/// Counts the lanes a player was seen in and picks the most frequent one.
/// Ties go to the lane seen first.
#[derive(Debug, Default)]
pub struct LaneTally {
    counts: Vec<(Lane, usize)>,
}

impl LaneTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, lane: Lane) {
        match self.counts.iter_mut().find(|(l, _)| *l == lane) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((lane, 1)),
        }
    }

    pub fn main_lane(&self) -> Lane {
        let mut best: Option<(Lane, usize)> = None;
        for &(lane, count) in &self.counts {
            if best.map_or(true, |(_, c)| count > c) {
                best = Some((lane, count));
            }
        }
        best.map(|(lane, _)| lane).unwrap_or(Lane::Unknown)
    }
}

impl FromIterator<Lane> for LaneTally {
    fn from_iter<I: IntoIterator<Item = Lane>>(iter: I) -> Self {
        let mut tally = LaneTally::new();
        for lane in iter {
            tally.add(lane);
        }
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synergy_table_is_directional() {
        assert_eq!(Lane::Top.synergy_partner(), Some(Lane::Jungle));
        assert_eq!(Lane::Jungle.synergy_partner(), Some(Lane::Mid));
        assert_eq!(Lane::Adc.synergy_partner(), Some(Lane::Support));
        assert_eq!(Lane::Support.synergy_partner(), Some(Lane::Adc));
        assert_eq!(Lane::Mid.synergy_partner(), Some(Lane::Jungle));
        assert_eq!(Lane::Unknown.synergy_partner(), None);
    }

    #[test]
    fn riot_positions_map_to_lanes() {
        assert_eq!(Lane::from_riot_position("MIDDLE"), Lane::Mid);
        assert_eq!(Lane::from_riot_position("BOTTOM"), Lane::Adc);
        assert_eq!(Lane::from_riot_position("UTILITY"), Lane::Support);
        assert_eq!(Lane::from_riot_position("Invalid"), Lane::Unknown);
        assert_eq!(Lane::from_riot_position(""), Lane::Unknown);
    }

    #[test]
    fn parses_lane_names_and_aliases() {
        assert_eq!("support".parse::<Lane>().unwrap(), Lane::Support);
        assert_eq!("Middle".parse::<Lane>().unwrap(), Lane::Mid);
        assert_eq!("n/a".parse::<Lane>().unwrap(), Lane::Unknown);
        assert!(matches!("feeder".parse::<Lane>(), Err(AppError::InvalidLane(_))));
    }

    #[test]
    fn main_lane_is_most_frequent() {
        let tally: LaneTally = [Lane::Mid, Lane::Adc, Lane::Adc, Lane::Mid, Lane::Adc]
            .into_iter()
            .collect();
        assert_eq!(tally.main_lane(), Lane::Adc);
    }

    #[test]
    fn ties_go_to_first_seen_lane() {
        let tally: LaneTally = [Lane::Jungle, Lane::Top, Lane::Top, Lane::Jungle]
            .into_iter()
            .collect();
        assert_eq!(tally.main_lane(), Lane::Jungle);
    }

    #[test]
    fn empty_tally_is_unknown() {
        assert_eq!(LaneTally::new().main_lane(), Lane::Unknown);
    }

    #[test]
    fn unknown_can_win_the_tally() {
        let tally: LaneTally = [Lane::Unknown, Lane::Unknown, Lane::Top].into_iter().collect();
        assert_eq!(tally.main_lane(), Lane::Unknown);
    }
}
