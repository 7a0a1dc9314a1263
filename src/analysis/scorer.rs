use super::lane::Lane;
use serde::Serialize;
use std::collections::HashSet;

/// How many of each player's best mastery champions are compared.
pub const POOL_SIZE: usize = 3;

const LANE_CONFLICT: i32 = -40;
const LANE_SYNERGY: i32 = 60;
const LANE_COMPLEMENT: i32 = 20;
const POOL_DISJOINT: i32 = 40;
const POOL_ONE_SHARED: i32 = 15;
const POOL_CONTESTED: i32 = -10;

/// What the scorer needs to know about one side of the duo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerProfile {
    pub main_lane: Lane,
    /// Champion ids, highest mastery first.
    pub top_mastery_champions: Vec<i64>,
}

impl PlayerProfile {
    pub fn new(main_lane: Lane, top_mastery_champions: Vec<i64>) -> Self {
        PlayerProfile {
            main_lane,
            top_mastery_champions,
        }
    }

    fn champion_pool(&self) -> HashSet<i64> {
        self.top_mastery_champions.iter().take(POOL_SIZE).copied().collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    LaneConflict,
    LaneSynergy,
    SolidComposition,
    ImpeccablePool,
    TacticalFlexibility,
    PickContention,
}

impl Reason {
    pub fn message(self) -> &'static str {
        match self {
            Reason::LaneConflict => "Lane Conflict: you both want to shine in the same place.",
            Reason::LaneSynergy => "Legendary Lane Synergy! A duo ready to dominate the map.",
            Reason::SolidComposition => {
                "Solid Composition. Your lanes complement each other for good map control."
            }
            Reason::ImpeccablePool => {
                "Impeccable Champion Pool! You complete each other without stealing picks."
            }
            Reason::TacticalFlexibility => {
                "Tactical Flexibility. You share a champion but have plenty of other options to surprise."
            }
            Reason::PickContention => {
                "Pick Contention Alert! Champion select could turn into a battle over your mains."
            }
        }
    }
}

/// Score band of a duo, ordered worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    NotThisLifetime,
    NeedsRefining,
    GreatPotential,
    PerfectDuo,
}

impl Verdict {
    pub fn from_score(score: u8) -> Verdict {
        match score {
            85.. => Verdict::PerfectDuo,
            65..=84 => Verdict::GreatPotential,
            40..=64 => Verdict::NeedsRefining,
            _ => Verdict::NotThisLifetime,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Verdict::PerfectDuo => "Perfect Duo! Challenger-tier synergy",
            Verdict::GreatPotential => "Great Potential! A well-balanced duo",
            Verdict::NeedsRefining => "Potential to be refined",
            Verdict::NotThisLifetime => "Not in this lifetime...",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub score: u8,
    pub verdict: Verdict,
    pub title: &'static str,
    pub summary: String,
}

pub struct DuoScorer;

impl DuoScorer {
    /// Scores a duo in the `a` → `b` direction:
    /// - lanes (skipped if either is unknown): same lane -40, `b` is `a`'s
    ///   synergy partner +60, anything else +20
    /// - shared top-3 mastery champions: none +40, one +15, more -10
    ///
    /// The raw total is clamped to 0..=100.
    pub fn score(a: &PlayerProfile, b: &PlayerProfile) -> MatchResult {
        let mut total = 0;
        let mut reasons = Vec::with_capacity(2);

        if let Some((delta, reason)) = Self::lane_adjustment(a.main_lane, b.main_lane) {
            total += delta;
            reasons.push(reason);
        }

        let (delta, reason) = Self::pool_adjustment(Self::shared_champions(a, b));
        total += delta;
        reasons.push(reason);

        Self::finalize(total, &reasons)
    }

    fn lane_adjustment(a: Lane, b: Lane) -> Option<(i32, Reason)> {
        if !a.is_known() || !b.is_known() {
            return None;
        }

        if a == b {
            Some((LANE_CONFLICT, Reason::LaneConflict))
        } else if a.synergy_partner() == Some(b) {
            Some((LANE_SYNERGY, Reason::LaneSynergy))
        } else {
            Some((LANE_COMPLEMENT, Reason::SolidComposition))
        }
    }

    pub fn shared_champions(a: &PlayerProfile, b: &PlayerProfile) -> usize {
        a.champion_pool().intersection(&b.champion_pool()).count()
    }

    fn pool_adjustment(shared: usize) -> (i32, Reason) {
        match shared {
            0 => (POOL_DISJOINT, Reason::ImpeccablePool),
            1 => (POOL_ONE_SHARED, Reason::TacticalFlexibility),
            _ => (POOL_CONTESTED, Reason::PickContention),
        }
    }

    fn finalize(total: i32, reasons: &[Reason]) -> MatchResult {
        let score = u8::try_from(total.clamp(0, 100)).unwrap_or(0);
        let verdict = Verdict::from_score(score);
        let summary = reasons
            .iter()
            .map(|r| r.message())
            .collect::<Vec<_>>()
            .join(" ");

        MatchResult {
            score,
            verdict,
            title: verdict.title(),
            summary,
        }
    }
}
