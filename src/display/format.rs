pub fn queue_name(queue_id: u32) -> &'static str {
    match queue_id {
        420 => "Ranked Solo",
        440 => "Ranked Flex",
        450 => "ARAM",
        400 => "Normal Draft",
        430 => "Normal Blind",
        _ => "Custom Game",
    }
}

/// "42s ago", "5m ago", "3h ago", "2 days ago". A timestamp ahead of the
/// local clock reads as "0s ago".
pub fn time_ago(timestamp_ms: i64, now_ms: i64) -> String {
    let seconds = now_ms.saturating_sub(timestamp_ms).max(0) as f64 / 1000.0;
    if seconds < 60.0 {
        return format!("{}s ago", seconds.round());
    }
    let minutes = seconds / 60.0;
    if minutes < 60.0 {
        return format!("{}m ago", minutes.round());
    }
    let hours = minutes / 60.0;
    if hours < 24.0 {
        return format!("{}h ago", hours.round());
    }
    format!("{} days ago", (hours / 24.0).round())
}

pub fn spell_name(spell_id: i32) -> String {
    let name = match spell_id {
        1 => "Cleanse",
        3 => "Exhaust",
        4 => "Flash",
        6 => "Ghost",
        7 => "Heal",
        11 => "Smite",
        12 => "Teleport",
        13 => "Clarity",
        14 => "Ignite",
        21 => "Barrier",
        32 => "Mark",
        other => return format!("Spell {}", other),
    };
    name.to_string()
}

pub fn duration(seconds: i64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

pub fn kda_ratio(kills: u32, deaths: u32, assists: u32) -> String {
    if deaths == 0 {
        return "Perfect".to_string();
    }
    format!("{:.2}", f64::from(kills + assists) / f64::from(deaths))
}

pub fn compact_number(value: i64) -> String {
    match value {
        v if v >= 1_000_000 => format!("{:.1}M", v as f64 / 1_000_000.0),
        v if v >= 1_000 => format!("{:.1}k", v as f64 / 1_000.0),
        v => v.to_string(),
    }
}
