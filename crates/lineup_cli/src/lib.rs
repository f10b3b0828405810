//! Lineup CLI library
//!
//! Roster loading and text rendering shared by the `lineup` binary and its
//! tests.

use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use lineup_core::{
    sort_by_jersey, Formation, LineupConfig, Player, PlayerStats, Position, SortOrder,
};

/// Reads a roster player list (JSON array of player records).
pub fn load_players(path: &Path) -> Result<Vec<Player>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read players file: {}", path.display()))?;
    let players: Vec<Player> = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse players file: {}", path.display()))?;
    log::debug!("Loaded {} players from {}", players.len(), path.display());
    Ok(players)
}

/// Config from `LINEUP_CONFIG_PATH` (or `--config`), then flag overrides.
pub fn resolve_config(config_path: Option<&Path>, store_dir: Option<PathBuf>) -> Result<LineupConfig> {
    let mut config = match config_path {
        Some(path) => LineupConfig::load(path)?,
        None => LineupConfig::from_env()?,
    };
    if let Some(dir) = store_dir {
        config.storage_dir = dir;
    }
    config.validate()?;
    Ok(config)
}

pub fn render_formation(formation: &Formation) -> String {
    let mut out = String::new();
    for (slot, occupant) in formation.iter() {
        let holder = match occupant.player() {
            Some(player) => player.to_string(),
            None => "(empty)".to_string(),
        };
        let _ = writeln!(out, "  {:<17} {}", slot.label(), holder);
    }
    let status = if formation.is_complete() { "complete" } else { "incomplete" };
    let _ = writeln!(out, "  {}/7 filled, {}", formation.filled_count(), status);
    out
}

pub fn render_bench(formation: &Formation, players: &[Player]) -> String {
    let available = formation.available_players(players);
    let mut out = String::new();
    let _ = writeln!(out, "  Bench ({} available)", available.len());
    for player in sort_by_jersey(&available, SortOrder::Asc) {
        let _ = writeln!(out, "    {}", player);
    }
    out
}

pub fn render_stats(players: &[Player]) -> String {
    let stats = PlayerStats::from_players(players);
    let mut out = String::new();
    let _ = writeln!(out, "  Players:        {}", stats.total_players);
    let _ = writeln!(out, "  Average height: {:.1} cm", stats.average_height);
    for position in Position::all(true) {
        let count = stats.position_distribution.get(&position).copied().unwrap_or(0);
        let _ = writeln!(out, "  {:<15} {}", position.display_name(), count);
    }
    out
}
