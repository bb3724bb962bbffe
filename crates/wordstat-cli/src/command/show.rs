use anyhow::Context;
use clap::Args;
use wordstat_analysis::{
    store::{PlayerStack, PuzzleStore},
    weekly,
};

use crate::util::DatasetArg;

#[derive(Debug, Clone, Args)]
pub(crate) struct ShowArg {
    #[clap(flatten)]
    dataset: DatasetArg,
    /// Display name of the player (raw sender if no name mapping applies)
    player: String,
    /// Puzzle number
    puzzle: usize,
}

pub(crate) fn run(arg: &ShowArg) -> anyhow::Result<()> {
    let store = arg.dataset.load_store()?;
    let player = find_player(&store, &arg.player)?;

    let grid = player.grid(arg.puzzle);
    println!(
        "{} / puzzle {} ({})",
        player.name(),
        arg.puzzle,
        puzzle_day(arg.puzzle)
    );
    println!();
    println!("{grid}");
    println!();
    println!("Score: {}", grid.score());
    Ok(())
}

fn find_player<'a>(store: &'a PuzzleStore, name: &str) -> anyhow::Result<&'a PlayerStack> {
    store.player(name).with_context(|| {
        let known = store
            .players()
            .iter()
            .map(PlayerStack::name)
            .collect::<Vec<_>>()
            .join(", ");
        format!("Player {name} not found (known players: {known})")
    })
}

fn puzzle_day(puzzle: usize) -> String {
    weekly::puzzle_date(puzzle)
        .map_or_else(|| "-".to_string(), |date| date.format("%a %Y-%m-%d").to_string())
}

#[cfg(test)]
mod tests {
    use wordstat_analysis::{dataset::RawDataset, names::NameMap};

    use super::*;

    fn store() -> PuzzleStore {
        let mut dataset = RawDataset::new();
        dataset.insert_text("ann@example.com", 0, "\u{2B1C}");
        dataset.insert_text("bob@example.com", 1, "\u{1F7E8}");
        let names = NameMap::from_iter([("ann@example.com", "Ann")]);
        PuzzleStore::build(&dataset, &names)
    }

    #[test]
    fn test_find_player_by_display_name() {
        let store = store();
        assert_eq!(find_player(&store, "Ann").unwrap().name(), "Ann");
        assert_eq!(
            find_player(&store, "bob@example.com").unwrap().senders(),
            ["bob@example.com"]
        );
    }

    #[test]
    fn test_unknown_player_lists_known_players() {
        let store = store();
        let err = find_player(&store, "Cat").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Player Cat not found (known players: Ann, bob@example.com)"
        );
    }

    #[test]
    fn test_puzzle_day() {
        assert_eq!(puzzle_day(0), "Sat 2021-06-19");
        assert_eq!(puzzle_day(2), "Mon 2021-06-21");
    }
}
