//! Load or build a level, apply a sequence of edits, and print the powered board.

use anyhow::{Context, Result};
use clap::Parser;
use junction_box::{Board, Edit, Location, Mode, Piece, Powered, Puzzle, GRID_SIZE};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play or edit a junction-box level")]
struct Args {
    /// Level seed to start from (128 characters). Without one, start from an empty board
    #[arg(long)]
    seed: Option<String>,
    /// Mode to apply edits in (`edit` or `play`). Defaults to play with a seed and edit without
    #[arg(long)]
    mode: Option<Mode>,
    /// Edit to apply, repeatable and applied in order:
    /// `click:ROW,COL`, `place:ROW,COL=PIECE` (e.g. `place:0,1=corner:fixed`), `erase:ROW,COL` or `clear`
    #[arg(long = "edit", value_parser = parse_edit)]
    edits: Vec<Edit>,
    /// Also print the power level of every powered cell
    #[arg(long)]
    levels: bool,
}

fn parse_location(s: &str) -> Result<Location, String> {
    let (row, col) = s.split_once(',').ok_or_else(|| format!("expected ROW,COL, found `{s}`"))?;
    let row = row.trim().parse().map_err(|_| format!("bad row `{row}`"))?;
    let col = col.trim().parse().map_err(|_| format!("bad column `{col}`"))?;

    let location = Location(row, col);
    if !location.in_bounds() {
        return Err(format!("{row},{col} is off the {GRID_SIZE}x{GRID_SIZE} board"));
    }

    Ok(location)
}

fn parse_edit(s: &str) -> Result<Edit, String> {
    if s == "clear" {
        return Ok(Edit::Clear);
    }

    let (verb, rest) = s.split_once(':').ok_or_else(|| format!("expected VERB:ARGS, found `{s}`"))?;
    match verb {
        "click" => Ok(Edit::Interact(parse_location(rest)?)),
        "erase" => Ok(Edit::Erase(parse_location(rest)?)),
        "place" => {
            let (location, piece) = rest.split_once('=').ok_or_else(|| format!("expected ROW,COL=PIECE, found `{rest}`"))?;
            let piece: Piece = piece.parse().map_err(|err| format!("{err}"))?;
            Ok(Edit::Place(parse_location(location)?, piece))
        }
        _ => Err(format!("unknown edit `{verb}`")),
    }
}

fn print_levels(outcome: &Powered) {
    for row in 0..GRID_SIZE {
        let line: Vec<String> = (0..GRID_SIZE)
            .map(|col| {
                let location = Location(row, col);
                if outcome.is_powered(location) {
                    format!("{:>3}", outcome.power_level(location))
                } else {
                    "  .".to_owned()
                }
            })
            .collect();
        println!("{}", line.concat());
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let mut puzzle = match &args.seed {
        Some(seed) => Puzzle::from_seed(seed.trim()).context("could not read the level seed")?,
        None => Puzzle::with_board(Board::new(), Mode::Edit),
    };
    if let Some(mode) = args.mode {
        puzzle.set_mode(mode);
    }

    for edit in &args.edits {
        let solved = puzzle.apply(edit).is_solved();
        info!(?edit, solved, "applied");
    }

    let outcome = puzzle.outcome();
    print!("{outcome}");
    if args.levels {
        println!();
        print_levels(outcome);
    }
    println!();
    println!("{}", if outcome.is_solved() { "CIRCUIT COMPLETE" } else { "POWER OFFLINE" });
    println!("seed: {}", puzzle.seed());

    Ok(())
}

#[cfg(test)]
mod tests {
    use junction_box::{Material, NodeKind, PipeShape};

    use super::*;

    #[test]
    fn parse_edits() {
        assert_eq!(parse_edit("clear"), Ok(Edit::Clear));
        assert_eq!(parse_edit("click:0,1"), Ok(Edit::Interact(Location(0, 1))));
        assert_eq!(parse_edit("erase: 7, 7"), Ok(Edit::Erase(Location(7, 7))));
        assert_eq!(parse_edit("place:2,2=sink"), Ok(Edit::Place(Location(2, 2), Piece::Node(NodeKind::Sink))));
        assert_eq!(
            parse_edit("place:2,3=corner:fixed"),
            Ok(Edit::Place(Location(2, 3), Piece::Pipe { shape: PipeShape::Corner, material: Material::Fixed })),
        );

        assert!(parse_edit("click:8,0").is_err());
        assert!(parse_edit("click:1").is_err());
        assert!(parse_edit("place:1,1").is_err());
        assert!(parse_edit("place:1,1=elbow").is_err());
        assert!(parse_edit("spin:1,1").is_err());
    }
}
