use std::env;
use std::num::NonZero;
use std::process::ExitCode;

use gridilp::{Backend, Builder, CbcBackend, Clue, Formulation, Location, SatBackend, SkyscraperBuilder, SudokuBuilder};
use log::error;

fn solve_and_print(title: &str, formulation: Formulation, backend: &dyn Backend) -> bool {
    println!("{title}");
    match formulation.solve(backend) {
        Ok(solved) => {
            print!("{solved}");
            true
        }
        Err(failure) => {
            error!("{title}: {failure}");
            false
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    // `--cbc` solves through the external CBC executable instead of in-process
    let backend: Box<dyn Backend> = match env::args().nth(1).as_deref() {
        Some("--cbc") => Box::new(CbcBackend::from_env()),
        _ => Box::new(SatBackend),
    };

    let mut sudoku = SudokuBuilder::default();
    for (r, c, v) in [
        (1, 2, 5), (1, 3, 8), (1, 7, 2),
        (2, 1, 6), (2, 3, 7), (2, 4, 2),
        (3, 1, 3), (3, 4, 4),
        (4, 3, 5),
        (5, 1, 9), (5, 3, 6),
        (6, 2, 3), (6, 6, 4),
        (7, 1, 1), (7, 3, 9), (7, 9, 4),
        (8, 5, 4), (8, 7, 6), (8, 8, 7),
        (9, 1, 8),
    ] {
        sudoku.add_given(Location(r, c), v);
    }

    let mut skyscraper = SkyscraperBuilder::with_size(NonZero::new(5).unwrap());
    for clue in ["top 1 3", "top 2 4", "left 2 5", "right 3 3", "bottom 4 4", "bottom 5 2"] {
        skyscraper.add_clue(clue.parse::<Clue>().unwrap());
    }

    let solved_all = [
        solve_and_print("Sudoku", sudoku.build().unwrap(), backend.as_ref()),
        solve_and_print("Skyscraper", skyscraper.build().unwrap(), backend.as_ref()),
    ];

    if solved_all.iter().all(|solved| *solved) { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
