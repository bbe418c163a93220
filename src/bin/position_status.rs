use std::env;
use std::process;

use chess_rules::board::{Game, Outcome, START_POSITION};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.first().map(String::as_str) == Some("--help") {
        eprintln!("usage: position_status [--position \"<position string>\"] <move1> <move2> ...");
        return;
    }

    let (position, moves) = match args.first().map(String::as_str) {
        Some("--position") if args.len() >= 2 => (args[1].as_str(), &args[2..]),
        _ => (START_POSITION, &args[..]),
    };

    let mut game = match Game::from_position_string(position) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };
    for text in moves {
        if let Err(e) = game.apply_move_text(text) {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }

    let legal_moves = game.every_move();
    let outcome = match game.outcome() {
        Outcome::Ongoing => "ongoing".to_string(),
        Outcome::Checkmate { winner } => format!("checkmate, {winner} wins"),
        Outcome::Stalemate => "stalemate".to_string(),
    };
    println!("{}", game.board());
    println!("position: {}", game.to_position_string());
    println!("side_to_move: {}", game.side_to_move());
    println!("in_check: {}", game.is_in_check(game.side_to_move()));
    println!("legal_moves: {}", legal_moves.len());
    println!("outcome: {outcome}");
    if let Some(result) = game.result() {
        println!("declared_result: {result:?}");
    }
    for mv in &legal_moves {
        println!("{} {}", mv, game.move_to_text(mv));
    }
}
