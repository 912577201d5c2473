use anyhow::Result;

use std::io::{stdin, stdout, Stdin, Write};

use connect4_minimax::{arena, board::*, game::*, search::*, DEFAULT_DEPTH};

mod display;

// keeps asking until a y/n answer is given
fn ask_yes_no(stdin: &Stdin, question: &str) -> Result<bool> {
    loop {
        let mut buffer = String::new();
        print!("{} y/n: ", question);
        stdout().flush()?;
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => return Ok(true),
            Some(_letter @ 'n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}

fn ask_depth(stdin: &Stdin) -> Result<usize> {
    loop {
        let mut buffer = String::new();
        print!("Search depth (blank for {}): ", DEFAULT_DEPTH);
        stdout().flush()?;
        stdin.read_line(&mut buffer)?;

        let input = buffer.trim();
        if input.is_empty() {
            return Ok(DEFAULT_DEPTH);
        }
        match input.parse::<usize>() {
            Ok(depth) if depth > 0 => return Ok(depth),
            _ => println!("Invalid depth: {}", input),
        }
    }
}

fn main() -> Result<()> {
    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    if ask_yes_no(&stdin, "Run the AI arena instead of playing?")? {
        let depth = ask_depth(&stdin)?;
        arena::run_verbose(depth)?;
        return Ok(());
    }

    let mut searcher = Searcher::new(ask_depth(&stdin)?);
    let first = if ask_yes_no(&stdin, "Would you like to move first?")? {
        Piece::Player
    } else {
        Piece::Ai
    };
    let mut game = Game::new(first);

    // game loop
    loop {
        display::draw(game.board())?;

        match game.state() {
            GameState::Playing => {
                let next_move = if game.turn() == Piece::Ai {
                    println!("AI is thinking...");
                    stdout().flush()?;

                    match searcher.search_verbose(game.board()).column {
                        Some(column) => column + 1,
                        None => break,
                    }
                } else {
                    print!("Move input > ");
                    stdout().flush()?;
                    let mut input_str = String::new();
                    stdin.read_line(&mut input_str)?;

                    match input_str.trim().parse::<usize>() {
                        Err(_) => {
                            println!("Invalid number: {}", input_str.trim());
                            continue;
                        }
                        Ok(column) => column,
                    }
                };

                if let Err(err) = game.play_checked(next_move) {
                    println!("{}", err);
                    // try the move again
                    continue;
                }
            }

            // end states
            GameState::PlayerWin => {
                println!("Player wins!");
                break;
            }
            GameState::AiWin => {
                println!("AI wins!");
                break;
            }
            GameState::Draw => {
                println!("Draw!");
                break;
            }
        }
    }
    println!("Moves played: {}", game.history());
    Ok(())
}
