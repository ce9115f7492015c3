//! Universal Chess Interface front end.
//!
//! Thin protocol layer: reads commands from stdin, maintains the current
//! position, and dispatches into the engine. All chess semantics live in
//! [`crate::board`]; this module only frames text.

use std::io::{self, BufRead, Write};

use crate::board::{find_best_move, Board, SearchOptions, SearchReport};
use crate::tt::{TranspositionTable, DEFAULT_TT_MB};

/// Run the UCI command loop until `quit` or end of input.
pub fn run_uci_loop() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut engine = Engine::new();

    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let mut out = stdout.lock();
        if !engine.handle_command(&line, &mut out) {
            break;
        }
    }
}

struct Engine {
    board: Board,
    tt: TranspositionTable,
}

impl Engine {
    fn new() -> Self {
        Engine {
            board: Board::new(),
            tt: TranspositionTable::new(DEFAULT_TT_MB),
        }
    }

    /// Handle one command line; returns false when the loop should stop.
    fn handle_command(&mut self, line: &str, out: &mut impl Write) -> bool {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let result = match tokens.split_first() {
            None => Ok(()),
            Some((&"uci", _)) => {
                writeln!(out, "id name garnet {}", env!("CARGO_PKG_VERSION"))
                    .and_then(|()| writeln!(out, "uciok"))
            }
            Some((&"isready", _)) => writeln!(out, "readyok"),
            Some((&"ucinewgame", _)) => {
                self.board = Board::new();
                self.tt.clear();
                Ok(())
            }
            Some((&"position", rest)) => self.handle_position(rest, out),
            Some((&"go", rest)) => self.handle_go(rest, out),
            Some((&"perft", rest)) => self.handle_perft(rest, out),
            Some((&"quit", _)) => return false,
            Some((&other, _)) => writeln!(out, "info string unknown command '{other}'"),
        };
        if let Err(err) = result {
            log::debug!("uci output error: {err}");
            return false;
        }
        true
    }

    fn handle_position(&mut self, args: &[&str], out: &mut impl Write) -> io::Result<()> {
        let moves_at = args.iter().position(|&tok| tok == "moves");
        let (setup, moves) = match moves_at {
            Some(i) => (&args[..i], &args[i + 1..]),
            None => (args, &[][..]),
        };

        let board = match setup.split_first() {
            Some((&"startpos", _)) => Ok(Board::new()),
            Some((&"fen", fen_fields)) => Board::try_from_fen(&fen_fields.join(" "))
                .map_err(|err| err.to_string()),
            _ => Err("expected 'startpos' or 'fen'".to_string()),
        };

        match board {
            Ok(board) => self.board = board,
            Err(err) => return writeln!(out, "info string bad position: {err}"),
        }

        for text in moves {
            if let Err(err) = self.board.make_move_uci(text) {
                return writeln!(out, "info string bad move '{text}': {err}");
            }
        }
        Ok(())
    }

    fn handle_go(&mut self, args: &[&str], out: &mut impl Write) -> io::Result<()> {
        let mut options = SearchOptions::default();
        let mut iter = args.iter();
        while let Some(&tok) = iter.next() {
            if tok == "depth" {
                if let Some(depth) = iter.next().and_then(|v| v.parse().ok()) {
                    options.depth = depth;
                }
            }
        }

        let report = find_best_move(&mut self.board, &mut self.tt, &options);
        print_report(out, &options, &report)?;
        match report.best_move {
            Some(mv) => writeln!(out, "bestmove {mv}"),
            None => writeln!(out, "bestmove 0000"),
        }
    }

    fn handle_perft(&mut self, args: &[&str], out: &mut impl Write) -> io::Result<()> {
        let depth = args.first().and_then(|v| v.parse().ok()).unwrap_or(1);
        let nodes = self.board.perft(depth);
        writeln!(out, "info string perft({depth}) = {nodes}")
    }
}

fn print_report(
    out: &mut impl Write,
    options: &SearchOptions,
    report: &SearchReport,
) -> io::Result<()> {
    let score = if report.score.abs() >= crate::board::MATE_THRESHOLD {
        let plies = crate::board::MATE_SCORE - report.score.abs();
        let mate_in = (plies + 1) / 2;
        format!("mate {}", mate_in * report.score.signum())
    } else {
        format!("cp {}", report.score)
    };
    write!(out, "info depth {} score {} nodes {}", options.depth, score, report.nodes)?;
    if let Some(mv) = report.best_move {
        write!(out, " pv {mv}")?;
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(engine: &mut Engine, line: &str) -> String {
        let mut out = Vec::new();
        engine.handle_command(line, &mut out);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn uci_handshake() {
        let mut engine = Engine::new();
        let out = run(&mut engine, "uci");
        assert!(out.contains("id name garnet"));
        assert!(out.ends_with("uciok\n"));
        assert_eq!(run(&mut engine, "isready"), "readyok\n");
    }

    #[test]
    fn position_startpos_with_moves() {
        let mut engine = Engine::new();
        run(&mut engine, "position startpos moves e2e4 e7e5 g1f3");
        assert_eq!(
            engine.board.to_fen(),
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2"
        );
    }

    #[test]
    fn position_from_fen() {
        let mut engine = Engine::new();
        run(
            &mut engine,
            "position fen 8/5k2/8/8/8/8/5K2/4R3 w - - 0 1",
        );
        assert_eq!(engine.board.to_fen(), "8/5k2/8/8/8/8/5K2/4R3 w - - 0 1");
    }

    #[test]
    fn bad_input_is_reported_not_fatal() {
        let mut engine = Engine::new();
        let out = run(&mut engine, "position fen not a fen");
        assert!(out.contains("bad position"));
        let out = run(&mut engine, "position startpos moves e2e5");
        assert!(out.contains("bad move"));
        let out = run(&mut engine, "flarp");
        assert!(out.contains("unknown command"));
    }

    #[test]
    fn go_reports_a_best_move() {
        let mut engine = Engine::new();
        run(&mut engine, "position startpos");
        let out = run(&mut engine, "go depth 2");
        assert!(out.contains("info depth 2 score cp"));
        assert!(out.contains("bestmove "));
    }

    #[test]
    fn perft_command_counts_nodes() {
        let mut engine = Engine::new();
        run(&mut engine, "position startpos");
        let out = run(&mut engine, "perft 2");
        assert!(out.contains("perft(2) = 400"));
    }
}
