use colored::Colorize;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("Enter an arithmetic expression (e.g., (3 + 5) * 2, 2 ** 3):");

    let mut line = String::new();
    if let Err(err) = io::stdin().read_line(&mut line) {
        eprintln!("{} {}", "error:".red().bold(), err);
        return ExitCode::FAILURE;
    }

    match rpncalc::eval_str(line.trim()) {
        Ok(answer) => {
            println!("Result: {}", answer);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
