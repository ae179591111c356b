use anyhow::Result;
use cfg_if::cfg_if;
use gauge::{evaluate, Ctx, GaugeError};
use log::warn;

#[cfg(feature = "tui")]
mod tui;

fn main() -> Result<()> {
    env_logger::init();

    println!("gauge {}", env!("CARGO_PKG_VERSION"));

    cfg_if! {
    if #[cfg(feature = "tui")] {
        tui::drive()?
    } else {
        plain_drive()?
    }
    }

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn plain_drive() -> Result<()> {
    use std::io::{self, Write};

    let mut ctx = Ctx::empty();

    let mut buffer = String::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        stdout.write_all(b"> ")?;
        stdout.flush()?;
        if stdin.read_line(&mut buffer)? == 0 {
            println!();
            break;
        }

        if eval(&buffer, &mut ctx) == EvalState::Done {
            break;
        }
        buffer.truncate(0);
    }

    Ok(())
}

#[derive(Eq, PartialEq)]
enum EvalState {
    Regular,
    Done,
}

fn eval(buffer: &str, ctx: &mut Ctx) -> EvalState {
    let line = buffer.trim_end_matches(|c: char| c == '\r' || c == '\n');
    match line.trim() {
        "quit" | "q" => return EvalState::Done,
        "help" => print_help(),
        "pstack" => println!("{}", ctx.fmt_stack()),
        "pvars" => println!("{}", ctx.vars()),
        "" => (),
        _ => {
            for e in evaluate(line, ctx).errors() {
                report(e);
            }
        }
    }
    EvalState::Regular
}

fn print_help() {
    println!("Commands:");
    println!("pstack\tPrint the stack");
    println!("pvars\tPrint the variables");
    println!("quit\tQuit the program (shortcut q)");
}

fn report(e: &GaugeError) {
    warn!("{:?}", e);
    #[cfg(feature = "tui")]
    {
        use colored::Colorize;
        println!("{} {}", "error:".red().bold(), e);
    }
    #[cfg(not(feature = "tui"))]
    println!("error: {}", e);
}
