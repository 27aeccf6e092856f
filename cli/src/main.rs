mod error;
use colored::Colorize;
use error::*;
use std::env::Args;
use std::io;
use synacor::error::fileio::FileIOError;
use synacor::{coins, disassemble, orb, play, teleporter, Memory, StdinLines, Vm};

const USAGE: &str = "usage: synacor <run|disasm|adventure|coins|orb|teleporter> [file]";

fn main() {
    if let Err(e) = dispatch() {
        eprintln!("{} {}", "error:".red().bold(), e);
        if matches!(e, CLIError::InsufficientArguments | CLIError::UnknownCommand(_)) {
            eprintln!("{}", USAGE);
        }
        std::process::exit(1);
    }
}

fn dispatch() -> CLIResult {
    let mut args = std::env::args();
    args.next(); // Ignore program name
    match args.next().as_deref() {
        Some("run") => run(&mut args),
        Some("disasm") => disasm(&mut args),
        Some("adventure") => adventure(&mut args),
        Some("coins") => solve_coins(),
        Some("orb") => solve_orb(),
        Some("teleporter") => calibrate_teleporter(),
        Some(other) => Err(CLIError::UnknownCommand(other.to_string())),
        None => Err(CLIError::InsufficientArguments),
    }
}

fn load(args: &mut Args) -> CLIResult<Memory> {
    let path = args.next().ok_or(CLIError::InsufficientArguments)?;
    Memory::load(&path).map_err(|e| match e {
        FileIOError::NotFound(p) => CLIError::NotFound(p),
        other => CLIError::ExternalError("FileIOError".into(), other.to_string()),
    })
}

fn run(args: &mut Args) -> CLIResult {
    let memory = load(args)?;
    let mut vm = Vm::new(memory, Box::new(StdinLines));
    vm.run()
        .map_err(|e| CLIError::ExternalError("VmError".into(), e.to_string()))
}

fn disasm(args: &mut Args) -> CLIResult {
    let memory = load(args)?;
    disassemble(&memory, &mut io::stdout().lock())
        .map_err(|e| CLIError::ExternalError("io::Error".into(), e.to_string()))
}

fn adventure(args: &mut Args) -> CLIResult {
    let memory = load(args)?;
    play(memory).map_err(|e| CLIError::ExternalError("VmError".into(), e.to_string()))
}

fn solve_coins() -> CLIResult {
    match coins::solve() {
        Some(order) => {
            println!("{}", order.join(", "));
            Ok(())
        }
        None => Err(CLIError::ExternalError(
            "coins".into(),
            "no ordering reaches 399".into(),
        )),
    }
}

fn solve_orb() -> CLIResult {
    match orb::solve() {
        Some(steps) => {
            println!("{}", steps.join(", "));
            Ok(())
        }
        None => Err(CLIError::ExternalError(
            "orb".into(),
            "no path weighs 30 at the vault".into(),
        )),
    }
}

fn calibrate_teleporter() -> CLIResult {
    // The recurrence recurses far deeper than the default stack allows.
    let worker = std::thread::Builder::new()
        .stack_size(512 * 1024 * 1024)
        .spawn(teleporter::calibrate)
        .map_err(|e| CLIError::ExternalError("io::Error".into(), e.to_string()))?;
    match worker.join() {
        Ok(Some(k)) => {
            println!("register 7 = {}", k);
            Ok(())
        }
        Ok(None) => Err(CLIError::ExternalError(
            "teleporter".into(),
            "no calibration value found".into(),
        )),
        Err(_) => Err(CLIError::ExternalError(
            "teleporter".into(),
            "calibration thread panicked".into(),
        )),
    }
}
