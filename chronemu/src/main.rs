use std::{fs, path::PathBuf, process::exit};

use anyhow::Context;
use clap::Parser;
use libchronemu::{program::Program, regfile::RegFile, Machine};
use libchronisa::Value;
use log::info;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Path to a program listing: a `#ip <n>` directive followed by one
    /// `<opcode_name> <a> <b> <c>` instruction per line.
    program_path: PathBuf,

    /// Number of registers in the file.
    #[arg(short, long, default_value_t = 6)]
    registers: usize,

    /// Initial register values, overriding the all-zero default.
    #[arg(short, long, value_delimiter = ',')]
    init: Option<Vec<Value>>,

    /// Stop after this many executed instructions instead of waiting for a
    /// halt that may never come.
    #[arg(short, long)]
    step_limit: Option<u64>,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let text = fs::read_to_string(&args.program_path)
        .with_context(|| format!("Failed to read {}", args.program_path.display()))?;

    let program = Program::parse(&text).context("Failed to parse program")?;

    let mut machine = Machine::from_program(program, args.registers)?;

    if let Some(init) = args.init {
        if init.len() != args.registers {
            anyhow::bail!(
                "Got {} initial values for {} registers",
                init.len(),
                args.registers
            );
        }

        machine.reg_file = RegFile::from_values(init);
    }

    info!(
        "Running {} instructions with the counter bound to register {}",
        machine.program.len(),
        machine.ip_binding
    );

    match args.step_limit {
        Some(limit) => match machine.run_bounded(limit)? {
            Some(steps) => println!("Halted after {} steps", steps),
            None => println!("Step limit of {} reached before halt", limit),
        },
        None => {
            let steps = machine.run_to_halt()?;
            println!("Halted after {} steps", steps);
        }
    }

    println!("Registers: {:?}", machine.reg_file.as_slice());

    Ok(())
}
