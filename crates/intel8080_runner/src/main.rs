use anyhow::{bail, Context, Result};
use intel8080::{Machine, RunConfig, RunOutcome, Snapshot, Step};

const USAGE: &str = "usage: intel8080 [--aliases] <program> [origin]";

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut aliases = false;
    let mut positional = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--aliases" => aliases = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                return Ok(());
            }
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    let Some(path) = positional.next() else {
        bail!("no program path provided\n{USAGE}");
    };
    let origin = match positional.next() {
        Some(text) => parse_origin(&text)?,
        None => 0,
    };

    let image = std::fs::read(&path).with_context(|| format!("failed to read '{path}'"))?;
    let config = RunConfig::builder()
        .origin(origin)
        .undocumented_aliases(aliases)
        .build();
    let mut machine = Machine::new(config);
    machine.load(&image)?;
    log::info!(
        "Running '{}' ({} bytes) at 0x{:04X}",
        path,
        image.len(),
        machine.config().origin
    );

    let outcome = machine.run_with(print_step)?;
    match outcome {
        RunOutcome::BoundaryReached { pc } => println!("Reached end of image at 0x{pc:04X}"),
        RunOutcome::Halted { pc } => println!("Halted at 0x{pc:04X}"),
    }
    Ok(())
}

/// Accepts decimal or `0x`-prefixed hexadecimal.
fn parse_origin(text: &str) -> Result<u16> {
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => text.parse(),
    };
    parsed.with_context(|| format!("invalid origin '{text}'"))
}

fn print_step(step: &Step) {
    println!(
        "{:04X}  {:02X}  {:<24} {}",
        step.address,
        step.opcode,
        format!("{:?}", step.instruction),
        format_state(&step.state)
    );
}

fn format_state(state: &Snapshot) -> String {
    let r = &state.regs;
    let f = &state.flags;
    format!(
        "a={:02X} b={:02X} c={:02X} d={:02X} e={:02X} h={:02X} l={:02X} sp={:04X} pc={:04X} [{}{}{}{}{}]{}",
        r.a,
        r.b,
        r.c,
        r.d,
        r.e,
        r.h,
        r.l,
        r.sp,
        r.pc,
        if f.z { 'Z' } else { '.' },
        if f.s { 'S' } else { '.' },
        if f.p { 'P' } else { '.' },
        if f.cy { 'C' } else { '.' },
        if f.ac { 'A' } else { '.' },
        if state.interrupts_enabled { " EI" } else { "" },
    )
}
