#![allow(non_snake_case)]

use std::env;

use anyhow::{bail, Result};

use libRustMCRT::*;

fn main() -> Result<()> {

    let args: Vec<String> = env::args().collect();

    let (mode, input_file) = match args.len() {
        1 => (RunMode::MOMENTS, "input.toml".to_string()),
        2 => (RunMode::MOMENTS, args[1].clone()),
        3 => (args[1].parse::<RunMode>()?, args[2].clone()),
        _ => bail!("Too many command line arguments. RustMCRT accepts at most: <MODE> <input file>, e.g., RustMCRT SCATTER input.toml"),
    };

    println!("Welcome to RustMCRT! Mode: {}", mode);

    let input = input::input(&input_file)?;

    match mode {
        RunMode::MOMENTS => {
            let simulator = physics_loop(&input)?;
            output::print_summary(&simulator, &input.options)?;
        },
        RunMode::SCATTER => {
            let points = physics::scatter_research(&input)?;
            output::print_scatter_research(&points, &input.options);
        },
    }

    Ok(())
}
