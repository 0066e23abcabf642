use clap::{Parser, ValueEnum};

use cubeset::{parse_instructions, pointwise, Cuboid, CuboidSet};

#[derive(ValueEnum, Debug, PartialEq, Eq, Clone, Copy)]
enum Mode {
    Part1,
    Part2,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[clap(short, long)]
    verbose: bool,
    #[clap(short, long, value_enum)]
    mode: Mode,
}

/// The initialization procedure only considers cubes within 50 units of the
/// origin on every axis.
fn initialization_region() -> Cuboid {
    Cuboid::new(-50, 50, -50, 50, -50, 50)
}

fn part1(input: &str) -> anyhow::Result<u64> {
    let instructions = parse_instructions(input)?;
    Ok(pointwise::count_active(
        &instructions,
        &initialization_region(),
    ))
}

fn part2(input: &str) -> anyhow::Result<u64> {
    let instructions = parse_instructions(input)?;
    let mut reactor = CuboidSet::new();
    reactor.apply_all(&instructions);
    Ok(reactor.active_volume())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::builder()
        .format_module_path(false)
        .format_timestamp_millis()
        .filter_level(log_level)
        .init();
    let stdin = std::io::stdin();
    let input = std::io::read_to_string(stdin)?;
    let start = std::time::Instant::now();
    let result = match args.mode {
        Mode::Part1 => part1(&input)?,
        Mode::Part2 => part2(&input)?,
    };
    log::info!("computed result in {:?}", start.elapsed());
    println!("{}", result);
    Ok(())
}
