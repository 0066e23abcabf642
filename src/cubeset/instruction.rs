use std::str::FromStr;

use derive_more::Display;
use nom::{
    branch::alt,
    bytes::complete::tag,
    combinator::{map, map_res},
    sequence::{delimited, preceded, separated_pair, tuple},
    IResult,
};

use super::cuboid::{Coord, Cuboid};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum State {
    #[display(fmt = "on")]
    On,
    #[display(fmt = "off")]
    Off,
}

/// One line of a reboot sequence: turn every cube in `cuboid` on or off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub state: State,
    pub cuboid: Cuboid,
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.state, self.cuboid)
    }
}

fn parse_state(input: &str) -> IResult<&str, State> {
    alt((
        map(tag("on"), |_| State::On),
        map(tag("off"), |_| State::Off),
    ))(input)
}

/// `lo..hi` with both ends inclusive. Inverted bounds describe an empty
/// range and are rejected here rather than propagated as a degenerate box.
fn parse_bounds(input: &str) -> IResult<&str, (Coord, Coord)> {
    map_res(
        separated_pair(
            nom::character::complete::i64,
            tag(".."),
            nom::character::complete::i64,
        ),
        |(lo, hi)| {
            if lo <= hi {
                Ok((lo, hi))
            } else {
                Err(format!("inverted bounds {}..{}", lo, hi))
            }
        },
    )(input)
}

fn parse_cuboid(input: &str) -> IResult<&str, Cuboid> {
    map(
        tuple((
            delimited(tag("x="), parse_bounds, tag(",")),
            delimited(tag("y="), parse_bounds, tag(",")),
            preceded(tag("z="), parse_bounds),
        )),
        |((xmin, xmax), (ymin, ymax), (zmin, zmax))| {
            Cuboid::new(xmin, xmax, ymin, ymax, zmin, zmax)
        },
    )(input)
}

fn parse_instruction(input: &str) -> IResult<&str, Instruction> {
    map(
        separated_pair(parse_state, tag(" "), parse_cuboid),
        |(state, cuboid)| Instruction { state, cuboid },
    )(input)
}

impl FromStr for Instruction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_instruction(s) {
            Ok(("", instruction)) => Ok(instruction),
            Ok((rest, _)) => anyhow::bail!("unparsed input {:?} in instruction {:?}", rest, s),
            Err(e) => anyhow::bail!("unable to parse instruction {:?}: {}", s, e),
        }
    }
}

/// Parse a whole reboot sequence, one instruction per line. Blank lines
/// and surrounding whitespace are ignored; order is preserved.
pub fn parse_instructions(s: &str) -> anyhow::Result<Vec<Instruction>> {
    s.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Instruction::from_str)
        .collect()
}
