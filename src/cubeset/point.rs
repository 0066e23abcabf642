pub trait DimVal:
    num_traits::Signed
    + std::cmp::Ord
    + std::cmp::Eq
    + Clone
    + Copy
    + std::fmt::Display
    + std::fmt::Debug
{
}

impl<
        S: num_traits::Signed
            + std::cmp::Ord
            + std::cmp::Eq
            + Clone
            + Copy
            + std::fmt::Display
            + std::fmt::Debug,
    > DimVal for S
{
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point<I: DimVal = i64> {
    pub x: I,
    pub y: I,
    pub z: I,
}

impl<I: DimVal> Point<I> {
    pub fn new(x: I, y: I, z: I) -> Self {
        Point { x, y, z }
    }
}
