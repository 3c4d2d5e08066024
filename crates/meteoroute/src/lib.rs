pub mod analysis;
pub mod directions;
pub mod geo_math;
pub mod meters;
pub mod polyline;
pub mod travel;
pub mod weather;

#[cfg(test)]
pub(crate) mod test_utils;
