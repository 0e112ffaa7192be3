pub mod a001_district;
pub mod a002_place;
