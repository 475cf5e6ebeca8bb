mod track;

pub use track::*;
