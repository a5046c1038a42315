pub mod limit;
pub mod lookup;
