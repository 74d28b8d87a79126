pub mod pda;
pub mod cpi;

pub use pda::*;
pub use cpi::*;
