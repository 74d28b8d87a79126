pub mod mint_record;

pub use mint_record::*;
