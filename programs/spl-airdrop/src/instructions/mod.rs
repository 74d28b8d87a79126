pub mod airdrop;
pub mod create_mint;

pub use airdrop::*;
pub use create_mint::*;
