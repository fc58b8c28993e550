pub mod codec;
pub mod config;
pub mod constants;
pub mod error;
pub mod option_list;
pub mod presenter;
pub mod query;
pub mod roulette;
pub mod share;
pub mod spin;
pub mod url_sync;

pub use config::RouletteConfig;
pub use error::{Result, RouletteError};
pub use option_list::{OptionList, WheelOption};
pub use roulette::{Mutation, Phase, RouletteController};
pub use url_sync::{MemoryStore, TokenStore, UrlSynchronizer};
