pub mod stock;
pub mod prediction;
pub mod market;
pub mod response;

pub use stock::*;
pub use prediction::*;
pub use market::*;
pub use response::*;
