pub mod quote;
pub mod signature;
pub mod stuffing;

pub use quote::Quote;
pub use signature::Signature;
pub use stuffing::Stuffing;
