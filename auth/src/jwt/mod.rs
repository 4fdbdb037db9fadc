pub mod claims;
pub mod codec;
pub mod errors;

pub use claims::DecodedToken;
pub use claims::IssuedToken;
pub use codec::TokenCodec;
pub use errors::TokenError;
