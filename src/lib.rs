pub mod error;
pub mod export;
pub mod generate;
pub mod group;
pub mod request;
pub mod seed;
pub mod stream;
pub mod tone;

pub use self::error::{RequestError, RequestResult};
pub use self::generate::{generate, generate_from, Recommendation};
pub use self::group::{Group, GroupChoice};
pub use self::request::GenerationRequest;
pub use self::seed::{hash, Seed};
pub use self::stream::Stream;
pub use self::tone::Tone;
