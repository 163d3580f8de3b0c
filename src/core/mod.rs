pub mod aggregate;
pub mod client;
pub mod pipeline;
pub mod quotes;
pub mod sanitize;
pub mod sentiment;

pub use crate::domain::model::{House, HouseScore, Member, MemberStub};
pub use crate::domain::ports::{ConfigProvider, QuoteApi, SentimentApi};
pub use crate::utils::error::Result;
