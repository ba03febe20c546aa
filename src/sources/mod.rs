pub mod tiktok;
pub mod trends;

pub use tiktok::TikTokClient;
pub use trends::TrendsClient;
