pub mod decay;
pub mod normalize;
pub mod ranking;

pub use decay::{DecayConfig, DecayScorer, MetricWeights};
pub use normalize::{AuthorAggregate, NormalizeConfig, ScoreNormalizer};
pub use ranking::{EngagementRanker, FollowerDirectory};
