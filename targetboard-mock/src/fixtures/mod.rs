pub mod builders;
pub mod price_targets;
