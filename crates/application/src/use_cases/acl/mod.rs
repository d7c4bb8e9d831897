pub mod evaluate_query;
pub mod get_stats;
pub mod reload;

pub use evaluate_query::EvaluateQueryUseCase;
pub use get_stats::GetAclStatsUseCase;
pub use reload::ReloadAclUseCase;
