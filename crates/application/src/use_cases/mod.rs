pub mod acl;

pub use acl::{EvaluateQueryUseCase, GetAclStatsUseCase, ReloadAclUseCase};
