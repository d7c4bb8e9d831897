mod acl_engine;
mod decision_sink;

pub use acl_engine::AclEnginePort;
pub use decision_sink::DecisionSink;
