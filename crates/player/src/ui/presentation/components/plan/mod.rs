mod plan_document;

pub use plan_document::PlanDocument;
