pub mod builder;
pub mod review_model;
pub mod slot;
