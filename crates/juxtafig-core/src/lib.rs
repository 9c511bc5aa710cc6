pub mod config;
pub mod document;
pub mod error;
pub mod figure;
pub mod frame;
pub mod juxtapose;
pub mod pipeline;
