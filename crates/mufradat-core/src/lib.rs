pub mod generate;
pub mod labels;
pub mod normalize;
pub mod parser;
pub mod pipeline;
pub mod record;
pub mod store;
pub mod types;
