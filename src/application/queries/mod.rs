pub mod articles;
pub mod sections;
