pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Section, SectionUpdate};
pub use repository::SectionRepository;
pub use value_objects::{SectionId, SectionName, SectionSlug};
