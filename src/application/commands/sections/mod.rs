mod create;
mod service;
mod update;

pub use create::CreateSectionCommand;
pub use service::SectionCommandService;
pub use update::UpdateSectionCommand;
