pub mod mindmaps;
pub mod projects;

pub use mindmaps::Entity as MindMaps;
pub use projects::Entity as Projects;
