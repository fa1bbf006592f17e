pub mod mindmap_service;
pub mod project_service;

pub use mindmap_service::{MindMapService, MindMapUpdate, NewMindMap};
pub use project_service::ProjectService;
