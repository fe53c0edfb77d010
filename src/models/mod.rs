pub mod user;
pub mod project;

pub use user::User;
pub use project::{ActionError, NewProject, Project, ProjectMeta, ProductsResponse};
