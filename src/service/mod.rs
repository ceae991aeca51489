//! Persistence gateway over the SQLite pool, plus request validation.

mod comentarios;
mod posts;
mod usuarios;
pub mod validation;

pub use comentarios::ComentarioService;
pub use posts::PostService;
pub use usuarios::UsuarioService;
pub use validation::RequestValidator;
