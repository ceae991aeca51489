//! Record shapes for the three tables, their request payloads and validated insert forms.

mod comentario;
mod post;
mod usuario;

pub use comentario::{Comentario, CreateComentario, NovoComentario};
pub use post::{CreatePost, NovoPost, Post};
pub use usuario::{CreateUsuario, NovoUsuario, UpdateUsuario, Usuario, UsuarioChanges};

use serde::{Deserialize, Deserializer};

/// Maps a present field to `Some(value)`, so that with `#[serde(default)]` an absent field stays `None`
/// while an explicit `null` becomes `Some(None)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
