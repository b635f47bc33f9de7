// Library root
// -----------
// Module responsibilities:
// - `api`: HTTP interactions with the NoteKeeper service (auth, list,
//   create, fetch by id) behind a swappable `Transport`.
// - `report`: turns a list of notes into the printed report.
// - `config`: base URL and demo credentials from the environment.
// - `app`: the end-to-end demo flow used by the binary.
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod report;

pub use api::{Note, NoteClient};
pub use error::ApiError;
