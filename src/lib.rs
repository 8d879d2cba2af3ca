// Library root
// -----------
// This crate exposes a small library surface for the course registration
// CLI. The binary (`main.rs`) only sets up logging and hands control to
// the menu loop in `ui`.
//
// Module responsibilities:
// - `model`: the `Registration` record, name validation and the in-memory
//   `RegistrationStore`.
// - `storage`: whole-file JSON load/save of the registration list.
// - `ui`: menu loop, prompts and listing.
// - `report`: the `Console` writer and error reports shared by `storage`
//   and `ui`.
// - `config`: file name and menu text.
// - `error`: the shared `RegistrationError` type.
pub mod config;
pub mod error;
pub mod model;
pub mod report;
pub mod storage;
pub mod ui;
