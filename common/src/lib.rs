//! Guest Checklist Common Library
//!
//! CLIとWeb(WASM)で共有されるコード:
//! - 招待客レコードと初期リスト
//! - 名簿マネージャと永続化の抽象
//! - JSON/XLSX コーデック

pub mod types;
pub mod error;
pub mod store;
pub mod filter;
pub mod codec;
pub mod roster;

pub use types::{seed_guests, Guest, DEFAULT_NAME, FIELD_CONFIRMED, FIELD_ID, FIELD_IDENTIFIER, FIELD_NAME};
pub use error::{Error, Result};
pub use store::{KvStore, MemoryStore, STORAGE_KEY};
pub use filter::{filter_guests, NO_MATCH_PLACEHOLDER};
pub use codec::{ImportFormat, ACCEPTED_EXTENSIONS};
pub use codec::xlsx::{EXPORT_FILE_NAME, MIME_TYPE as XLSX_MIME_TYPE, SHEET_NAME};
pub use roster::{GuestRoster, Listener, RosterState};
