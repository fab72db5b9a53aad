#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod lookup;
pub mod notice;
pub mod record;

pub use config::NoticeConfig;
pub use error::{NoticeError, Result};
pub use lookup::{DiseaseSynonymMap, VaccineReferenceMap};
pub use notice::{Notice, NoticeSet, ReceivedEvent, ReceivedEventGroup};
pub use record::{CANONICAL_COLUMNS, ClientRow, columns};
