//! Roster engine: page fetching, retries and record conversion.
mod convert;
mod decode;
mod engine;
mod fetch;
mod retry;
mod tags;
mod types;

pub use convert::to_user_record;
pub use decode::{
    decode_page, DecodeError, RawLocation, RawLogin, RawName, RawPage, RawPicture, RawUser,
};
pub use engine::EngineHandle;
pub use fetch::{
    ChannelEventSink, EventSink, FetchSettings, Fetcher, ReqwestFetcher, DEFAULT_BASE_URL,
    DEFAULT_MAX_ATTEMPTS, DEFAULT_PAGE_SIZE,
};
pub use retry::fetch_page_with_retry;
pub use tags::{RandomTagPicker, TagPicker};
pub use types::{EngineError, EngineEvent, FailureKind, FetchError};
