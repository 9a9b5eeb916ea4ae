//! Request inputs and wire bodies.

mod request;
mod source;

pub use request::{
    GenerateRequest, InputType, NextDayResponse, NEXT_DAY_PATH, STREAM_PATH, UPLOAD_FIELD,
    UPLOAD_PATH,
};
pub use source::{file_extension, DraftSource, MAX_FILE_SIZE, SUPPORTED_EXTENSIONS};
