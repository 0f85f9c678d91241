use snafu::prelude::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum TablifyError {
    #[snafu(display("Read `{}` error: {}", path, source))]
    IoRead {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Decode fragments from `{}` error: {}", path, source))]
    Json {
        source: serde_json::Error,
        path: String,
    },
    #[snafu(display("{}", crate::consts::NO_TEXT_FOUND))]
    NoText,
}
