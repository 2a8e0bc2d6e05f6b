//! Loads the prop and alternate feeds, embedded by default or from disk when configured.

use std::{
    borrow::Cow,
    fs, io,
    path::{Path, PathBuf},
};

use rust_embed::RustEmbed;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::info;

use crate::{
    domain::{Alternate, Prop},
    util::settings::BoardSettings,
};

pub const PROPS_FILE: &str = "props.json";
pub const ALTERNATES_FILE: &str = "alternates.json";

/// Sample feeds bundled with the binary.
#[derive(RustEmbed)]
#[folder = "data"]
struct EmbeddedData;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("embedded feed {0} is missing")]
    MissingEmbedded(&'static str),
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed {name}: {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    pub props: Vec<Prop>,
    pub alternates: Vec<Alternate>,
}

impl Dataset {
    /// Loads both feeds, preferring the paths named in settings over the bundled files.
    pub fn load(settings: &BoardSettings) -> Result<Self, DatasetError> {
        let props = load_feed(PROPS_FILE, settings.props_path.as_deref())?;
        let alternates = load_feed(ALTERNATES_FILE, settings.alternates_path.as_deref())?;
        info!(
            props = props.len(),
            alternates = alternates.len(),
            "loaded market feeds"
        );
        Ok(Self { props, alternates })
    }
}

fn load_feed<T: DeserializeOwned>(name: &'static str, path: Option<&Path>) -> Result<Vec<T>, DatasetError> {
    match path {
        Some(path) => {
            let raw = fs::read(path).map_err(|source| DatasetError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            parse_feed(&path.display().to_string(), &raw)
        }
        None => parse_feed(name, &embedded_bytes(name)?),
    }
}

fn embedded_bytes(name: &'static str) -> Result<Cow<'static, [u8]>, DatasetError> {
    EmbeddedData::get(name)
        .map(|file| file.data)
        .ok_or(DatasetError::MissingEmbedded(name))
}

pub fn parse_feed<T: DeserializeOwned>(name: &str, raw: &[u8]) -> Result<Vec<T>, DatasetError> {
    serde_json::from_slice(raw).map_err(|source| DatasetError::Parse {
        name: name.to_string(),
        source,
    })
}
