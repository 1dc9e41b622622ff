pub use std::collections::BTreeMap;
pub use std::fmt::{self, Display};
pub use std::path::{Path, PathBuf};
pub use std::str::FromStr;
pub use std::sync::Arc;

pub use log::{error, info, warn};

pub use flexi_logger::{
    Age, Cleanup, Criterion, DeferredNow, Duplicate, FileSpec, Logger, LoggerHandle, Naming,
    Record,
};

pub use serde::de::DeserializeOwned;
pub use serde::{Deserialize, Serialize};

pub use anyhow::{anyhow, Context};

pub use getset::{CopyGetters, Getters};
pub use derive_new::new;

pub use once_cell::sync::Lazy as once_lazy;

pub use regex::Regex;

/// Field key → entered value, as supplied by the input form.
pub type FieldValues = BTreeMap<String, String>;
