pub use std::{
    collections::{BTreeMap, BTreeSet},
    env, fmt,
    io::Write,
    path::{Path, PathBuf},
    str::FromStr,
};

pub use anyhow::{anyhow, Context};
pub use async_trait::async_trait;
pub use derive_new::new;
pub use dotenv::dotenv;
pub use getset::{Getters, Setters};
pub use log::{error, info, warn};
pub use serde::{Deserialize, Serialize, de::DeserializeOwned};
pub use serde_json::{Value, json};
