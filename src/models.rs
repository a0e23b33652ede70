use serde::Deserialize;
use std::fmt;

/// Last segment of a canonical resource path, `/videos/123` -> `123`.
pub fn last_segment(uri: &str) -> &str {
    uri.trim_end_matches('/').rsplit('/').next().unwrap_or(uri)
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct VideoRef {
    pub uri: String,
    #[serde(default)]
    pub name: String,
}

impl VideoRef {
    pub fn id(&self) -> &str {
        last_segment(&self.uri)
    }
}

impl fmt::Display for VideoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id())
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct FolderRef {
    pub uri: String,
    #[serde(default)]
    pub name: String,
}

impl FolderRef {
    pub fn id(&self) -> &str {
        last_segment(&self.uri)
    }
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Paging {
    #[serde(default)]
    pub next: Option<String>,
}

/// One page of a collection listing.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub paging: Option<Paging>,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.paging
            .as_ref()
            .map_or(false, |paging| paging.next.is_some())
    }
}

/// Server side picture created for a single upload attempt.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PictureResource {
    pub uri: String,
    #[serde(default)]
    pub link: Option<String>,
    /// Response the picture was read from.
    #[serde(skip)]
    pub body: serde_json::Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PictureState {
    Created,
    Uploaded,
    Active,
}

impl PictureState {
    /// Console line for the transitions an operator follows.
    pub fn progress_message(&self) -> Option<&'static str> {
        match self {
            PictureState::Created => None,
            PictureState::Uploaded => Some("Image uploaded successfully."),
            PictureState::Active => Some("Thumbnail activated successfully."),
        }
    }
}

impl fmt::Display for PictureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PictureState::Created => "created",
            PictureState::Uploaded => "uploaded",
            PictureState::Active => "active",
        };
        f.write_str(s)
    }
}

/// Outcome counters for one run of a flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub updated: usize,
    /// Videos that would have been updated in a dry run.
    pub matched: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "updated {}, skipped {}, failed {}",
            self.updated, self.skipped, self.failed
        )?;
        if self.matched > 0 {
            write!(f, ", would update {}", self.matched)?;
        }
        Ok(())
    }
}
