use crate::api::VimeoApi;
use crate::enumerate::list_all_folders;
use crate::error::VimeoError;
use crate::models::FolderRef;
use dialoguer::Input;
use std::path::{Component, Path, PathBuf};

pub const FOLDER_PROMPT: &'static str = "Enter the number of the folder to update";
pub const THUMBNAIL_PROMPT: &'static str =
    "Enter the thumbnail filename (located in the thumbnails directory)";

/// Source of operator answers.
pub trait Prompt {
    fn ask(&mut self, prompt: &str) -> Result<String, VimeoError>;
}

/// Reads answers from the terminal.
pub struct ConsolePrompt;

impl Prompt for ConsolePrompt {
    fn ask(&mut self, prompt: &str) -> Result<String, VimeoError> {
        let answer: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }
}

/// Answers given on the command line instead of at a prompt.
#[derive(Debug, Clone, Default)]
pub struct Preset {
    pub folder_id: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub folder: FolderRef,
    pub image_path: PathBuf,
}

/// Turn a 1-based answer into a 0-based index below `count`.
pub fn parse_selection(input: &str, count: usize) -> Result<usize, VimeoError> {
    match input.trim().parse::<usize>() {
        Ok(n) if n >= 1 && n <= count => Ok(n - 1),
        _ => Err(VimeoError::InvalidSelection(input.trim().to_owned())),
    }
}

/// `filename` may name a subdirectory of `dir` but never leave it.
pub fn resolve_thumbnail(dir: &Path, filename: &str) -> Result<PathBuf, VimeoError> {
    let filename = filename.trim();
    let inside = Path::new(filename)
        .components()
        .all(|component| matches!(component, Component::Normal(_)));
    if !inside {
        return Err(VimeoError::ThumbnailOutsideDir(filename.to_owned()));
    }
    let path = dir.join(filename);
    if filename.is_empty() || !path.is_file() {
        return Err(VimeoError::ThumbnailNotFound(path));
    }
    Ok(path)
}

/// List the folders, let the operator pick one and name the image to use.
/// Both answers are validated before anything inside the folder is
/// requested.
pub async fn select_folder<A, P>(
    api: &A,
    prompt: &mut P,
    thumbnails_dir: &Path,
    per_page: usize,
    preset: &Preset,
) -> Result<Selection, VimeoError>
where
    A: VimeoApi + ?Sized,
    P: Prompt + ?Sized,
{
    let mut folders = list_all_folders(api, per_page).await?;

    let index = match &preset.folder_id {
        Some(id) => folders
            .iter()
            .position(|folder| folder.id() == id.as_str())
            .ok_or_else(|| VimeoError::InvalidSelection(id.clone()))?,
        None => {
            println!("Available folders:");
            for (i, folder) in folders.iter().enumerate() {
                println!("{}. {}", i + 1, folder.name);
            }
            let answer = prompt.ask(FOLDER_PROMPT)?;
            parse_selection(&answer, folders.len())?
        }
    };
    let folder = folders.swap_remove(index);

    let filename = match &preset.image {
        Some(image) => image.clone(),
        None => prompt.ask(THUMBNAIL_PROMPT)?,
    };
    let image_path = resolve_thumbnail(thumbnails_dir, &filename)?;

    info!("Selected folder {} ({})", folder.name, folder.id());
    Ok(Selection { folder, image_path })
}
