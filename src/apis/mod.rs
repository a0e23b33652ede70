mod activate_picture;
mod create_picture;
mod get_picture_connection;
mod list_folder_videos;
mod list_folders;
mod list_videos;
mod upload_picture;

pub const VIDEO_FIELDS: &'static str = "uri,name";
