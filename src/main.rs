#[macro_use]
extern crate log;

use clap::Parser;
use env_logger::{Builder, Env, Target};
use vimeo_thumbnail::{
    config::{self, CliArgs, Command},
    driver, selector,
    error::VimeoError,
    Vimeo,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let env_file = config::load_env_file(None);
    let args = CliArgs::parse();

    let level = if args.verbose { "debug" } else { "info" };
    Builder::from_env(Env::default().default_filter_or(level))
        .target(Target::Stderr)
        .format_timestamp(None)
        .init();

    if let Some(path) = env_file {
        debug!("loaded environment from {}", path.display());
    }

    if let Err(err) = run(args).await {
        error!("An error occurred: {}", err);
        if err.is_authorization() {
            error!("Check CLIENT_ID, CLIENT_SECRET and ACCESS_TOKEN");
        }
    }
}

async fn run(args: CliArgs) -> Result<(), VimeoError> {
    let credentials = args.credentials();
    debug!("{:?}", credentials);
    if credentials.access_token.is_none() && credentials.client_id.is_none() {
        warn!("No credentials configured, requests will be unauthorized");
    }
    let api = Vimeo::new(&args.api_url, credentials, args.timeout)?;
    let options = args.run_options();

    match &args.command {
        Command::All => {
            driver::update_all(&api, &args.thumbnails_dir, options).await?;
        }
        Command::Folder(folder_args) => {
            let selection = selector::select_folder(
                &api,
                &mut selector::ConsolePrompt,
                &args.thumbnails_dir,
                options.per_page,
                &folder_args.preset(),
            )
            .await?;
            driver::update_folder(&api, &selection.folder, &selection.image_path, options)
                .await?;
        }
    }
    Ok(())
}
