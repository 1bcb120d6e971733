use std::path::PathBuf;
use argh::FromArgs;

fn default_config_path () -> PathBuf {
    PathBuf::from("./responder_config.toml")
}

#[derive(Debug, FromArgs)]
#[argh(description = "answer DNS A queries from a static record table")]
pub struct CliArgs {
    #[argh(
        option,
        description = "config file path, default: './responder_config.toml'",
        default = "default_config_path()"
    )]
    pub config: PathBuf,
}
