use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "search-bot")]
#[command(about = "A chat bot that searches Wikipedia, Google Images and YouTube")]
pub struct AppArgs {
    #[arg(
        long,
        default_value = "en",
        help = "Language edition used for encyclopedia lookups"
    )]
    pub lang: String,
}

impl AppArgs {
    pub fn from_cli() -> Self {
        <Self as Parser>::parse()
    }
}
