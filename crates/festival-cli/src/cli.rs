//! CLI argument definitions for the festival archive tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use festival_model::ArticleKind;

#[derive(Parser)]
#[command(
    name = "festival",
    version,
    about = "Browse the bilingual theatre festival archive",
    long_about = "Browse festival editions, shows, articles and comments from the\n\
                  festival archive backend, submit seat reservations and comments,\n\
                  and manage the persisted Arabic/English language preference."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for silence).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for humans, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Override the API base URL for this invocation.
    #[arg(long = "base-url", value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// Render output in this language instead of the saved preference.
    #[arg(long = "lang", value_enum, global = true)]
    pub language: Option<LanguageArg>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List festival editions, or show one edition in detail.
    Festivals(FestivalsArgs),

    /// List shows, or show one performance in detail.
    Shows(ShowsArgs),

    /// List articles of one kind, or show a single article.
    Articles(ArticlesArgs),

    /// Show the most recently published articles of one kind.
    Latest(LatestArgs),

    /// List the comment thread of a show.
    Comments(CommentsArgs),

    /// Submit a seat reservation for a show.
    Reserve(ReserveArgs),

    /// Post a comment on a show.
    Comment(CommentArgs),

    /// Read or change the persisted language preference.
    Lang(LangArgs),
}

#[derive(Args)]
pub struct FestivalsArgs {
    /// Edition id; omit to list all editions.
    #[arg(value_name = "ID")]
    pub id: Option<String>,
}

#[derive(Args)]
pub struct ShowsArgs {
    /// Show id; omit to list all shows.
    #[arg(value_name = "ID")]
    pub id: Option<String>,
}

#[derive(Args)]
pub struct ArticlesArgs {
    /// Article id; omit to list the whole collection.
    #[arg(value_name = "ID")]
    pub id: Option<String>,

    /// Which article view to query.
    #[arg(long = "kind", value_enum, default_value = "article")]
    pub kind: ArticleKindArg,
}

#[derive(Args)]
pub struct LatestArgs {
    /// Which article view to query.
    #[arg(long = "kind", value_enum, default_value = "article")]
    pub kind: ArticleKindArg,

    /// How many records to show.
    #[arg(long = "count", value_name = "N", default_value_t = 5)]
    pub count: usize,
}

#[derive(Args)]
pub struct CommentsArgs {
    /// Show id whose comment thread to list.
    #[arg(long = "show", value_name = "ID")]
    pub show: String,
}

#[derive(Args)]
pub struct ReserveArgs {
    /// Show id to reserve seats for.
    #[arg(long = "show", value_name = "ID")]
    pub show: String,

    /// Name the reservation is held under.
    #[arg(long = "name")]
    pub name: String,

    /// Contact email.
    #[arg(long = "email")]
    pub email: Option<String>,

    /// Contact phone number.
    #[arg(long = "phone")]
    pub phone: Option<String>,

    /// Number of seats.
    #[arg(long = "seats", default_value_t = 1)]
    pub seats: u32,
}

#[derive(Args)]
pub struct CommentArgs {
    /// Show id the comment belongs to.
    #[arg(long = "show", value_name = "ID")]
    pub show: String,

    /// Comment body.
    #[arg(long = "content")]
    pub content: String,

    /// Display name of the author.
    #[arg(long = "author")]
    pub author: String,
}

#[derive(Args)]
pub struct LangArgs {
    #[command(subcommand)]
    pub action: Option<LangCommand>,
}

#[derive(Subcommand)]
pub enum LangCommand {
    /// Print the active language.
    Get,

    /// Persist a new language preference.
    Set {
        #[arg(value_enum)]
        language: LanguageArg,
    },
}

/// CLI language choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LanguageArg {
    Ar,
    En,
}

impl From<LanguageArg> for festival_model::Language {
    fn from(value: LanguageArg) -> Self {
        match value {
            LanguageArg::Ar => festival_model::Language::Ar,
            LanguageArg::En => festival_model::Language::En,
        }
    }
}

/// CLI article-view choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ArticleKindArg {
    Article,
    Symposium,
    Creativity,
}

impl From<ArticleKindArg> for ArticleKind {
    fn from(value: ArticleKindArg) -> Self {
        match value {
            ArticleKindArg::Article => ArticleKind::Article,
            ArticleKindArg::Symposium => ArticleKind::Symposium,
            ArticleKindArg::Creativity => ArticleKind::Creativity,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
