//! Command implementations over the festival data layer.

use anyhow::{Context, Result, bail};
use festival_client::ApiClient;
use festival_model::{Language, NewComment, ReservationRequest, language_store};
use festival_query::FestivalApi;
use tracing::info;

use crate::cli::{
    ArticlesArgs, Cli, Command, CommentArgs, CommentsArgs, FestivalsArgs, LangCommand, LatestArgs,
    ReserveArgs, ShowsArgs,
};
use crate::config::{CliConfig, config_path};
use crate::output;

pub async fn run(cli: Cli) -> Result<()> {
    let mut config = CliConfig::load()?;
    if let Some(base_url) = &cli.base_url {
        config.base_url = Some(base_url.clone());
    }
    language_store().set(cli.language.map_or(config.language, Language::from));
    let api = FestivalApi::new(ApiClient::new(config.api_config()));

    match cli.command {
        Command::Festivals(args) => festivals(&api, &args).await,
        Command::Shows(args) => shows(&api, &args).await,
        Command::Articles(args) => articles(&api, &args).await,
        Command::Latest(args) => latest(&api, &args).await,
        Command::Comments(args) => comments(&api, &args).await,
        Command::Reserve(args) => reserve(&api, &args).await,
        Command::Comment(args) => comment(&api, &args).await,
        Command::Lang(args) => lang(&mut config, args.action),
    }
}

async fn festivals(api: &FestivalApi, args: &FestivalsArgs) -> Result<()> {
    let language = language_store().get();
    match &args.id {
        Some(id) => {
            let edition = api
                .festival(Some(id))
                .await?
                .with_context(|| format!("no festival edition with id {id}"))?;
            output::print_festival(&edition, language);
        }
        None => output::print_festivals(&api.festivals().await?, language),
    }
    Ok(())
}

async fn shows(api: &FestivalApi, args: &ShowsArgs) -> Result<()> {
    let language = language_store().get();
    match &args.id {
        Some(id) => {
            let show = api
                .show(Some(id))
                .await?
                .with_context(|| format!("no show with id {id}"))?;
            output::print_show(&show, language, api.client().config());
        }
        None => output::print_shows(&api.shows().await?, language),
    }
    Ok(())
}

async fn articles(api: &FestivalApi, args: &ArticlesArgs) -> Result<()> {
    let language = language_store().get();
    let kind = args.kind.into();
    match &args.id {
        Some(id) => {
            let article = api
                .article(Some(id), kind)
                .await?
                .with_context(|| format!("no article with id {id}"))?;
            output::print_article(&article, language, api.client().config());
        }
        None => output::print_articles(&api.articles(kind).await?, language),
    }
    Ok(())
}

async fn latest(api: &FestivalApi, args: &LatestArgs) -> Result<()> {
    let articles = api.latest_articles(args.kind.into(), args.count).await?;
    output::print_articles(&articles, language_store().get());
    Ok(())
}

async fn comments(api: &FestivalApi, args: &CommentsArgs) -> Result<()> {
    output::print_comments(&api.comments(&args.show).await?);
    Ok(())
}

async fn reserve(api: &FestivalApi, args: &ReserveArgs) -> Result<()> {
    if args.seats == 0 {
        bail!("a reservation needs at least one seat");
    }
    let request = ReservationRequest {
        show_id: args.show.clone(),
        name: args.name.clone(),
        email: args.email.clone(),
        phone: args.phone.clone(),
        seats: args.seats,
    };
    api.reserve(&request).await?;
    info!(show_id = %args.show, seats = args.seats, "reservation submitted");
    println!(
        "Reserved {} seat(s) for show {} under \"{}\".",
        args.seats, args.show, args.name
    );
    Ok(())
}

async fn comment(api: &FestivalApi, args: &CommentArgs) -> Result<()> {
    let created = api
        .submit_comment(&NewComment {
            show_id: args.show.clone(),
            content: args.content.clone(),
            author: Some(args.author.clone()),
        })
        .await?;
    println!("Comment {} posted on show {}.", created.id, args.show);
    Ok(())
}

fn lang(config: &mut CliConfig, action: Option<LangCommand>) -> Result<()> {
    match action {
        None | Some(LangCommand::Get) => {
            let language = language_store().get();
            println!("{} ({})", language, language.direction());
        }
        Some(LangCommand::Set { language }) => {
            let language = Language::from(language);
            language_store().set(language);
            config.language = language;
            config.save()?;
            println!(
                "Language preference saved to {}: {}",
                config_path().display(),
                language
            );
        }
    }
    Ok(())
}
