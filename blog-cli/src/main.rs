use std::process;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use blog_client::{DEFAULT_ARTICLES_PATH, StaticJsonClient};
use blog_core::domain::error::{DETAIL_FAILED, LIST_FAILED};
use blog_core::infrastructure::logging::init_logging;
use blog_core::infrastructure::settings::{Settings, SourceKind};
use blog_core::{
    Article, ArticleContent, ArticleError, ArticleService, ArticleSource, FixtureArticleSource,
    Friend, FriendService, JsonFileArticleSource, PaginatedResult, PaginationParams, RouteMatch,
    RouteTable,
};
use clap::{Parser, Subcommand};
use serde::Serialize;

#[derive(Debug, Parser)]
#[command(name = "blog-cli", version, about = "CLI для просмотра содержимого блога")]
struct Cli {
    /// Источник статей: fixture, file или http (по умолчанию BLOG_ARTICLE_SOURCE или fixture).
    #[arg(long, global = true)]
    source: Option<SourceKind>,

    /// Путь к JSON-файлу или URL документа/сайта (для file и http).
    #[arg(long, global = true)]
    location: Option<String>,

    /// Печатать результат в JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Список статей с пагинацией.
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 6)]
        page_size: u32,
    },
    /// Статья по id.
    Get {
        #[arg(long)]
        id: String,
    },
    /// Все друзья (страница ссылок).
    Friends,
    /// Друг по имени.
    Friend {
        #[arg(long)]
        name: String,
    },
    /// Какая страница откроется по пути.
    Route { path: String },
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Ошибка: {err}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let settings = apply_overrides(
        Settings::from_env().context("не удалось прочитать настройки")?,
        cli.source,
        cli.location,
    );

    init_logging(&settings.log_level)?;

    match cli.command {
        Command::List { page, page_size } => {
            let service = article_service(&settings)?;
            let result = service
                .fetch_articles(PaginationParams::new(page, page_size))
                .await
                .map_err(|err| map_article_error(err, LIST_FAILED))?;
            output(cli.json, &result, print_list)?;
        }
        Command::Get { id } => {
            let service = article_service(&settings)?;
            let article = service
                .fetch_article_by_id(&id)
                .await
                .map_err(|err| map_article_error(err, DETAIL_FAILED))?;
            output(cli.json, &article, print_article)?;
        }
        Command::Friends => {
            let friends = friend_service(&settings).get_friends().await;
            output(cli.json, &friends, |friends: &Vec<Friend>| {
                println!("Друзей: {}", friends.len());
                friends.iter().for_each(print_friend);
            })?;
        }
        Command::Friend { name } => match friend_service(&settings).get_friend_by_name(&name).await
        {
            Some(friend) => output(cli.json, &friend, print_friend)?,
            None => println!("Друг не найден: {name}"),
        },
        Command::Route { path } => {
            let matched = RouteTable::standard().resolve(&path);
            print_route(&matched);
        }
    }

    Ok(())
}

fn apply_overrides(
    mut settings: Settings,
    source: Option<SourceKind>,
    location: Option<String>,
) -> Settings {
    if let Some(source) = source {
        settings.source = source;
    }
    if let Some(location) = location {
        settings.articles_location = Some(location);
    }
    settings
}

fn article_service(settings: &Settings) -> Result<ArticleService<Arc<dyn ArticleSource>>> {
    let source = resolve_source(settings)?;
    Ok(ArticleService::new(source).with_delays(settings.list_delay, settings.detail_delay))
}

fn friend_service(settings: &Settings) -> FriendService {
    FriendService::with_fixture().with_delay(settings.friends_delay)
}

fn resolve_source(settings: &Settings) -> Result<Arc<dyn ArticleSource>> {
    let source: Arc<dyn ArticleSource> = match settings.source {
        SourceKind::Fixture => Arc::new(FixtureArticleSource::new()),
        SourceKind::File => Arc::new(JsonFileArticleSource::new(settings.require_location()?)),
        SourceKind::Http => {
            let url = document_url(settings.require_location()?);
            Arc::new(StaticJsonClient::new(url).map_err(|err| anyhow!("ошибка HTTP: {err}"))?)
        }
    };
    Ok(source)
}

/// Адрес сайта без `.json` дополняется стандартным путём документа.
fn document_url(location: &str) -> String {
    let url = normalize_server(location.trim());
    if url.ends_with(".json") {
        return url;
    }
    format!(
        "{}/{}",
        url.trim_end_matches('/'),
        DEFAULT_ARTICLES_PATH.trim_start_matches('/')
    )
}

fn normalize_server(server: &str) -> String {
    if server.starts_with("http://") || server.starts_with("https://") {
        return server.to_string();
    }

    format!("http://{server}")
}

fn map_article_error(err: ArticleError, operation: &'static str) -> anyhow::Error {
    let message = match &err {
        ArticleError::NotFound(id) => format!("статья не найдена: id={id}"),
        ArticleError::InvalidPagination { field, message } => {
            format!("некорректная пагинация: {field} {message}")
        }
        ArticleError::Source(source) => format!("{}: {source}", localize(operation)),
    };
    anyhow!(message)
}

fn localize(operation: &str) -> &'static str {
    match operation {
        LIST_FAILED => "не удалось получить список статей",
        DETAIL_FAILED => "не удалось получить статью",
        _ => "не удалось получить данные",
    }
}

fn output<T: Serialize>(json: bool, value: &T, print: impl FnOnce(&T)) -> Result<()> {
    if json {
        let raw = serde_json::to_string_pretty(value).context("не удалось сериализовать ответ")?;
        println!("{raw}");
    } else {
        print(value);
    }
    Ok(())
}

fn print_list(list: &PaginatedResult<Article>) {
    println!(
        "Статей: {} (page={}, page_size={}, total={}, total_pages={})",
        list.items.len(),
        list.page,
        list.page_size,
        list.total,
        list.total_pages
    );

    for article in &list.items {
        println!(
            "- [{}] {} ({}) [{}]",
            article.id,
            article.title,
            article.created_at,
            article.tags.join(", ")
        );
    }
}

fn print_article(article: &Article) {
    println!("id: {}", article.id);
    println!("title: {}", article.title);
    println!("tags: {}", article.tags.join(", "));
    println!("created_at: {}", article.created_at);
    println!("updated_at: {}", article.updated_at);
    println!("word_count: {}", article.word_count);
    println!("bg_image: {}", article.bg_image_or_default());
    match article.content() {
        ArticleContent::Inline(body) => println!("\n{body}"),
        ArticleContent::Markdown(path) => println!("markdown: {path}"),
        ArticleContent::Missing => println!("(нет содержимого)"),
    }
}

fn print_friend(friend: &Friend) {
    println!("- {} <{}> ({:?})", friend.name, friend.url, friend.url_type);
    println!("  {}", friend.description);
}

fn print_route(matched: &RouteMatch) {
    println!("page: {}", matched.page.name());
    println!("path: {}", matched.path);
    if let Some(from) = &matched.redirected_from {
        println!("redirected_from: {from}");
    }
    for (name, value) in &matched.params {
        println!("param {name}: {value}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_server_keeps_scheme() {
        assert_eq!(normalize_server("https://example.com"), "https://example.com");
    }

    #[test]
    fn document_url_appends_default_path_to_site() {
        assert_eq!(
            document_url("blog.example:8000/"),
            "http://blog.example:8000/data/articles.json"
        );
    }

    #[test]
    fn document_url_keeps_explicit_json() {
        assert_eq!(
            document_url("https://cdn.example/articles.json"),
            "https://cdn.example/articles.json"
        );
    }

    #[test]
    fn flags_override_environment_settings() {
        let settings = apply_overrides(
            Settings::default(),
            Some(SourceKind::File),
            Some("articles.json".to_string()),
        );
        assert_eq!(settings.source, SourceKind::File);
        assert_eq!(settings.articles_location.as_deref(), Some("articles.json"));
    }

    #[test]
    fn resolve_source_requires_location_for_http() {
        let settings = apply_overrides(Settings::default(), Some(SourceKind::Http), None);
        assert!(resolve_source(&settings).is_err());
    }

    #[test]
    fn not_found_and_source_errors_read_differently() {
        let not_found = map_article_error(ArticleError::NotFound("9".to_string()), DETAIL_FAILED);
        assert_eq!(not_found.to_string(), "статья не найдена: id=9");

        let failed = map_article_error(
            ArticleError::Source(blog_core::SourceError::Status(500)),
            LIST_FAILED,
        );
        assert_eq!(
            failed.to_string(),
            "не удалось получить список статей: unexpected status: 500"
        );
    }

    #[test]
    fn detail_source_error_is_reported_in_russian() {
        let failed = map_article_error(
            ArticleError::Source(blog_core::SourceError::Io("denied".to_string())),
            DETAIL_FAILED,
        );
        assert!(failed.to_string().starts_with("не удалось получить статью: "));
        assert!(!failed.to_string().contains("failed to fetch"));
    }

    #[test]
    fn cli_parses_list_defaults() {
        let cli = Cli::try_parse_from(["blog-cli", "list"]).expect("must parse");
        match cli.command {
            Command::List { page, page_size } => {
                assert_eq!(page, 1);
                assert_eq!(page_size, 6);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn cli_parses_source_flag() {
        let cli = Cli::try_parse_from(["blog-cli", "--source", "http", "route", "/blog"])
            .expect("must parse");
        assert_eq!(cli.source, Some(SourceKind::Http));
    }
}
