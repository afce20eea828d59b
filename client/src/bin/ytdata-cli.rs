use eyre::{Context, bail};
use std::io::IsTerminal;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use ytdata::models::video::VideoContentDetails;
use ytdata::resources::{ChannelsListRequest, SearchListRequest, VideosListRequest};
use ytdata::{Authentication, Client, ClientConfig};

const USAGE: &str = "usage: ytdata-cli <channel @handle | video ID[,ID...] | search QUERY>";

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_ansi(std::io::stdout().is_terminal())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [command, rest @ ..] = args.as_slice() else {
        bail!(USAGE);
    };
    if rest.is_empty() {
        bail!(USAGE);
    }

    let key = std::env::var("YOUTUBE_API_KEY").context("read YOUTUBE_API_KEY")?;
    let client = Client::open(Authentication::ApiKey(key), ClientConfig::default())
        .context("set up YouTube client")?;

    match command.as_str() {
        "channel" => {
            let request = ChannelsListRequest::builder()
                .for_handle(rest[0].as_str())
                .part("snippet,statistics")
                .build()?;
            let channels = client
                .channels()
                .list(&request)
                .await
                .context("list channels")?;
            for channel in channels.items {
                let snippet = channel.snippet.unwrap_or_default();
                let stats = channel.statistics.unwrap_or_default();
                println!(
                    "{}  {}",
                    channel.base.id,
                    snippet.title.as_deref().unwrap_or("(untitled)")
                );
                println!("  subscribers: {}", count(stats.subscriber_count));
                println!("  videos:      {}", count(stats.video_count));
                println!("  views:       {}", count(stats.view_count));
            }
        }
        "video" => {
            let request = VideosListRequest::builder()
                .id(rest.join(","))
                .part("snippet,contentDetails,statistics")
                .build()?;
            let videos = client
                .videos()
                .list(&request)
                .await
                .context("list videos")?;
            for video in videos.items {
                let title = video.snippet.and_then(|s| s.title).unwrap_or_default();
                println!("{}  {title}", video.base.id);
                if let Some(details) = &video.content_details {
                    println!("  length:   {}", length(details));
                }
                if let Some(stats) = video.statistics {
                    println!("  views:    {}", stats.view_count);
                    println!("  likes:    {}", count(stats.like_count));
                    println!("  comments: {}", count(stats.comment_count));
                }
            }
        }
        "search" => {
            let request = SearchListRequest::builder()
                .q(rest.join(" "))
                .max_results(10)
                .build()?;
            let results = client
                .search()
                .list(&request)
                .await
                .context("search")?;
            for result in results.items {
                let id = result
                    .id
                    .video_id
                    .or(result.id.channel_id)
                    .or(result.id.playlist_id)
                    .unwrap_or_default();
                let title = result.snippet.title.unwrap_or_default();
                println!("{:<18} {id:<26} {title}", result.id.kind);
            }
        }
        _ => bail!(USAGE),
    }

    client.close();
    Ok(())
}

fn count(n: Option<u64>) -> String {
    n.map_or_else(|| "N/A".to_string(), |n| n.to_string())
}

/// `m:ss`, or `unknown` when there is no usable duration.
///
/// Live and upcoming videos report `P0D`, which has no time part.
fn length(details: &VideoContentDetails) -> String {
    match details.seconds() {
        Ok(Some(seconds)) => format!("{}:{:02}", seconds / 60, seconds % 60),
        Ok(None) => "unknown".to_string(),
        Err(e) => {
            tracing::warn!(error = %e, "unusable video duration");
            "unknown".to_string()
        }
    }
}
