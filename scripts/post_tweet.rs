//! Twitter Tweet Posting Script
//!
//! This script posts a tweet through the facade using the account configured
//! in the environment, optionally as a reply to another tweet.

use std::io::{self, Write};

use twitter_facade::{Twitter, TwitterConfig};

/// Maximum tweet length in characters.
const MAX_TWEET_CHARS: usize = 280;

fn prompt(label: &str) -> io::Result<String> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init();

    println!("🐦 Twitter Tweet Posting Tool");
    println!("==============================");

    let config = TwitterConfig::from_env()?;
    println!("🔑 Posting as @{}", config.screen_name);
    let twitter = Twitter::new(&config)?;

    let tweet_text = prompt("📝 Enter your tweet message: ")?;
    if tweet_text.is_empty() {
        println!("❌ Tweet message cannot be empty!");
        return Err("Tweet message is required".into());
    }

    let length = tweet_text.chars().count();
    if length > MAX_TWEET_CHARS {
        println!(
            "❌ Tweet is too long! {} characters (max {})",
            length, MAX_TWEET_CHARS
        );
        return Err("Tweet exceeds 280 character limit".into());
    }
    println!("📏 Tweet length: {} characters", length);

    let reply_to = prompt("↩️  Reply to tweet ID (leave empty for none): ")?;
    let reply_to = if reply_to.is_empty() {
        None
    } else {
        Some(reply_to.as_str())
    };

    println!("\n🚀 Posting your tweet...");
    let envelope = twitter.post(&tweet_text, reply_to).await;
    println!("📊 Status: {}", envelope.code);
    println!("🔗 Query: {}", envelope.query);
    println!(
        "📄 Response: {}",
        serde_json::to_string_pretty(&envelope.response)?
    );

    if envelope.is_success() {
        println!("\n🎉 Success! Your tweet has been posted.");
        Ok(())
    } else {
        println!("\n💥 Failed to post tweet (status {})", envelope.code);
        Err(format!("Twitter API error ({})", envelope.code).into())
    }
}
