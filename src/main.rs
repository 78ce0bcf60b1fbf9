use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};

use talentscout::config::AppConfig;
use talentscout::llm::OpenRouterModel;
use talentscout::questions::QuestionGenerator;
use talentscout::session::{Session, Speaker};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = AppConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        eprintln!("  export OPENROUTER_API_KEY=sk-or-...");
        std::process::exit(1);
    });

    eprintln!("🤝 TalentScout v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Model: {}", config.model);
    eprintln!("   Type a message and press Enter. 'exit' to end the chat.\n");

    let model =
        Arc::new(OpenRouterModel::new(&config).context("Failed to build the chat client")?);
    let generator = QuestionGenerator::from_config(model, &config);
    let mut session = Session::new(generator);

    // Render everything appended so far, then loop: read a line, feed it to
    // the session, render what the session appended.
    let mut rendered = 0;
    render_new_messages(&session, &mut rendered);

    let stdin = tokio::io::stdin();
    let reader = BufReader::new(stdin);
    let mut lines = reader.lines();

    while !session.is_ended() {
        eprint!("> ");
        match lines.next_line().await {
            Ok(Some(line)) => {
                let line = line.trim().to_string();
                if line.is_empty() {
                    continue;
                }
                session.submit_input(&line).await;
                render_new_messages(&session, &mut rendered);
            }
            Ok(None) => break, // EOF
            Err(e) => {
                tracing::error!("Error reading stdin: {}", e);
                break;
            }
        }
    }

    Ok(())
}

/// Print transcript messages appended since the last render.
fn render_new_messages(session: &Session, rendered: &mut usize) {
    for message in &session.transcript().messages()[*rendered..] {
        match message.role {
            Speaker::Assistant => println!("\n{}\n", message.content),
            Speaker::User => {}
        }
        *rendered += 1;
    }
}
