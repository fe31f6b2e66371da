use std::collections::HashSet;
use std::sync::Arc;

use clinic_client::chat::{
    ChatFeed, ChatPanel, ChatSyncEngine, ChatView, HttpChatFeed, MessageComposer, RenderedMessage, Viewport,
};
use clinic_client::config::ClientConfig;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Prints each message once as it is rendered. A terminal always follows
/// new output, so the viewport reports no overflow.
#[derive(Default)]
struct ConsoleView {
    printed: HashSet<String>,
}

impl ChatView for ConsoleView {
    fn viewport(&self) -> Viewport {
        Viewport { scroll_top: 0.0, scroll_height: 0.0, client_height: 0.0 }
    }

    fn contains_element(&self, id: &str) -> bool {
        self.printed.contains(id)
    }

    fn append(&mut self, message: RenderedMessage) {
        println!("[{}] {}: {}", message.time, message.name, message.text);
        self.printed.insert(message.id);
    }

    fn scroll_to_bottom(&mut self) {}

    fn clear_input(&mut self) {}
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = ClientConfig::from_env().expect("invalid client config");
    let feed: Arc<dyn ChatFeed> = Arc::new(HttpChatFeed::new(&config).expect("chat client init failed"));
    let panel = ChatPanel::shared(ConsoleView::default());

    let _sync = ChatSyncEngine::new(Arc::clone(&feed), Arc::clone(&panel), config.chat_poll_interval).start();
    let composer = MessageComposer::new(feed, panel);

    tracing::info!(base_url = %config.base_url, "clinic chat started");

    // One message per stdin line until EOF.
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        composer.send(&line);
    }
}
