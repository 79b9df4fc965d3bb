mod cli;

use std::sync::Arc;

use scribe_ai::{
    AiError, ChatHistory, DispatchEvent, Dispatcher, Document, HttpChatStore, HttpCompletionClient,
    Mode, Node, PersistenceNotifier, Selector, StaticSession, TextDocument,
};
use scribe_common::{Result, ScribeError, SessionId, Toasts};
use scribe_config::schema::ScribeConfig;
use tracing_subscriber::EnvFilter;

fn init_logging(directive: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                directive
                    .parse()
                    .unwrap_or_else(|_| "scribe=info".parse().unwrap()),
            ),
        )
        .init();
}

fn load_config(args: &cli::Args) -> Result<ScribeConfig> {
    let config = match &args.config {
        Some(path) => scribe_config::load_config_from(path)?,
        None => scribe_config::load_config()?,
    };
    Ok(config)
}

/// Open the document with the requested selection. The selection defaults
/// to the whole text.
fn open_document(args: &cli::Args) -> Result<TextDocument> {
    let text = std::fs::read_to_string(&args.file)?;
    let doc = TextDocument::new(text);
    let from = args.from.unwrap_or(0);
    let to = args.to.unwrap_or_else(|| doc.char_len());
    Ok(doc.with_selection(from, to))
}

fn build_selector(config: &ScribeConfig, session_id: SessionId) -> Result<Selector> {
    let toasts = Toasts::new(config.notifications.capacity as usize);
    let client = HttpCompletionClient::from_config(&config.api).map_err(ai_error)?;
    let store = HttpChatStore::from_config(&config.api).map_err(ai_error)?;
    tracing::debug!(completion = client.url(), save_chat = store.url(), "endpoints");

    let notifier = PersistenceNotifier::new(
        Arc::new(store),
        Arc::new(StaticSession::new(config.session.user_id.clone())),
        ChatHistory::new(),
        toasts.clone(),
    );
    let dispatcher = Dispatcher::new(Arc::new(client), notifier, toasts, session_id);
    Ok(Selector::new(dispatcher, &config.palette))
}

/// Start the first request through the same edge the editor would use.
fn start(selector: &mut Selector, args: &cli::Args, doc: &dyn Document) -> bool {
    let started = match (args.mode, &args.command) {
        (Mode::Zap, command) => {
            selector.set_input(command.clone().unwrap_or_default());
            selector.submit(doc)
        }
        (mode, Some(command)) => {
            selector.set_selection(Some(mode), command.clone());
            selector.sync()
        }
        (mode, None) => selector.select_command(mode, doc),
    };
    started.is_some()
}

/// Transport failures keep their own variant; everything else is reported
/// with the text the palette would show.
fn ai_error(e: AiError) -> ScribeError {
    match e {
        AiError::NetworkError(msg) => ScribeError::Network(msg),
        other => ScribeError::Ai(other.user_message()),
    }
}

fn report(event: Option<DispatchEvent>) -> Result<()> {
    match event {
        Some(DispatchEvent::Completed(outcome)) => {
            tracing::info!(?outcome, "completion routed");
            Ok(())
        }
        Some(DispatchEvent::RouteFailed(e)) => {
            tracing::warn!("completion not applied: {e}");
            Ok(())
        }
        Some(DispatchEvent::Failed(e)) => Err(ai_error(e)),
        Some(DispatchEvent::Ignored(_)) | Some(DispatchEvent::Progress) | None => Ok(()),
    }
}

async fn run(args: cli::Args) -> Result<()> {
    let config = load_config(&args);
    let directive = match (&args.log_level, &config) {
        (Some(level), _) => level.clone(),
        (None, Ok(config)) => config.logging.level.as_directive().to_string(),
        (None, Err(_)) => "scribe=info".to_string(),
    };
    init_logging(&directive);

    tracing::info!("scribe v{} starting", env!("CARGO_PKG_VERSION"));
    let config = config?;

    let session_id = args
        .session
        .clone()
        .or_else(|| config.session.session_id.clone())
        .map(SessionId::from_string)
        .unwrap_or_default();
    tracing::info!(session = %session_id, "session");

    let mut doc = open_document(&args)?;
    let mut selector = build_selector(&config, session_id)?;
    selector.focus(&mut doc);

    if !start(&mut selector, &args, &doc) {
        return Err(ScribeError::Other(format!(
            "nothing to send for `{}`: command text is empty",
            args.mode
        )));
    }
    let mut result = report(selector.dispatcher_mut().run_until_settled(&mut doc).await);

    if let (Ok(()), Some(instruction)) = (&result, &args.follow_up) {
        selector.set_input(instruction.clone());
        if selector.submit(&doc).is_some() {
            result = report(selector.dispatcher_mut().run_until_settled(&mut doc).await);
        } else {
            tracing::warn!("follow-up skipped: no completion displayed");
        }
    }

    selector.dispatcher_mut().flush_persistence().await;
    doc.set_highlight(false);

    println!("{}", doc.text());
    for placed in doc.nodes() {
        println!("[{} @ {}] {}", placed.node.kind(), placed.at, chart_json(&placed.node));
    }
    for toast in selector.dispatcher().toasts().visible() {
        eprintln!("{}: {}", toast.title, toast.body);
    }

    if args.write {
        std::fs::write(&args.file, doc.text())?;
        tracing::info!(path = %args.file.display(), "document written");
    }
    result
}

fn chart_json(node: &Node) -> String {
    match node {
        Node::Chart { data } => serde_json::to_string(data).unwrap_or_default(),
    }
}

#[tokio::main]
async fn main() {
    let args = cli::parse();
    if let Err(e) = run(args).await {
        eprintln!("scribe: {e}");
        std::process::exit(1);
    }
}
