use std::collections::HashMap;
use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use accessmap_chat::ChatEngine;
use accessmap_core::catalog::Catalog;
use accessmap_core::config::Config;
use accessmap_core::traits::RemoteDialogService;
use accessmap_core::types::DialogReply;
use accessmap_search::SearchIndex;

/// Offline stand-in for the remote NLU service: canned category answers so
/// the REPL stays useful without network access.
struct CannedDialog;

impl RemoteDialogService for CannedDialog {
    fn send_message(&self, text: &str) -> anyhow::Result<DialogReply> {
        let lower = text.to_lowercase();
        let (message, category) = if lower.contains("grocery") || lower.contains("food") {
            ("Try the grocery category in the sidebar — there are several stores and farm stands nearby.", Some("grocery"))
        } else if lower.contains("hospital") || lower.contains("doctor") || lower.contains("health") {
            ("The nearest hospital is Kingston General Hospital at 76 Stuart Street.", Some("healthcare"))
        } else if lower.contains("bank") {
            ("There are bank branches along Princess Street; toggle the banking category to see them.", Some("banking"))
        } else {
            ("I can help you find healthcare, groceries, banks and other services in Kingston. What are you looking for?", None)
        };
        Ok(DialogReply {
            message: message.to_string(),
            intent: category.map(|_| "FindService".to_string()),
            slots: category
                .map(|c| HashMap::from([("category".to_string(), c.to_string())]))
                .unwrap_or_default(),
            service_id: None,
        })
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    let data_dir = args
        .get(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| Config::load().map(|c| c.data_dir()).unwrap_or_else(|_| "data".into()));

    let catalog = Catalog::load_dir(&data_dir)?;
    let index = SearchIndex::build(catalog.all());
    let mut engine = ChatEngine::new(Box::new(CannedDialog));

    println!("💬 accessmap-chat ({} services loaded, Ctrl-D to quit)", catalog.len());
    println!("bot> {}", engine.history()[0].text);

    let stdin = io::stdin();
    loop {
        print!("you> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let reply = engine.handle_message(line, &catalog, &index);
        println!("bot> {}", reply.text);
        for action in &reply.actions {
            println!("      [{}]", action.label);
        }
    }
    Ok(())
}
