use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use krishisahay::locale::{bundle_for, Language};
use krishisahay::session::InteractionSession;
use krishisahay::speech::{ConsoleSynthesis, UnavailableRecognition, VoiceInput, VoiceOutput};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "krishisahay=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if std::env::args().any(|a| a == "--bundles") {
        return dump_bundles();
    }

    info!("Starting KrishiSahay voice assistant");
    repl()
}

/// Dump every translation bundle as JSON, a quick aid for translators.
fn dump_bundles() -> Result<()> {
    for lang in Language::ALL {
        println!("--- {} ({}) ---", lang, lang.native_name());
        println!("{}", serde_json::to_string_pretty(bundle_for(lang))?);
    }
    Ok(())
}

fn repl() -> Result<()> {
    // The console has no microphone facility; voice input reports
    // HostUnavailable and users type instead. Responses are still
    // "spoken" by printing the utterance with its locale.
    let mut session = InteractionSession::new(
        VoiceInput::new(UnavailableRecognition),
        VoiceOutput::new(ConsoleSynthesis),
    );

    let bundle = session.bundle();
    println!("{} — {}", bundle.title, bundle.subtitle);
    println!("Commands: /lang <en|hi|te|ta|kn>, /listen, /quit");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();

        if line == "/quit" {
            break;
        } else if line == "/listen" {
            match session.on_start_listening() {
                Ok(()) => println!("{}", session.bundle().listen_label),
                Err(e) => println!("{}", e.user_message()),
            }
        } else if let Some(code) = line.strip_prefix("/lang ") {
            match Language::from_code(code.trim()) {
                Some(lang) => {
                    session.on_language_change(lang);
                    println!("{}", session.bundle().placeholder);
                }
                None => println!("unknown language code: {code}"),
            }
        } else if !line.is_empty() {
            session.set_query(line);
            if session.on_submit().is_some() {
                println!("{}", session.state().response);
            }
        }
    }

    Ok(())
}
