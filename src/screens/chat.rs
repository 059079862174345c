use std::io::{BufRead, Write};

use anyhow::Result;

use crate::{
    advisory::AdvisoryContext,
    app::App,
    chat::ChatSession,
    models::{Author, ChatMessage},
};

use super::{prompt, Route};

pub async fn show<R: BufRead, W: Write>(app: &App, input: &mut R, out: &mut W) -> Result<Route> {
    let (profile, fixtures) = tokio::join!(app.db().load_profile(), app.loader().load_all());
    let profile = profile?;
    let ctx = AdvisoryContext::new(fixtures.as_ref(), profile.as_ref(), app.month());

    writeln!(out, "🌾 Farm Assistant")?;
    if let Some(profile) = &profile {
        writeln!(out, "{}", profile.summary())?;
    }
    writeln!(out, "Commands: /alerts, /home, /quit")?;
    writeln!(out)?;

    let mut session = ChatSession::new();
    for message in session.messages() {
        render(out, message)?;
    }

    loop {
        let Some(line) = prompt(input, out, "> ")? else {
            return Ok(Route::Exit);
        };

        match line.trim() {
            "/alerts" => return Ok(Route::Notifications),
            "/home" => return Ok(Route::Register),
            "/quit" => return Ok(Route::Exit),
            _ => {
                if let Some(reply) = session.send(&line, app.engine(), &ctx) {
                    render(out, reply)?;
                }
            }
        }
    }
}

fn render<W: Write>(out: &mut W, message: &ChatMessage) -> Result<()> {
    let speaker = match message.author {
        Author::Assistant => "🤖",
        Author::User => "🧑",
    };
    writeln!(out, "{speaker} {}", message.text)?;
    writeln!(out)?;
    Ok(())
}
