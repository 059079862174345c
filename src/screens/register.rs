use std::io::{BufRead, Write};

use anyhow::Result;

use crate::{
    app::App,
    db::PROFILE_KEY,
    models::{Crop, District, RegistrationInput},
    registration,
};

use super::{prompt, Route};

/// Registration form. Fields already present in `form` are not asked for.
pub async fn show<R: BufRead, W: Write>(
    app: &App,
    mut form: RegistrationInput,
    input: &mut R,
    out: &mut W,
) -> Result<Route> {
    writeln!(out, "🌾 Farmer Registration")?;
    writeln!(out, "Register to get personalized farming advice")?;
    if app.db().has_item(PROFILE_KEY).await? {
        writeln!(out, "(A farmer is already registered; submitting replaces it.)")?;
    }
    writeln!(out)?;

    let mut ended = false;

    if form.name.trim().is_empty() {
        form.name = ask(input, out, "Name: ", &mut ended)?;
    }

    if form.district.trim().is_empty() {
        let names: Vec<_> = District::ALL.iter().map(District::as_str).collect();
        writeln!(out, "{}", numbered(&names))?;
        let answer = ask(input, out, "District: ", &mut ended)?;
        form.district = resolve_choice(&answer, &names);
    }

    if form.crop.trim().is_empty() {
        let names: Vec<_> = Crop::ALL.iter().map(Crop::as_str).collect();
        writeln!(out, "{}", numbered(&names))?;
        let answer = ask(input, out, "Crop: ", &mut ended)?;
        form.crop = resolve_choice(&answer, &names);
    }

    match registration::register(app.db(), &form).await {
        Ok(profile) => {
            writeln!(out, "✅ Welcome, {}!", profile.summary())?;
            Ok(Route::Chat)
        }
        // The form stays up for another attempt while input remains.
        Err(err) => {
            writeln!(out, "⚠️ {err}")?;
            Ok(if ended { Route::Exit } else { Route::Register })
        }
    }
}

/// One form field. End of input reads as blank and sets `ended`.
fn ask<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
    ended: &mut bool,
) -> Result<String> {
    if *ended {
        return Ok(String::new());
    }
    match prompt(input, out, label)? {
        Some(answer) => Ok(answer),
        None => {
            *ended = true;
            Ok(String::new())
        }
    }
}

fn numbered(options: &[&str]) -> String {
    options
        .iter()
        .enumerate()
        .map(|(index, name)| format!("  {}) {name}", index + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A list number picks that option; anything else is passed through as typed.
fn resolve_choice(answer: &str, options: &[&str]) -> String {
    let answer = answer.trim();
    answer
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|index| options.get(index))
        .map(|name| name.to_string())
        .unwrap_or_else(|| answer.to_string())
}
