//! Quiz command - professional suitability test

use std::io::{self, Read};

use anyhow::Result;
use colored::Colorize;
use dialoguer::Confirm;

use abitur_core::{Answer, AptitudeCategory, LogEvent};

use super::{get_context, get_logger, log_event};
use crate::output;

pub fn run(answers: Option<String>, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let logger = get_logger();
    let service = &ctx.aptitude_service;

    let parsed: Vec<Answer> = if let Some(list) = answers {
        parse_answers(&list)?
    } else if atty::isnt(atty::Stream::Stdin) {
        // Read one answer per line from a pipe
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        parse_lines(&buffer)?
    } else {
        ask_interactively(service.questions())?
    };

    let outcome = service.evaluate(&parsed)?;
    log_event(&logger, LogEvent::new("quiz_completed").with_command("quiz"));

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    println!("{}", "Test Results".bold());
    println!();
    println!(
        "  Your category: {}",
        outcome.category.to_string().bold().yellow()
    );
    println!(
        "  Match: {}% ({} of {} answers)",
        outcome.percentage, outcome.points, outcome.total
    );
    println!();

    match outcome.category {
        AptitudeCategory::First => output::success(outcome.category.guidance()),
        AptitudeCategory::Second => output::info(outcome.category.guidance()),
        AptitudeCategory::Third => output::warning(outcome.category.guidance()),
    }

    Ok(())
}

fn parse_answers(list: &str) -> Result<Vec<Answer>> {
    list.split(',')
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.parse::<Answer>().map_err(|e| anyhow::anyhow!(e)))
        .collect()
}

fn parse_lines(buffer: &str) -> Result<Vec<Answer>> {
    buffer
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.parse::<Answer>().map_err(|e| anyhow::anyhow!(e)))
        .collect()
}

fn ask_interactively(questions: &[abitur_core::domain::Question]) -> Result<Vec<Answer>> {
    let mut answers = Vec::with_capacity(questions.len());
    for question in questions {
        let yes = Confirm::new()
            .with_prompt(question.text)
            .default(false)
            .interact()?;
        answers.push(if yes { Answer::Yes } else { Answer::No });
    }
    Ok(answers)
}
