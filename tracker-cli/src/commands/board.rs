//! `tracker board` — both project lists after replaying a script.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use tracker_core::{Project, ProjectStatus};
use tracker_renderer::{context::persons_label, TemplateEngine};

use super::replay;
use crate::ProjectStatusArg;

/// Arguments for `tracker board`.
#[derive(Args, Debug)]
pub struct BoardArgs {
    /// Session script to replay (JSON lines).
    #[arg(long, value_name = "FILE")]
    pub script: PathBuf,

    /// Show a single list: active | finished.
    #[arg(long, value_name = "STATUS")]
    pub only: Option<ProjectStatusArg>,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

impl BoardArgs {
    pub fn run(self, engine: TemplateEngine) -> Result<()> {
        let app = replay(engine, &self.script)?;
        let statuses: Vec<ProjectStatus> = match self.only {
            Some(only) => vec![only.into()],
            None => ProjectStatus::all().to_vec(),
        };
        let lists: Vec<(ProjectStatus, Vec<Project>)> = statuses
            .into_iter()
            .map(|status| (status, app.projects(status)))
            .collect();

        if self.json {
            return print_json(app.registry().len(), lists);
        }
        print_board(app.registry().len(), lists);
        Ok(())
    }
}

#[derive(Serialize)]
struct BoardJson {
    summary: BoardSummaryJson,
    lists: Vec<ListJson>,
}

#[derive(Serialize)]
struct BoardSummaryJson {
    projects: usize,
}

#[derive(Serialize)]
struct ListJson {
    status: ProjectStatus,
    projects: Vec<Project>,
}

#[derive(Tabled)]
struct ProjectRow {
    #[tabled(rename = "id")]
    id: String,
    #[tabled(rename = "title")]
    title: String,
    #[tabled(rename = "assigned")]
    assigned: String,
    #[tabled(rename = "description")]
    description: String,
}

fn print_json(total: usize, lists: Vec<(ProjectStatus, Vec<Project>)>) -> Result<()> {
    let payload = BoardJson {
        summary: BoardSummaryJson { projects: total },
        lists: lists
            .into_iter()
            .map(|(status, projects)| ListJson { status, projects })
            .collect(),
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&payload).context("failed to serialize board JSON")?
    );
    Ok(())
}

fn print_board(total: usize, lists: Vec<(ProjectStatus, Vec<Project>)>) {
    println!("Tracker v{} | {} projects", env!("CARGO_PKG_VERSION"), total);

    let separator = "■".repeat(67).bright_black().to_string();
    println!("{separator}");
    for (status, projects) in lists {
        println!(
            "{} {} ({})",
            status_indicator(status),
            format!("{} PROJECTS", status.as_str().to_uppercase()).bold(),
            projects.len()
        );
        if projects.is_empty() {
            println!("No projects.");
        } else {
            let rows: Vec<ProjectRow> = projects
                .into_iter()
                .map(|p| ProjectRow {
                    id: p.id.0,
                    title: p.title,
                    assigned: persons_label(p.people),
                    description: p.description,
                })
                .collect();
            let mut table = Table::new(rows);
            table.with(Style::rounded());
            println!("{table}");
        }
        println!("{separator}");
    }
}

fn status_indicator(status: ProjectStatus) -> String {
    match status {
        ProjectStatus::Active => "■".green().bold().to_string(),
        ProjectStatus::Finished => "■".blue().bold().to_string(),
    }
}
